//! Saif scam scanner.
//!
//! Classifies a screenshot or pasted message as SCAM, SAFE or UNKNOWN with a
//! hosted multimodal model, localizes the interface into the supported
//! languages and composes an SMS report for the Al Ameen service.

pub mod classifier;
pub mod config;
pub mod error;
pub mod evidence;
pub mod i18n;
pub mod lingo;
pub mod report;
pub mod scanner;
pub mod session;
pub mod verdict;
