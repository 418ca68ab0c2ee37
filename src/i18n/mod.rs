//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic, bundled strings and the translation cache are
//! contained here. The network side of dynamic translation lives in
//! `crate::lingo`.
//!
//! # Architecture
//!
//! - `keys`: the closed set of UI string keys and their canonical order
//! - `table`: complete string tables and positional batch merging
//! - `registry`: single source of truth for supported languages
//! - `language`: type-safe `Language` enum
//! - `strings`: bundled tables, the always-available fallback
//! - `cache`: active language, installed table, stale-batch suppression
//! - `validator`: translation quality warnings
//! - `metrics`: translation observability
//!
//! # Example
//!
//! ```rust,ignore
//! use saif_scan::i18n::{Language, StringKey, TranslationCache};
//!
//! let mut cache = TranslationCache::new(Language::English);
//! let ticket = cache.select(Language::Arabic); // bundled Arabic installed now
//! println!("{}", cache.get(StringKey::AnalyzeBtn));
//! ```

mod cache;
mod keys;
mod language;
mod metrics;
mod registry;
mod strings;
mod table;
mod validator;

pub use cache::{InstallOutcome, TranslationCache, TranslationTicket};
pub use keys::StringKey;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::StaticStrings;
pub use table::{merge_batch, TableError, TranslationTable};
pub use validator::{TranslationValidator, ValidationReport};
