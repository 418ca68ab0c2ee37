//! Outbound report composition.
//!
//! Reports go to the Al Ameen service as a plain SMS. We only build the
//! `sms:` URI; the device's messaging app does the sending.

use regex::Regex;
use std::sync::OnceLock;

/// Default Al Ameen short number
pub const DEFAULT_REPORT_NUMBER: &str = "8004888";

/// Dubai Police non-emergency line behind the "call police" action
pub const POLICE_PHONE: &str = "901";

/// Dubai Police address behind the "email police" action
pub const POLICE_EMAIL: &str = "mail@dubaipolice.gov.ae";

/// Device family, which decides the `sms:` body separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// iPhone, iPad and iPod expect `sms:<number>&body=`
    Apple,
    /// Everyone else expects `sms:<number>?body=`
    Other,
}

static APPLE_UA_REGEX: OnceLock<Regex> = OnceLock::new();

impl Platform {
    pub fn from_user_agent(user_agent: &str) -> Platform {
        let regex = APPLE_UA_REGEX.get_or_init(|| Regex::new(r"iPad|iPhone|iPod").expect("valid regex"));
        if regex.is_match(user_agent) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    fn body_separator(self) -> char {
        match self {
            Platform::Apple => '&',
            Platform::Other => '?',
        }
    }
}

/// Build an `sms:` URI with the draft pre-filled as the message body.
pub fn sms_uri(number: &str, draft: &str, platform: Platform) -> String {
    format!(
        "sms:{}{}body={}",
        number,
        platform.body_separator(),
        urlencoding::encode(draft)
    )
}

/// `tel:` URI for a dial action. Spaces are dropped, everything else kept.
pub fn tel_uri(number: &str) -> String {
    let number: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", number)
}

/// `mailto:` URI, with an optional pre-filled subject.
pub fn mailto_uri(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", address, urlencoding::encode(subject)),
        None => format!("mailto:{}", address),
    }
}
