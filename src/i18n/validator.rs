//! Translation quality validation module.
//!
//! Dynamic translation must not mangle the parts of a UI string that carry
//! meaning on their own: phone numbers (8004888, 999), URLs and the
//! Latin-script acronyms users type into their phones (SMS, OTP, PIN).
//! Findings are warnings only; structural problems (missing or blank values)
//! are already rejected when the table is built.

use crate::i18n::TranslationTable;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_warnings()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static ACRONYM_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a translated string preserves numbers, URLs and acronyms
    /// from the original.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let orig_numbers = Self::extract_numbers(original);
        let trans_numbers = Self::extract_numbers(translated);
        if orig_numbers != trans_numbers {
            report.warnings.push(format!(
                "Number mismatch: original has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ));
        }

        let orig_urls = Self::extract_urls(original);
        let trans_urls = Self::extract_urls(translated);
        if orig_urls != trans_urls {
            report.warnings.push(format!(
                "URL mismatch: original has {} URLs, translation has {} URLs",
                orig_urls.len(),
                trans_urls.len()
            ));
        }

        let orig_acronyms = Self::extract_acronyms(original);
        let trans_acronyms = Self::extract_acronyms(translated);
        let lost: Vec<_> = orig_acronyms
            .iter()
            .filter(|a| !trans_acronyms.contains(a))
            .collect();
        if !lost.is_empty() {
            report
                .warnings
                .push(format!("Acronyms lost in translation: {:?}", lost));
        }

        report
    }

    /// Validate every entry of a translated table against the base table.
    ///
    /// Warnings are prefixed with the offending key.
    pub fn validate_table(base: &TranslationTable, translated: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        for ((key, original), (_, text)) in base.iter().zip(translated.iter()) {
            for warning in Self::validate(original, text).warnings {
                report.warnings.push(format!("{}: {}", key, warning));
            }
        }

        report
    }

    /// Extract ASCII digit runs (phone and emergency numbers).
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"[0-9]{3,}").expect("valid regex"));
        let mut numbers: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        numbers.sort();
        numbers
    }

    fn extract_urls(text: &str) -> Vec<String> {
        let regex =
            URL_REGEX.get_or_init(|| Regex::new(r#"https?://[^\s)\]"']+"#).expect("valid regex"));
        let mut urls: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        urls.sort();
        urls
    }

    /// Extract all-caps Latin acronyms of two or more letters.
    fn extract_acronyms(text: &str) -> Vec<String> {
        let regex =
            ACRONYM_REGEX.get_or_init(|| Regex::new(r"\b[A-Z]{2,}\b").expect("valid regex"));
        let mut acronyms: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        acronyms.sort();
        acronyms.dedup();
        acronyms
    }
}
