//! Language type: the closed set of UI languages.
//!
//! Metadata and bundled tables live in the registry; this enum is the
//! type-safe handle callers pass around.

use crate::i18n::{LanguageConfig, LanguageRegistry, TranslationTable};
use anyhow::{bail, Result};
use std::fmt;

/// A supported UI language. Not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
    Hindi,
    Urdu,
    Tagalog,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Arabic,
        Language::Hindi,
        Language::Urdu,
        Language::Tagalog,
    ];

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```ignore
    /// let arabic = Language::from_code("ar")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let code = code.trim().to_ascii_lowercase();
        match Language::ALL.iter().find(|lang| lang.code() == code) {
            Some(lang) => Ok(*lang),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The source language all translation batches start from.
    pub fn source() -> Language {
        let code = LanguageRegistry::get().source().code;
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .unwrap_or(Language::English)
    }

    /// ISO 639-1 language code (e.g., "en", "ar").
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::Hindi => "hi",
            Language::Urdu => "ur",
            Language::Tagalog => "tl",
        }
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the registry is missing a variant, which the registry tests
    /// rule out.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("Every Language variant is registered")
    }

    /// English name of the language (e.g., "Arabic").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "العربية").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_source(&self) -> bool {
        self.config().is_source
    }

    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// The bundled fallback table for this language.
    pub fn static_table(&self) -> &'static TranslationTable {
        LanguageRegistry::get()
            .table_by_code(self.code())
            .expect("Every Language variant has a bundled table")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
