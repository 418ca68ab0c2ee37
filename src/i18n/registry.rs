//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is built once on first access (`OnceLock`) and is immutable
//! afterwards. Besides language metadata it holds the bundled fallback table
//! of each language, already validated as complete.

use super::strings::{
    StaticStrings, ARABIC_STRINGS, ENGLISH_STRINGS, HINDI_STRINGS, TAGALOG_STRINGS, URDU_STRINGS,
};
use super::TranslationTable;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the language, also used in classifier prompts
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية")
    pub native_name: &'static str,

    /// Whether this is the source language of translation batches
    pub is_source: bool,

    /// Whether the language is written right-to-left
    pub rtl: bool,

    /// Bundled strings for this language
    pub strings: StaticStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    tables: Vec<TranslationTable>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    ///
    /// # Panics
    /// Panics on first access if a bundled table is incomplete. Bundles are
    /// compiled in, so this is a build defect caught by the unit tests.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let languages = default_languages();
            let tables = languages
                .iter()
                .map(|lang| {
                    TranslationTable::from_pairs(lang.strings.iter().copied()).unwrap_or_else(
                        |e| panic!("Bundled {} strings are invalid: {}", lang.name, e),
                    )
                })
                .collect();
            LanguageRegistry { languages, tables }
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the bundled table for a language code.
    pub fn table_by_code(&self, code: &str) -> Option<&TranslationTable> {
        self.languages
            .iter()
            .position(|lang| lang.code == code)
            .map(|i| &self.tables[i])
    }

    /// Get all languages in display order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the source language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one source language.
    pub fn source(&self) -> &LanguageConfig {
        let sources: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_source)
            .collect();

        match sources.len() {
            0 => panic!("No source language found in registry"),
            1 => sources[0],
            _ => panic!("Multiple source languages found in registry"),
        }
    }
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_source: true,
            rtl: false,
            strings: ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_source: false,
            rtl: true,
            strings: ARABIC_STRINGS,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            is_source: false,
            rtl: false,
            strings: HINDI_STRINGS,
        },
        LanguageConfig {
            code: "ur",
            name: "Urdu",
            native_name: "اردو",
            is_source: false,
            rtl: true,
            strings: URDU_STRINGS,
        },
        LanguageConfig {
            code: "tl",
            name: "Tagalog",
            native_name: "Tagalog",
            is_source: false,
            rtl: false,
            strings: TAGALOG_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::StringKey;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_arabic() {
        let config = LanguageRegistry::get().get_by_code("ar").unwrap();

        assert_eq!(config.name, "Arabic");
        assert_eq!(config.native_name, "العربية");
        assert!(config.rtl);
        assert!(!config.is_source);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_all_has_five_languages() {
        let all = LanguageRegistry::get().list_all();
        let codes: Vec<_> = all.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "ar", "hi", "ur", "tl"]);
    }

    #[test]
    fn test_source_is_english() {
        let source = LanguageRegistry::get().source();
        assert_eq!(source.code, "en");
        assert!(source.is_source);
    }

    #[test]
    fn test_every_language_has_complete_table() {
        let registry = LanguageRegistry::get();
        for lang in registry.list_all() {
            let table = registry.table_by_code(lang.code).unwrap();
            assert_eq!(table.len(), StringKey::COUNT, "{} table incomplete", lang.name);
        }
    }

    #[test]
    fn test_rtl_languages() {
        let rtl: Vec<_> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter(|l| l.rtl)
            .map(|l| l.code)
            .collect();
        assert_eq!(rtl, vec!["ar", "ur"]);
    }
}
