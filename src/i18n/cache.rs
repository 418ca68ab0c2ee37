//! The active language and its installed string table.
//!
//! Selecting a language installs its bundled table at once and hands out a
//! `TranslationTicket` for the dynamic batch. A batch is only installed if
//! its ticket still carries the current generation, so a slow response for a
//! language the user already left can never overwrite the newer selection.

use super::{Language, StringKey, TranslationMetrics, TranslationTable};
use crate::error::TranslationError;
use tracing::{debug, info, warn};

/// Token for one in-flight translation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationTicket {
    language: Language,
    generation: u64,
}

impl TranslationTicket {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What `TranslationCache::install` did with a batch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The translated table is now current
    Installed,
    /// The batch failed; the bundled table stays current
    KeptFallback,
    /// The ticket was superseded; nothing changed
    Stale,
}

#[derive(Debug)]
pub struct TranslationCache {
    language: Language,
    current: TranslationTable,
    generation: u64,
    pending: Option<u64>,
    metrics: TranslationMetrics,
}

impl TranslationCache {
    /// Start with the bundled table of `language`. No batch is requested.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            current: language.static_table().clone(),
            generation: 0,
            pending: None,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Switch to `language`.
    ///
    /// The bundled table is installed immediately. Returns a ticket for the
    /// dynamic batch when `language` is not the source language. Re-selecting
    /// the active language changes nothing and returns `None`.
    pub fn select(&mut self, language: Language) -> Option<TranslationTicket> {
        if language == self.language {
            return None;
        }

        self.generation += 1;
        self.language = language;
        self.current = language.static_table().clone();
        self.pending = None;
        debug!(
            "Installed bundled {} table (generation {})",
            language.name(),
            self.generation
        );

        if language.is_source() {
            return None;
        }

        self.pending = Some(self.generation);
        self.metrics.record_fetch();
        Some(TranslationTicket {
            language,
            generation: self.generation,
        })
    }

    /// Commit the result of the batch identified by `ticket`.
    ///
    /// Failures are never surfaced: the bundled table simply stays installed.
    pub fn install(
        &mut self,
        ticket: TranslationTicket,
        result: Result<TranslationTable, TranslationError>,
    ) -> InstallOutcome {
        if ticket.generation != self.generation || ticket.language != self.language {
            debug!(
                "Discarding stale {} batch (generation {}, current {})",
                ticket.language.name(),
                ticket.generation,
                self.generation
            );
            self.metrics.record_stale();
            return InstallOutcome::Stale;
        }

        self.pending = None;

        match result {
            Ok(table) => {
                self.current = table;
                self.metrics.record_installed();
                info!("Installed dynamic {} translations", ticket.language.name());
                InstallOutcome::Installed
            }
            Err(e) => {
                self.metrics.record_fallback();
                warn!(
                    "Keeping bundled {} table, translation failed: {}",
                    ticket.language.name(),
                    e
                );
                InstallOutcome::KeptFallback
            }
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The table to render right now. Always complete.
    pub fn table(&self) -> &TranslationTable {
        &self.current
    }

    pub fn get(&self, key: StringKey) -> &str {
        self.current.get(key)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a batch for the active selection is still outstanding.
    pub fn is_updating(&self) -> bool {
        self.pending == Some(self.generation)
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }
}
