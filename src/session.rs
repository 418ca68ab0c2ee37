//! Explicit UI state.
//!
//! Everything the presentation layer renders (active language and table,
//! current view, scan progress and result) lives in one `Session`, changed
//! only through the transition functions below. Async work carries a ticket
//! and is committed only if the ticket is still current.

use crate::error::{ClassifyError, FailureKind, TranslationError};
use crate::i18n::{
    InstallOutcome, Language, StringKey, TranslationCache, TranslationTable, TranslationTicket,
};
use crate::report::{sms_uri, Platform};
use crate::verdict::ClassificationResult;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Scanner,
    Map,
    Voice,
    Gov,
    Delivery,
    Training,
}

/// Evidence as the user supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanInput {
    /// A screenshot on disk
    Image(PathBuf),
    /// Raw image bytes with their MIME type
    ImageBytes { bytes: Vec<u8>, mime_type: String },
    /// Pasted message text
    Text(String),
    /// Nothing chosen yet
    Empty,
}

impl ScanInput {
    /// Whether there is anything to scan. Whitespace-only text is nothing.
    pub fn is_present(&self) -> bool {
        match self {
            ScanInput::Image(_) => true,
            ScanInput::ImageBytes { bytes, .. } => !bytes.is_empty(),
            ScanInput::Text(text) => !text.trim().is_empty(),
            ScanInput::Empty => false,
        }
    }
}

/// Token for one in-flight scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Investigating(ScanTicket),
    Completed {
        result: ClassificationResult,
        completed_at: DateTime<Utc>,
    },
    Failed(FailureKind),
}

/// What `Session::complete_scan` did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCompletion {
    Rendered,
    Failed(FailureKind),
    /// A newer scan or a navigation superseded the ticket
    Stale,
}

#[derive(Debug)]
pub struct Session {
    translations: TranslationCache,
    view: View,
    scan_generation: u64,
    scan: ScanState,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            translations: TranslationCache::new(language),
            view: View::Landing,
            scan_generation: 0,
            scan: ScanState::Idle,
        }
    }

    // ==================== Language ====================

    pub fn language(&self) -> Language {
        self.translations.language()
    }

    /// The complete table to render with.
    pub fn strings(&self) -> &TranslationTable {
        self.translations.table()
    }

    /// Shorthand for one display string.
    pub fn t(&self, key: StringKey) -> &str {
        self.translations.get(key)
    }

    pub fn translations(&self) -> &TranslationCache {
        &self.translations
    }

    /// Whether to show the transient "updating translations" indicator.
    pub fn is_translating(&self) -> bool {
        self.translations.is_updating()
    }

    pub fn select_language(&mut self, language: Language) -> Option<TranslationTicket> {
        self.translations.select(language)
    }

    pub fn install_translation(
        &mut self,
        ticket: TranslationTicket,
        result: Result<TranslationTable, TranslationError>,
    ) -> InstallOutcome {
        self.translations.install(ticket, result)
    }

    // ==================== Navigation ====================

    pub fn view(&self) -> View {
        self.view
    }

    /// Move to another view.
    ///
    /// Any in-flight scan is abandoned: its result will be dropped on
    /// arrival. Returning to the landing page also clears the last result.
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        debug!("Navigating {:?} -> {:?}", self.view, view);
        self.view = view;

        if matches!(self.scan, ScanState::Investigating(_)) {
            self.scan_generation += 1;
            self.scan = ScanState::Idle;
        }
        if view == View::Landing {
            self.scan = ScanState::Idle;
        }
    }

    // ==================== Scanning ====================

    pub fn scan_state(&self) -> &ScanState {
        &self.scan
    }

    pub fn is_investigating(&self) -> bool {
        matches!(self.scan, ScanState::Investigating(_))
    }

    /// Whether the scan control should be enabled for `input`.
    pub fn can_scan(&self, input: &ScanInput) -> bool {
        input.is_present() && !self.is_investigating()
    }

    /// Start a scan.
    ///
    /// Inert (returns `None`) without evidence or while another scan is
    /// running. Otherwise clears the previous result and error.
    pub fn begin_scan(&mut self, input: &ScanInput) -> Option<ScanTicket> {
        if !self.can_scan(input) {
            return None;
        }
        self.scan_generation += 1;
        let ticket = ScanTicket {
            generation: self.scan_generation,
        };
        self.scan = ScanState::Investigating(ticket);
        Some(ticket)
    }

    /// Commit the outcome of the scan identified by `ticket`.
    pub fn complete_scan(
        &mut self,
        ticket: ScanTicket,
        result: Result<ClassificationResult, ClassifyError>,
    ) -> ScanCompletion {
        if !self.is_current(ticket) {
            if let Err(e) = &result {
                debug!("Ignoring failure of superseded scan: {}", e);
            }
            return self.finish(ticket, result.map_err(|e| e.kind()));
        }

        let result = result.map_err(|e| {
            error!("Scan failed: {}", e);
            e.kind()
        });
        self.finish(ticket, result)
    }

    fn is_current(&self, ticket: ScanTicket) -> bool {
        self.scan == ScanState::Investigating(ticket)
    }

    /// Record a scan that failed before reaching the classifier.
    pub fn fail_scan(&mut self, ticket: ScanTicket, kind: FailureKind) -> ScanCompletion {
        self.finish(ticket, Err(kind))
    }

    fn finish(
        &mut self,
        ticket: ScanTicket,
        result: Result<ClassificationResult, FailureKind>,
    ) -> ScanCompletion {
        if !self.is_current(ticket) {
            debug!("Dropping stale scan result (generation {})", ticket.generation);
            return ScanCompletion::Stale;
        }

        match result {
            Ok(result) => {
                info!("Scan complete: {}", result.verdict());
                self.scan = ScanState::Completed {
                    result,
                    completed_at: Utc::now(),
                };
                ScanCompletion::Rendered
            }
            Err(kind) => {
                self.scan = ScanState::Failed(kind);
                ScanCompletion::Failed(kind)
            }
        }
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match &self.scan {
            ScanState::Completed { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The single localized failure message, if the last scan failed.
    pub fn error_message(&self) -> Option<&str> {
        match self.scan {
            ScanState::Failed(_) => Some(self.t(StringKey::ErrorHighTraffic)),
            _ => None,
        }
    }

    // ==================== Reporting ====================

    /// The draft for the report actions. Only offered for scam verdicts.
    pub fn report_draft(&self) -> Option<&str> {
        self.result()
            .filter(|r| r.is_scam())
            .and_then(|r| r.short_report_draft())
            .filter(|d| !d.trim().is_empty())
    }

    pub fn report_sms_uri(&self, number: &str, platform: Platform) -> Option<String> {
        self.report_draft()
            .map(|draft| sms_uri(number, draft, platform))
    }
}
