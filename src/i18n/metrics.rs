//! Translation metrics and observability module.
//!
//! Counts what happened to each translation batch so the silent fallback
//! path still leaves a trace. Counters are atomics so a snapshot can be taken
//! from any task holding a shared reference.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-cache translation counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Batches requested from the translation service
    fetches: AtomicUsize,

    /// Batches installed as the current table
    installed: AtomicUsize,

    /// Batches that failed and left the static table in place
    fallbacks: AtomicUsize,

    /// Batches discarded because the user had switched language again
    stale: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_installed(&self) {
        self.installed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale(&self) {
        self.stale.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let fetches = self.fetches.load(Ordering::Relaxed);
        let installed = self.installed.load(Ordering::Relaxed);
        let fallbacks = self.fallbacks.load(Ordering::Relaxed);
        let stale = self.stale.load(Ordering::Relaxed);

        let settled = installed + fallbacks;
        let success_rate = if settled > 0 {
            (installed as f64 / settled as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            fetches,
            installed,
            fallbacks,
            stale,
            success_rate,
        }
    }
}

/// Snapshot of translation metrics.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsReport {
    pub fetches: usize,
    pub installed: usize,
    pub fallbacks: usize,
    pub stale: usize,
    /// Installed batches as a percentage of batches that were not discarded
    pub success_rate: f64,
}
