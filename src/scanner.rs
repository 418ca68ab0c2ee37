//! Async driver that ties the session to the two network round trips.
//!
//! The session lock is only held for the synchronous transitions; every
//! request runs without it, and its outcome is committed through the ticket
//! taken when the request started.

use crate::classifier::{classify, ClassificationRequest, Evidence, ScanContext};
use crate::config::Config;
use crate::error::FailureKind;
use crate::evidence::{encode_image_bytes, encode_image_file};
use crate::i18n::{InstallOutcome, Language};
use crate::lingo::fetch_translations;
use crate::session::{ScanCompletion, ScanInput, Session};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Clone)]
pub struct Scanner {
    client: reqwest::Client,
    config: Arc<Config>,
    session: Arc<Mutex<Session>>,
}

impl Scanner {
    /// Build a scanner whose HTTP client is bounded by the classify timeout.
    pub fn new(config: Config, language: Language) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.classify_timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, config, language))
    }

    pub fn with_client(client: reqwest::Client, config: Config, language: Language) -> Self {
        Self {
            client,
            config: Arc::new(config),
            session: Arc::new(Mutex::new(Session::new(language))),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> Arc<Mutex<Session>> {
        Arc::clone(&self.session)
    }

    /// Switch language and, for non-source languages, fetch a fresh batch in
    /// the background.
    ///
    /// The bundled table is active as soon as this returns. The handle
    /// resolves once the batch was installed, rejected or found stale.
    pub async fn select_language(&self, language: Language) -> Option<JoinHandle<InstallOutcome>> {
        let ticket = self.session.lock().await.select_language(language)?;

        let client = self.client.clone();
        let config = Arc::clone(&self.config);
        let session = Arc::clone(&self.session);

        Some(tokio::spawn(async move {
            let base = Language::source().static_table();
            let result = fetch_translations(&client, &config, base, ticket.language()).await;
            session.lock().await.install_translation(ticket, result)
        }))
    }

    /// Run one scan to completion.
    ///
    /// Returns `None` when the scan was inert (no evidence, or another scan
    /// already running).
    pub async fn scan(&self, input: ScanInput, context: ScanContext) -> Option<ScanCompletion> {
        let (ticket, target_language) = {
            let mut session = self.session.lock().await;
            let ticket = session.begin_scan(&input)?;
            (ticket, session.language())
        };

        let evidence = match prepare_evidence(input) {
            Ok(evidence) => evidence,
            Err(e) => {
                error!("Could not prepare evidence: {:#}", e);
                let completion = self.session.lock().await.fail_scan(ticket, FailureKind::Evidence);
                return Some(completion);
            }
        };

        let request = ClassificationRequest {
            evidence,
            target_language,
            context,
        };
        let result = classify(&self.client, &self.config, &request).await;

        let completion = self.session.lock().await.complete_scan(ticket, result);
        debug!("Scan finished: {:?}", completion);
        Some(completion)
    }
}

fn prepare_evidence(input: ScanInput) -> Result<Evidence> {
    match input {
        ScanInput::Image(path) => {
            let image = encode_image_file(&path)?;
            Ok(Evidence::Image(image))
        }
        ScanInput::ImageBytes { bytes, mime_type } => {
            let image = encode_image_bytes(&bytes, &mime_type)?;
            Ok(Evidence::Image(image))
        }
        ScanInput::Text(text) => Ok(Evidence::Text(text.trim().to_string())),
        ScanInput::Empty => anyhow::bail!("No evidence supplied"),
    }
}
