//! Preview strings binary - fetches one language's table and prints it
//!
//! Usage:
//!   cargo run --bin preview-strings -- ar          # Fetch Arabic via the translation service
//!   cargo run --bin preview-strings -- ur --static # Print the bundled Urdu table only
//!
//! Optional environment variables:
//! - LINGO_API_KEY (without it the bundled table is shown)
//! - LINGO_API_URL
//! - TRANSLATE_TIMEOUT_SECS (defaults to 15)

use anyhow::{Context, Result};
use saif_scan::config::Config;
use saif_scan::i18n::{InstallOutcome, Language, TranslationCache};
use saif_scan::lingo;
use tracing::info;

/// Minimal config for preview (no classifier key required)
struct PreviewConfig {
    lingo_api_key: Option<String>,
    lingo_api_url: String,
    translate_timeout_secs: u64,
}

impl PreviewConfig {
    fn from_env() -> Self {
        Self {
            lingo_api_key: std::env::var("LINGO_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            lingo_api_url: std::env::var("LINGO_API_URL")
                .unwrap_or_else(|_| "https://api.lingo.dev/v1/translate".to_string()),
            translate_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
        }
    }

    /// Convert to the full Config struct (with dummy values for unused fields)
    fn to_full_config(&self) -> Config {
        Config {
            gemini_api_key: "unused".to_string(),
            gemini_model: "unused".to_string(),
            gemini_api_url: "unused".to_string(),
            classify_timeout_secs: 60,
            lingo_api_key: self.lingo_api_key.clone(),
            lingo_api_url: self.lingo_api_url.clone(),
            translate_timeout_secs: self.translate_timeout_secs,
            report_number: "unused".to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("saif_scan=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let static_only = args.iter().any(|arg| arg == "--static");
    let code = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .context("Usage: preview-strings <language code> [--static]")?;
    let language = Language::from_code(code)?;

    let config = PreviewConfig::from_env().to_full_config();
    let mut cache = TranslationCache::new(Language::source());

    if let Some(ticket) = cache.select(language) {
        if static_only || !config.translation_enabled() {
            info!("Showing bundled {} table", language.name());
        } else {
            info!("Fetching {} translations...", language.name());
            let base = Language::source().static_table();
            // Validation warnings are logged by the fetch itself
            let result = lingo::fetch_translations(&reqwest::Client::new(), &config, base, language).await;

            match cache.install(ticket, result) {
                InstallOutcome::Installed => info!("Using dynamic translations"),
                outcome => info!("Falling back to bundled table ({:?})", outcome),
            }
        }
    }

    println!(
        "{} ({}){}",
        language.native_name(),
        language.code(),
        if language.is_rtl() { " [rtl]" } else { "" }
    );
    println!("{}", "=".repeat(60));
    for (key, value) in cache.table().iter() {
        println!("{:<22} {}", key.as_str(), value);
    }
    println!("{}", "=".repeat(60));

    let report = cache.metrics().report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
