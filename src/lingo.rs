use crate::config::Config;
use crate::error::TranslationError;
use crate::i18n::{merge_batch, Language, TranslationTable, TranslationValidator};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Batch translation request
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    source: &'a str,
    target: &'a str,
    texts: Vec<&'a str>,
}

/// Field names the translation service has been seen to use for its output
const RESPONSE_FIELDS: &[&str] = &["translations", "texts", "data"];

/// Pull the translated strings out of a response body.
///
/// The first tolerated field that holds an array of strings wins.
fn extract_translations(body: &Value) -> Option<Vec<String>> {
    RESPONSE_FIELDS.iter().find_map(|field| {
        body.get(*field)?
            .as_array()?
            .iter()
            .map(|v| v.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
    })
}

/// Translate every value of `base` into `target` with one batch call.
///
/// Values are sent in canonical key order and zipped back positionally; the
/// batch is rejected as a whole unless it is complete. The source language
/// short-circuits to `base` without a network call.
pub async fn fetch_translations(
    client: &reqwest::Client,
    config: &Config,
    base: &TranslationTable,
    target: Language,
) -> Result<TranslationTable, TranslationError> {
    if target.is_source() {
        return Ok(base.clone());
    }

    let api_key = config
        .lingo_api_key
        .as_deref()
        .ok_or(TranslationError::Disabled)?;

    let request = TranslateRequest {
        source: Language::source().code(),
        target: target.code(),
        texts: base.values().collect(),
    };

    debug!(
        "Requesting {} translations into {}",
        request.texts.len(),
        target.name()
    );

    let response = client
        .post(&config.lingo_api_url)
        .bearer_auth(api_key)
        .timeout(config.translate_timeout())
        .json(&request)
        .send()
        .await
        .map_err(TranslationError::Transport)?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(TranslationError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(TranslationError::Transport)?;
    let body: Value = serde_json::from_slice(&bytes).map_err(TranslationError::Malformed)?;
    let translated = extract_translations(&body).ok_or(TranslationError::MissingTranslations)?;

    let table = merge_batch(base, translated)?;

    let validation = TranslationValidator::validate_table(base, &table);
    if validation.has_warnings() {
        warn!(
            "Translation validation warnings for {} ({}): {:?}",
            target.name(),
            target.code(),
            validation.warnings
        );
    }

    Ok(table)
}
