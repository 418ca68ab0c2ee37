//! Classifier verdicts and strict validation of the classifier's JSON.
//!
//! The classifier is asked for a raw JSON object of the shape
//!
//! ```json
//! {
//!   "verdict": "SCAM" | "SAFE" | "UNKNOWN",
//!   "risk_score": 1-100,
//!   "short_sms_draft": "...",
//!   "detailed_analysis": ["...", "..."],
//!   "evidence_extracted": { "phone_numbers": [], "urls": [], "keywords": [] }
//! }
//! ```
//!
//! A model is not a schema-checked API, so every field is checked before a
//! `ClassificationResult` exists. Anything structurally incomplete becomes a
//! `ClassifyError::BadResponse` instead of half-rendered state.

use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Longest report draft that fits one SMS segment
pub const MAX_DRAFT_CHARS: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Scam,
    Safe,
    Unknown,
}

impl Verdict {
    fn parse(s: &str) -> Option<Verdict> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SCAM" => Some(Verdict::Scam),
            "SAFE" => Some(Verdict::Safe),
            "UNKNOWN" => Some(Verdict::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Scam => "SCAM",
            Verdict::Safe => "SAFE",
            Verdict::Unknown => "UNKNOWN",
        })
    }
}

/// Indicators the classifier pulled out of the evidence.
///
/// Each list is trimmed and de-duplicated, keeping first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedEvidence {
    pub phone_numbers: Vec<String>,
    pub urls: Vec<String>,
    pub keywords: Vec<String>,
}

impl ExtractedEvidence {
    pub fn is_empty(&self) -> bool {
        self.phone_numbers.is_empty() && self.urls.is_empty() && self.keywords.is_empty()
    }
}

/// A validated classifier answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    verdict: Verdict,
    risk_score: Option<u8>,
    short_report_draft: Option<String>,
    analysis_points: Vec<String>,
    extracted_evidence: ExtractedEvidence,
}

impl ClassificationResult {
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Risk in 0..=100. `None` when the verdict is `Unknown`.
    pub fn risk_score(&self) -> Option<u8> {
        self.risk_score
    }

    /// The report draft. Always present and non-empty for `Scam`.
    pub fn short_report_draft(&self) -> Option<&str> {
        self.short_report_draft.as_deref()
    }

    pub fn analysis_points(&self) -> &[String] {
        &self.analysis_points
    }

    pub fn extracted_evidence(&self) -> &ExtractedEvidence {
        &self.extracted_evidence
    }

    pub fn is_scam(&self) -> bool {
        self.verdict == Verdict::Scam
    }
}

/// Wire shape of the classifier's answer. Everything optional so that a
/// missing field is reported by name rather than as a serde error.
#[derive(Debug, Deserialize)]
struct RawClassification {
    verdict: Option<Value>,
    risk_score: Option<Value>,
    short_sms_draft: Option<Value>,
    detailed_analysis: Option<Value>,
    evidence_extracted: Option<Value>,
}

/// Remove a surrounding markdown code fence if the model added one anyway.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line
    match inner.find('\n') {
        Some(newline) if !inner[..newline].trim().contains(['{', '[']) => inner[newline + 1..].trim(),
        _ => inner.trim(),
    }
}

/// Parse and validate the classifier's text output.
pub fn parse_classification(text: &str) -> Result<ClassificationResult, ClassifyError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(ClassifyError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(body).map_err(ClassifyError::Malformed)?;
    if !value.is_object() {
        return Err(ClassifyError::NotAnObject);
    }
    let raw: RawClassification = serde_json::from_value(value).map_err(ClassifyError::Malformed)?;

    let verdict = match raw.verdict {
        Some(Value::String(s)) => {
            Verdict::parse(&s).ok_or_else(|| ClassifyError::bad("verdict", format!("unknown value {:?}", s)))?
        }
        Some(other) => return Err(ClassifyError::bad("verdict", format!("expected string, got {}", other))),
        None => return Err(ClassifyError::bad("verdict", "missing")),
    };

    let risk_score = match verdict {
        Verdict::Unknown => None,
        _ => Some(parse_risk_score(raw.risk_score)?),
    };

    let analysis_points = match raw.detailed_analysis {
        Some(value) => string_list(value, "detailed_analysis")?,
        None => return Err(ClassifyError::bad("detailed_analysis", "missing")),
    };

    let draft = match raw.short_sms_draft {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(truncate_draft(s.trim())),
        Some(Value::String(_)) | Some(Value::Null) | None => None,
        Some(other) => {
            return Err(ClassifyError::bad(
                "short_sms_draft",
                format!("expected string, got {}", other),
            ))
        }
    };
    if verdict == Verdict::Scam && draft.is_none() {
        return Err(ClassifyError::bad("short_sms_draft", "missing for SCAM verdict"));
    }

    let extracted_evidence = match raw.evidence_extracted {
        Some(Value::Object(mut map)) => ExtractedEvidence {
            phone_numbers: optional_list(map.remove("phone_numbers"), "evidence_extracted.phone_numbers")?,
            urls: optional_list(map.remove("urls"), "evidence_extracted.urls")?,
            keywords: optional_list(map.remove("keywords"), "evidence_extracted.keywords")?,
        },
        Some(Value::Null) | None => ExtractedEvidence::default(),
        Some(other) => {
            return Err(ClassifyError::bad(
                "evidence_extracted",
                format!("expected object, got {}", other),
            ))
        }
    };

    Ok(ClassificationResult {
        verdict,
        risk_score,
        short_report_draft: draft,
        analysis_points,
        extracted_evidence,
    })
}

fn parse_risk_score(value: Option<Value>) -> Result<u8, ClassifyError> {
    let number = match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ClassifyError::bad("risk_score", format!("not representable: {}", n)))?,
        // Models occasionally quote numbers
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| ClassifyError::bad("risk_score", format!("not a number: {:?}", s)))?,
        Some(other) => return Err(ClassifyError::bad("risk_score", format!("expected number, got {}", other))),
        None => return Err(ClassifyError::bad("risk_score", "missing")),
    };

    let rounded = number.round();
    if !(0.0..=100.0).contains(&rounded) {
        return Err(ClassifyError::bad("risk_score", format!("out of range: {}", number)));
    }
    Ok(rounded as u8)
}

/// A required array of strings. Blank entries are dropped.
fn string_list(value: Value, field: &'static str) -> Result<Vec<String>, ClassifyError> {
    let Value::Array(items) = value else {
        return Err(ClassifyError::bad(field, format!("expected array, got {}", value)));
    };

    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => {
                let s = s.trim();
                if !s.is_empty() && !out.iter().any(|existing| existing == s) {
                    out.push(s.to_string());
                }
            }
            Value::Null => {}
            other => return Err(ClassifyError::bad(field, format!("expected string item, got {}", other))),
        }
    }
    Ok(out)
}

fn optional_list(value: Option<Value>, field: &'static str) -> Result<Vec<String>, ClassifyError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => string_list(value, field),
    }
}

fn truncate_draft(draft: &str) -> String {
    let count = draft.chars().count();
    if count <= MAX_DRAFT_CHARS {
        return draft.to_string();
    }
    warn!("Report draft is {} chars, truncating to {}", count, MAX_DRAFT_CHARS);
    draft.chars().take(MAX_DRAFT_CHARS).collect()
}
