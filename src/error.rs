//! Failure types at the boundaries of the two network round trips and the
//! evidence encoder.

use crate::i18n::TableError;
use thiserror::Error;

/// Coarse provenance of a failed scan.
///
/// Every kind is shown to the user as the same localized "service busy"
/// message; the distinction exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The image could not be read or encoded
    Evidence,
    /// Connection, DNS, TLS or timeout failure
    Transport,
    /// The classifier answered with a non-success status
    Status,
    /// The body was empty or not a JSON object
    Malformed,
    /// The JSON object lacked a required field or carried an invalid one
    BadResponse,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to send request to classifier: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("classifier request timed out")]
    Timeout,

    #[error("classifier API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("classifier response contained no text")]
    EmptyResponse,

    #[error("classifier response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("classifier response is not a JSON object")]
    NotAnObject,

    #[error("classifier response has invalid `{field}`: {reason}")]
    BadResponse { field: &'static str, reason: String },
}

impl ClassifyError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClassifyError::Transport(_) | ClassifyError::Timeout => FailureKind::Transport,
            ClassifyError::Status { .. } => FailureKind::Status,
            ClassifyError::EmptyResponse
            | ClassifyError::Malformed(_)
            | ClassifyError::NotAnObject => FailureKind::Malformed,
            ClassifyError::BadResponse { .. } => FailureKind::BadResponse,
        }
    }

    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClassifyError::Timeout
        } else {
            ClassifyError::Transport(e)
        }
    }

    pub(crate) fn bad(field: &'static str, reason: impl Into<String>) -> Self {
        ClassifyError::BadResponse {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("dynamic translation is disabled (no API key configured)")]
    Disabled,

    #[error("failed to send translation request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("translation API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse translation response: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("translation response contained no string array")]
    MissingTranslations,

    #[error("translated batch rejected: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("image is empty")]
    Empty,

    #[error("unsupported image type: {0}")]
    Unsupported(String),

    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_carries_code() {
        let err = ClassifyError::Status {
            status: 429,
            body: "RESOURCE_EXHAUSTED".to_string(),
        };
        assert_eq!(err.to_string(), "classifier API error (429): RESOURCE_EXHAUSTED");
        assert_eq!(err.kind(), FailureKind::Status);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ClassifyError::Timeout.kind(), FailureKind::Transport);
        assert_eq!(ClassifyError::EmptyResponse.kind(), FailureKind::Malformed);
        assert_eq!(ClassifyError::NotAnObject.kind(), FailureKind::Malformed);
        assert_eq!(
            ClassifyError::bad("verdict", "missing").kind(),
            FailureKind::BadResponse
        );

        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(ClassifyError::Malformed(json_err).kind(), FailureKind::Malformed);
    }

    #[test]
    fn test_bad_response_message() {
        let err = ClassifyError::bad("risk_score", "out of range: 140");
        assert_eq!(
            err.to_string(),
            "classifier response has invalid `risk_score`: out of range: 140"
        );
    }

    #[test]
    fn test_translation_error_from_table_error() {
        let err: TranslationError = TableError::SizeMismatch {
            expected: 37,
            actual: 36,
        }
        .into();
        assert!(err.to_string().contains("expected 37 values, got 36"));
    }
}
