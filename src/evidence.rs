//! Evidence encoding: turn a user-supplied image into the base64 payload that
//! travels inline in a classifier request.
//!
//! The whole file is read into memory; screenshots are small and the
//! classifier wants a single inline blob anyway.

use crate::error::EvidenceError;
use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// A non-empty, base64-encoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    mime_type: String,
    data: String,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Standard base64 without any data-URI header.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Decode back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(&self.data)
    }
}

static DATA_URI_REGEX: OnceLock<Regex> = OnceLock::new();

/// Map a file extension onto the image MIME types the classifier accepts.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// Read and encode an image file.
pub fn encode_image_file(path: &Path) -> Result<EncodedImage, EvidenceError> {
    let mime = mime_from_path(path)
        .ok_or_else(|| EvidenceError::Unsupported(path.display().to_string()))?;

    let bytes = std::fs::read(path).map_err(|source| EvidenceError::Read {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Read {} bytes of {} from {}", bytes.len(), mime, path.display());
    encode_image_bytes(&bytes, mime)
}

/// Encode raw image bytes.
pub fn encode_image_bytes(bytes: &[u8], mime_type: &str) -> Result<EncodedImage, EvidenceError> {
    if bytes.is_empty() {
        return Err(EvidenceError::Empty);
    }
    if !mime_type.starts_with("image/") {
        return Err(EvidenceError::Unsupported(mime_type.to_string()));
    }

    Ok(EncodedImage {
        mime_type: mime_type.to_string(),
        data: general_purpose::STANDARD.encode(bytes),
    })
}

/// Accept an image already encoded as `data:<mime>;base64,<payload>`.
///
/// The header is stripped and its MIME type kept. The payload must be valid
/// standard base64 and decode to at least one byte.
pub fn from_data_uri(uri: &str) -> Result<EncodedImage, EvidenceError> {
    let regex = DATA_URI_REGEX.get_or_init(|| {
        Regex::new(r"^data:([A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+)?((?:;[^;,]*)*?);base64,")
            .expect("valid regex")
    });

    let caps = regex
        .captures(uri)
        .ok_or_else(|| EvidenceError::InvalidDataUri("missing base64 data-URI header".to_string()))?;
    let mime_type = caps
        .get(1)
        .map(|m| m.as_str())
        .ok_or_else(|| EvidenceError::InvalidDataUri("missing MIME type".to_string()))?;
    let payload = uri[caps.get(0).map_or(0, |m| m.end())..].trim();

    if payload.is_empty() {
        return Err(EvidenceError::Empty);
    }

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| EvidenceError::InvalidDataUri(e.to_string()))?;

    encode_image_bytes(&bytes, mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    // ==================== mime_from_path Tests ====================

    #[test]
    fn test_mime_from_path() {
        assert_eq!(mime_from_path(Path::new("shot.png")), Some("image/png"));
        assert_eq!(mime_from_path(Path::new("shot.JPG")), Some("image/jpeg"));
        assert_eq!(mime_from_path(Path::new("a/b/shot.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_from_path(Path::new("shot.webp")), Some("image/webp"));
        assert_eq!(mime_from_path(Path::new("shot.pdf")), None);
        assert_eq!(mime_from_path(Path::new("shot")), None);
    }

    // ==================== encode_image_file Tests ====================

    #[test]
    fn test_encode_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sms.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(PNG_HEADER)
            .unwrap();

        let encoded = encode_image_file(&path).expect("Should encode");

        assert_eq!(encoded.mime_type(), "image/png");
        assert_eq!(encoded.data(), "iVBORw0KGgo=");
        assert_eq!(encoded.decode().unwrap(), PNG_HEADER);
    }

    #[test]
    fn test_encode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.png");

        let err = encode_image_file(&path).unwrap_err();

        assert!(matches!(err, EvidenceError::Read { .. }));
        assert!(err.to_string().contains("gone.png"));
    }

    #[test]
    fn test_encode_empty_file_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::File::create(&path).unwrap();

        assert!(matches!(encode_image_file(&path), Err(EvidenceError::Empty)));
    }

    #[test]
    fn test_encode_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        assert!(matches!(
            encode_image_file(&path),
            Err(EvidenceError::Unsupported(_))
        ));
    }

    // ==================== encode_image_bytes Tests ====================

    #[test]
    fn test_encode_bytes_rejects_non_image_mime() {
        assert!(matches!(
            encode_image_bytes(b"abc", "text/plain"),
            Err(EvidenceError::Unsupported(_))
        ));
    }

    // ==================== from_data_uri Tests ====================

    #[test]
    fn test_from_data_uri_strips_header() {
        let encoded = from_data_uri("data:image/png;base64,iVBORw0KGgo=").expect("Should parse");

        assert_eq!(encoded.mime_type(), "image/png");
        assert_eq!(encoded.data(), "iVBORw0KGgo=");
    }

    #[test]
    fn test_from_data_uri_with_parameters() {
        let encoded =
            from_data_uri("data:image/jpeg;name=sms.jpg;base64,/9j/4AAQ").expect("Should parse");

        assert_eq!(encoded.mime_type(), "image/jpeg");
        assert_eq!(encoded.decode().unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
    }

    #[test]
    fn test_from_data_uri_without_header() {
        assert!(matches!(
            from_data_uri("iVBORw0KGgo="),
            Err(EvidenceError::InvalidDataUri(_))
        ));
    }

    #[test]
    fn test_from_data_uri_empty_payload() {
        assert!(matches!(
            from_data_uri("data:image/png;base64,"),
            Err(EvidenceError::Empty)
        ));
    }

    #[test]
    fn test_from_data_uri_invalid_base64() {
        assert!(matches!(
            from_data_uri("data:image/png;base64,!!!"),
            Err(EvidenceError::InvalidDataUri(_))
        ));
    }

    // ==================== Round Trip Law ====================

    proptest! {
        #[test]
        fn prop_encode_decode_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 1..4096)) {
            let encoded = encode_image_bytes(&bytes, "image/png").unwrap();
            prop_assert!(!encoded.data().is_empty());
            prop_assert_eq!(encoded.decode().unwrap(), bytes);
        }
    }
}
