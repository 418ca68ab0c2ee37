//! Integration tests for the Saif scam scanner
//!
//! These tests drive the public scanner against mocked classifier and
//! translation services and check what the session ends up rendering.

use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use saif_scan::{
    classifier::ScanContext,
    config::Config,
    error::FailureKind,
    i18n::{InstallOutcome, Language, LanguageRegistry, StringKey},
    report::Platform,
    scanner::Scanner,
    session::{ScanCompletion, ScanInput},
    verdict::Verdict,
};

// ==================== Test Helpers ====================

const CLASSIFY_PATH: &str = "/models/gemini-test:generateContent";
const TRANSLATE_PATH: &str = "/v1/translate";

/// Create a test config pointing both services at one mock server
fn create_test_config(server_uri: &str) -> Config {
    Config {
        gemini_api_key: "test-gemini-key".to_string(),
        gemini_model: "gemini-test".to_string(),
        gemini_api_url: server_uri.to_string(),
        classify_timeout_secs: 5,
        lingo_api_key: Some("test-lingo-key".to_string()),
        lingo_api_url: format!("{}{}", server_uri, TRANSLATE_PATH),
        translate_timeout_secs: 5,
        report_number: "8004888".to_string(),
    }
}

/// Wrap the classifier's JSON text in a generateContent envelope
fn create_gemini_response(verdict: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{ "text": verdict.to_string() }]
                },
                "finishReason": "STOP"
            }
        ]
    })
}

fn emirates_id_scam() -> serde_json::Value {
    serde_json::json!({
        "verdict": "SCAM",
        "risk_score": 87,
        "short_sms_draft": "Suspected Scam: Fake Emirates ID suspension link http://uae-pass-verify.net",
        "detailed_analysis": [
            "Unofficial domain impersonating UAE Pass",
            "Urgent threat of account suspension"
        ],
        "evidence_extracted": {
            "phone_numbers": [],
            "urls": ["http://uae-pass-verify.net"],
            "keywords": ["Emirates ID", "suspended"]
        }
    })
}

async fn mount_classifier(server: &MockServer, verdict: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .and(header("x-goog-api-key", "test-gemini-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_gemini_response(verdict)))
        .expect(1)
        .mount(server)
        .await;
}

// ==================== Scan Scenarios ====================

#[tokio::test]
async fn test_emirates_id_text_is_flagged_with_report() {
    let mock_server = MockServer::start().await;
    mount_classifier(&mock_server, emirates_id_scam()).await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");

    let completion = scanner
        .scan(
            ScanInput::Text(
                "Your Emirates ID will be suspended, click http://uae-pass-verify.net".to_string(),
            ),
            ScanContext::General,
        )
        .await;
    assert_eq!(completion, Some(ScanCompletion::Rendered));

    let session = scanner.session();
    let session = session.lock().await;
    let result = session.result().expect("Result should be rendered");

    assert_eq!(result.verdict(), Verdict::Scam);
    assert_eq!(result.risk_score(), Some(87));
    assert_eq!(result.analysis_points().len(), 2);
    assert_eq!(result.extracted_evidence().urls, vec!["http://uae-pass-verify.net"]);

    let draft = session.report_draft().expect("Scam should offer a report");
    assert!(draft.chars().count() <= 140);

    let uri = session
        .report_sms_uri("8004888", Platform::Apple)
        .expect("Scam should offer an SMS link");
    assert!(uri.starts_with("sms:8004888&body=Suspected%20Scam%3A"));
    assert!(session.error_message().is_none());
}

#[tokio::test]
async fn test_rate_limited_classifier_shows_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("Resource has been exhausted"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");
    let input = ScanInput::Text("Congratulations, you won a prize".to_string());

    let completion = scanner.scan(input.clone(), ScanContext::General).await;

    assert_eq!(completion, Some(ScanCompletion::Failed(FailureKind::Status)));
    let session = scanner.session();
    let session = session.lock().await;
    assert_eq!(
        session.error_message(),
        Some("Our systems are busy right now. Please try again in a moment.")
    );
    assert!(session.result().is_none());
    assert!(session.report_draft().is_none());
    assert!(session.can_scan(&input));
}

#[tokio::test]
async fn test_safe_message_offers_no_report() {
    let mock_server = MockServer::start().await;
    mount_classifier(
        &mock_server,
        serde_json::json!({
            "verdict": "SAFE",
            "risk_score": 4,
            "short_sms_draft": "",
            "detailed_analysis": ["Personal message with no links or requests"]
        }),
    )
    .await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");
    scanner
        .scan(
            ScanInput::Text("See you at dinner tonight".to_string()),
            ScanContext::General,
        )
        .await;

    let session = scanner.session();
    let session = session.lock().await;
    assert_eq!(session.result().map(|r| r.verdict()), Some(Verdict::Safe));
    assert!(session.report_draft().is_none());
    assert!(session.report_sms_uri("8004888", Platform::Other).is_none());
}

#[tokio::test]
async fn test_screenshot_scan_sends_inline_image() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let image_path = temp_dir.path().join("parcel.png");
    std::fs::write(&image_path, b"\x89PNG\r\n\x1a\nfake").expect("Failed to write image");

    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [{}, { "inlineData": { "mimeType": "image/png" } }] }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_gemini_response(serde_json::json!({
                "verdict": "SCAM",
                "risk_score": "92%",
                "short_sms_draft": "Suspected Scam: fake Aramex customs fee",
                "detailed_analysis": ["Customs fee requested by SMS"]
            }))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");
    let completion = scanner
        .scan(ScanInput::Image(image_path), ScanContext::Delivery)
        .await;

    assert_eq!(completion, Some(ScanCompletion::Rendered));
    let session = scanner.session();
    assert_eq!(
        session.lock().await.result().and_then(|r| r.risk_score()),
        Some(92)
    );
}

#[tokio::test]
async fn test_slow_classifier_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(create_gemini_response(emirates_id_scam()))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri());
    config.classify_timeout_secs = 1;
    let scanner = Scanner::new(config, Language::English).expect("Should build scanner");

    let completion = scanner
        .scan(ScanInput::Text("hello".to_string()), ScanContext::General)
        .await;

    assert_eq!(completion, Some(ScanCompletion::Failed(FailureKind::Transport)));
}

// ==================== Language Scenarios ====================

#[tokio::test]
async fn test_arabic_falls_back_to_bundled_table_on_short_batch() {
    let mock_server = MockServer::start().await;

    // One string short of a full batch
    let mut values: Vec<String> = Language::English
        .static_table()
        .values()
        .map(|v| format!("AR {}", v))
        .collect();
    values.pop();

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .and(header("Authorization", "Bearer test-lingo-key"))
        .and(body_partial_json(serde_json::json!({"source": "en", "target": "ar"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "translations": values })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");
    let handle = scanner
        .select_language(Language::Arabic)
        .await
        .expect("Arabic should request a batch");

    assert_eq!(handle.await.unwrap(), InstallOutcome::KeptFallback);

    let session = scanner.session();
    let session = session.lock().await;
    let bundled = LanguageRegistry::get()
        .table_by_code("ar")
        .expect("Arabic is bundled");

    assert_eq!(session.strings(), bundled);
    for &key in StringKey::ALL {
        assert!(
            !session.t(key).trim().is_empty(),
            "{} should not render blank",
            key
        );
    }
    assert!(session.language().is_rtl());
    assert!(!session.is_translating());
}

#[tokio::test]
async fn test_translation_service_down_keeps_bundled_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");
    let handle = scanner.select_language(Language::Urdu).await.unwrap();

    assert_eq!(handle.await.unwrap(), InstallOutcome::KeptFallback);
    let session = scanner.session();
    assert_eq!(
        session.lock().await.strings(),
        Language::Urdu.static_table()
    );
}

#[tokio::test]
async fn test_scan_result_in_selected_language_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let scanner = Scanner::new(create_test_config(&mock_server.uri()), Language::English)
        .expect("Should build scanner");
    scanner
        .select_language(Language::Tagalog)
        .await
        .unwrap()
        .await
        .unwrap();

    scanner
        .scan(ScanInput::Text("Libreng load!".to_string()), ScanContext::General)
        .await;

    let session = scanner.session();
    assert_eq!(
        session.lock().await.error_message(),
        Some("Abala ang aming sistema ngayon. Pakisubukang muli mamaya.")
    );
}
