use crate::config::Config;
use crate::error::ClassifyError;
use crate::evidence::EncodedImage;
use crate::i18n::Language;
use crate::verdict::{parse_classification, ClassificationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// What kind of evidence is being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Image,
    Text,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanMode::Image => "image",
            ScanMode::Text => "text",
        })
    }
}

/// Bias applied to the classifier's instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanContext {
    #[default]
    General,
    Delivery,
}

impl fmt::Display for ScanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanContext::General => "GENERAL",
            ScanContext::Delivery => "DELIVERY",
        })
    }
}

/// Evidence ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Image(EncodedImage),
    Text(String),
}

/// One scan action's worth of input for the classifier
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    pub evidence: Evidence,
    pub target_language: Language,
    pub context: ScanContext,
}

impl ClassificationRequest {
    pub fn mode(&self) -> ScanMode {
        match self.evidence {
            Evidence::Image(_) => ScanMode::Image,
            Evidence::Text(_) => ScanMode::Text,
        }
    }

    pub fn mime_type(&self) -> &str {
        match &self.evidence {
            Evidence::Image(image) => image.mime_type(),
            Evidence::Text(_) => "text/plain",
        }
    }
}

// ==================== Wire Types ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ==================== Prompt Construction ====================

const PERSONA_INSTRUCTION: &str = r#"You are "Saif-AI," an elite Cyber Defense Agent for the UAE.
Your strict purpose is to detect phishing, scams, and malicious intent targeting UAE residents.
You are concise, professional, and authoritative."#;

const DELIVERY_INSTRUCTION: &str = r#"SPECIAL FOCUS: DETECT FAKE DELIVERY SCAMS.
Look for: Fake Emirates Post, Aramex, DHL messages.
Keywords: "Delivery suspended", "Address update", "Small fee", "Warehouse", "Customs fee".
Check URLs carefully for typos (e.g. emirates-post.net instead of emiratespost.ae)."#;

/// Build the system instruction for a scan context
pub fn build_system_instruction(context: ScanContext) -> String {
    match context {
        ScanContext::General => PERSONA_INSTRUCTION.to_string(),
        ScanContext::Delivery => format!("{}\n\n{}", PERSONA_INSTRUCTION, DELIVERY_INSTRUCTION),
    }
}

/// Build the user prompt describing the task and the required output shape
pub fn build_prompt(request: &ClassificationRequest, report_number: &str) -> String {
    let input = match &request.evidence {
        Evidence::Text(text) => format!("\"{}\"", text),
        Evidence::Image(_) => "(Image attached)".to_string(),
    };

    format!(
        r#"**TASK:** Analyze this {mode} for cyber threats.
**CONTEXT:** {context} SCAN.
**USER LANGUAGE:** {language} (Output everything in this language)

**INPUT CONTENT:**
{input}

**REQUIRED OUTPUT FORMAT (JSON ONLY):**
You must output a raw JSON object. Do not wrap in markdown code blocks.

Structure:
{{
  "verdict": "SCAM" | "SAFE" | "UNKNOWN",
  "risk_score": 1-100,
  "short_sms_draft": "Write a VERY SHORT (under 140 chars) report for Al Ameen ({number}). Example: 'Suspected Scam: [Type] from [Number/Sender]. Content: [Brief Content].'",
  "detailed_analysis": [
    "Bullet point 1 explaining the threat technicality",
    "Bullet point 2 pointing out specific red flags (e.g. bad grammar, fake URL, urgent tone)"
  ],
  "evidence_extracted": {{
    "phone_numbers": ["..."],
    "urls": ["..."],
    "keywords": ["..."]
  }}
}}"#,
        mode = request.mode(),
        context = request.context,
        language = request.target_language.name(),
        input = input,
        number = report_number,
    )
}

fn build_request_body(request: &ClassificationRequest, report_number: &str) -> GenerateContentRequest {
    let mut parts = vec![Part {
        text: Some(build_prompt(request, report_number)),
        inline_data: None,
    }];

    if let Evidence::Image(image) = &request.evidence {
        parts.push(Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type().to_string(),
                data: image.data().to_string(),
            }),
        });
    }

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: Some(build_system_instruction(request.context)),
                inline_data: None,
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
        },
    }
}

// ==================== Classification ====================

/// Classify one piece of evidence.
///
/// Issues exactly one request and never retries. The client's timeout bounds
/// the round trip.
pub async fn classify(
    client: &reqwest::Client,
    config: &Config,
    request: &ClassificationRequest,
) -> Result<ClassificationResult, ClassifyError> {
    let body = build_request_body(request, &config.report_number);

    info!(
        "Classifying {} evidence ({}, {} context, {} output)",
        request.mode(),
        request.mime_type(),
        request.context,
        request.target_language.name()
    );

    let response = client
        .post(config.classify_endpoint())
        .header("x-goog-api-key", &config.gemini_api_key)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(ClassifyError::from_reqwest)?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        warn!("Classifier returned {}", status);
        return Err(ClassifyError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(ClassifyError::from_reqwest)?;
    let envelope: GenerateContentResponse =
        serde_json::from_slice(&bytes).map_err(ClassifyError::Malformed)?;

    let text = envelope.text().ok_or(ClassifyError::EmptyResponse)?;
    debug!("Classifier returned {} chars of text", text.len());

    let result = parse_classification(&text)?;
    info!(
        "Verdict {} (risk {:?})",
        result.verdict(),
        result.risk_score()
    );
    Ok(result)
}
