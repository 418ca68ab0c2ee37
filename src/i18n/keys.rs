//! The closed set of UI string keys.
//!
//! `StringKey::ALL` fixes the canonical order. Translation batches are sent
//! and zipped back in this order, and `TranslationTable` stores its values
//! indexed by it.

use std::fmt;

macro_rules! string_keys {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A key into a `TranslationTable`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StringKey {
            $($variant),+
        }

        impl StringKey {
            /// Every key, in canonical order.
            pub const ALL: &'static [StringKey] = &[$(StringKey::$variant),+];

            /// Number of keys in a complete table.
            pub const COUNT: usize = Self::ALL.len();

            /// The snake_case name used in bundles and logs.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(StringKey::$variant => $name),+
                }
            }

            /// Parse a snake_case key name.
            pub fn from_name(name: &str) -> Option<StringKey> {
                match name {
                    $($name => Some(StringKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

string_keys! {
    AppTitle => "app_title",
    SidebarSubtitle => "sidebar_subtitle",
    TabImage => "tab_image",
    TabText => "tab_text",
    UploadText => "upload_text",
    TextInputPlaceholder => "text_input_placeholder",
    AnalyzeBtn => "analyze_btn",
    Investigating => "investigating",
    ThreatDetected => "threat_detected",
    SafeVerdict => "safe_verdict",
    ErrorHighTraffic => "error_high_traffic",
    PoliceReportLabel => "police_report_label",
    SendSmsBtn => "send_sms_btn",
    CopyBtn => "copy_btn",
    SelectLangLabel => "select_lang_label",
    Disclaimer => "disclaimer",
    NavScanner => "nav_scanner",
    NavMap => "nav_map",
    NavVoice => "nav_voice",
    NavGov => "nav_gov",
    NavDelivery => "nav_delivery",
    NavTraining => "nav_training",
    MapTitle => "map_title",
    VoiceStatus => "voice_status",
    GovStatus => "gov_status",
    DeliveryTitle => "delivery_title",
    TrainingTitle => "training_title",
    TacticalAnalysis => "tactical_analysis",
    RiskScoreLabel => "risk_score_label",
    EvidencePhones => "evidence_phones",
    EvidenceUrls => "evidence_urls",
    EvidenceKeywords => "evidence_keywords",
    LandingTitle => "landing_title",
    LandingSubtitle => "landing_subtitle",
    LandingCta => "landing_cta",
    LiveStat1 => "live_stat_1",
    LiveStat2 => "live_stat_2",
    PoliceSection => "police_section",
    CallPolice => "call_police",
    EmailPolice => "email_police",
}

impl StringKey {
    /// Position of this key in `StringKey::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
