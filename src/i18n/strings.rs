//! Statically bundled UI strings for every supported language.
//!
//! These tables are installed immediately on a language switch and remain
//! the fallback whenever a dynamic translation batch cannot be used. Each
//! slice must cover every `StringKey` exactly once; `registry` tests enforce
//! that.

use super::StringKey;
use super::StringKey::*;

/// Bundled strings for one language, in any key order.
pub type StaticStrings = &'static [(StringKey, &'static str)];

// ==================== English Strings ====================

/// English strings (source language for translation batches)
pub const ENGLISH_STRINGS: StaticStrings = &[
    (AppTitle, "SAIF-AI Scam Shield"),
    (SidebarSubtitle, "UAE Cyber Defense Agent"),
    (TabImage, "Screenshot"),
    (TabText, "Paste Text"),
    (UploadText, "Drop a screenshot of the suspicious message"),
    (TextInputPlaceholder, "Paste the suspicious SMS, WhatsApp or email text here..."),
    (AnalyzeBtn, "Analyze Threat"),
    (Investigating, "Investigating..."),
    (ThreatDetected, "Threat Detected"),
    (SafeVerdict, "Looks Safe"),
    (ErrorHighTraffic, "Our systems are busy right now. Please try again in a moment."),
    (PoliceReportLabel, "Report draft for Al Ameen"),
    (SendSmsBtn, "Send SMS to 8004888"),
    (CopyBtn, "Copy Report"),
    (SelectLangLabel, "Language"),
    (Disclaimer, "AI analysis can be wrong. Never share OTPs, PINs or card details."),
    (NavScanner, "Scanner"),
    (NavMap, "Threat Map"),
    (NavVoice, "Voice Guard"),
    (NavGov, "Gov Services"),
    (NavDelivery, "Delivery Check"),
    (NavTraining, "Training"),
    (MapTitle, "Live Threat Map"),
    (VoiceStatus, "Voice call screening is coming soon"),
    (GovStatus, "Verified government channels"),
    (DeliveryTitle, "Fake Delivery Detector"),
    (TrainingTitle, "Scam Awareness Training"),
    (TacticalAnalysis, "Tactical Analysis"),
    (RiskScoreLabel, "Risk Score"),
    (EvidencePhones, "Phone Numbers"),
    (EvidenceUrls, "Links"),
    (EvidenceKeywords, "Keywords"),
    (LandingTitle, "Stop scams before they reach you"),
    (LandingSubtitle, "Check any suspicious message in seconds with AI built for UAE residents."),
    (LandingCta, "Start Scanning"),
    (LiveStat1, "Scams blocked today"),
    (LiveStat2, "Active threat reports"),
    (PoliceSection, "Contact the Police"),
    (CallPolice, "Call 901"),
    (EmailPolice, "Email Dubai Police"),
];

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: StaticStrings = &[
    (AppTitle, "سيف - درع مكافحة الاحتيال"),
    (SidebarSubtitle, "وكيل الدفاع السيبراني في الإمارات"),
    (TabImage, "لقطة شاشة"),
    (TabText, "لصق النص"),
    (UploadText, "أرفق لقطة شاشة للرسالة المشبوهة"),
    (TextInputPlaceholder, "الصق نص الرسالة القصيرة أو واتساب أو البريد الإلكتروني المشبوه هنا..."),
    (AnalyzeBtn, "تحليل التهديد"),
    (Investigating, "جارٍ التحقيق..."),
    (ThreatDetected, "تم اكتشاف تهديد"),
    (SafeVerdict, "تبدو آمنة"),
    (ErrorHighTraffic, "أنظمتنا مشغولة حالياً. يرجى المحاولة مرة أخرى بعد قليل."),
    (PoliceReportLabel, "مسودة بلاغ إلى الأمين"),
    (SendSmsBtn, "أرسل رسالة إلى 8004888"),
    (CopyBtn, "نسخ البلاغ"),
    (SelectLangLabel, "اللغة"),
    (Disclaimer, "قد يخطئ تحليل الذكاء الاصطناعي. لا تشارك أبداً رموز التحقق أو الأرقام السرية أو بيانات البطاقة."),
    (NavScanner, "الفاحص"),
    (NavMap, "خريطة التهديدات"),
    (NavVoice, "الحماية الصوتية"),
    (NavGov, "الخدمات الحكومية"),
    (NavDelivery, "فحص التوصيل"),
    (NavTraining, "التدريب"),
    (MapTitle, "خريطة التهديدات المباشرة"),
    (VoiceStatus, "فحص المكالمات الصوتية قريباً"),
    (GovStatus, "قنوات حكومية موثقة"),
    (DeliveryTitle, "كاشف التوصيل المزيف"),
    (TrainingTitle, "التوعية بالاحتيال"),
    (TacticalAnalysis, "التحليل التكتيكي"),
    (RiskScoreLabel, "درجة الخطورة"),
    (EvidencePhones, "أرقام الهواتف"),
    (EvidenceUrls, "الروابط"),
    (EvidenceKeywords, "الكلمات المفتاحية"),
    (LandingTitle, "أوقف الاحتيال قبل أن يصل إليك"),
    (LandingSubtitle, "افحص أي رسالة مشبوهة خلال ثوانٍ بذكاء اصطناعي مصمم لسكان الإمارات."),
    (LandingCta, "ابدأ الفحص"),
    (LiveStat1, "عمليات احتيال تم صدها اليوم"),
    (LiveStat2, "بلاغات تهديد نشطة"),
    (PoliceSection, "تواصل مع الشرطة"),
    (CallPolice, "اتصل بـ 901"),
    (EmailPolice, "راسل شرطة دبي"),
];

// ==================== Hindi Strings ====================

pub const HINDI_STRINGS: StaticStrings = &[
    (AppTitle, "सैफ-एआई स्कैम शील्ड"),
    (SidebarSubtitle, "यूएई साइबर रक्षा एजेंट"),
    (TabImage, "स्क्रीनशॉट"),
    (TabText, "टेक्स्ट पेस्ट करें"),
    (UploadText, "संदिग्ध संदेश का स्क्रीनशॉट डालें"),
    (TextInputPlaceholder, "संदिग्ध SMS, WhatsApp या ईमेल का टेक्स्ट यहाँ पेस्ट करें..."),
    (AnalyzeBtn, "खतरे का विश्लेषण करें"),
    (Investigating, "जाँच जारी है..."),
    (ThreatDetected, "खतरा पाया गया"),
    (SafeVerdict, "सुरक्षित लगता है"),
    (ErrorHighTraffic, "हमारे सिस्टम अभी व्यस्त हैं। कृपया थोड़ी देर बाद फिर से प्रयास करें।"),
    (PoliceReportLabel, "अल अमीन के लिए रिपोर्ट का मसौदा"),
    (SendSmsBtn, "8004888 पर SMS भेजें"),
    (CopyBtn, "रिपोर्ट कॉपी करें"),
    (SelectLangLabel, "भाषा"),
    (Disclaimer, "एआई विश्लेषण गलत हो सकता है। कभी भी OTP, PIN या कार्ड विवरण साझा न करें।"),
    (NavScanner, "स्कैनर"),
    (NavMap, "खतरा मानचित्र"),
    (NavVoice, "वॉइस गार्ड"),
    (NavGov, "सरकारी सेवाएँ"),
    (NavDelivery, "डिलीवरी जाँच"),
    (NavTraining, "प्रशिक्षण"),
    (MapTitle, "लाइव खतरा मानचित्र"),
    (VoiceStatus, "वॉइस कॉल स्क्रीनिंग जल्द आ रही है"),
    (GovStatus, "सत्यापित सरकारी चैनल"),
    (DeliveryTitle, "नकली डिलीवरी डिटेक्टर"),
    (TrainingTitle, "धोखाधड़ी जागरूकता प्रशिक्षण"),
    (TacticalAnalysis, "सामरिक विश्लेषण"),
    (RiskScoreLabel, "जोखिम स्कोर"),
    (EvidencePhones, "फ़ोन नंबर"),
    (EvidenceUrls, "लिंक"),
    (EvidenceKeywords, "मुख्य शब्द"),
    (LandingTitle, "धोखाधड़ी को आप तक पहुँचने से पहले रोकें"),
    (LandingSubtitle, "यूएई निवासियों के लिए बने एआई से किसी भी संदिग्ध संदेश की सेकंडों में जाँच करें।"),
    (LandingCta, "स्कैन शुरू करें"),
    (LiveStat1, "आज रोके गए घोटाले"),
    (LiveStat2, "सक्रिय खतरा रिपोर्ट"),
    (PoliceSection, "पुलिस से संपर्क करें"),
    (CallPolice, "901 पर कॉल करें"),
    (EmailPolice, "दुबई पुलिस को ईमेल करें"),
];

// ==================== Urdu Strings ====================

pub const URDU_STRINGS: StaticStrings = &[
    (AppTitle, "سیف اے آئی اسکیم شیلڈ"),
    (SidebarSubtitle, "متحدہ عرب امارات سائبر دفاعی ایجنٹ"),
    (TabImage, "اسکرین شاٹ"),
    (TabText, "متن پیسٹ کریں"),
    (UploadText, "مشکوک پیغام کا اسکرین شاٹ شامل کریں"),
    (TextInputPlaceholder, "مشکوک SMS، WhatsApp یا ای میل کا متن یہاں پیسٹ کریں..."),
    (AnalyzeBtn, "خطرے کا تجزیہ کریں"),
    (Investigating, "تحقیقات جاری ہیں..."),
    (ThreatDetected, "خطرہ پایا گیا"),
    (SafeVerdict, "محفوظ لگتا ہے"),
    (ErrorHighTraffic, "ہمارے سسٹم اس وقت مصروف ہیں۔ براہ کرم تھوڑی دیر بعد دوبارہ کوشش کریں۔"),
    (PoliceReportLabel, "الامین کے لیے رپورٹ کا مسودہ"),
    (SendSmsBtn, "8004888 پر SMS بھیجیں"),
    (CopyBtn, "رپورٹ کاپی کریں"),
    (SelectLangLabel, "زبان"),
    (Disclaimer, "اے آئی کا تجزیہ غلط ہو سکتا ہے۔ کبھی بھی OTP، PIN یا کارڈ کی تفصیلات شیئر نہ کریں۔"),
    (NavScanner, "اسکینر"),
    (NavMap, "خطرے کا نقشہ"),
    (NavVoice, "وائس گارڈ"),
    (NavGov, "سرکاری خدمات"),
    (NavDelivery, "ڈیلیوری جانچ"),
    (NavTraining, "تربیت"),
    (MapTitle, "براہ راست خطرے کا نقشہ"),
    (VoiceStatus, "وائس کال اسکریننگ جلد آ رہی ہے"),
    (GovStatus, "تصدیق شدہ سرکاری چینلز"),
    (DeliveryTitle, "جعلی ڈیلیوری کا پتہ لگانے والا"),
    (TrainingTitle, "دھوکہ دہی سے آگاہی کی تربیت"),
    (TacticalAnalysis, "حکمت عملی تجزیہ"),
    (RiskScoreLabel, "خطرے کا اسکور"),
    (EvidencePhones, "فون نمبرز"),
    (EvidenceUrls, "لنکس"),
    (EvidenceKeywords, "کلیدی الفاظ"),
    (LandingTitle, "دھوکہ دہی کو آپ تک پہنچنے سے پہلے روکیں"),
    (LandingSubtitle, "متحدہ عرب امارات کے رہائشیوں کے لیے بنے اے آئی سے کسی بھی مشکوک پیغام کو سیکنڈوں میں جانچیں۔"),
    (LandingCta, "اسکیننگ شروع کریں"),
    (LiveStat1, "آج روکے گئے فراڈ"),
    (LiveStat2, "فعال خطرے کی رپورٹس"),
    (PoliceSection, "پولیس سے رابطہ کریں"),
    (CallPolice, "901 پر کال کریں"),
    (EmailPolice, "دبئی پولیس کو ای میل کریں"),
];

// ==================== Tagalog Strings ====================

pub const TAGALOG_STRINGS: StaticStrings = &[
    (AppTitle, "SAIF-AI Scam Shield"),
    (SidebarSubtitle, "Ahente ng Cyber Depensa ng UAE"),
    (TabImage, "Screenshot"),
    (TabText, "I-paste ang Teksto"),
    (UploadText, "Mag-upload ng screenshot ng kahina-hinalang mensahe"),
    (TextInputPlaceholder, "I-paste dito ang kahina-hinalang SMS, WhatsApp o email..."),
    (AnalyzeBtn, "Suriin ang Banta"),
    (Investigating, "Sinisiyasat..."),
    (ThreatDetected, "May Natukoy na Banta"),
    (SafeVerdict, "Mukhang Ligtas"),
    (ErrorHighTraffic, "Abala ang aming sistema ngayon. Pakisubukang muli mamaya."),
    (PoliceReportLabel, "Draft ng ulat para sa Al Ameen"),
    (SendSmsBtn, "Mag-SMS sa 8004888"),
    (CopyBtn, "Kopyahin ang Ulat"),
    (SelectLangLabel, "Wika"),
    (Disclaimer, "Maaaring magkamali ang AI. Huwag kailanman ibahagi ang OTP, PIN o detalye ng card."),
    (NavScanner, "Scanner"),
    (NavMap, "Mapa ng Banta"),
    (NavVoice, "Voice Guard"),
    (NavGov, "Serbisyo ng Gobyerno"),
    (NavDelivery, "Suri sa Delivery"),
    (NavTraining, "Pagsasanay"),
    (MapTitle, "Live na Mapa ng Banta"),
    (VoiceStatus, "Malapit na ang pagsusuri ng tawag"),
    (GovStatus, "Beripikadong mga channel ng gobyerno"),
    (DeliveryTitle, "Detektor ng Pekeng Delivery"),
    (TrainingTitle, "Pagsasanay Laban sa Scam"),
    (TacticalAnalysis, "Taktikal na Pagsusuri"),
    (RiskScoreLabel, "Antas ng Panganib"),
    (EvidencePhones, "Mga Numero ng Telepono"),
    (EvidenceUrls, "Mga Link"),
    (EvidenceKeywords, "Mga Keyword"),
    (LandingTitle, "Pigilan ang scam bago ka maabot"),
    (LandingSubtitle, "Suriin ang anumang kahina-hinalang mensahe sa loob ng ilang segundo gamit ang AI para sa mga residente ng UAE."),
    (LandingCta, "Magsimulang Mag-scan"),
    (LiveStat1, "Mga scam na napigilan ngayon"),
    (LiveStat2, "Aktibong ulat ng banta"),
    (PoliceSection, "Makipag-ugnayan sa Pulis"),
    (CallPolice, "Tumawag sa 901"),
    (EmailPolice, "Mag-email sa Dubai Police"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationTable;

    const ALL_BUNDLES: &[(&str, StaticStrings)] = &[
        ("English", ENGLISH_STRINGS),
        ("Arabic", ARABIC_STRINGS),
        ("Hindi", HINDI_STRINGS),
        ("Urdu", URDU_STRINGS),
        ("Tagalog", TAGALOG_STRINGS),
    ];

    #[test]
    fn test_every_bundle_is_complete() {
        for (name, bundle) in ALL_BUNDLES {
            let result = TranslationTable::from_pairs(bundle.iter().copied());
            assert!(result.is_ok(), "{} bundle is invalid: {:?}", name, result.err());
        }
    }

    #[test]
    fn test_every_bundle_has_same_size_as_source() {
        for (name, bundle) in ALL_BUNDLES {
            assert_eq!(bundle.len(), ENGLISH_STRINGS.len(), "{} bundle size differs", name);
        }
    }

    #[test]
    fn test_report_number_survives_in_every_bundle() {
        for (name, bundle) in ALL_BUNDLES {
            let send = bundle
                .iter()
                .find(|(k, _)| *k == SendSmsBtn)
                .map(|(_, v)| *v)
                .unwrap();
            assert!(send.contains("8004888"), "{} send button lost the number", name);
        }
    }

    #[test]
    fn test_translated_bundles_differ_from_english() {
        for (name, bundle) in &ALL_BUNDLES[1..] {
            let error = bundle
                .iter()
                .find(|(k, _)| *k == ErrorHighTraffic)
                .map(|(_, v)| *v)
                .unwrap();
            assert_ne!(
                error,
                "Our systems are busy right now. Please try again in a moment.",
                "{} bundle still carries English text",
                name
            );
        }
    }
}
