//! Scan one message or screenshot from the command line.
//!
//! Usage:
//!   saif-scan --text "Your Emirates ID is blocked, pay at uae-pass-verify.net"
//!   saif-scan --image screenshot.png --lang ar
//!   saif-scan --text "Parcel held, pay 5 AED" --delivery --ios
//!
//! Required environment variables:
//! - GEMINI_API_KEY
//!
//! Optional:
//! - LINGO_API_KEY (without it only the bundled tables are used)
//! - GEMINI_MODEL, GEMINI_API_URL, CLASSIFY_TIMEOUT_SECS
//! - LINGO_API_URL, TRANSLATE_TIMEOUT_SECS
//! - REPORT_NUMBER (defaults to 8004888)

use anyhow::{bail, Context, Result};
use saif_scan::classifier::ScanContext;
use saif_scan::config::Config;
use saif_scan::i18n::{Language, StringKey};
use saif_scan::report::{mailto_uri, tel_uri, Platform, POLICE_EMAIL, POLICE_PHONE};
use saif_scan::scanner::Scanner;
use saif_scan::session::{ScanCompletion, ScanInput, Session, View};
use saif_scan::verdict::Verdict;
use std::path::PathBuf;
use tracing::info;

struct Args {
    input: ScanInput,
    language: Language,
    context: ScanContext,
    platform: Platform,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut input = ScanInput::Empty;
        let mut language = Language::source();
        let mut context = ScanContext::General;
        let mut platform = Platform::Other;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--text" => {
                    let text = args.next().context("--text needs a value")?;
                    input = ScanInput::Text(text);
                }
                "--image" => {
                    let path = args.next().context("--image needs a path")?;
                    input = ScanInput::Image(PathBuf::from(path));
                }
                "--lang" => {
                    let code = args.next().context("--lang needs a language code")?;
                    language = Language::from_code(&code)?;
                }
                "--delivery" => context = ScanContext::Delivery,
                "--ios" => platform = Platform::Apple,
                other => bail!("Unknown argument: {}", other),
            }
        }

        if !input.is_present() {
            bail!("Nothing to scan: pass --text <message> or --image <path>");
        }

        Ok(Self {
            input,
            language,
            context,
            platform,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("saif_scan=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    let config = Config::from_env()?;
    let report_number = config.report_number.clone();

    info!("Starting scan in {}", args.language.name());

    let scanner = Scanner::new(config, Language::source())?;

    // Wait for the dynamic batch so the output uses it when available
    if let Some(handle) = scanner.select_language(args.language).await {
        let outcome = handle.await.context("Translation task panicked")?;
        info!("Translation outcome: {:?}", outcome);
    }

    scanner.session().lock().await.navigate(match args.context {
        ScanContext::General => View::Scanner,
        ScanContext::Delivery => View::Delivery,
    });

    let completion = scanner.scan(args.input, args.context).await;

    let session = scanner.session();
    let session = session.lock().await;
    println!("{}", session.t(StringKey::AppTitle));
    println!();

    match completion {
        Some(ScanCompletion::Rendered) => {
            print_result(&session, &report_number, args.platform);
            Ok(())
        }
        _ => {
            eprintln!("{}", session.t(StringKey::ErrorHighTraffic));
            std::process::exit(1);
        }
    }
}

fn print_result(session: &Session, report_number: &str, platform: Platform) {
    let Some(result) = session.result() else {
        return;
    };

    let headline = match result.verdict() {
        Verdict::Scam => session.t(StringKey::ThreatDetected),
        Verdict::Safe => session.t(StringKey::SafeVerdict),
        Verdict::Unknown => "?",
    };
    println!("{} [{}]", headline, result.verdict());

    if let Some(score) = result.risk_score() {
        println!("{}: {}/100", session.t(StringKey::RiskScoreLabel), score);
    }

    if !result.analysis_points().is_empty() {
        println!();
        println!("{}:", session.t(StringKey::TacticalAnalysis));
        for point in result.analysis_points() {
            println!("  - {}", point);
        }
    }

    let evidence = result.extracted_evidence();
    if !evidence.is_empty() {
        println!();
        for (label, values) in [
            (StringKey::EvidencePhones, &evidence.phone_numbers),
            (StringKey::EvidenceUrls, &evidence.urls),
            (StringKey::EvidenceKeywords, &evidence.keywords),
        ] {
            if !values.is_empty() {
                println!("{}: {}", session.t(label), values.join(", "));
            }
        }
    }

    if let (Some(draft), Some(uri)) = (
        session.report_draft(),
        session.report_sms_uri(report_number, platform),
    ) {
        println!();
        println!("{}:", session.t(StringKey::PoliceReportLabel));
        println!("  {}", draft);
        println!("{}: {}", session.t(StringKey::SendSmsBtn), uri);
    }

    println!();
    println!("{}:", session.t(StringKey::PoliceSection));
    println!("  {}: {}", session.t(StringKey::CallPolice), tel_uri(POLICE_PHONE));
    println!(
        "  {}: {}",
        session.t(StringKey::EmailPolice),
        mailto_uri(POLICE_EMAIL, None)
    );

    println!();
    println!("{}", session.t(StringKey::Disclaimer));
}
