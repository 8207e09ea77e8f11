//! SpamSense CLI
//!
//! Usage:
//!   spamsense --text "transcript here"       # One-shot text classification
//!   spamsense --number "+1 809 555 1234"     # One-shot phone analysis
//!   spamsense --stdio                        # MCP server over stdin/stdout
//!   spamsense                                # MCP server over HTTP
//!   spamsense --text "..." --json            # JSON output

use clap::Parser;
use colored::Colorize;

use spamsense::config::Config;
use spamsense::core::{
    run_server, run_stdio, ClassifyInput, PhoneAnalyzer, SpamsenseServer, TextClassifier,
};
use spamsense::types::{CallDirection, PhoneAnalysis, RiskLevel, SpamLabel, TextAnalysis};
use spamsense::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "spamsense",
    version = VERSION,
    about = "SpamSense - heuristic spam/scam analysis for calls and phone numbers",
    long_about = "SpamSense classifies call/message transcripts and phone numbers as\n\
                  spam/scam-likely using deterministic pattern heuristics.\n\n\
                  Modes:\n  \
                  --text    One-shot text intent classification\n  \
                  --number  One-shot phone number risk analysis\n  \
                  --stdio   MCP server on stdin/stdout\n  \
                  (default) MCP server over HTTP\n\n\
                  Tools exposed over MCP:\n  \
                  detect_call_intent     - Text spam/scam classification\n  \
                  spamsense_check_phone  - Phone number risk analysis"
)]
struct Args {
    /// Text to classify (one-shot mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Caller ID to factor into text classification
    #[arg(long)]
    caller_id: Option<String>,

    /// Call direction
    #[arg(long, value_parser = ["inbound", "outbound"])]
    direction: Option<String>,

    /// Locale hint like en-US
    #[arg(long)]
    locale: Option<String>,

    /// Phone number to analyze (one-shot mode)
    #[arg(short, long)]
    number: Option<String>,

    /// Run the MCP server on stdin/stdout instead of HTTP
    #[arg(long)]
    stdio: bool,

    /// Bind host for the HTTP server (overrides SPAMSENSE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port for the HTTP server (overrides SPAMSENSE_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the full signal breakdown
    #[arg(long)]
    verbose: bool,

    /// Dump reasons and matched signals to stderr (same output as the
    /// tool-level debug flag)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Fatal:".red().bold(), e);
            std::process::exit(1);
        }
    };
    config.merge_with_cli(args.host.as_deref(), args.port);

    if let Some(ref text) = args.text {
        run_text(text, &args);
    } else if let Some(ref number) = args.number {
        run_phone(number, &config, &args);
    } else if args.stdio {
        if let Err(e) = run_stdio(build_server(&config)).await {
            eprintln!("{} {}", "Fatal:".red().bold(), e);
            std::process::exit(1);
        }
    } else if let Err(e) = run_server(&config.addr(), build_server(&config)).await {
        eprintln!("{} {}", "Fatal:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Server with the operator-extended deny-list applied
fn build_server(config: &Config) -> SpamsenseServer {
    let mut phone = PhoneAnalyzer::new();
    phone.extend_blacklist(config.blacklist.iter().map(String::as_str));
    SpamsenseServer::with_phone_analyzer(phone)
}

/// One-shot text classification
fn run_text(text: &str, args: &Args) {
    let classifier = TextClassifier::new();
    let input = ClassifyInput {
        text: text.to_string(),
        caller_id: args.caller_id.clone(),
        direction: args.direction.as_deref().map(|d| match d {
            "inbound" => CallDirection::Inbound,
            _ => CallDirection::Outbound,
        }),
        locale: args.locale.clone(),
    };
    let analysis = classifier.classify(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis).unwrap());
        return;
    }

    print_text_summary(&analysis);
    if args.verbose {
        print_verbose_text(&analysis);
    }
    if args.debug {
        eprintln!("{} {}", "Reasons:".cyan(), analysis.reasons.join("; "));
        let signals: Vec<String> = analysis
            .matches
            .iter()
            .map(|m| format!("{}:{}[{}]", m.category, m.pattern, m.weight))
            .collect();
        eprintln!("{} {}", "Matched Signals:".cyan(), signals.join(", "));
    }
}

/// One-shot phone analysis (the configured deny-list applies here too)
fn run_phone(number: &str, config: &Config, args: &Args) {
    let mut analyzer = PhoneAnalyzer::new();
    analyzer.extend_blacklist(config.blacklist.iter().map(String::as_str));
    let analysis = analyzer.analyze(number);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis).unwrap());
        return;
    }

    print_phone_summary(&analysis);
    if args.verbose {
        print_verbose_phone(&analysis);
    }
}

fn print_text_summary(analysis: &TextAnalysis) {
    let verdict = match analysis.label {
        SpamLabel::Spam => format!("{} spam", analysis.label.emoji()).red().bold(),
        SpamLabel::LikelySpam => format!("{} likely_spam", analysis.label.emoji())
            .yellow()
            .bold(),
        SpamLabel::NotSpam => format!("{} not_spam", analysis.label.emoji()).green().bold(),
    };
    println!(
        "{} {}",
        verdict,
        format!("(confidence: {:.0}%)", analysis.confidence * 100.0).bright_black()
    );
    println!("  score:  {:.2}", analysis.score);
    println!("  intent: {}", analysis.intent);
    if !analysis.reasons.is_empty() {
        println!("  reasons: {}", analysis.reasons.join("; "));
    }
}

fn print_verbose_text(analysis: &TextAnalysis) {
    println!("  matches:");
    for m in &analysis.matches {
        println!("    {:<8} {:>4}  {}", m.category.to_string(), m.weight, m.reason);
    }
    println!("  length: {}", analysis.meta.length);
}

fn print_phone_summary(analysis: &PhoneAnalysis) {
    let risk = format!("{} {} risk", analysis.risk_level.emoji(), analysis.risk_level);
    let risk = match analysis.risk_level {
        RiskLevel::High => risk.red().bold(),
        RiskLevel::Medium => risk.yellow().bold(),
        RiskLevel::Low => risk.green().bold(),
    };
    println!(
        "{} {}",
        risk,
        format!("(score: {})", analysis.spam_score).bright_black()
    );
    if let Some(ref e164) = analysis.normalized.e164 {
        println!("  e164:      {}", e164);
    }
    println!("  digits:    {}", analysis.normalized.digits);
    if let Some(ref area) = analysis.normalized.area_code {
        println!("  area code: {}", area);
    }
}

fn print_verbose_phone(analysis: &PhoneAnalysis) {
    let s = &analysis.signals;
    println!("  signals:");
    for (name, fired) in [
        ("invalid_length", s.invalid_length),
        ("repeated_digits", s.repeated_digits),
        ("sequential_pattern", s.sequential_pattern),
        ("contains_0000", s.contains_0000),
        ("contains_555", s.contains_555),
        ("suspicious_area_code", s.suspicious_area_code),
        ("toll_free", s.toll_free),
        ("blacklisted", s.blacklisted),
    ] {
        println!("    {:<21} {}", name, fired);
    }
}
