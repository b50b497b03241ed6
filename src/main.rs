//! Testimony CLI
//!
//! Usage:
//!   testimony --annotation doc.json          # Score an annotation dump
//!   testimony --annotation -                 # Read the dump from stdin
//!   testimony --annotation doc.json --json   # JSON output
//!   testimony --annotation doc.json --out report.txt
//!   testimony --serve                        # HTTP API server
//!
//! The annotation dump is the JSON form of the external annotator's output
//! (tokens, entities, sentence boundaries); this binary never tags or parses
//! text itself.

use clap::Parser;
use std::fs::File;
use std::io::{self, Read};

use testimony::core::{run_server, AnnotatorHandle, SuspicionScorer};
use testimony::types::{Annotation, Verdict, VerdictResult};
use testimony::{MAX_RAW_SCORE, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "testimony",
    version = VERSION,
    about = "Linguistic suspicion analysis for witness statements",
    long_about = "Testimony scores a witness statement's annotation against eight\n\
                  linguistic deception indicators and maps the result onto a\n\
                  four-level suspicion verdict.\n\n\
                  The linguistic annotation (POS tags, dependency parse, lemmas,\n\
                  entities, sentences) is produced by an external annotator and\n\
                  supplied as JSON.\n\n\
                  Verdicts:\n  \
                  NO SUSPICION DETECTED  - normalized score below 11\n  \
                  SLIGHTLY SUSPICIOUS    - 11 to 19\n  \
                  MODERATELY SUSPICIOUS  - 20 to 29\n  \
                  HIGHLY SUSPICIOUS      - 30 and above"
)]
struct Args {
    /// Annotation dump to score (path, or '-' for stdin)
    #[arg(short, long)]
    annotation: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show indicator breakdown
    #[arg(long)]
    verbose: bool,

    /// Also write the two-section plain-text report to this path
    #[arg(long)]
    out: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref source) = args.annotation {
        run_single(source, &args);
    } else {
        eprintln!("Nothing to do: pass --annotation FILE (or '-') or --serve");
        std::process::exit(1);
    }
}

/// Score one annotation dump
fn run_single(source: &str, args: &Args) {
    let annotation = match load_annotation(source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Failed to load annotation: {}", e);
            std::process::exit(1);
        }
    };

    let scorer = SuspicionScorer::new();
    let result = match scorer.evaluate(&annotation) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Scoring failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else if args.verbose {
        print_verbose(&annotation, &result, args.no_color);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }

    if let Some(ref path) = args.out {
        match testimony::core::save_report(&annotation, &result, path) {
            Ok(written) => println!("Report saved to {}", written),
            Err(e) => {
                eprintln!("Failed to save report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Load the annotation dump from a file or stdin
fn load_annotation(source: &str) -> Result<Annotation, testimony::types::AnalysisError> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| testimony::types::AnalysisError::Annotator(e.to_string()))?;
        Annotation::from_json_str(&buffer)
    } else {
        let file = File::open(source)
            .map_err(|e| testimony::types::AnalysisError::Annotator(e.to_string()))?;
        Annotation::from_json_reader(file)
    }
}

/// Print the indicator breakdown box
fn print_verbose(annotation: &Annotation, result: &VerdictResult, no_color: bool) {
    let color = if no_color { "" } else { result.verdict.color_code() };
    let reset = if no_color { "" } else { Verdict::color_reset() };

    println!("{}┌──────────────────────────────────────────────┐{}", color, reset);
    println!(
        "{}│ {}  ({}/{} normalized, raw {}/{}){}",
        color,
        result.verdict,
        result.normalized_score,
        testimony::NORMALIZED_MAX,
        result.raw_score,
        MAX_RAW_SCORE,
        reset
    );
    println!("{}├──────────────────────────────────────────────┤{}", color, reset);
    if result.indicators.is_empty() {
        println!("{}│ No indicators fired{}", color, reset);
    } else {
        println!("{}│ Indicators:{}", color, reset);
        for (i, indicator) in result.indicators.iter().enumerate() {
            println!(
                "{}│   {}. {} (+{}){}",
                color,
                i + 1,
                indicator.description,
                indicator.points,
                reset
            );
        }
    }
    println!("{}├──────────────────────────────────────────────┤{}", color, reset);
    println!(
        "{}│ Tokens: {} | Words: {} | Sentences: {}{}",
        color,
        annotation.len(),
        annotation.word_count(),
        annotation.sentence_count(),
        reset
    );
    if result.short_statement {
        println!("{}│ Note: statement is short, analysis limited{}", color, reset);
    }
    println!("{}└──────────────────────────────────────────────┘{}", color, reset);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!("Testimony v{} - API server", VERSION);
    println!();

    // No linguistic backend ships with this binary: /analyze answers 503
    // until a host registers an annotator; /verdict is always available.
    let annotator = AnnotatorHandle::uninitialized();

    if let Err(e) = run_server(&args.addr, annotator).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
