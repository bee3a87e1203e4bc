//! Command-line driver for sessionscope.
//!
//! Usage:
//!   cargo run --bin scope -- demo
//!   cargo run --bin scope -- analyze path/to/transcript.txt
//!   cargo run --bin scope -- analyze path/to/transcript.txt --json
//!   cargo run --bin scope -- ask path/to/transcript.txt "Did the client improve?"
//!   cargo run --bin scope -- methods

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sessionscope::schemas::{AnalysisResult, SessionRecord};
use sessionscope::{AnalysisService, Config, assessment};

/// Sample session shipped with the tool so the pipeline can be exercised
/// without any input file or credentials.
const DEMO_TRANSCRIPT: &str = "\
Therapist: How are you feeling today?

Client: I've been feeling better lately. I had a difficult week at work, but I'm starting to \
understand how to handle stress better. I've been practicing the breathing exercises we talked \
about.

Therapist: That's great progress. What specifically helped you feel better?

Client: I think recognizing my patterns helped. When I feel overwhelmed, I now take a step back \
instead of getting anxious. I also talked to my supervisor about my workload, which was scary \
but went well.

Therapist: You mentioned feeling scared. Can you tell me more about that?

Client: I was worried they'd think I wasn't capable. But actually, they were understanding and \
we worked out a better schedule. I feel more confident now.

Therapist: It sounds like you're developing good self-awareness and communication skills. How \
do you feel about the progress you've made?

Client: I'm proud of myself. A few months ago, I would have just suffered in silence. Now I'm \
learning to speak up and take care of myself better.
";

#[derive(Parser)]
#[command(name = "scope")]
#[command(about = "Multi-framework therapy session analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcript file across all seven frameworks
    Analyze {
        /// Path to a plain-text transcript
        file: PathBuf,
        /// Emit the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in demo session through the pipeline
    Demo {
        #[arg(long)]
        json: bool,
    },
    /// Analyze a transcript, then answer a question about the session
    Ask {
        file: PathBuf,
        question: String,
    },
    /// List the assessment methods the multi-method engine applies
    Methods,
}

#[tokio::main]
async fn main() -> Result<()> {
    sessionscope::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sessionscope=info")),
        )
        .init();

    let cli = Cli::parse();
    let service = AnalysisService::new(Config::load_from_env());

    match cli.command {
        Commands::Analyze { file, json } => {
            let transcript = std::fs::read_to_string(&file)
                .with_context(|| format!("read transcript {}", file.display()))?;
            let result = service.analyze_session(&transcript).await?;
            print_result(&result, json)?;
        }
        Commands::Demo { json } => {
            let result = service.analyze_session(DEMO_TRANSCRIPT).await?;
            print_result(&result, json)?;
        }
        Commands::Ask { file, question } => {
            let transcript = std::fs::read_to_string(&file)
                .with_context(|| format!("read transcript {}", file.display()))?;
            let result = service.analyze_session(&transcript).await?;
            let record = SessionRecord {
                transcript,
                timestamp: result.timestamp,
                analysis: result,
            };
            let answer = service.answer_query(&question, &record).await?;
            println!("{}", answer);
        }
        Commands::Methods => {
            for method in &assessment::METHODS {
                println!(
                    "{} ({}) reliability {:.1}",
                    method.display_name, method.method_type, method.reliability
                );
                for strength in method.strengths {
                    println!("  strength:   {}", strength);
                }
                for weakness in method.weaknesses {
                    println!("  limitation: {}", weakness);
                }
            }
        }
    }

    Ok(())
}

fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Session {} ({})", result.session_id, result.timestamp);
    println!();
    println!("Domain scores (adjusted):");
    for (domain, score) in result.domain_scores.iter() {
        let raw = result.raw_domain_scores.get(domain);
        if (raw - score).abs() > f64::EPSILON {
            println!("  {:<24} {:>4.1}  (raw {:.1})", domain.key(), score, raw);
        } else {
            println!("  {:<24} {:>4.1}", domain.key(), score);
        }
    }
    println!();

    if result.negative_patterns.is_empty() {
        println!("No negative patterns detected.");
    } else {
        println!("Negative patterns:");
        for (category, finding) in &result.negative_patterns {
            println!(
                "  {:<24} severity {:.2}  [{}]",
                category.key(),
                finding.severity,
                finding.indicators.join(", ")
            );
        }
    }
    println!();

    println!(
        "Verdict: {:?} (confidence {:.1}) - {}",
        result.effectiveness.kind, result.effectiveness.confidence, result.effectiveness.message
    );
    println!();

    println!("Key insights:");
    for insight in &result.key_insights {
        println!("  - {}", insight);
    }
    println!("Recommendations:");
    for recommendation in &result.recommendations {
        println!("  - {}", recommendation);
    }
    println!();

    let reliability = &result.multi_method.reliability;
    println!(
        "Multi-method assessment: reliability {:.2} ({:?}), validity {:.2} ({:?})",
        reliability.overall,
        reliability.level,
        result.multi_method.validity.overall,
        result.multi_method.validity.level
    );

    Ok(())
}
