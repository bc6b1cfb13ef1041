//! AuthSense CLI - Command-line interface for AuthSense
//!
//! Commands:
//! - score: Score a recorded capture session against a baseline
//! - features: Derive the feature vector from a capture session

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use authsense::{
    parse_capture, replay_capture, FeatureVector, RiskScorer, RiskVerdict, SenseError,
    AUTHSENSE_VERSION, PRODUCER_NAME,
};

/// AuthSense - Behavioral biometrics capture and login risk scoring
#[derive(Parser)]
#[command(name = "authsense")]
#[command(version = AUTHSENSE_VERSION)]
#[command(about = "Score login attempts from behavioral capture sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a recorded capture session against a baseline
    Score {
        /// Capture session JSON path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Baseline feature vector JSON path; the fixed default
        /// baseline is used when omitted
        #[arg(short, long)]
        baseline: Option<PathBuf>,

        /// Output path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Derive the feature vector from a capture session
    Features {
        /// Capture session JSON path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },
}

/// Verdict payload emitted by `score`.
#[derive(Serialize)]
struct ScoreOutput {
    producer: &'static str,
    version: &'static str,
    attempt_id: String,
    user_id: String,
    features: FeatureVector,
    baseline: FeatureVector,
    verdict: RiskVerdict,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SenseError> {
    match cli.command {
        Commands::Score {
            input,
            baseline,
            output,
        } => cmd_score(&input, baseline.as_deref(), &output),
        Commands::Features { input, output } => cmd_features(&input, &output),
    }
}

fn cmd_score(input: &Path, baseline: Option<&Path>, output: &Path) -> Result<(), SenseError> {
    let session = parse_capture(&read_input(input)?)?;
    let features = replay_capture(&session).feature_vector();

    let baseline = match baseline {
        Some(path) => serde_json::from_str(&read_input(path)?)?,
        None => FeatureVector::DEFAULT_BASELINE,
    };

    let verdict = RiskScorer::score(&features, &baseline);
    let payload = ScoreOutput {
        producer: PRODUCER_NAME,
        version: AUTHSENSE_VERSION,
        attempt_id: session.attempt_id.to_string(),
        user_id: session.user_id.clone(),
        features,
        baseline,
        verdict,
    };
    write_output(output, &payload)
}

fn cmd_features(input: &Path, output: &Path) -> Result<(), SenseError> {
    let session = parse_capture(&read_input(input)?)?;
    let features = replay_capture(&session).feature_vector();
    write_output(output, &features)
}

fn read_input(path: &Path) -> Result<String, SenseError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| SenseError::Storage(format!("Failed to read stdin: {}", e)))?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
            .map_err(|e| SenseError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }
}

fn write_output<T: Serialize>(path: &Path, value: &T) -> Result<(), SenseError> {
    if path == Path::new("-") {
        // Pretty-print for humans, compact for pipes.
        let json = if atty::is(atty::Stream::Stdout) {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", json)
            .map_err(|e| SenseError::Storage(format!("Failed to write stdout: {}", e)))?;
        Ok(())
    } else {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)
            .map_err(|e| SenseError::Storage(format!("Failed to write {}: {}", path.display(), e)))
    }
}
