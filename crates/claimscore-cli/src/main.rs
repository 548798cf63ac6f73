//! claimscore command line scorer
//!
//! Reads claim records as JSON (one object or an array), scores them
//! against a fitted model directory and prints the results as JSON.
//!
//! Usage:
//!   claimscore score [claims.json] [--batch] [--model-dir <dir>] [--threshold <p>]
//!   claimscore features [claims.json] [--batch]

mod config;
mod input;

use crate::config::CliConfig;
use crate::input::{read_claims, FeatureLine, ScoreLine};
use anyhow::Result;
use clap::{Parser, Subcommand};
use claimscore_core::RawClaimRecord;
use claimscore_sdk::{ClaimScorer, ClaimScorerBuilder};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "claimscore")]
#[command(version)]
#[command(about = "Score insurance claims for denial risk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: config/claimscore.*)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model directory holding model, scaler and expected columns
    #[arg(short, long, global = true)]
    model_dir: Option<PathBuf>,

    /// Decision threshold override
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Log collected metrics when done
    #[arg(long, global = true)]
    metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score claims and print probability and decision
    Score {
        /// JSON file with a claim object or array; stdin if omitted
        input: Option<PathBuf>,

        /// Engineer all claims as one batch (shared medians and categories)
        #[arg(long)]
        batch: bool,
    },

    /// Print the engineered feature vectors
    Features {
        /// JSON file with a claim object or array; stdin if omitted
        input: Option<PathBuf>,

        /// Engineer all claims as one batch (shared medians and categories)
        #[arg(long)]
        batch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.model_dir {
        config.model_dir = dir.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    info!("Loaded configuration: {:?}", config);

    let scorer = ClaimScorerBuilder::from_config(config.scorer_config())
        .build()
        .await?;

    let json = match &cli.command {
        Commands::Score { input, batch } => {
            let records = read_claims(input.as_deref())?;
            info!("Scoring {} claims", records.len());
            serde_json::to_string_pretty(&score(&scorer, &records, *batch))?
        }
        Commands::Features { input, batch } => {
            let records = read_claims(input.as_deref())?;
            serde_json::to_string_pretty(&features(&scorer, &records, *batch))?
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, json + "\n")?,
        None => writeln!(std::io::stdout().lock(), "{}", json)?,
    }

    if cli.metrics {
        if let Some(metrics) = scorer.metrics() {
            info!("Metrics: {}", serde_json::to_string(&metrics.snapshot())?);
        }
    }

    Ok(())
}

/// Score claims one by one, or all together in batch mode.
///
/// Per-claim failures become error lines; a batch failure fails every line.
fn score(scorer: &ClaimScorer, records: &[RawClaimRecord], batch: bool) -> Vec<ScoreLine> {
    let line = |index, result: claimscore_sdk::Result<_>| match result {
        Ok(score) => ScoreLine {
            index,
            score: Some(score),
            error: None,
        },
        Err(e) => ScoreLine {
            index,
            score: None,
            error: Some(e.to_string()),
        },
    };

    if batch {
        match scorer.score_batch(records) {
            Ok(scores) => scores
                .into_iter()
                .enumerate()
                .map(|(i, s)| line(i, Ok(s)))
                .collect(),
            Err(e) => {
                let message = e.to_string();
                (0..records.len())
                    .map(|i| ScoreLine {
                        index: i,
                        score: None,
                        error: Some(message.clone()),
                    })
                    .collect()
            }
        }
    } else {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| line(i, scorer.score(record)))
            .collect()
    }
}

fn features(scorer: &ClaimScorer, records: &[RawClaimRecord], batch: bool) -> Vec<FeatureLine> {
    let results: Vec<claimscore_sdk::Result<_>> = if batch {
        match scorer.features(records) {
            Ok(vectors) => vectors.into_iter().map(Ok).collect(),
            Err(e) => {
                let message = e.to_string();
                return (0..records.len())
                    .map(|index| FeatureLine {
                        index,
                        features: None,
                        error: Some(message.clone()),
                    })
                    .collect();
            }
        }
    } else {
        records
            .iter()
            .map(|record| scorer.features_one(record))
            .collect()
    };

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(vector) => FeatureLine {
                index,
                features: Some(vector),
                error: None,
            },
            Err(e) => FeatureLine {
                index,
                features: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "claimscore=info,claimscore_sdk=info,claimscore_runtime=info,claimscore_repository=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
