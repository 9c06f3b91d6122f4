//! CLI for the urlfeat URL featurizer.

mod commands;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use urlfeat_core::config;
use urlfeat_core::Shape;

use commands::{run_batch, run_completions, run_featurize, run_show_config, EvalArgs};

/// Top-level CLI for urlfeat.
#[derive(Debug, Parser)]
#[command(name = "urlfeat")]
#[command(about = "urlfeat: fixed-length URL feature vectors for classifiers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    /// Named mapping of 19 features.
    Map,
    /// 19-entry numeric vector.
    Full,
    /// 9-entry numeric vector without page features (no page fetch).
    Reduced,
}

impl From<ShapeArg> for Shape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Map => Shape::Map,
            ShapeArg::Full => Shape::Full,
            ShapeArg::Reduced => Shape::Reduced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

fn parse_as_of(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 timestamp: {}", e))
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute features for one URL.
    Featurize {
        /// URL to evaluate, exactly as it should be measured.
        url: String,
        #[arg(long, value_enum, default_value_t = ShapeArg::Map)]
        shape: ShapeArg,
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Do not fetch the page; page features become 0.
        #[arg(long)]
        no_fetch: bool,
        /// Do not query WHOIS; date features become 0.
        #[arg(long)]
        no_whois: bool,
        /// Reference time for date features (default: now).
        #[arg(long, value_name = "RFC3339", value_parser = parse_as_of)]
        as_of: Option<DateTime<Utc>>,
    },

    /// Compute features for every URL in a file (one per line).
    Batch {
        /// File with one URL per line; blank lines and `#` comments are skipped.
        path: PathBuf,
        /// Evaluate up to N URLs concurrently.
        #[arg(long, default_value = "4", value_name = "N")]
        jobs: usize,
        #[arg(long, value_enum, default_value_t = ShapeArg::Full)]
        shape: ShapeArg,
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        #[arg(long)]
        no_fetch: bool,
        #[arg(long)]
        no_whois: bool,
        #[arg(long, value_name = "RFC3339", value_parser = parse_as_of)]
        as_of: Option<DateTime<Utc>>,
    },

    /// Print the effective configuration and where it is stored.
    Config,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Featurize {
                url,
                shape,
                format,
                no_fetch,
                no_whois,
                as_of,
            } => {
                let args = EvalArgs {
                    shape: shape.into(),
                    format,
                    no_fetch,
                    no_whois,
                    as_of,
                };
                run_featurize(&cfg, &url, args).await?
            }
            CliCommand::Batch {
                path,
                jobs,
                shape,
                format,
                no_fetch,
                no_whois,
                as_of,
            } => {
                let args = EvalArgs {
                    shape: shape.into(),
                    format,
                    no_fetch,
                    no_whois,
                    as_of,
                };
                run_batch(&cfg, &path, jobs, args).await?
            }
            CliCommand::Config => run_show_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
