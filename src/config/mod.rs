//! CLI argument types and evaluation spec loading

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;


pub use error::SpecError;

/// Medir: Binary Classification Evaluation Metrics
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "medir")]
#[command(version)]
#[command(about = "Binary classification evaluation metrics with terminal charts")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate a confusion matrix given by flags or a JSON spec file
    Eval(EvalArgs),

    /// Evaluate the built-in example confusion matrix
    Demo(DemoArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvalArgs {
    /// Path to a JSON spec file ({"tp": .., "fn": .., "fp": .., "tn": ..})
    #[arg(value_name = "SPEC")]
    pub spec: Option<PathBuf>,

    /// True positive count
    #[arg(long)]
    pub tp: Option<u64>,

    /// False negative count
    #[arg(long = "fn")]
    pub fn_: Option<u64>,

    /// False positive count
    #[arg(long)]
    pub fp: Option<u64>,

    /// True negative count
    #[arg(long)]
    pub tn: Option<u64>,

    /// Class labels for the heatmap, positive class first
    #[arg(long, num_args = 2, value_names = ["POSITIVE", "NEGATIVE"])]
    pub labels: Option<Vec<String>>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,
}

/// Arguments for the demo command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DemoArgs {
    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,
}

/// Output format for the eval command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Evaluation spec document: the four counts plus optional class labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSpec {
    /// True positive count
    pub tp: u64,
    /// False negative count
    #[serde(rename = "fn")]
    pub fn_: u64,
    /// False positive count
    pub fp: u64,
    /// True negative count
    pub tn: u64,
    /// Class labels for the heatmap, positive class first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl EvalSpec {
    /// Check structural invariants not covered by the types.
    pub fn validate(&self) -> Result<(), SpecError> {
        if let Some(labels) = &self.labels {
            if labels.len() != 2 {
                return Err(SpecError::LabelCount(labels.len()));
            }
        }
        Ok(())
    }
}

/// Load and validate an evaluation spec from a JSON file.
pub fn load_spec(path: &Path) -> Result<EvalSpec, SpecError> {
    let text = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let spec: EvalSpec = serde_json::from_str(&text)?;
    spec.validate()?;
    Ok(spec)
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
