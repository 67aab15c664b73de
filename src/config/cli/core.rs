//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::AnalysisSpec;
use crate::plot::PlotKind;

/// Catsplit: out-of-distribution evaluation for catalyst property models
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "catsplit")]
#[command(version)]
#[command(
    about = "Split validation data by adsorbate/catalyst novelty and score energy predictions per split"
)]
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
    /// Run split and energy-difference analysis for configured models
    Analyze(AnalyzeArgs),

    /// Print split group sizes without evaluating predictions
    Splits(SplitsArgs),

    /// Validate a configuration file without running the analysis
    Validate(ValidateArgs),

    /// Match checkpoint tensor names against a model's expected keys
    Checkpoint(CheckpointArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Only analyse the named model (repeatable)
    #[arg(short, long)]
    pub model: Vec<String>,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override samples drawn per split group
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// Override sampling seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip writing plots
    #[arg(long)]
    pub no_plots: bool,

    /// Skip the energy-difference analysis
    #[arg(long)]
    pub skip_pairs: bool,

    /// Override plot kind (scatter, hexbin)
    #[arg(long)]
    pub plot_kind: Option<PlotKind>,
}

/// Arguments for the splits command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SplitsArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the checkpoint command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckpointArgs {
    /// Safetensors file holding the freshly initialised model
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Safetensors checkpoint to load
    #[arg(value_name = "CHECKPOINT")]
    pub checkpoint: PathBuf,

    /// Load the checkpoint onto the backbone only
    #[arg(short, long)]
    pub backbone: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an AnalysisSpec
pub fn apply_overrides(spec: &mut AnalysisSpec, args: &AnalyzeArgs) {
    if let Some(output_dir) = &args.output_dir {
        spec.output_dir = output_dir.clone();
    }
    if let Some(sample_size) = args.sample_size {
        spec.pairs.sample_size = sample_size;
    }
    if let Some(seed) = args.seed {
        spec.pairs.seed = seed;
    }
    if args.no_plots {
        spec.plot.enabled = false;
    }
    if let Some(kind) = args.plot_kind {
        spec.plot.kind = kind;
    }
    if !args.model.is_empty() {
        spec.models.retain(|m| args.model.contains(&m.name));
    }
    // Note: skip_pairs is a CLI-only option not persisted in config
}
