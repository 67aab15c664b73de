//! Declarative YAML configuration for analysis runs

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, AnalyzeArgs, CheckpointArgs, Cli, Command, OutputFormat,
    SplitsArgs, ValidateArgs,
};
pub use loader::load_config;
pub use schema::{AnalysisSpec, DataPaths, ModelSpec, PairParams, PlotParams};
pub use validate::{validate_config, validate_paths, ValidationError};
