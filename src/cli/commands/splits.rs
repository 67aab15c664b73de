//! Splits command implementation

use crate::analysis::SplitAnalysis;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, OutputFormat, SplitsArgs};
use crate::split::{CompositionSummary, SplitCounts};
use serde::Serialize;
use std::fmt;

/// Composition and split summary printed by `catsplit splits`.
#[derive(Debug, Serialize)]
pub struct SplitSummary {
    pub train: CompositionSummary,
    pub val: CompositionSummary,
    pub splits: SplitCounts,
}

impl SplitSummary {
    fn of(analysis: &SplitAnalysis) -> Self {
        Self {
            train: analysis.train_summary(),
            val: analysis.val_summary(),
            splits: analysis.groups().counts(),
        }
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ System Analysis (train) ------")?;
        writeln!(f, "{}", self.train)?;
        writeln!(f, "------ System Analysis (val) ------")?;
        writeln!(f, "{}", self.val)?;
        writeln!(f, "--------- Split Analysis ---------")?;
        write!(f, "{}", self.splits)
    }
}

pub fn run_splits(args: SplitsArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    // the summary is the output, so the analysis itself stays silent
    let analysis = SplitAnalysis::from_spec(&spec, LogLevel::Quiet)
        .map_err(|e| format!("Analysis error: {e}"))?;
    let summary = SplitSummary::of(&analysis);

    match args.format {
        OutputFormat::Text => log(level, LogLevel::Normal, &summary.to_string()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&summary)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
