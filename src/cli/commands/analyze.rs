//! Analyze command implementation

use crate::analysis::{ModelRun, SplitAnalysis};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, AnalyzeArgs};

pub fn run_analyze(args: AnalyzeArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Catsplit: Analyzing {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "============ Analysis Initiation ============");
    let analysis =
        SplitAnalysis::from_spec(&spec, level).map_err(|e| format!("Analysis error: {e}"))?;

    let mut failed = Vec::new();
    for model in &spec.models {
        let run = ModelRun::from_spec(model, &spec.size);
        log(level, LogLevel::Normal, &format!("============ {} ============", run.name));

        if let Err(e) = analyze_model(&analysis, &run, args.skip_pairs, level) {
            eprintln!("Model {} failed: {e}", run.stem());
            failed.push(run.stem());
        }
    }

    if failed.is_empty() {
        log(level, LogLevel::Normal, "Analysis complete!");
        Ok(())
    } else {
        Err(format!(
            "{} of {} models failed: {}",
            failed.len(),
            spec.models.len(),
            failed.join(", ")
        ))
    }
}

fn analyze_model(
    analysis: &SplitAnalysis,
    run: &ModelRun,
    skip_pairs: bool,
    level: LogLevel,
) -> crate::Result<()> {
    let predictions = analysis.load_predictions(run)?;

    log(level, LogLevel::Normal, "----------------- Splits -----------------");
    analysis.evaluate_splits(run, &predictions)?;

    if !skip_pairs {
        log(level, LogLevel::Normal, "------------ Energy Difference ------------");
        analysis.evaluate_energy_differences(run, &predictions)?;
    }
    Ok(())
}
