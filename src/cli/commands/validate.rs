//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_config, validate_paths, AnalysisSpec, ValidateArgs};

/// Format input locations as a string
pub fn format_data_info(spec: &AnalysisSpec) -> String {
    let data = &spec.data;
    [
        format!("  Training data: {}", data.train.display()),
        format!("  Validation data: {}", data.val.display()),
        format!("  Metadata: {}", data.metadata.display()),
        format!(
            "  Predictions: {}/{}_{{model}}_{}.json",
            data.predictions_dir.display(),
            data.prediction_prefix,
            spec.size
        ),
    ]
    .join("\n")
}

/// Format the model list as a string
pub fn format_models_info(spec: &AnalysisSpec) -> String {
    let mut lines = vec![format!("  Models ({}):", spec.models.len())];
    for model in &spec.models {
        match model.head {
            Some(head) => lines.push(format!("    - {} (head: {head})", model.name)),
            None => lines.push(format!("    - {}", model.name)),
        }
    }
    lines.join("\n")
}

/// Format pair analysis and plot settings as a string
pub fn format_analysis_info(spec: &AnalysisSpec) -> String {
    let mut lines = vec![
        format!("  Sample size: {}", spec.pairs.sample_size),
        format!("  Seed: {}", spec.pairs.seed),
        format!("  Output dir: {}", spec.output_dir.display()),
    ];
    if spec.plot.enabled {
        lines.push(format!(
            "  Plots: {:?} [{}, {}]",
            spec.plot.kind, spec.plot.limits[0], spec.plot.limits[1]
        ));
    } else {
        lines.push("  Plots: disabled".to_string());
    }
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &AnalysisSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_data_info(spec));
    println!();
    println!("{}", format_models_info(spec));
    println!();
    println!("{}", format_analysis_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;
    validate_paths(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
