//! Checkpoint command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::CheckpointArgs;
use crate::model::CheckpointMatch;

pub fn run_checkpoint(args: CheckpointArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Matching {} against {}{}",
            args.checkpoint.display(),
            args.model.display(),
            if args.backbone { " (backbone only)" } else { "" }
        ),
    );

    let report = CheckpointMatch::from_files(&args.model, &args.checkpoint, args.backbone)
        .map_err(|e| format!("Checkpoint error: {e}"))?;

    log(level, LogLevel::Normal, &report.to_string());
    for key in &report.unexpected {
        log(level, LogLevel::Verbose, &format!("    unexpected: {key}"));
    }

    Ok(())
}
