//! Loading analysis specifications from YAML

use super::schema::AnalysisSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and validate an analysis specification
///
/// Input paths are not checked here; see [`super::validate_paths`].
///
/// # Example
///
/// ```no_run
/// use catsplit::config::load_config;
///
/// let spec = load_config("analysis.yaml")?;
/// println!("{} models", spec.models.len());
/// # Ok::<(), catsplit::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<AnalysisSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec: AnalysisSpec = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(spec)
}
