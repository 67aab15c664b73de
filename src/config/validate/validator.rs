//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::AnalysisSpec;
use std::collections::HashSet;

/// Validate an analysis specification
///
/// Checks:
/// - At least one model, unique non-empty names, regression heads only
/// - Numeric values are in valid ranges
pub fn validate_config(spec: &AnalysisSpec) -> Result<(), ValidationError> {
    if spec.models.is_empty() {
        return Err(ValidationError::EmptyModels);
    }

    let mut seen = HashSet::new();
    for model in &spec.models {
        if model.name.trim().is_empty() {
            return Err(ValidationError::EmptyModelName);
        }
        if !seen.insert(model.name.as_str()) {
            return Err(ValidationError::DuplicateModel(model.name.clone()));
        }
        if let Some(head) = model.head {
            if !head.is_regression() {
                return Err(ValidationError::ClassificationHead {
                    model: model.name.clone(),
                    head: head.to_string(),
                });
            }
        }
    }

    if spec.size.trim().is_empty() {
        return Err(ValidationError::EmptySize);
    }

    if spec.pairs.sample_size < 2 {
        return Err(ValidationError::InvalidSampleSize(spec.pairs.sample_size));
    }

    let [lo, hi] = spec.plot.limits;
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(ValidationError::InvalidPlotLimits(lo, hi));
    }

    if spec.plot.gridsize == 0 {
        return Err(ValidationError::InvalidGridSize(spec.plot.gridsize));
    }

    Ok(())
}

/// Check that every input path exists
pub fn validate_paths(spec: &AnalysisSpec) -> Result<(), ValidationError> {
    let data = &spec.data;
    if !data.train.exists() {
        return Err(ValidationError::TrainDataNotFound(
            data.train.display().to_string(),
        ));
    }
    if !data.val.exists() {
        return Err(ValidationError::ValDataNotFound(
            data.val.display().to_string(),
        ));
    }
    if !data.metadata.exists() {
        return Err(ValidationError::MetadataNotFound(
            data.metadata.display().to_string(),
        ));
    }
    if !data.predictions_dir.is_dir() {
        return Err(ValidationError::PredictionsDirNotFound(
            data.predictions_dir.display().to_string(),
        ));
    }
    Ok(())
}
