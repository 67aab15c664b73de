//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Training table does not exist: {0}")]
    TrainDataNotFound(String),

    #[error("Validation table does not exist: {0}")]
    ValDataNotFound(String),

    #[error("Metadata file does not exist: {0}")]
    MetadataNotFound(String),

    #[error("Prediction directory does not exist: {0}")]
    PredictionsDirNotFound(String),

    #[error("No models configured (models must list at least one entry)")]
    EmptyModels,

    #[error("Model name cannot be empty")]
    EmptyModelName,

    #[error("Model '{0}' is listed more than once")]
    DuplicateModel(String),

    #[error("Model '{model}' uses head '{head}', which predicts class labels, not energies")]
    ClassificationHead { model: String, head: String },

    #[error("Size label cannot be empty")]
    EmptySize,

    #[error("Invalid sample size: {0} (must be >= 2 to form pairs)")]
    InvalidSampleSize(usize),

    #[error("Invalid plot limits: [{0}, {1}] (must be finite with lo < hi)")]
    InvalidPlotLimits(f64, f64),

    #[error("Invalid hexbin grid size: {0} (must be > 0)")]
    InvalidGridSize(usize),
}
