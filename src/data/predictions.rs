//! Per-model prediction stores

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Mapping from sample id to the energy predicted by one model.
#[derive(Debug, Clone)]
pub struct PredictionStore {
    path: PathBuf,
    predictions: HashMap<String, f64>,
}

impl PredictionStore {
    /// Path of the prediction file for `{prefix}_{model}_{size}.json`.
    pub fn locate(dir: &Path, prefix: &str, model: &str, size: &str) -> PathBuf {
        let stem = if prefix.is_empty() {
            format!("{model}_{size}")
        } else {
            format!("{prefix}_{model}_{size}")
        };
        dir.join(format!("{stem}.json"))
    }

    /// Load predictions from a JSON object `{ "<id>": energy }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to open prediction file {}: {e}",
                path.display()
            ))
        })?;
        let predictions: HashMap<String, f64> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                Error::Serialization(format!(
                    "Failed to parse prediction file {}: {e}",
                    path.display()
                ))
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            predictions,
        })
    }

    /// Build a store from in-memory predictions.
    pub fn from_map(path: impl Into<PathBuf>, predictions: HashMap<String, f64>) -> Self {
        Self {
            path: path.into(),
            predictions,
        }
    }

    /// Predicted energy for a sample.
    pub fn get(&self, id: &str) -> Result<f64> {
        self.predictions
            .get(id)
            .copied()
            .ok_or_else(|| Error::MissingPrediction {
                id: id.to_string(),
                path: self.path.clone(),
            })
    }

    /// File the store was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}
