//! YAML schema for analysis runs

use crate::model::HeadType;
use crate::plot::{PlotKind, PlotStyle};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Complete analysis specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Input locations
    pub data: DataPaths,

    /// Root directory for plots and tables
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Training-set size label used in file names (e.g. `100k`)
    pub size: String,

    /// Models whose predictions are analysed
    pub models: Vec<ModelSpec>,

    /// Energy-difference analysis parameters
    #[serde(default)]
    pub pairs: PairParams,

    /// Plot options
    #[serde(default)]
    pub plot: PlotParams,
}

impl AnalysisSpec {
    /// Look up a configured model by name.
    pub fn model(&self, name: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// Input file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Training table (CSV with `id`, `target`)
    pub train: PathBuf,

    /// Validation table (CSV with `id`, `target`)
    pub val: PathBuf,

    /// Composition metadata (JSON keyed by id)
    pub metadata: PathBuf,

    /// Directory holding `{prefix}_{model}_{size}.json` prediction files
    pub predictions_dir: PathBuf,

    /// File name prefix of prediction files
    #[serde(default = "default_prediction_prefix")]
    pub prediction_prefix: String,
}

/// One model to analyse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Model name as used in prediction file names
    pub name: String,

    /// Head the model was fine-tuned with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<HeadType>,

    /// Display name for plot labels; defaults to the known backbone title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ModelSpec {
    /// Model with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            head: None,
            title: None,
        }
    }
}

/// Energy-difference (pair) analysis parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairParams {
    /// Samples drawn per split group
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Sampling seed
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for PairParams {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            seed: default_seed(),
        }
    }
}

/// Plot options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotParams {
    /// Render PNG parity plots
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub enabled: bool,

    /// Scatter or hexbin
    #[serde(default)]
    pub kind: PlotKind,

    /// Axis limits `[lo, hi]`
    #[serde(default = "default_limits")]
    pub limits: [f64; 2],

    /// Hexagons across the axis range
    #[serde(default = "default_gridsize")]
    pub gridsize: usize,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: PlotKind::default(),
            limits: default_limits(),
            gridsize: default_gridsize(),
        }
    }
}

impl PlotParams {
    /// Rendering style for [`crate::plot::ParityPlot`].
    pub fn style(&self) -> PlotStyle {
        PlotStyle {
            kind: self.kind,
            limits: (self.limits[0], self.limits[1]),
            gridsize: self.gridsize,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./results")
}

fn default_prediction_prefix() -> String {
    "val".to_string()
}

fn default_sample_size() -> usize {
    400
}

fn default_seed() -> u64 {
    17
}

fn default_true() -> bool {
    true
}

fn default_limits() -> [f64; 2] {
    [-12.0, 12.0]
}

fn default_gridsize() -> usize {
    60
}
