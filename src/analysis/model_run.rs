//! Identification of one prediction set

use crate::config::ModelSpec;
use crate::error::{Error, Result};
use crate::model::HeadType;

/// Plot titles of the backbones compared in the benchmark.
const TITLES: [(&str, &str); 6] = [
    ("cgcnn", "CGCNN"),
    ("dimenet", "DimeNet"),
    ("schnet", "SchNet"),
    ("dimenetpp", "DimeNet++"),
    ("painn", "PaiNN"),
    ("catbert", "CatBERT"),
];

/// A model's predictions at one training-set size.
///
/// Prediction files and output directories are both named `{name}_{size}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRun {
    /// Model name as used in file names
    pub name: String,
    /// Training-set size label, e.g. `100k`
    pub size: String,
    /// Head the model was fine-tuned with, if known
    pub head: Option<HeadType>,
    /// Explicit plot title
    pub title: Option<String>,
}

impl ModelRun {
    /// Run for a bare model name.
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            head: None,
            title: None,
        }
    }

    /// Run for a configured model.
    pub fn from_spec(spec: &ModelSpec, size: &str) -> Self {
        Self {
            name: spec.name.clone(),
            size: size.to_string(),
            head: spec.head,
            title: spec.title.clone(),
        }
    }

    /// `{name}_{size}`
    pub fn stem(&self) -> String {
        format!("{}_{}", self.name, self.size)
    }

    /// Title used on plot axes. Unknown names are shown verbatim.
    pub fn display_title(&self) -> &str {
        if let Some(title) = &self.title {
            return title;
        }
        TITLES
            .iter()
            .find(|(name, _)| *name == self.name)
            .map_or(self.name.as_str(), |&(_, title)| title)
    }

    /// Fail unless the run predicts scalar energies.
    pub fn ensure_regression(&self) -> Result<()> {
        match self.head {
            Some(head) if !head.is_regression() => Err(Error::ConfigError(format!(
                "Model '{}' uses classification head '{head}'; parity analysis needs energies",
                self.name
            ))),
            _ => Ok(()),
        }
    }
}
