//! Checkpoint key matching
//!
//! A checkpoint either comes from pretraining (backbone weights stored under
//! the `roberta_model.` namespace) or from an earlier fine-tuning run of the
//! full model with its head. Only tensors whose names exist in the target
//! model are kept.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

/// Namespace of backbone weights inside a full-model checkpoint.
pub const BACKBONE_PREFIX: &str = "roberta_model.";

/// Read tensor names from a SafeTensors file.
pub fn read_tensor_names(path: &Path) -> Result<BTreeSet<String>> {
    let data = std::fs::read(path).map_err(|e| {
        Error::Checkpoint(format!("Failed to read {}: {e}", path.display()))
    })?;
    let tensors = safetensors::SafeTensors::deserialize(&data).map_err(|e| {
        Error::Checkpoint(format!("Failed to parse SafeTensors {}: {e}", path.display()))
    })?;
    Ok(tensors.names().iter().map(|s| (*s).to_string()).collect())
}

/// Result of matching checkpoint tensor names against a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckpointMatch {
    /// Model key → checkpoint key for every tensor that will be loaded
    pub mapping: BTreeMap<String, String>,
    /// Model keys with no tensor in the checkpoint
    pub missing: BTreeSet<String>,
    /// Checkpoint keys with no counterpart in the model
    pub unexpected: BTreeSet<String>,
}

impl CheckpointMatch {
    /// Match checkpoint names to model names.
    ///
    /// With `load_on_backbone`, the `roberta_model.` prefix is removed from
    /// checkpoint names before lookup, so a full-model checkpoint can seed a
    /// bare backbone.
    pub fn compute<'a>(
        model_keys: &BTreeSet<String>,
        checkpoint_keys: impl IntoIterator<Item = &'a str>,
        load_on_backbone: bool,
    ) -> Self {
        let mut out = Self::default();

        for ckpt_key in checkpoint_keys {
            let target = if load_on_backbone {
                ckpt_key.strip_prefix(BACKBONE_PREFIX).unwrap_or(ckpt_key)
            } else {
                ckpt_key
            };
            if model_keys.contains(target) {
                out.mapping.insert(target.to_string(), ckpt_key.to_string());
            } else {
                out.unexpected.insert(ckpt_key.to_string());
            }
        }

        out.missing = model_keys
            .iter()
            .filter(|k| !out.mapping.contains_key(*k))
            .cloned()
            .collect();
        out
    }

    /// Match two SafeTensors files.
    pub fn from_files(model: &Path, checkpoint: &Path, load_on_backbone: bool) -> Result<Self> {
        let model_keys = read_tensor_names(model)?;
        let ckpt_keys = read_tensor_names(checkpoint)?;
        Ok(Self::compute(
            &model_keys,
            ckpt_keys.iter().map(String::as_str),
            load_on_backbone,
        ))
    }

    /// Whether every model key is covered by the checkpoint.
    pub fn all_matched(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for CheckpointMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_matched() {
            writeln!(f, "All keys matched!")?;
        } else {
            writeln!(f, "Some keys did not match!")?;
        }
        writeln!(f, "  Matched: {}", self.mapping.len())?;
        writeln!(f, "  Missing: {}", self.missing.len())?;
        for key in &self.missing {
            writeln!(f, "    - {key}")?;
        }
        write!(f, "  Unexpected: {}", self.unexpected.len())
    }
}
