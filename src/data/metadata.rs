//! Composition metadata store

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Adsorbate and bulk composition labels of one sample.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Composition {
    /// Adsorbate label, e.g. `*OH`
    pub ads_symbols: String,
    /// Bulk label, e.g. `Pt3Ni`
    pub bulk_symbols: String,
}

impl Composition {
    /// Create a composition from its two labels.
    pub fn new(ads_symbols: impl Into<String>, bulk_symbols: impl Into<String>) -> Self {
        Self {
            ads_symbols: ads_symbols.into(),
            bulk_symbols: bulk_symbols.into(),
        }
    }
}

/// Read-only mapping from sample id to composition labels.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: HashMap<String, Composition>,
}

impl MetadataStore {
    /// Load a metadata store from a JSON object keyed by sample id.
    ///
    /// Entries may carry additional fields; only `ads_symbols` and
    /// `bulk_symbols` are read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to open metadata file {}: {e}",
                path.display()
            ))
        })?;
        let entries: HashMap<String, Composition> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                Error::Serialization(format!(
                    "Failed to parse metadata file {}: {e}",
                    path.display()
                ))
            })?;
        Ok(Self { entries })
    }

    /// Look up the composition of a sample.
    pub fn get(&self, id: &str) -> Result<&Composition> {
        self.entries
            .get(id)
            .ok_or_else(|| Error::MissingMetadata { id: id.to_string() })
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, id: impl Into<String>, composition: Composition) {
        self.entries.insert(id.into(), composition);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Composition)> for MetadataStore {
    fn from_iter<I: IntoIterator<Item = (String, Composition)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
