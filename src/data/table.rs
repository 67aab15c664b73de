//! Sample tables (train / validation) loaded from CSV

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Column holding the sample id.
pub const ID_COLUMN: &str = "id";
/// Column holding the ground-truth energy.
pub const TARGET_COLUMN: &str = "target";

/// One table row: sample id and ground-truth target energy.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRow {
    /// Sample id
    pub id: String,
    /// DFT target energy
    pub target: f64,
}

/// An id-unique table of target energies, in file order.
#[derive(Debug, Clone)]
pub struct SampleTable {
    name: String,
    rows: Vec<TargetRow>,
    index: HashMap<String, usize>,
}

impl SampleTable {
    /// Build a table from rows, rejecting duplicate ids.
    pub fn from_rows(name: impl Into<String>, rows: Vec<TargetRow>) -> Result<Self> {
        let name = name.into();
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.id.clone(), i).is_some() {
                return Err(Error::DuplicateId {
                    table: name,
                    id: row.id.clone(),
                });
            }
        }
        Ok(Self { name, rows, index })
    }

    /// Load a table from a CSV file with a header row.
    ///
    /// The header must contain `id` and `target`; other columns are ignored.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| Error::ConfigError(format!("Failed to open table {name}: {e}")))?;

        let headers = reader.headers()?.clone();
        let column = |wanted: &str| {
            headers
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| Error::MissingColumn {
                    table: name.clone(),
                    column: wanted.to_string(),
                })
        };
        let id_col = column(ID_COLUMN)?;
        let target_col = column(TARGET_COLUMN)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let id = record.get(id_col).unwrap_or_default();
            if id.is_empty() {
                return Err(Error::InvalidValue {
                    table: name,
                    line,
                    column: ID_COLUMN.to_string(),
                    value: String::new(),
                });
            }
            let raw = record.get(target_col).unwrap_or_default();
            let target = raw
                .parse::<f64>()
                .ok()
                .filter(|t| t.is_finite())
                .ok_or_else(|| Error::InvalidValue {
                    table: name.clone(),
                    line,
                    column: TARGET_COLUMN.to_string(),
                    value: raw.to_string(),
                })?;
            rows.push(TargetRow {
                id: id.to_string(),
                target,
            });
        }

        Self::from_rows(name, rows)
    }

    /// Table name (file path for loaded tables).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rows in file order.
    pub fn rows(&self) -> &[TargetRow] {
        &self.rows
    }

    /// Ids in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.id.as_str())
    }

    /// Target energy of a sample.
    pub fn target(&self, id: &str) -> Option<f64> {
        self.index.get(id).map(|&i| self.rows[i].target)
    }

    /// Whether the table holds this id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
