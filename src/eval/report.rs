//! Result tables for split and energy-difference analysis
//!
//! Undefined cells (empty group, degenerate pool) are written as
//! `undefined` rather than a number.

use super::regression::RegressionMetrics;
use super::secr::Secr;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::path::Path;

const UNDEFINED: &str = "undefined";

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
}

fn short(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| format!("{v:.4}"))
}

/// Parity metrics of one split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitRow {
    /// `entire`, `ID`, `OOD-ads`, `OOD-cat` or `OOD-both`
    pub split: String,
    /// Number of samples
    pub samples: usize,
    /// Metrics, `None` for an empty split
    pub metrics: Option<RegressionMetrics>,
}

/// One row per split: `split,r2,mae,rmse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplitReport {
    /// Rows in insertion order
    pub rows: Vec<SplitRow>,
}

impl SplitReport {
    /// Append a row.
    pub fn push(&mut self, row: SplitRow) {
        self.rows.push(row);
    }

    /// Row for a split name.
    pub fn get(&self, split: &str) -> Option<&SplitRow> {
        self.rows.iter().find(|r| r.split == split)
    }

    /// Write the table as CSV.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["split", "r2", "mae", "rmse"])?;
        for row in &self.rows {
            let m = row.metrics.as_ref();
            writer.write_record([
                row.split.clone(),
                cell(m.map(|m| m.r2)),
                cell(m.map(|m| m.mae)),
                cell(m.map(|m| m.rmse)),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>10} {:>8} {:>10} {:>10} {:>10}",
            "", "n", "r2", "mae", "rmse"
        )?;
        for row in &self.rows {
            let m = row.metrics.as_ref();
            writeln!(
                f,
                "{:>10} {:>8} {:>10} {:>10} {:>10}",
                row.split,
                row.samples,
                short(m.map(|m| m.r2)),
                short(m.map(|m| m.mae)),
                short(m.map(|m| m.rmse)),
            )?;
        }
        Ok(())
    }
}

/// Energy-difference metrics of one split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRow {
    /// Split name
    pub split: String,
    /// Sampled ids
    pub samples: usize,
    /// Pairs in the entire pool
    pub pairs_total: usize,
    /// Pairs in the chemically similar pool
    pub pairs_similar: usize,
    /// Metrics of the similar pool
    pub similar: Option<RegressionMetrics>,
    /// RMSE of the entire pool
    pub rmse_total: Option<f64>,
    /// Error-cancellation rate
    pub secr: Secr,
}

/// One row per split: `split,r2,mae,rmse,rmse_t,secr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PairReport {
    /// Rows in insertion order
    pub rows: Vec<PairRow>,
}

impl PairReport {
    /// Append a row.
    pub fn push(&mut self, row: PairRow) {
        self.rows.push(row);
    }

    /// Row for a split name.
    pub fn get(&self, split: &str) -> Option<&PairRow> {
        self.rows.iter().find(|r| r.split == split)
    }

    /// Write the table as CSV.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["split", "r2", "mae", "rmse", "rmse_t", "secr"])?;
        for row in &self.rows {
            let m = row.similar.as_ref();
            writer.write_record([
                row.split.clone(),
                cell(m.map(|m| m.r2)),
                cell(m.map(|m| m.mae)),
                cell(m.map(|m| m.rmse)),
                cell(row.rmse_total),
                cell(row.secr.value()),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>10} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "", "pairs", "r2", "mae", "rmse", "rmse_t", "secr"
        )?;
        for row in &self.rows {
            let m = row.similar.as_ref();
            writeln!(
                f,
                "{:>10} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
                row.split,
                row.pairs_total,
                short(m.map(|m| m.r2)),
                short(m.map(|m| m.mae)),
                short(m.map(|m| m.rmse)),
                short(row.rmse_total),
                row.secr
                    .value()
                    .map_or_else(|| UNDEFINED.to_string(), |v| format!("{v:.2}")),
            )?;
        }
        Ok(())
    }
}
