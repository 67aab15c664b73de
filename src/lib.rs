//! # Catsplit
//!
//! In-distribution / out-of-distribution error analysis for adsorption-energy
//! models fine-tuned on OC20-style data.
//!
//! A validation set is partitioned by whether each sample's adsorbate and
//! bulk compositions were seen in training (`ID`, `OOD-ads`, `OOD-cat`,
//! `OOD-both`). Each model's predictions are then scored per split, and
//! pairwise energy differences within each split are used to measure how
//! much error cancels between chemically similar systems.
//!
//! ## Modules
//!
//! - `data`: sample tables, composition metadata, prediction stores
//! - `split`: composition sets and the four-way split
//! - `pairs`: seeded sampling and pair grouping
//! - `eval`: regression metrics, SECR and result tables
//! - `plot`: parity plots
//! - `analysis`: `SplitAnalysis`, tying the above together per model
//! - `model`: head types and checkpoint key matching
//! - `config`: YAML configuration and CLI arguments
//! - `cli`: command handlers and output levels

pub mod analysis;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod model;
pub mod pairs;
pub mod plot;
pub mod split;

pub use analysis::{AnalysisOptions, ModelRun, SplitAnalysis};
pub use error::{Error, Result};
