//! Metrics and result tables
//!
//! - `regression`: R², MAE and RMSE of a prediction set
//! - `secr`: subgroup error-cancellation rate of a pair analysis
//! - `report`: per-split result tables and their CSV export
//!
//! ## Example
//!
//! ```
//! use catsplit::eval::{RegressionMetrics, Secr};
//!
//! let similar = RegressionMetrics::compute(&[0.0, 1.0], &[0.1, 0.9]).unwrap();
//! let entire = RegressionMetrics::compute(&[0.0, 1.0, 2.0], &[0.3, 0.7, 2.4]).unwrap();
//! let secr = Secr::compute(Some(similar.rmse), Some(entire.rmse));
//! assert!(secr.value().unwrap() > 0.0);
//! ```

mod regression;
mod report;
mod secr;

pub use regression::RegressionMetrics;
pub use report::{PairReport, PairRow, SplitReport, SplitRow};
pub use secr::Secr;
