//! Split analysis of fine-tuned energy models
//!
//! [`SplitAnalysis`] partitions a validation set once and then scores any
//! number of [`ModelRun`]s against that partition:
//!
//! - `evaluate_splits`: parity metrics on the entire set and each split group
//! - `evaluate_energy_differences`: metrics on pairwise energy differences
//!   and the subgroup error-cancellation rate

mod model_run;
mod split_analysis;


pub use model_run::ModelRun;
pub use split_analysis::{AnalysisOptions, SplitAnalysis, ENTIRE};
