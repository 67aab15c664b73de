//! Composition classifier
//!
//! Collects the adsorbate and bulk labels of the training table and sorts
//! each validation sample into one of four disjoint groups:
//!
//! - `ID`: adsorbate and bulk both seen in training
//! - `OOD-ads`: adsorbate unseen
//! - `OOD-cat`: bulk unseen
//! - `OOD-both`: adsorbate and bulk unseen

mod composition;
mod groups;


pub use composition::{CompositionSets, CompositionSummary};
pub use groups::{SplitCounts, SplitGroup, SplitGroups};
