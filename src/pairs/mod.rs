//! Pair grouping engine
//!
//! A split group is sampled with a fixed seed, then every unordered pair of
//! distinct samples is bucketed by which composition attribute changed:
//!
//! | adsorbate | bulk      | category     |
//! |-----------|-----------|--------------|
//! | same      | different | `BulkSwap`   |
//! | different | same      | `AdsSwap`    |
//! | same      | same      | `ConfSwap`   |
//! | different | different | `Unrelated`  |
//!
//! The first three form the chemically similar pool; all four form the
//! entire pool used for the error-cancellation rate.

mod grouping;
mod key;
mod sampling;

#[cfg(test)]
mod tests;

pub use grouping::{PairGroups, PairSample};
pub use key::{PairCategory, PairDelta, PairKey};
pub use sampling::sample_group;
