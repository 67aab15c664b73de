//! Pair identifiers and categories

use serde::Serialize;
use std::fmt;

/// Unordered pair of sample ids, stored in lexicographic order.
///
/// Energy differences are taken as `second - first`, so the normalised key
/// also fixes the sign of every delta.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Normalise two distinct ids into a key. Returns `None` for a self-pair.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a.to_string(),
                second: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b.to_string(),
                second: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lexicographically smaller id.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Lexicographically larger id.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Energy difference of a pair, DFT and model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairDelta {
    /// `dft(second) - dft(first)`
    pub dft: f64,
    /// `ml(second) - ml(first)`
    pub ml: f64,
}

/// Which composition attribute differs between the two samples of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairCategory {
    /// Same adsorbate, different bulk
    BulkSwap,
    /// Same bulk, different adsorbate
    AdsSwap,
    /// Same adsorbate and bulk, different configuration
    ConfSwap,
    /// Both differ
    Unrelated,
}

impl PairCategory {
    /// All categories, chemically similar ones first.
    pub const ALL: [PairCategory; 4] = [
        PairCategory::BulkSwap,
        PairCategory::AdsSwap,
        PairCategory::ConfSwap,
        PairCategory::Unrelated,
    ];

    /// Categorise a pair from its composition labels.
    pub fn of(ads_a: &str, bulk_a: &str, ads_b: &str, bulk_b: &str) -> Self {
        match (ads_a == ads_b, bulk_a == bulk_b) {
            (true, false) => PairCategory::BulkSwap,
            (false, true) => PairCategory::AdsSwap,
            (true, true) => PairCategory::ConfSwap,
            (false, false) => PairCategory::Unrelated,
        }
    }

    /// Whether pairs of this category count as chemically similar.
    pub fn is_similar(&self) -> bool {
        !matches!(self, PairCategory::Unrelated)
    }

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            PairCategory::BulkSwap => "bulk_swap",
            PairCategory::AdsSwap => "ads_swap",
            PairCategory::ConfSwap => "conf_swap",
            PairCategory::Unrelated => "unrelated",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PairCategory::BulkSwap => 0,
            PairCategory::AdsSwap => 1,
            PairCategory::ConfSwap => 2,
            PairCategory::Unrelated => 3,
        }
    }
}

impl fmt::Display for PairCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
