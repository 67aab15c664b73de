//! Subgroup error-cancellation rate (SECR)

use serde::{Serialize, Serializer};
use std::fmt;

/// SECR = 100 · (1 − RMSE_similar / RMSE_entire).
///
/// Positive values mean the chemically similar pairs have lower
/// energy-difference error than the entire pool. The rate is undefined when
/// the entire-pool RMSE is zero or either pool is empty; it is never coerced
/// to 0 or infinity.
#[derive(Debug, Clone, PartialEq)]
pub enum Secr {
    /// Computed rate, in percent
    Defined(f64),
    /// Rate cannot be computed; carries the reason
    Undefined(String),
}

impl Secr {
    /// Compute the rate from the two pool RMSEs.
    ///
    /// `None` marks a pool whose RMSE could not be computed (empty pool).
    pub fn compute(rmse_similar: Option<f64>, rmse_entire: Option<f64>) -> Self {
        match (rmse_similar, rmse_entire) {
            (_, None) => Secr::Undefined("entire pair pool is empty".to_string()),
            (None, _) => Secr::Undefined("no chemically similar pairs".to_string()),
            (Some(_), Some(entire)) if entire == 0.0 => {
                Secr::Undefined("entire-pool RMSE is zero".to_string())
            }
            (Some(similar), Some(entire)) => Secr::Defined(100.0 * (1.0 - similar / entire)),
        }
    }

    /// The rate, if defined.
    pub fn value(&self) -> Option<f64> {
        match self {
            Secr::Defined(v) => Some(*v),
            Secr::Undefined(_) => None,
        }
    }

    /// Whether the rate is defined.
    pub fn is_defined(&self) -> bool {
        matches!(self, Secr::Defined(_))
    }
}

impl fmt::Display for Secr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secr::Defined(v) => write!(f, "{v:.2}%"),
            Secr::Undefined(reason) => write!(f, "undefined ({reason})"),
        }
    }
}

impl Serialize for Secr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Secr::Defined(v) => serializer.serialize_f64(*v),
            Secr::Undefined(_) => serializer.serialize_none(),
        }
    }
}
