//! Regression metrics: R², MAE, RMSE

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// R², MAE and RMSE of one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionMetrics {
    /// Coefficient of determination
    pub r2: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
}

impl RegressionMetrics {
    /// Compute metrics of `predicted` against `truth`.
    ///
    /// R² = 1 - SS_res / SS_tot. For a constant target (SS_tot == 0) R² is
    /// 1.0 when the fit is also perfect and 0.0 otherwise.
    ///
    /// # Errors
    ///
    /// Fails on empty input or when the sequences differ in length.
    ///
    /// # Example
    ///
    /// ```
    /// use catsplit::eval::RegressionMetrics;
    ///
    /// let m = RegressionMetrics::compute(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]).unwrap();
    /// assert!((m.mae - 0.5).abs() < 1e-12);
    /// assert!((m.rmse - 0.5).abs() < 1e-12);
    /// ```
    pub fn compute(truth: &[f64], predicted: &[f64]) -> Result<Self> {
        if truth.len() != predicted.len() {
            return Err(Error::LengthMismatch {
                expected: truth.len(),
                actual: predicted.len(),
            });
        }
        if truth.is_empty() {
            return Err(Error::EmptyInput("no samples".to_string()));
        }

        let n = truth.len() as f64;
        let mean = truth.iter().sum::<f64>() / n;

        let (ss_res, ss_tot, abs_sum) = truth.iter().zip(predicted).fold(
            (0.0, 0.0, 0.0),
            |(res, tot, abs), (&t, &p)| {
                let err = t - p;
                (res + err * err, tot + (t - mean).powi(2), abs + err.abs())
            },
        );

        let r2 = if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        Ok(Self {
            r2,
            mae: abs_sum / n,
            rmse: (ss_res / n).sqrt(),
        })
    }
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R²={:.4} MAE={:.4} RMSE={:.4}",
            self.r2, self.mae, self.rmse
        )
    }
}
