//! Joined sample record

use super::metadata::Composition;

/// Opaque sample identifier (OC20 system id).
pub type SampleId = String;

/// A sample joined with its composition labels and energies.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Sample identifier
    pub id: SampleId,
    /// Adsorbate composition label
    pub ads_symbols: String,
    /// Bulk (catalyst) composition label
    pub bulk_symbols: String,
    /// Ground-truth DFT energy
    pub dft: f64,
    /// Model-predicted energy, if joined
    pub ml: Option<f64>,
}

impl Sample {
    /// Build a sample from a composition and ground-truth energy.
    pub fn new(id: impl Into<SampleId>, composition: &Composition, dft: f64) -> Self {
        Self {
            id: id.into(),
            ads_symbols: composition.ads_symbols.clone(),
            bulk_symbols: composition.bulk_symbols.clone(),
            dft,
            ml: None,
        }
    }

    /// Attach a predicted energy.
    pub fn with_prediction(mut self, ml: f64) -> Self {
        self.ml = Some(ml);
        self
    }
}
