//! Pairwise grouping of a sampled split

use super::key::{PairCategory, PairDelta, PairKey};
use crate::data::{MetadataStore, PredictionStore, Sample, SampleId, SampleTable};
use crate::error::{Error, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A sampled split joined with compositions and both energies.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSample {
    samples: Vec<Sample>,
}

impl PairSample {
    /// Join sampled ids against the validation table, metadata and predictions.
    pub fn join(
        ids: &[SampleId],
        val: &SampleTable,
        metadata: &MetadataStore,
        predictions: &PredictionStore,
    ) -> Result<Self> {
        let mut samples = Vec::with_capacity(ids.len());
        for id in ids {
            let dft = val.target(id).ok_or_else(|| {
                Error::ConfigError(format!("Sample '{id}' is not in table {}", val.name()))
            })?;
            let comp = metadata.get(id)?;
            let ml = predictions.get(id)?;
            samples.push(Sample::new(id.clone(), comp, dft).with_prediction(ml));
        }
        Ok(Self { samples })
    }

    /// Wrap already-joined samples. Every sample must carry a prediction.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self> {
        if let Some(s) = samples.iter().find(|s| s.ml.is_none()) {
            return Err(Error::MissingPrediction {
                id: s.id.clone(),
                path: PathBuf::from("<in-memory sample>"),
            });
        }
        Ok(Self { samples })
    }

    /// Joined samples.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the sample is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Pairs of a sample bucketed by [`PairCategory`].
///
/// Buckets are ordered maps keyed by the normalised pair id, so iteration
/// order depends only on the ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairGroups {
    buckets: [BTreeMap<PairKey, PairDelta>; 4],
}

impl PairGroups {
    /// Enumerate every unordered pair of distinct samples. O(n²).
    pub fn build(sample: &PairSample) -> Self {
        let mut groups = Self::default();
        let samples = sample.samples();

        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i + 1..] {
                let Some(key) = PairKey::new(&a.id, &b.id) else {
                    continue;
                };
                let (lo, hi) = if key.first() == a.id { (a, b) } else { (b, a) };
                // both carry ml: PairSample guarantees it
                let delta = PairDelta {
                    dft: hi.dft - lo.dft,
                    ml: hi.ml.unwrap_or_default() - lo.ml.unwrap_or_default(),
                };
                let category =
                    PairCategory::of(&a.ads_symbols, &a.bulk_symbols, &b.ads_symbols, &b.bulk_symbols);
                groups.insert(category, key, delta);
            }
        }

        groups
    }

    fn insert(&mut self, category: PairCategory, key: PairKey, delta: PairDelta) {
        if self.category_of(&key).is_some() {
            return;
        }
        if let Entry::Vacant(slot) = self.buckets[category.index()].entry(key) {
            slot.insert(delta);
        }
    }

    /// Pairs of one category.
    pub fn bucket(&self, category: PairCategory) -> &BTreeMap<PairKey, PairDelta> {
        &self.buckets[category.index()]
    }

    /// Category a pair was filed under.
    pub fn category_of(&self, key: &PairKey) -> Option<PairCategory> {
        PairCategory::ALL
            .into_iter()
            .find(|c| self.buckets[c.index()].contains_key(key))
    }

    /// All pairs, including unrelated ones.
    pub fn entire(&self) -> impl Iterator<Item = (&PairKey, &PairDelta)> {
        self.buckets.iter().flat_map(|b| b.iter())
    }

    /// Chemically similar pairs (bulk, adsorbate or configuration swaps).
    pub fn similar(&self) -> impl Iterator<Item = (&PairKey, &PairDelta)> {
        PairCategory::ALL
            .into_iter()
            .filter(PairCategory::is_similar)
            .flat_map(move |c| self.buckets[c.index()].iter())
    }

    /// Split a pool into DFT and model energy-difference columns.
    pub fn columns<'a>(
        pairs: impl Iterator<Item = (&'a PairKey, &'a PairDelta)>,
    ) -> (Vec<f64>, Vec<f64>) {
        pairs.map(|(_, d)| (d.dft, d.ml)).unzip()
    }

    /// Number of pairs across all buckets.
    pub fn total_len(&self) -> usize {
        self.buckets.iter().map(BTreeMap::len).sum()
    }

    /// Number of chemically similar pairs.
    pub fn similar_len(&self) -> usize {
        self.total_len() - self.bucket(PairCategory::Unrelated).len()
    }
}
