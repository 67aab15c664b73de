//! Composition sets observed in a sample table

use super::SplitGroup;
use crate::data::{MetadataStore, SampleTable};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Distinct adsorbate and bulk labels of the training table.
///
/// Built once and never mutated; classification only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionSets {
    ads: BTreeSet<String>,
    bulk: BTreeSet<String>,
}

impl CompositionSets {
    /// Collect the labels of every sample in `table`.
    pub fn from_table(table: &SampleTable, metadata: &MetadataStore) -> Result<Self> {
        let mut ads = BTreeSet::new();
        let mut bulk = BTreeSet::new();
        for id in table.ids() {
            let comp = metadata.get(id)?;
            ads.insert(comp.ads_symbols.clone());
            bulk.insert(comp.bulk_symbols.clone());
        }
        Ok(Self { ads, bulk })
    }

    /// Build sets directly from label iterators.
    pub fn from_labels<A, B>(ads: A, bulk: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            ads: ads.into_iter().map(Into::into).collect(),
            bulk: bulk.into_iter().map(Into::into).collect(),
        }
    }

    /// Adsorbate labels seen in training.
    pub fn ads_list(&self) -> &BTreeSet<String> {
        &self.ads
    }

    /// Bulk labels seen in training.
    pub fn bulk_list(&self) -> &BTreeSet<String> {
        &self.bulk
    }

    /// Classify one composition.
    ///
    /// Checks run in a fixed order: both unseen, adsorbate unseen, bulk
    /// unseen, otherwise in-distribution.
    pub fn classify(&self, ads_symbols: &str, bulk_symbols: &str) -> SplitGroup {
        let ads_missing = !self.ads.contains(ads_symbols);
        let bulk_missing = !self.bulk.contains(bulk_symbols);

        if ads_missing && bulk_missing {
            SplitGroup::OodBoth
        } else if ads_missing {
            SplitGroup::OodAds
        } else if bulk_missing {
            SplitGroup::OodCat
        } else {
            SplitGroup::Id
        }
    }
}

/// Diversity counts of a sample table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositionSummary {
    /// Distinct adsorbates
    pub adsorbates: usize,
    /// Distinct bulks
    pub bulks: usize,
    /// Rows (systems)
    pub systems: usize,
}

impl CompositionSummary {
    /// Count the distinct labels of a table.
    pub fn of(table: &SampleTable, metadata: &MetadataStore) -> Result<Self> {
        let sets = CompositionSets::from_table(table, metadata)?;
        Ok(Self {
            adsorbates: sets.ads.len(),
            bulks: sets.bulk.len(),
            systems: table.len(),
        })
    }
}

impl fmt::Display for CompositionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of adsorbates: {}", self.adsorbates)?;
        writeln!(f, "Number of bulks: {}", self.bulks)?;
        write!(f, "Number of systems: {}", self.systems)
    }
}
