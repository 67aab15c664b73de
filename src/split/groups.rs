//! Four-way ID / OOD partition of a validation table

use super::CompositionSets;
use crate::data::{MetadataStore, SampleId, SampleTable};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Split group of a validation sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SplitGroup {
    /// Adsorbate and bulk both seen in training
    #[serde(rename = "ID")]
    Id,
    /// Adsorbate unseen, bulk seen
    #[serde(rename = "OOD-ads")]
    OodAds,
    /// Bulk unseen, adsorbate seen
    #[serde(rename = "OOD-cat")]
    OodCat,
    /// Adsorbate and bulk both unseen
    #[serde(rename = "OOD-both")]
    OodBoth,
}

impl SplitGroup {
    /// All groups in report order.
    pub const ALL: [SplitGroup; 4] = [
        SplitGroup::Id,
        SplitGroup::OodAds,
        SplitGroup::OodCat,
        SplitGroup::OodBoth,
    ];

    /// Name used for files and table rows.
    pub fn name(&self) -> &'static str {
        match self {
            SplitGroup::Id => "ID",
            SplitGroup::OodAds => "OOD-ads",
            SplitGroup::OodCat => "OOD-cat",
            SplitGroup::OodBoth => "OOD-both",
        }
    }

    fn index(self) -> usize {
        match self {
            SplitGroup::Id => 0,
            SplitGroup::OodAds => 1,
            SplitGroup::OodCat => 2,
            SplitGroup::OodBoth => 3,
        }
    }
}

impl fmt::Display for SplitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Membership lists of the four split groups.
///
/// Every validation id lands in exactly one list, in validation-table order.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitGroups {
    members: [Vec<SampleId>; 4],
    assignment: HashMap<SampleId, SplitGroup>,
}

impl SplitGroups {
    /// Classify every sample of `val` against the training composition sets.
    pub fn classify(
        sets: &CompositionSets,
        val: &SampleTable,
        metadata: &MetadataStore,
    ) -> Result<Self> {
        let mut members: [Vec<SampleId>; 4] = Default::default();
        let mut assignment = HashMap::with_capacity(val.len());

        for id in val.ids() {
            let comp = metadata.get(id)?;
            let group = sets.classify(&comp.ads_symbols, &comp.bulk_symbols);
            members[group.index()].push(id.to_string());
            assignment.insert(id.to_string(), group);
        }

        Ok(Self {
            members,
            assignment,
        })
    }

    /// Ids in a group.
    pub fn get(&self, group: SplitGroup) -> &[SampleId] {
        &self.members[group.index()]
    }

    /// Group of an id, if it was classified.
    pub fn group_of(&self, id: &str) -> Option<SplitGroup> {
        self.assignment.get(id).copied()
    }

    /// Total number of classified ids.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Whether no ids were classified.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Per-group sizes.
    pub fn counts(&self) -> SplitCounts {
        SplitCounts {
            id: self.get(SplitGroup::Id).len(),
            ood_ads: self.get(SplitGroup::OodAds).len(),
            ood_cat: self.get(SplitGroup::OodCat).len(),
            ood_both: self.get(SplitGroup::OodBoth).len(),
        }
    }
}

/// Sizes of the four split groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitCounts {
    /// In-distribution
    #[serde(rename = "ID")]
    pub id: usize,
    /// Unseen adsorbate
    #[serde(rename = "OOD-ads")]
    pub ood_ads: usize,
    /// Unseen bulk
    #[serde(rename = "OOD-cat")]
    pub ood_cat: usize,
    /// Both unseen
    #[serde(rename = "OOD-both")]
    pub ood_both: usize,
}

impl fmt::Display for SplitCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of ID: {}", self.id)?;
        writeln!(f, "Number of OOD_ads: {}", self.ood_ads)?;
        writeln!(f, "Number of OOD_cat: {}", self.ood_cat)?;
        write!(f, "Number of OOD_both: {}", self.ood_both)
    }
}
