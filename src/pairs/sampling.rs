//! Seeded sampling of a split group

use crate::data::SampleId;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Draw `sample_size` ids from `ids` without replacement.
///
/// The same ids, size and seed always give the same subset. The subset keeps
/// the relative order of `ids`. When the group is not larger than
/// `sample_size`, the whole group is returned.
pub fn sample_group(ids: &[SampleId], sample_size: usize, seed: u64) -> Vec<SampleId> {
    if ids.len() <= sample_size {
        return ids.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = rand::seq::index::sample(&mut rng, ids.len(), sample_size).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| ids[i].clone()).collect()
}
