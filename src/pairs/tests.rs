//! Tests for pair grouping

use super::*;
use crate::data::{Composition, MetadataStore, PredictionStore, Sample, SampleTable, TargetRow};
use approx::assert_abs_diff_eq;
use std::collections::{HashMap, HashSet};

fn sample(id: &str, ads: &str, bulk: &str, dft: f64, ml: f64) -> Sample {
    Sample::new(id, &Composition::new(ads, bulk), dft).with_prediction(ml)
}

fn mixed_sample() -> PairSample {
    PairSample::from_samples(vec![
        sample("s1", "A", "X", 0.0, 0.1),
        sample("s2", "A", "Y", 1.0, 0.8),
        sample("s3", "B", "X", -1.0, -0.7),
        sample("s4", "A", "X", 0.5, 0.4),
        sample("s5", "C", "Z", 2.0, 2.5),
    ])
    .unwrap()
}

#[test]
fn test_single_bulk_swap_pair() {
    let pairs = PairGroups::build(
        &PairSample::from_samples(vec![
            sample("id5", "A", "X", 1.0, 1.2),
            sample("id6", "A", "Y", 2.0, 1.9),
        ])
        .unwrap(),
    );

    assert_eq!(pairs.total_len(), 1);
    let bulk = pairs.bucket(PairCategory::BulkSwap);
    assert_eq!(bulk.len(), 1);
    let (key, delta) = bulk.iter().next().unwrap();
    assert_eq!((key.first(), key.second()), ("id5", "id6"));
    assert_abs_diff_eq!(delta.dft, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(delta.ml, 0.7, epsilon = 1e-12);
}

#[test]
fn test_sign_follows_id_order_not_input_order() {
    let forward = PairGroups::build(
        &PairSample::from_samples(vec![
            sample("id5", "A", "X", 1.0, 1.2),
            sample("id6", "A", "Y", 2.0, 1.9),
        ])
        .unwrap(),
    );
    let reversed = PairGroups::build(
        &PairSample::from_samples(vec![
            sample("id6", "A", "Y", 2.0, 1.9),
            sample("id5", "A", "X", 1.0, 1.2),
        ])
        .unwrap(),
    );
    assert_eq!(forward, reversed);
}

#[test]
fn test_categories() {
    let pairs = PairGroups::build(&mixed_sample());

    let bucket_keys = |c: PairCategory| -> Vec<String> {
        pairs.bucket(c).keys().map(ToString::to_string).collect()
    };

    assert_eq!(
        bucket_keys(PairCategory::BulkSwap),
        vec!["(s1, s2)", "(s2, s4)"]
    );
    assert_eq!(bucket_keys(PairCategory::AdsSwap), vec!["(s1, s3)", "(s3, s4)"]);
    assert_eq!(bucket_keys(PairCategory::ConfSwap), vec!["(s1, s4)"]);
    assert_eq!(pairs.bucket(PairCategory::Unrelated).len(), 5);
    assert_eq!(pairs.total_len(), 10);
    assert_eq!(pairs.similar_len(), 5);
}

#[test]
fn test_no_self_pairs_and_no_duplicates() {
    let pairs = PairGroups::build(&mixed_sample());
    let mut seen = HashSet::new();
    for (key, _) in pairs.entire() {
        assert_ne!(key.first(), key.second());
        assert!(key.first() < key.second());
        assert!(seen.insert(key.clone()), "{key} filed twice");
    }
    assert_eq!(seen.len(), 10);
}

#[test]
fn test_similar_pool_excludes_unrelated() {
    let pairs = PairGroups::build(&mixed_sample());
    for (key, _) in pairs.similar() {
        assert_ne!(pairs.category_of(key), Some(PairCategory::Unrelated));
    }
    assert_eq!(pairs.similar().count(), pairs.similar_len());
    let (dft, ml) = PairGroups::columns(pairs.entire());
    assert_eq!(dft.len(), 10);
    assert_eq!(ml.len(), 10);
}

#[test]
fn test_build_is_reproducible() {
    let a = PairGroups::build(&mixed_sample());
    let b = PairGroups::build(&mixed_sample());
    assert_eq!(a, b);
    let ka: Vec<_> = a.entire().collect();
    let kb: Vec<_> = b.entire().collect();
    assert_eq!(ka, kb);
}

#[test]
fn test_duplicate_ids_are_not_paired() {
    let pairs = PairGroups::build(
        &PairSample::from_samples(vec![
            sample("s1", "A", "X", 0.0, 0.0),
            sample("s1", "A", "X", 0.0, 0.0),
        ])
        .unwrap(),
    );
    assert_eq!(pairs.total_len(), 0);
}

#[test]
fn test_from_samples_requires_predictions() {
    let bare = Sample::new("s1", &Composition::new("A", "X"), 0.0);
    assert!(PairSample::from_samples(vec![bare]).is_err());
}

#[test]
fn test_join_reads_all_sources() {
    let val = SampleTable::from_rows(
        "val",
        vec![
            TargetRow { id: "a".into(), target: 1.0 },
            TargetRow { id: "b".into(), target: 2.0 },
        ],
    )
    .unwrap();
    let meta: MetadataStore = [
        ("a".to_string(), Composition::new("*O", "Pt")),
        ("b".to_string(), Composition::new("*O", "Pd")),
    ]
    .into_iter()
    .collect();
    let preds = PredictionStore::from_map(
        "mem",
        HashMap::from([("a".to_string(), 1.1), ("b".to_string(), 1.8)]),
    );

    let ids = vec!["a".to_string(), "b".to_string()];
    let joined = PairSample::join(&ids, &val, &meta, &preds).unwrap();
    assert_eq!(joined.len(), 2);
    assert_eq!(joined.samples()[1].ml, Some(1.8));
    assert_eq!(joined.samples()[1].bulk_symbols, "Pd");

    let missing = PredictionStore::from_map("mem", HashMap::from([("a".to_string(), 1.1)]));
    assert!(PairSample::join(&ids, &val, &meta, &missing).is_err());
}
