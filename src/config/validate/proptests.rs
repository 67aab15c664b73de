//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::model::HeadType;
use crate::plot::PlotKind;
use proptest::prelude::*;
use std::path::PathBuf;

fn arb_regression_head() -> impl Strategy<Value = Option<HeadType>> {
    prop_oneof![
        Just(None),
        Just(Some(HeadType::Pooler)),
        Just(Some(HeadType::Mlp)),
        Just(Some(HeadType::Mlp2)),
        Just(Some(HeadType::AttnHead)),
        Just(Some(HeadType::ConcatLayer)),
    ]
}

fn arb_valid_spec() -> impl Strategy<Value = AnalysisSpec> {
    (
        proptest::collection::btree_set("[a-z][a-z0-9]{0,9}", 1..6), // model names
        arb_regression_head(),
        2usize..5000,                                               // sample_size
        any::<u64>(),                                               // seed
        (-50.0f64..0.0, 0.1f64..50.0),                              // limits
        1usize..200,                                                // gridsize
        any::<bool>(),                                              // plot.enabled
    )
        .prop_map(|(names, head, sample_size, seed, (lo, hi), gridsize, enabled)| AnalysisSpec {
            data: DataPaths {
                train: PathBuf::from("train.csv"),
                val: PathBuf::from("val.csv"),
                metadata: PathBuf::from("meta.json"),
                predictions_dir: PathBuf::from("preds"),
                prediction_prefix: "val".to_string(),
            },
            output_dir: PathBuf::from("results"),
            size: "100k".to_string(),
            models: names
                .into_iter()
                .map(|name| ModelSpec { name, head, title: None })
                .collect(),
            pairs: PairParams { sample_size, seed },
            plot: PlotParams {
                enabled,
                kind: PlotKind::Hexbin,
                limits: [lo, hi],
                gridsize,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_small_sample_size_fails(spec in arb_valid_spec(), n in 0usize..2) {
        let mut spec = spec;
        spec.pairs.sample_size = n;
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::InvalidSampleSize(m)) if m == n),
            "unexpected validation result: {:?}",
            result
        );
    }

    #[test]
    fn prop_inverted_limits_fail(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.plot.limits = [spec.plot.limits[1], spec.plot.limits[0]];
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::InvalidPlotLimits(_, _))),
            "unexpected validation result: {:?}",
            result
        );
    }

    #[test]
    fn prop_zero_gridsize_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.plot.gridsize = 0;
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::InvalidGridSize(0))),
            "unexpected validation result: {:?}",
            result
        );
    }

    #[test]
    fn prop_duplicated_model_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        let first = spec.models[0].clone();
        spec.models.push(first);
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::DuplicateModel(_))),
            "unexpected validation result: {:?}",
            result
        );
    }

    #[test]
    fn prop_classification_head_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        let last = spec.models.len() - 1;
        spec.models[last].head = Some(HeadType::MultiLabel);
        let result = validate_config(&spec);
        prop_assert!(
            matches!(result, Err(ValidationError::ClassificationHead { .. })),
            "unexpected validation result: {:?}",
            result
        );
    }
}
