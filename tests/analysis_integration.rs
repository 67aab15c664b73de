//! End-to-end split analysis from a YAML configuration
//!
//! Builds a small OC20-like dataset on disk, loads it through the config
//! layer and checks the written result tables.

use catsplit::analysis::{ModelRun, SplitAnalysis};
use catsplit::cli::LogLevel;
use catsplit::config::load_config;
use catsplit::split::SplitGroup;
use catsplit::Error;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADSORBATES: [&str; 4] = ["*H", "*OH", "*CO", "*NNH"];
const BULKS: [&str; 4] = ["Pt", "Cu", "Ag", "Pd3Ni"];

/// Train covers the first two adsorbates and bulks; val covers all four, so
/// every split group is populated.
fn write_dataset(dir: &Path) -> PathBuf {
    let mut meta = serde_json::Map::new();
    let mut train = String::from("id,target,natoms\n");
    let mut val = String::from("id,target,natoms\n");
    let mut preds = serde_json::Map::new();

    for (i, ads) in ADSORBATES[..2].iter().enumerate() {
        for (j, bulk) in BULKS[..2].iter().enumerate() {
            let id = format!("train_{i}{j}");
            writeln!(train, "{id},{},40", i as f64 - j as f64).unwrap();
            meta.insert(id, serde_json::json!({"ads_symbols": ads, "bulk_symbols": bulk}));
        }
    }

    for (i, ads) in ADSORBATES.iter().enumerate() {
        for (j, bulk) in BULKS.iter().enumerate() {
            for k in 0..3 {
                let id = format!("val_{i}{j}{k}");
                let dft = 0.5 * i as f64 - 0.25 * j as f64 + 0.1 * k as f64;
                let ml = dft + 0.05 * ((i + j + k) % 3) as f64 - 0.05;
                writeln!(val, "{id},{dft},38").unwrap();
                meta.insert(
                    id.clone(),
                    serde_json::json!({"ads_symbols": ads, "bulk_symbols": bulk, "bulk_mpid": "mp-1"}),
                );
                preds.insert(id, serde_json::json!(ml));
            }
        }
    }

    std::fs::write(dir.join("train.csv"), train).unwrap();
    std::fs::write(dir.join("val.csv"), val).unwrap();
    std::fs::write(dir.join("meta.json"), serde_json::Value::Object(meta).to_string()).unwrap();
    std::fs::create_dir_all(dir.join("preds")).unwrap();
    std::fs::write(
        dir.join("preds/val_catbert_100k.json"),
        serde_json::Value::Object(preds).to_string(),
    )
    .unwrap();

    let config = dir.join("analysis.yaml");
    std::fs::write(
        &config,
        format!(
            "data:\n  train: {}\n  val: {}\n  metadata: {}\n  predictions_dir: {}\n\
             output_dir: {}\nsize: 100k\nmodels:\n  - name: catbert\n    head: pooler\n\
             pairs:\n  sample_size: 8\n  seed: 17\nplot:\n  enabled: false\n",
            dir.join("train.csv").display(),
            dir.join("val.csv").display(),
            dir.join("meta.json").display(),
            dir.join("preds").display(),
            dir.join("results").display(),
        ),
    )
    .unwrap();
    config
}

fn load(dir: &Path) -> (SplitAnalysis, ModelRun) {
    let spec = load_config(write_dataset(dir)).unwrap();
    let run = ModelRun::from_spec(&spec.models[0], &spec.size);
    (SplitAnalysis::from_spec(&spec, LogLevel::Quiet).unwrap(), run)
}

#[test]
fn test_split_sizes() {
    let dir = TempDir::new().unwrap();
    let (analysis, _) = load(dir.path());
    let counts = analysis.groups().counts();

    // 2×2 combinations × 3 configurations per quadrant
    assert_eq!(counts.id, 12);
    assert_eq!(counts.ood_ads, 12);
    assert_eq!(counts.ood_cat, 12);
    assert_eq!(counts.ood_both, 12);
    assert_eq!(analysis.val_summary().systems, 48);
    assert_eq!(analysis.train_summary().adsorbates, 2);
}

#[test]
fn test_full_run_writes_tables() {
    let dir = TempDir::new().unwrap();
    let (analysis, run) = load(dir.path());

    let store = analysis.load_predictions(&run).unwrap();
    let splits = analysis.evaluate_splits(&run, &store).unwrap();
    assert_eq!(splits.rows.len(), 5);
    assert!(splits.rows.iter().all(|r| r.metrics.is_some()));

    let pairs = analysis.evaluate_energy_differences(&run, &store).unwrap();
    for row in &pairs.rows {
        assert_eq!(row.samples, 8);
        assert_eq!(row.pairs_total, 28);
        assert!(row.pairs_similar <= row.pairs_total);
    }

    let out = dir.path().join("results/catbert_100k");
    let table = std::fs::read_to_string(out.join("catbert_100k.csv")).unwrap();
    let rows: Vec<_> = table.lines().map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(rows, vec!["split", "entire", "ID", "OOD-ads", "OOD-cat", "OOD-both"]);

    let dde = std::fs::read_to_string(out.join("ddE_catbert_100k.csv")).unwrap();
    assert_eq!(dde.lines().next(), Some("split,r2,mae,rmse,rmse_t,secr"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let (analysis, run) = load(dir.path());

    let store = analysis.load_predictions(&run).unwrap();
    let first = analysis.evaluate_energy_differences(&run, &store).unwrap();
    let second = analysis.evaluate_energy_differences(&run, &store).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_prediction_aborts_model() {
    let dir = TempDir::new().unwrap();
    let (analysis, run) = load(dir.path());

    let path = analysis.prediction_path(&run);
    let mut preds: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let victim = analysis.groups().get(SplitGroup::OodBoth)[0].clone();
    preds.remove(&victim);
    std::fs::write(&path, serde_json::Value::Object(preds).to_string()).unwrap();

    let store = analysis.load_predictions(&run).unwrap();
    match analysis.evaluate_splits(&run, &store).unwrap_err() {
        Error::MissingPrediction { id, path: p } => {
            assert_eq!(id, victim);
            assert_eq!(p, path);
        }
        other => panic!("unexpected error: {other}"),
    }
}
