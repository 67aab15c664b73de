//! Split and energy-difference analysis over one train/validation pair

use super::model_run::ModelRun;
use crate::cli::{log, LogLevel};
use crate::config::{AnalysisSpec, PairParams};
use crate::data::{MetadataStore, PredictionStore, Sample, SampleTable};
use crate::error::{Error, Result};
use crate::eval::{PairReport, PairRow, RegressionMetrics, Secr, SplitReport, SplitRow};
use crate::pairs::{sample_group, PairCategory, PairGroups, PairSample};
use crate::plot::{ParityPlot, PlotStyle};
use crate::split::{CompositionSets, CompositionSummary, SplitGroup, SplitGroups};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Row name of the whole validation set.
pub const ENTIRE: &str = "entire";

const ENERGY: &str = "ΔE";
const ENERGY_DIFFERENCE: &str = "ΔΔE";

/// Where to read predictions, where to write results, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Root of the `{model}_{size}` result directories
    pub output_dir: PathBuf,
    /// Directory of prediction files
    pub predictions_dir: PathBuf,
    /// Prediction file name prefix
    pub prediction_prefix: String,
    /// Sampling parameters of the energy-difference analysis
    pub pairs: PairParams,
    /// Plot style, `None` to skip plots
    pub plot: Option<PlotStyle>,
    /// Output verbosity
    pub log_level: LogLevel,
}

impl AnalysisOptions {
    /// Options taken from a loaded configuration.
    pub fn from_spec(spec: &AnalysisSpec, log_level: LogLevel) -> Self {
        Self {
            output_dir: spec.output_dir.clone(),
            predictions_dir: spec.data.predictions_dir.clone(),
            prediction_prefix: spec.data.prediction_prefix.clone(),
            pairs: spec.pairs,
            plot: spec.plot.enabled.then(|| spec.plot.style()),
            log_level,
        }
    }
}

/// ID / OOD analysis of a validation set against its training set.
///
/// Composition sets and split groups are computed once in [`SplitAnalysis::new`]
/// and only read afterwards; every model run borrows the same partition.
#[derive(Debug, Clone)]
pub struct SplitAnalysis {
    val: SampleTable,
    metadata: MetadataStore,
    sets: CompositionSets,
    groups: SplitGroups,
    train_summary: CompositionSummary,
    val_summary: CompositionSummary,
    options: AnalysisOptions,
}

impl SplitAnalysis {
    /// Build the composition sets of `train` and classify every id of `val`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingMetadata`] if any train or validation id has
    /// no metadata entry.
    pub fn new(
        train: &SampleTable,
        val: SampleTable,
        metadata: MetadataStore,
        options: AnalysisOptions,
    ) -> Result<Self> {
        let sets = CompositionSets::from_table(train, &metadata)?;
        let train_summary = CompositionSummary {
            adsorbates: sets.ads_list().len(),
            bulks: sets.bulk_list().len(),
            systems: train.len(),
        };
        let val_summary = CompositionSummary::of(&val, &metadata)?;
        let groups = SplitGroups::classify(&sets, &val, &metadata)?;

        let level = options.log_level;
        log(level, LogLevel::Normal, "------ System Analysis (train) ------");
        log(level, LogLevel::Normal, &train_summary.to_string());
        log(level, LogLevel::Normal, "------ System Analysis (val) ------");
        log(level, LogLevel::Normal, &val_summary.to_string());
        log(level, LogLevel::Normal, "--------- Split Analysis ---------");
        log(level, LogLevel::Normal, &groups.counts().to_string());

        Ok(Self {
            val,
            metadata,
            sets,
            groups,
            train_summary,
            val_summary,
            options,
        })
    }

    /// Load the tables and metadata named in a configuration.
    pub fn from_spec(spec: &AnalysisSpec, log_level: LogLevel) -> Result<Self> {
        let train = SampleTable::load_csv(&spec.data.train)?;
        let val = SampleTable::load_csv(&spec.data.val)?;
        let metadata = MetadataStore::load(&spec.data.metadata)?;
        Self::new(
            &train,
            val,
            metadata,
            AnalysisOptions::from_spec(spec, log_level),
        )
    }

    /// Composition sets of the training table.
    pub fn composition_sets(&self) -> &CompositionSets {
        &self.sets
    }

    /// Four-way partition of the validation ids.
    pub fn groups(&self) -> &SplitGroups {
        &self.groups
    }

    /// Label diversity of the training table.
    pub fn train_summary(&self) -> CompositionSummary {
        self.train_summary
    }

    /// Label diversity of the validation table.
    pub fn val_summary(&self) -> CompositionSummary {
        self.val_summary
    }

    /// Options the analysis was built with.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Prediction file of a run.
    pub fn prediction_path(&self, run: &ModelRun) -> PathBuf {
        PredictionStore::locate(
            &self.options.predictions_dir,
            &self.options.prediction_prefix,
            &run.name,
            &run.size,
        )
    }

    /// Load the predictions of a run.
    ///
    /// The store is shared by [`SplitAnalysis::evaluate_splits`] and
    /// [`SplitAnalysis::evaluate_energy_differences`].
    ///
    /// # Errors
    ///
    /// Fails for classification heads and unreadable prediction files.
    pub fn load_predictions(&self, run: &ModelRun) -> Result<PredictionStore> {
        run.ensure_regression()?;
        PredictionStore::load(self.prediction_path(run))
    }

    /// Join every validation sample with its composition and prediction.
    ///
    /// # Errors
    ///
    /// Fails on the first validation id missing from the prediction store.
    pub fn join_predictions(&self, predictions: &PredictionStore) -> Result<Vec<Sample>> {
        self.val
            .rows()
            .iter()
            .map(|row| {
                let comp = self.metadata.get(&row.id)?;
                let ml = predictions.get(&row.id)?;
                Ok(Sample::new(row.id.clone(), comp, row.target).with_prediction(ml))
            })
            .collect()
    }

    /// Create `{output_dir}/{model}_{size}` if missing.
    pub fn save_directory(&self, run: &ModelRun) -> Result<PathBuf> {
        let dir = self.options.output_dir.join(run.stem());
        fs::create_dir_all(&dir).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to create output directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(dir)
    }

    /// Parity metrics of the entire validation set and each split group.
    ///
    /// Writes parity plots to `dir` when plotting is enabled.
    pub fn split_report(
        &self,
        run: &ModelRun,
        predictions: &PredictionStore,
        dir: &Path,
    ) -> Result<SplitReport> {
        let joined = self.join_predictions(predictions)?;
        let by_id: HashMap<&str, &Sample> = joined.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut report = SplitReport::default();
        let everything: Vec<&Sample> = joined.iter().collect();
        report.push(self.split_row(run, ENTIRE, "Entire data", &everything, dir)?);

        for group in SplitGroup::ALL {
            let members: Vec<&Sample> = self
                .groups
                .get(group)
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect();
            report.push(self.split_row(run, group.name(), group.name(), &members, dir)?);
        }

        Ok(report)
    }

    fn split_row(
        &self,
        run: &ModelRun,
        split: &str,
        title: &str,
        samples: &[&Sample],
        dir: &Path,
    ) -> Result<SplitRow> {
        let (truth, predicted): (Vec<f64>, Vec<f64>) = samples
            .iter()
            .filter_map(|s| s.ml.map(|ml| (s.dft, ml)))
            .unzip();

        let metrics = metrics_if_any(&truth, &predicted)?;
        if metrics.is_some() {
            let path = dir.join(format!("{split}.png"));
            self.render(run, &path, title, ENERGY, &truth, &predicted)?;
        } else {
            self.warn(&format!("Split {split} is empty; metrics are undefined"));
        }

        Ok(SplitRow {
            split: split.to_string(),
            samples: truth.len(),
            metrics,
        })
    }

    /// Evaluate a run on the entire validation set and each split group.
    ///
    /// Writes `{model}_{size}.csv` and the parity plots into the run's
    /// output directory.
    pub fn evaluate_splits(
        &self,
        run: &ModelRun,
        predictions: &PredictionStore,
    ) -> Result<SplitReport> {
        run.ensure_regression()?;
        let dir = self.save_directory(run)?;

        let report = self.split_report(run, predictions, &dir)?;
        let path = dir.join(format!("{}.csv", run.stem()));
        report.write_csv(&path)?;

        log(self.options.log_level, LogLevel::Normal, &report.to_string());
        log(
            self.options.log_level,
            LogLevel::Verbose,
            &format!("  Saved {}", path.display()),
        );
        Ok(report)
    }

    /// Energy-difference metrics of each split group.
    ///
    /// Each group is sampled with the configured size and seed, paired, and
    /// scored on the chemically similar pool against the entire pool.
    pub fn pair_report(
        &self,
        run: &ModelRun,
        predictions: &PredictionStore,
        dir: &Path,
    ) -> Result<PairReport> {
        let PairParams { sample_size, seed } = self.options.pairs;
        let level = self.options.log_level;
        let mut report = PairReport::default();

        for group in SplitGroup::ALL {
            log(level, LogLevel::Normal, &format!("============ {group} ============"));

            let ids = self.groups.get(group);
            if ids.len() < sample_size {
                self.warn(&format!(
                    "{group} holds {} samples, fewer than {sample_size}; using all of them",
                    ids.len()
                ));
            }
            let sampled = sample_group(ids, sample_size, seed);
            let sample = PairSample::join(&sampled, &self.val, &self.metadata, predictions)?;
            let pairs = PairGroups::build(&sample);

            for category in PairCategory::ALL {
                log(
                    level,
                    LogLevel::Verbose,
                    &format!("  {category}: {} pairs", pairs.bucket(category).len()),
                );
            }

            let (dft_entire, ml_entire) = PairGroups::columns(pairs.entire());
            let entire = metrics_if_any(&dft_entire, &ml_entire)?;
            if entire.is_some() {
                let path = dir.join(format!("ddE_{group}_entire.png"));
                let title = format!("Entire {group}");
                self.render(run, &path, &title, ENERGY_DIFFERENCE, &dft_entire, &ml_entire)?;
            }

            let (dft_similar, ml_similar) = PairGroups::columns(pairs.similar());
            let similar = metrics_if_any(&dft_similar, &ml_similar)?;
            if similar.is_some() {
                let path = dir.join(format!("ddE_{group}_similar.png"));
                self.render(
                    run,
                    &path,
                    group.name(),
                    ENERGY_DIFFERENCE,
                    &dft_similar,
                    &ml_similar,
                )?;
            }

            // unrelated pairs stay in the denominator
            let rmse_total = entire.map(|m| m.rmse);
            let secr = Secr::compute(similar.map(|m| m.rmse), rmse_total);
            if !secr.is_defined() {
                self.warn(&format!("SECR of {group} is {secr}"));
            }

            report.push(PairRow {
                split: group.name().to_string(),
                samples: sample.len(),
                pairs_total: pairs.total_len(),
                pairs_similar: pairs.similar_len(),
                similar,
                rmse_total,
                secr,
            });
        }

        Ok(report)
    }

    /// Run the energy-difference analysis for a run.
    ///
    /// Writes `ddE_{model}_{size}.csv` and the pair parity plots into the
    /// run's output directory.
    pub fn evaluate_energy_differences(
        &self,
        run: &ModelRun,
        predictions: &PredictionStore,
    ) -> Result<PairReport> {
        run.ensure_regression()?;
        let dir = self.save_directory(run)?;

        let report = self.pair_report(run, predictions, &dir)?;
        let path = dir.join(format!("ddE_{}.csv", run.stem()));
        report.write_csv(&path)?;

        log(self.options.log_level, LogLevel::Normal, &report.to_string());
        log(
            self.options.log_level,
            LogLevel::Verbose,
            &format!("  Saved {}", path.display()),
        );
        Ok(report)
    }

    fn render(
        &self,
        run: &ModelRun,
        path: &Path,
        title: &str,
        quantity: &str,
        truth: &[f64],
        predicted: &[f64],
    ) -> Result<()> {
        let Some(style) = &self.options.plot else {
            return Ok(());
        };
        ParityPlot {
            title: title.to_string(),
            xlabel: format!("DFT {quantity} [eV]"),
            ylabel: format!("{} {quantity} [eV]", run.display_title()),
            truth,
            predicted,
        }
        .render(path, style)?;
        log(
            self.options.log_level,
            LogLevel::Verbose,
            &format!("  Plotted {}", path.display()),
        );
        Ok(())
    }

    fn warn(&self, msg: &str) {
        log(self.options.log_level, LogLevel::Normal, &format!("Warning: {msg}"));
    }
}

fn metrics_if_any(truth: &[f64], predicted: &[f64]) -> Result<Option<RegressionMetrics>> {
    if truth.is_empty() {
        Ok(None)
    } else {
        RegressionMetrics::compute(truth, predicted).map(Some)
    }
}
