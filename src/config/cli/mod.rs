//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! catsplit analyze analysis.yaml
//! catsplit analyze analysis.yaml --model catbert --seed 3 --no-plots
//! catsplit splits analysis.yaml --format json
//! catsplit validate analysis.yaml --detailed
//! catsplit checkpoint model.safetensors pretrained.safetensors --backbone
//! ```

mod core;
mod types;

pub use core::{
    apply_overrides, parse_args, AnalyzeArgs, CheckpointArgs, Cli, Command, SplitsArgs,
    ValidateArgs,
};
pub use types::OutputFormat;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalysisSpec, DataPaths, ModelSpec, PairParams, PlotParams};
    use crate::plot::PlotKind;
    use std::path::PathBuf;

    #[test]
    fn test_parse_analyze_command() {
        let cli = parse_args(["catsplit", "analyze", "analysis.yaml"]).unwrap();
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.config, PathBuf::from("analysis.yaml"));
                assert!(args.model.is_empty());
                assert!(!args.no_plots);
                assert!(!args.skip_pairs);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_parse_analyze_with_overrides() {
        let cli = parse_args([
            "catsplit",
            "analyze",
            "analysis.yaml",
            "--model",
            "catbert",
            "--model",
            "schnet",
            "--sample-size",
            "40",
            "--seed",
            "5",
            "--plot-kind",
            "scatter",
            "--output-dir",
            "./out",
            "--no-plots",
        ])
        .unwrap();

        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.model, vec!["catbert", "schnet"]);
                assert_eq!(args.sample_size, Some(40));
                assert_eq!(args.seed, Some(5));
                assert_eq!(args.plot_kind, Some(PlotKind::Scatter));
                assert_eq!(args.output_dir, Some(PathBuf::from("./out")));
                assert!(args.no_plots);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_parse_splits_json_format() {
        let cli = parse_args(["catsplit", "splits", "analysis.yaml", "--format", "json"]).unwrap();
        match cli.command {
            Command::Splits(args) => assert_eq!(args.format, OutputFormat::Json),
            _ => panic!("Expected Splits command"),
        }
    }

    #[test]
    fn test_parse_validate_detailed() {
        let cli = parse_args(["catsplit", "validate", "analysis.yaml", "--detailed"]).unwrap();
        match cli.command {
            Command::Validate(args) => assert!(args.detailed),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_checkpoint_command() {
        let cli = parse_args([
            "catsplit",
            "checkpoint",
            "model.safetensors",
            "ckpt.safetensors",
            "--backbone",
        ])
        .unwrap();
        match cli.command {
            Command::Checkpoint(args) => {
                assert_eq!(args.model, PathBuf::from("model.safetensors"));
                assert_eq!(args.checkpoint, PathBuf::from("ckpt.safetensors"));
                assert!(args.backbone);
            }
            _ => panic!("Expected Checkpoint command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["catsplit", "-v", "splits", "analysis.yaml"]).unwrap();
        assert!(cli.verbose && !cli.quiet);
        let cli = parse_args(["catsplit", "splits", "analysis.yaml", "--quiet"]).unwrap();
        assert!(!cli.verbose && cli.quiet);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse_args(["catsplit", "analyze"]).is_err());
        assert!(parse_args(["catsplit", "unknown"]).is_err());
        assert!(parse_args(["catsplit", "splits", "a.yaml", "--format", "xml"]).is_err());
        assert!(parse_args(["catsplit", "analyze", "a.yaml", "--plot-kind", "pie"]).is_err());
    }

    #[test]
    fn test_output_format_case_insensitive() {
        for s in ["text", "TEXT", "Json", "yaml"] {
            assert!(s.parse::<OutputFormat>().is_ok());
        }
    }

    fn create_test_spec() -> AnalysisSpec {
        AnalysisSpec {
            data: DataPaths {
                train: PathBuf::from("train.csv"),
                val: PathBuf::from("val.csv"),
                metadata: PathBuf::from("meta.json"),
                predictions_dir: PathBuf::from("preds"),
                prediction_prefix: "val".to_string(),
            },
            output_dir: PathBuf::from("./results"),
            size: "100k".to_string(),
            models: vec![
                ModelSpec::named("catbert"),
                ModelSpec::named("cgcnn"),
                ModelSpec::named("schnet"),
            ],
            pairs: PairParams::default(),
            plot: PlotParams::default(),
        }
    }

    fn empty_args() -> AnalyzeArgs {
        AnalyzeArgs {
            config: PathBuf::from("analysis.yaml"),
            model: vec![],
            output_dir: None,
            sample_size: None,
            seed: None,
            no_plots: false,
            skip_pairs: false,
            plot_kind: None,
        }
    }

    #[test]
    fn test_apply_overrides_none_keeps_spec() {
        let mut spec = create_test_spec();
        apply_overrides(&mut spec, &empty_args());
        assert_eq!(spec, create_test_spec());
    }

    #[test]
    fn test_apply_overrides_all() {
        let mut spec = create_test_spec();
        let args = AnalyzeArgs {
            model: vec!["schnet".to_string(), "catbert".to_string()],
            output_dir: Some(PathBuf::from("./custom")),
            sample_size: Some(25),
            seed: Some(99),
            no_plots: true,
            plot_kind: Some(PlotKind::Scatter),
            ..empty_args()
        };
        apply_overrides(&mut spec, &args);
        assert_eq!(spec.output_dir, PathBuf::from("./custom"));
        assert_eq!(spec.pairs, PairParams { sample_size: 25, seed: 99 });
        assert!(!spec.plot.enabled);
        assert_eq!(spec.plot.kind, PlotKind::Scatter);
        let names: Vec<_> = spec.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["catbert", "schnet"]);
    }
}
