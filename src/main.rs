//! Catsplit CLI
//!
//! Split-based error analysis for adsorption-energy models.
//!
//! # Usage
//!
//! ```bash
//! # Analyze every configured model
//! catsplit analyze analysis.yaml
//!
//! # Analyze one model with a different seed, no plots
//! catsplit analyze analysis.yaml --model catbert --seed 3 --no-plots
//!
//! # Show split sizes
//! catsplit splits analysis.yaml --format json
//!
//! # Validate config
//! catsplit validate analysis.yaml
//!
//! # Match checkpoint keys
//! catsplit checkpoint model.safetensors pretrained.safetensors --backbone
//! ```

use catsplit::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
