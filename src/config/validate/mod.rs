//! Configuration validation
//!
//! Validates analysis specifications for correctness before execution.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, validate_paths};
