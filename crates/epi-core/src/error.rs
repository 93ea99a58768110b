//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `epi-core`.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `epi-core`.
pub type EpiResult<T> = Result<T, EpiError>;
