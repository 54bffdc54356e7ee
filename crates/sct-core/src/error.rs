//! Toolkit error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or keep them separate.  Prefer whichever
//! keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `sct-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `sct-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
