//! Errors raised when parsing names of platforms, nouns and trends.
//!
//! The formatting functions themselves never fail.

use thiserror::Error;

/// Invalid value found in configuration or user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown noun: {0}")]
    UnknownNoun(String),

    #[error("unknown trend value: {0}")]
    UnknownTrend(String),
}

pub type FormatResult<T> = Result<T, FormatError>;
