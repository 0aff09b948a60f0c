//! Structured error types for trivia-core.
//!
//! Binary crates wrap these with `anyhow`; the server maps them onto its
//! two HTTP error shapes.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading failed
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::TriviaConfig`]
    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Bind address could not be parsed
    #[error("invalid bind address '{value}'")]
    InvalidBind { value: String },
}

/// Quiz request could not be turned into a candidate scope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Category descriptor without a `type`
    #[error("quiz category has no type")]
    MissingType,

    /// A specific category was requested without an id
    #[error("quiz category '{kind}' has no id")]
    MissingCategoryId { kind: String },
}
