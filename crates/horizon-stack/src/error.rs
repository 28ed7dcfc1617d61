//! Error types for the stack crate.
//!
//! The mutation API on [`Stack`](crate::Stack) never fails: invalid indexes
//! and unknown anchors degrade to no-ops. Errors only surface where the crate
//! touches the outside world, which is configuration loading and saving.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving a [`StackConfig`](crate::StackConfig).
#[derive(Error, Debug)]
pub enum StackError {
    /// The configuration file could not be read or written.
    #[error("configuration file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for a stack configuration.
    #[error("invalid stack configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be encoded as TOML.
    #[error("failed to serialize stack configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A value parsed but is outside the range the stack accepts.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for configuration operations.
pub type StackResult<T> = Result<T, StackError>;
