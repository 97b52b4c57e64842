//! Error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that may occur when loading a sheet configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid TOML or has fields of the wrong type.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `max_fraction` must be in (0, 1].
    #[error("max_fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),

    /// A duration that must be nonzero was zero.
    #[error("{0} must be nonzero")]
    InvalidDuration(&'static str),
}
