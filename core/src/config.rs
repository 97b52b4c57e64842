//! Sheet configuration.
//!
//! ```toml
//! max_fraction = 0.8
//! frame_interval_ms = 16
//!
//! [animation]
//! easing = "smooth"
//! duration_ms = 350
//! ```
//!
//! Every key is optional.

use crate::animation::{Animation, Easing};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Animation settings for animated height changes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub easing: Easing,
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            easing: Easing::Smooth,
            duration_ms: Animation::DEFAULT_DURATION.as_millis() as u64,
        }
    }
}

impl AnimationConfig {
    pub fn animation(&self) -> Animation {
        Animation::new(self.easing, Duration::from_millis(self.duration_ms))
    }
}

/// Configuration for a dynamically sized sheet.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Largest share of the display height the sheet may take.
    pub max_fraction: f64,

    /// Time between animation frames.
    pub frame_interval_ms: u64,

    pub animation: AnimationConfig,
}

impl SheetConfig {
    pub const DEFAULT_MAX_FRACTION: f64 = 0.8;
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

    /// Parses and validates a configuration.
    pub fn from_toml_str(source: &str) -> Result<SheetConfig, ConfigError> {
        let config: SheetConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<SheetConfig, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = SheetConfig::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded sheet configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // also rejects NaN
        if !(self.max_fraction > 0. && self.max_fraction <= 1.) {
            return Err(ConfigError::InvalidFraction(self.max_fraction));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidDuration("frame_interval_ms"));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn animation(&self) -> Animation {
        self.animation.animation()
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            max_fraction: Self::DEFAULT_MAX_FRACTION,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            animation: AnimationConfig::default(),
        }
    }
}
