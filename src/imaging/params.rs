//! Parameter types for image operations.
//!
//! These structs describe *what* to produce, not *how*. The pipeline builds
//! them from [`FetchConfig`](crate::config::FetchConfig) and hands them to the
//! pure functions in [`operations`](super::operations) and the encoders in
//! [`codec`](super::codec).

use crate::config::{FetchConfig, OutputFormat};

/// Quality setting for lossy image encoding (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Maximum output size. A zero side is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeLimit {
    pub max_width: u32,
    pub max_height: u32,
}

/// Full description of the transform + encode applied to one downloaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeParams {
    pub format: OutputFormat,
    pub quality: Quality,
    pub limit: SizeLimit,
}

impl EncodeParams {
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            format: config.format,
            quality: Quality::new(config.quality),
            limit: SizeLimit {
                max_width: config.max_width,
                max_height: config.max_height,
            },
        }
    }
}
