//! Run configuration.
//!
//! Settings come from three layers, each overriding the one before it:
//!
//! ```text
//! stock defaults            (FetchConfig::default)
//!   ← web-images.toml       (optional, or the file named by --config)
//!     ← command-line flags  (only the flags actually given)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//! output_dir = "web-images"  # Where compressed images are written
//! format = "webp"            # webp, jpeg or png
//! quality = 80               # WebP/JPEG quality (0-100), ignored for PNG
//! max_width = 1600           # Downscale wider images (0 = no cap)
//! max_height = 1600          # Downscale taller images (0 = no cap)
//! force = false              # Re-download even when the output exists
//! timeout_secs = 30          # Per-request timeout
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::sources::SourceEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "web-images.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Encoding used for every output file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Webp,
    Jpeg,
    Png,
}

impl OutputFormat {
    /// File extension, which is also the lowercase format name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }

    /// Lossy formats honour `quality` and cannot keep the source alpha as-is.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Webp | OutputFormat::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything a run needs besides the source list.
///
/// All fields have defaults, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Directory receiving `<slug>.<format>` files. Created if missing.
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Encoder quality for WebP/JPEG, 0-100.
    pub quality: u32,
    /// Width cap in pixels; 0 leaves the width unconstrained.
    pub max_width: u32,
    /// Height cap in pixels; 0 leaves the height unconstrained.
    pub max_height: u32,
    /// Re-download and overwrite outputs that already exist.
    pub force: bool,
    /// Timeout applied to each HTTP request.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("web-images"),
            format: OutputFormat::Webp,
            quality: 80,
            max_width: 1600,
            max_height: 1600,
            force: false,
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quality > 100 {
            return Err(ConfigError::Validation("quality must be 0-100".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Output path for an entry: `output_dir/<slug>.<format>`.
    pub fn destination_for(&self, entry: &SourceEntry) -> PathBuf {
        let slug = crate::naming::slugify(entry.label);
        self.output_dir
            .join(format!("{}.{}", slug, self.format.extension()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Values given on the command line. Only flags that were actually passed
/// end up in the overlay, so they never clobber config-file values with
/// defaults.
#[derive(Debug, Clone, Default, Serialize, clap::Args)]
pub struct ConfigOverrides {
    /// Directory where the compressed images are stored (created automatically)
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Target format for the compressed images [default: webp]
    #[arg(long, value_enum, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Compression quality for WebP/JPEG, ignored for PNG [default: 80]
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,

    /// Downscale images wider than this, 0 disables the cap [default: 1600]
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,

    /// Downscale images taller than this, 0 disables the cap [default: 1600]
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,

    /// Redownload and recompress even when the target file already exists
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force: bool,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long = "timeout", global = true)]
    #[serde(rename = "timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    pub fn to_toml_value(&self) -> Result<toml::Value, ConfigError> {
        Ok(toml::Value::try_from(self)?)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(FetchConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file that must exist.
pub fn read_config_file(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Read a config file if it exists.
///
/// Returns `Ok(None)` when there is no file at `path`, and `Err` when the file
/// exists but is not valid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    read_config_file(path).map(Some)
}

/// Merge overlays in order onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<FetchConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: FetchConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Build the effective config for a run.
///
/// An explicit `config_file` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
/// in `working_dir` is used when present.
pub fn load_config(
    working_dir: &Path,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<FetchConfig, ConfigError> {
    let file_layer = match config_file {
        Some(path) => Some(read_config_file(path)?),
        None => load_raw_config(&working_dir.join(DEFAULT_CONFIG_FILE))?,
    };
    let cli_layer = overrides.to_toml_value()?;
    resolve_config(
        stock_defaults_value()?,
        file_layer.into_iter().chain(std::iter::once(cli_layer)),
    )
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# web-images configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Directory where the compressed images are stored. Created if missing.
output_dir = "web-images"

# Target format: "webp", "jpeg" or "png".
format = "webp"

# Encoding quality for WebP/JPEG (0 = worst, 100 = best). Ignored for PNG.
quality = 80

# Images larger than this box are downscaled, keeping their aspect ratio.
# Set either value to 0 to leave that axis unconstrained.
max_width = 1600
max_height = 1600

# Re-download and overwrite images that already exist in output_dir.
force = false

# Timeout for each download, in seconds.
timeout_secs = 30
"##
}
