//! Configuration types for repbench.
//!
//! [`Config::load`] layers `~/.config/repbench/config.toml` (and optionally an
//! explicit file) on top of the embedded defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::emit::TableFormat;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[scanner]
header_pattern = 'hg\d{2}/chr.*\.fa'

[output]
path      = "running_time.csv"
delimiter = ","
header    = true
missing   = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scanner]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Regex whose first match on a line is taken as the job key.
    #[serde(default = "default_header_pattern")]
    pub header_pattern: String,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Where the timing table goes. `-` means stdout.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_header")]
    pub header: bool,
    #[serde(default)]
    pub missing: String,
}

fn default_header_pattern() -> String { crate::scanner::DEFAULT_HEADER_PATTERN.to_string() }
fn default_output_path() -> PathBuf { PathBuf::from("running_time.csv") }
fn default_delimiter() -> String { ",".to_string() }
fn default_header() -> bool { true }

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            header_pattern: default_header_pattern(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            delimiter: default_delimiter(),
            header: default_header(),
            missing: String::new(),
        }
    }
}

impl OutputConfig {
    /// The emitter layout this section describes.
    pub fn table_format(&self) -> Result<TableFormat, ConfigError> {
        let delimiter = match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => return Err(ConfigError::Delimiter(self.delimiter.clone())),
        };
        Ok(TableFormat {
            delimiter,
            header: self.header,
            missing: self.missing.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config file, then `explicit` if given, on top of the
    /// built-in defaults. The user file is optional; `explicit` is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(user_config_path().as_deref(), explicit)
    }

    /// [`Config::load`] with the user config path supplied by the caller.
    fn load_from(user: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = user {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("repbench").join("config.toml"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
