//! Configuration management for the converter
//!
//! Only non-secret settings come from the environment. Seed phrases and
//! keys are read from the files named on the command line.

use crate::pipeline::{DEFAULT_PREVIEW_CHARS, MAX_PREVIEW_CHARS};
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Converter configuration loaded from environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory exports are written to when no output path is given
    pub output_dir: PathBuf,

    /// Characters of a skipped line shown in log output
    pub log_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            log_preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let output_dir = env::var("SEEDCONV_OUTPUT_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let log_preview_chars = match env::var("SEEDCONV_LOG_PREVIEW_CHARS") {
            Ok(v) => parse_preview_chars(&v)?,
            Err(_) => defaults.log_preview_chars,
        };

        Ok(Self {
            output_dir,
            log_preview_chars,
        })
    }

    /// Where to write an export: the explicit path, or `file_name` in the output dir
    pub fn output_path(&self, explicit: Option<&Path>, file_name: &str) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.output_dir.join(file_name),
        }
    }
}

/// Parse a preview length, refusing anything above [`MAX_PREVIEW_CHARS`]
fn parse_preview_chars(value: &str) -> Result<usize> {
    let chars: usize = value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("SEEDCONV_LOG_PREVIEW_CHARS must be a number, got {:?}", value))?;

    if chars > MAX_PREVIEW_CHARS {
        anyhow::bail!(
            "SEEDCONV_LOG_PREVIEW_CHARS must be at most {}, got {}",
            MAX_PREVIEW_CHARS,
            chars
        );
    }

    Ok(chars)
}
