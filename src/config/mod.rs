//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! The sampling core never reads configuration itself; [`GeneratorConfig`]
//! is turned into a [`Generator`] by [`GeneratorConfig::build`].

pub mod cli;
pub mod toml;
pub mod validator;

use crate::error::SamplerError;
use crate::generator::{Generator, DEFAULT_CHANNEL_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub candidates: CandidateConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Distribution and stream settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Distribution name (case-insensitive)
    #[serde(default = "default_distribution")]
    pub distribution: String,
    /// Distribution parameters; wrong arity falls back to defaults
    #[serde(default)]
    pub params: Vec<f64>,
    /// Seed for fully reproducible streams
    pub seed: Option<u64>,
    /// Output channel capacity
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_distribution() -> String {
    "pareto".to_string()
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            distribution: default_distribution(),
            params: Vec::new(),
            seed: None,
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl GeneratorConfig {
    /// Construct a generator from this configuration
    pub fn build(&self) -> Result<Generator, SamplerError> {
        let generator = match self.seed {
            Some(seed) => Generator::with_seed(&self.distribution, &self.params, seed)?,
            None => Generator::new(&self.distribution, &self.params)?,
        };
        Ok(generator.with_capacity(self.channel_capacity))
    }
}

/// Where candidates come from
///
/// A file takes precedence over `size`. With neither, candidates are the
/// integers `0..DEFAULT_CANDIDATE_COUNT`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// JSON array or newline-separated list of candidates
    pub path: Option<PathBuf>,
    /// Use the integers `0..size` as candidates
    pub size: Option<usize>,
}

/// Number of integer candidates used when nothing else is configured
pub const DEFAULT_CANDIDATE_COUNT: usize = 41;

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of items to drain from the stream
    #[serde(default = "default_count")]
    pub count: u64,
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Print per-candidate frequencies instead of the stream
    #[serde(default)]
    pub summary: bool,
}

fn default_count() -> u64 {
    1000
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            format: OutputFormat::default(),
            summary: false,
        }
    }
}

/// How streamed candidates are printed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON value per line
    #[default]
    Json,
    /// Plain text; strings are printed without quotes
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.distribution)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
            write!(f, "({})", params.join(", "))?;
        }
        if let Some(seed) = self.seed {
            write!(f, " seed={}", seed)?;
        }
        write!(f, " capacity={}", self.channel_capacity)
    }
}
