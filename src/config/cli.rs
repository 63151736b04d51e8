//! CLI argument parsing using clap

use super::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// tracegen - distribution-weighted workload trace generator
///
/// Streams candidates (lines or JSON values from a file, or integers) where
/// each candidate's selection probability comes from a parametric
/// distribution.
#[derive(Parser, Debug)]
#[command(name = "tracegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI options take precedence)
    #[arg(short = 'c', long, env = "TRACEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    // === Distribution Options ===
    /// Distribution: pareto, uniform, exp/exponential, weibull, poisson
    #[arg(short = 'D', long)]
    pub distribution: Option<String>,

    /// Distribution parameter (repeat for each; wrong count uses defaults)
    #[arg(short = 'p', long = "param", allow_negative_numbers = true)]
    pub params: Vec<f64>,

    /// Seed for a reproducible stream
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output channel capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    // === Candidate Options ===
    /// Candidate file (JSON array, or one candidate per line)
    #[arg(value_name = "CANDIDATES")]
    pub candidates: Option<PathBuf>,

    /// Use the integers 0..SIZE as candidates
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    // === Output Options ===
    /// Number of items to emit
    #[arg(short = 'k', long)]
    pub count: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Print per-candidate frequencies instead of the stream
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// One JSON value per line
    Json,
    /// Plain text
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(name) = &self.distribution {
            if !crate::distribution::is_valid_distribution(name) {
                anyhow::bail!(
                    "unknown distribution '{}' (expected one of: {})",
                    name,
                    crate::distribution::VALID_DISTRIBUTIONS.join(", ")
                );
            }
        }

        if self.capacity == Some(0) {
            anyhow::bail!("capacity must be at least 1");
        }

        if self.size == Some(0) && self.candidates.is_none() {
            anyhow::bail!("size must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let cli = Cli::parse_from(["tracegen", "-D", "uniform", "-p", "0", "-p", "10", "-n", "5"]);
        assert_eq!(cli.distribution.as_deref(), Some("uniform"));
        assert_eq!(cli.params, vec![0.0, 10.0]);
        assert_eq!(cli.size, Some(5));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_distribution() {
        let cli = Cli::parse_from(["tracegen", "--distribution", "gaussian"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zipf_passes_name_validation() {
        // Valid name; construction fails later with "not implemented"
        let cli = Cli::parse_from(["tracegen", "--distribution", "ZIPF"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_capacity() {
        let cli = Cli::parse_from(["tracegen", "--capacity", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_candidate_file_positional() {
        let cli = Cli::parse_from(["tracegen", "models.json", "--summary", "--format", "text"]);
        assert_eq!(cli.candidates, Some(PathBuf::from("models.json")));
        assert!(cli.summary);
        assert!(matches!(cli.format, Some(FormatArg::Text)));
    }
}
