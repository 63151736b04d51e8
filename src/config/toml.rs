//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(distribution) = &cli.distribution {
        config.generator.distribution = distribution.clone();
    }
    if !cli.params.is_empty() {
        config.generator.params = cli.params.clone();
    }
    if let Some(seed) = cli.seed {
        config.generator.seed = Some(seed);
    }
    if let Some(capacity) = cli.capacity {
        config.generator.channel_capacity = capacity;
    }

    if let Some(path) = &cli.candidates {
        config.candidates.path = Some(path.clone());
    }
    if let Some(size) = cli.size {
        config.candidates.size = Some(size);
    }

    if let Some(count) = cli.count {
        config.output.count = count;
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.summary {
        config.output.summary = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    config
}

/// Build the effective configuration: TOML file (if any) overlaid by CLI
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    Ok(merge_cli_with_config(cli, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_toml_basic() {
        let toml = r#"
[generator]
distribution = "weibull"
params = [1.5, 2.0]
seed = 42
channel_capacity = 16

[candidates]
size = 100

[output]
count = 500
format = "text"
summary = true
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.generator.distribution, "weibull");
        assert_eq!(config.generator.params, vec![1.5, 2.0]);
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.generator.channel_capacity, 16);
        assert_eq!(config.candidates.size, Some(100));
        assert_eq!(config.output.count, 500);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.summary);
    }

    #[test]
    fn test_parse_toml_empty_uses_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config.generator.distribution, "pareto");
        assert_eq!(config.generator.channel_capacity, 10);
        assert_eq!(config.output.count, 1000);
    }

    #[test]
    fn test_parse_toml_rejects_bad_types() {
        let toml = r#"
[generator]
params = "not a list"
"#;
        assert!(parse_toml_string(toml).is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\ndistribution = \"exp\"\nparams = [2.0]").unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.generator.distribution, "exp");
        assert_eq!(config.generator.params, vec![2.0]);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = parse_toml_file(Path::new("/nonexistent/tracegen.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_toml() {
        let config = parse_toml_string(
            r#"
[generator]
distribution = "uniform"
seed = 1

[output]
count = 10
"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "tracegen",
            "--distribution",
            "pareto",
            "--param",
            "2",
            "--param",
            "3",
            "--count",
            "25",
        ]);
        let merged = merge_cli_with_config(&cli, config);

        assert_eq!(merged.generator.distribution, "pareto");
        assert_eq!(merged.generator.params, vec![2.0, 3.0]);
        assert_eq!(merged.generator.seed, Some(1));
        assert_eq!(merged.output.count, 25);
    }
}
