//! Configuration validation

use super::*;
use crate::distribution::{default_parameters, is_valid_distribution, VALID_DISTRIBUTIONS};
use anyhow::Result;
use tracing::warn;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_generator(&config.generator)?;
    validate_candidates(&config.candidates)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate generator configuration
///
/// A parameter list of the wrong length is only warned about: the
/// distribution substitutes its defaults.
pub fn validate_generator(generator: &GeneratorConfig) -> Result<()> {
    if !is_valid_distribution(&generator.distribution) {
        anyhow::bail!(
            "unknown distribution '{}' (expected one of: {})",
            generator.distribution,
            VALID_DISTRIBUTIONS.join(", ")
        );
    }

    if let Some(defaults) = default_parameters(&generator.distribution) {
        if !generator.params.is_empty() && generator.params.len() != defaults.len() {
            warn!(
                distribution = %generator.distribution,
                given = generator.params.len(),
                expected = defaults.len(),
                ?defaults,
                "wrong number of distribution parameters, using defaults"
            );
        }
    }

    if generator.params.iter().any(|p| !p.is_finite()) {
        anyhow::bail!("distribution parameters must be finite, got {:?}", generator.params);
    }

    if generator.channel_capacity == 0 {
        anyhow::bail!("channel_capacity must be at least 1");
    }

    Ok(())
}

/// Validate candidate source
fn validate_candidates(candidates: &CandidateConfig) -> Result<()> {
    if candidates.path.is_none() && candidates.size == Some(0) {
        anyhow::bail!("candidate size must be at least 1");
    }

    Ok(())
}

/// Validate output configuration
fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.count == 0 {
        anyhow::bail!("count must be at least 1");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_unknown_distribution() {
        let mut config = Config::default();
        config.generator.distribution = "bogus".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("unknown distribution 'bogus'"));
    }

    #[test]
    fn test_zipf_name_is_valid() {
        let mut config = Config::default();
        config.generator.distribution = "zipf".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_wrong_arity_is_not_an_error() {
        let mut config = Config::default();
        config.generator.distribution = "poisson".to_string();
        config.generator.params = vec![1.0, 2.0, 3.0];
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_non_finite_params() {
        let mut config = Config::default();
        config.generator.params = vec![1.0, f64::NAN];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_capacity_and_count() {
        let mut config = Config::default();
        config.generator.channel_capacity = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.output.count = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_size_without_file() {
        let mut config = Config::default();
        config.candidates.size = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
