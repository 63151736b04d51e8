//! Parametric probability distributions
//!
//! This module provides the distributions used to derive candidate weights.
//! Each distribution draws real-valued variates; a weight vector is built from
//! `n` independent variates (see [`crate::sampler::weights`]).
//!
//! # Distributions
//!
//! - **Pareto** (`xm`, `alpha`): heavy tail, a few hot candidates
//! - **Uniform** (`min`, `max`): near-equal weights
//! - **Exponential** (`rate`): moderate skew
//! - **Weibull** (`k`, `lambda`): tunable skew via the shape
//! - **Poisson** (`lambda`): discrete counts
//! - **Zipf**: recognized name, not implemented
//!
//! # Parameter Defaults
//!
//! A parameter list of the wrong length is not an error: the distribution's
//! default parameter set is substituted instead. Callers that need strict
//! arity checking must check [`default_parameters`] themselves.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_distr::Distribution as _;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use tracegen::distribution::Distribution;
//!
//! let dist = Distribution::new("Pareto", &[]).unwrap();
//! assert_eq!(dist.params(), vec![1.0, 1.5]);
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let x = dist.sample(&mut rng);
//! assert!(x >= 1.0);
//! ```

pub mod exponential;
pub mod pareto;
pub mod poisson;
pub mod uniform;
pub mod weibull;

use crate::error::SamplerError;
use exponential::ExponentialDistribution;
use pareto::ParetoDistribution;
use poisson::PoissonDistribution;
use rand::Rng;
use rand_distr::Distribution as _;
use std::fmt;
use uniform::UniformDistribution;
use weibull::WeibullDistribution;

/// Names accepted by [`Distribution::new`] (case-insensitive)
///
/// `zipf` is a valid name even though it cannot be constructed.
pub const VALID_DISTRIBUTIONS: &[&str] = &[
    "pareto",
    "zipf",
    "uniform",
    "exp",
    "exponential",
    "weibull",
    "poisson",
];

pub const DEFAULT_PARETO_PARAMETERS: [f64; 2] = [1.0, 1.5];
pub const DEFAULT_ZIPF_PARAMETERS: [f64; 0] = [];
pub const DEFAULT_UNIFORM_PARAMETERS: [f64; 2] = [0.0, 1.0];
pub const DEFAULT_EXPONENTIAL_PARAMETERS: [f64; 1] = [0.5];
/// Weibull defaults are `[k, lambda]`
pub const DEFAULT_WEIBULL_PARAMETERS: [f64; 2] = [1.5, 1.0];
pub const DEFAULT_POISSON_PARAMETERS: [f64; 1] = [1.0];

/// Check whether `name` is a recognized distribution name
pub fn is_valid_distribution(name: &str) -> bool {
    let name = name.to_lowercase();
    VALID_DISTRIBUTIONS.iter().any(|d| *d == name)
}

/// Default parameter set for a recognized distribution name
///
/// The length of the returned slice is the arity the distribution expects.
/// Returns `None` for unknown names.
pub fn default_parameters(name: &str) -> Option<&'static [f64]> {
    match name.to_lowercase().as_str() {
        "pareto" => Some(&DEFAULT_PARETO_PARAMETERS),
        "zipf" => Some(&DEFAULT_ZIPF_PARAMETERS),
        "uniform" => Some(&DEFAULT_UNIFORM_PARAMETERS),
        "exp" | "exponential" => Some(&DEFAULT_EXPONENTIAL_PARAMETERS),
        "weibull" => Some(&DEFAULT_WEIBULL_PARAMETERS),
        "poisson" => Some(&DEFAULT_POISSON_PARAMETERS),
        _ => None,
    }
}

/// A constructed, immutable distribution
///
/// Draw variates through [`rand_distr::Distribution::sample`]; the caller owns
/// the random source, so separate instances never share hidden state.
#[derive(Debug, Clone)]
pub enum Distribution {
    Pareto(ParetoDistribution),
    Uniform(UniformDistribution),
    Exponential(ExponentialDistribution),
    Weibull(WeibullDistribution),
    Poisson(PoissonDistribution),
}

impl Distribution {
    /// Construct a distribution by name
    ///
    /// # Errors
    ///
    /// - [`SamplerError::NotImplemented`] for `zipf`
    /// - [`SamplerError::UnknownDistribution`] for unrecognized names
    /// - [`SamplerError::InvalidParameter`] when the (possibly defaulted)
    ///   parameters are out of range
    pub fn new(name: &str, params: &[f64]) -> Result<Self, SamplerError> {
        let lower = name.to_lowercase();
        let defaults = match default_parameters(&lower) {
            Some(defaults) => defaults,
            None => return Err(SamplerError::UnknownDistribution(name.to_string())),
        };
        let params = if params.len() == defaults.len() {
            params
        } else {
            defaults
        };

        match lower.as_str() {
            "pareto" => Ok(Self::Pareto(ParetoDistribution::new(params[0], params[1])?)),
            "zipf" => Err(SamplerError::NotImplemented("zipf".to_string())),
            "uniform" => Ok(Self::Uniform(UniformDistribution::new(params[0], params[1])?)),
            "exp" | "exponential" => Ok(Self::Exponential(ExponentialDistribution::new(params[0])?)),
            "weibull" => Ok(Self::Weibull(WeibullDistribution::new(params[0], params[1])?)),
            "poisson" => Ok(Self::Poisson(PoissonDistribution::new(params[0])?)),
            _ => Err(SamplerError::UnknownDistribution(name.to_string())),
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pareto(_) => "pareto",
            Self::Uniform(_) => "uniform",
            Self::Exponential(_) => "exponential",
            Self::Weibull(_) => "weibull",
            Self::Poisson(_) => "poisson",
        }
    }

    /// Effective parameters, after any default substitution
    pub fn params(&self) -> Vec<f64> {
        match self {
            Self::Pareto(d) => vec![d.xm(), d.alpha()],
            Self::Uniform(d) => vec![d.min(), d.max()],
            Self::Exponential(d) => vec![d.rate()],
            Self::Weibull(d) => vec![d.k(), d.lambda()],
            Self::Poisson(d) => vec![d.lambda()],
        }
    }

    /// Density (or mass, for Poisson) at `x`
    pub fn prob(&self, x: f64) -> f64 {
        match self {
            Self::Pareto(d) => d.prob(x),
            Self::Uniform(d) => d.prob(x),
            Self::Exponential(d) => d.prob(x),
            Self::Weibull(d) => d.prob(x),
            Self::Poisson(d) => d.prob(x),
        }
    }

    pub fn log_prob(&self, x: f64) -> f64 {
        match self {
            Self::Pareto(d) => d.log_prob(x),
            Self::Uniform(d) => d.log_prob(x),
            Self::Exponential(d) => d.log_prob(x),
            Self::Weibull(d) => d.log_prob(x),
            Self::Poisson(d) => d.log_prob(x),
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Pareto(d) => d.cdf(x),
            Self::Uniform(d) => d.cdf(x),
            Self::Exponential(d) => d.cdf(x),
            Self::Weibull(d) => d.cdf(x),
            Self::Poisson(d) => d.cdf(x),
        }
    }
}

impl rand_distr::Distribution<f64> for Distribution {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Pareto(d) => d.sample(rng),
            Self::Uniform(d) => d.sample(rng),
            Self::Exponential(d) => d.sample(rng),
            Self::Weibull(d) => d.sample(rng),
            Self::Poisson(d) => d.sample(rng),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pareto(d) => write!(f, "pareto(xm={}, alpha={})", d.xm(), d.alpha()),
            Self::Uniform(d) => write!(f, "uniform(min={}, max={})", d.min(), d.max()),
            Self::Exponential(d) => write!(f, "exponential(rate={})", d.rate()),
            Self::Weibull(d) => write!(f, "weibull(k={}, lambda={})", d.k(), d.lambda()),
            Self::Poisson(d) => write!(f, "poisson(lambda={})", d.lambda()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_distr::Distribution as _;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_every_valid_name_constructs_except_zipf() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);

        for name in VALID_DISTRIBUTIONS {
            let result = Distribution::new(name, &[]);
            if *name == "zipf" {
                assert!(result.is_err());
                continue;
            }
            let dist = result.unwrap();
            for _ in 0..1000 {
                let x = dist.sample(&mut rng);
                assert!(x.is_finite() && x >= 0.0, "{} produced {}", name, x);
            }
        }
    }

    #[test]
    fn test_name_matching_is_case_insensitive() {
        assert_eq!(Distribution::new("PARETO", &[]).unwrap().name(), "pareto");
        assert_eq!(Distribution::new("Exp", &[]).unwrap().name(), "exponential");
        assert!(is_valid_distribution("WeIbUlL"));
        assert!(is_valid_distribution("ZIPF"));
        assert!(!is_valid_distribution("gaussian"));
    }

    #[test]
    fn test_zipf_is_not_implemented() {
        for params in [vec![], vec![1.2], vec![1.0, 2.0, 3.0]] {
            assert_eq!(
                Distribution::new("zipf", &params).unwrap_err(),
                SamplerError::NotImplemented("zipf".to_string())
            );
        }
    }

    #[test]
    fn test_unknown_distribution() {
        assert_eq!(
            Distribution::new("bogus", &[]).unwrap_err(),
            SamplerError::UnknownDistribution("bogus".to_string())
        );
    }

    #[test]
    fn test_wrong_arity_uses_defaults() {
        assert_eq!(Distribution::new("pareto", &[]).unwrap().params(), vec![1.0, 1.5]);
        assert_eq!(Distribution::new("pareto", &[3.0]).unwrap().params(), vec![1.0, 1.5]);
        assert_eq!(Distribution::new("uniform", &[1.0, 2.0, 3.0]).unwrap().params(), vec![0.0, 1.0]);
        assert_eq!(Distribution::new("exp", &[1.0, 2.0]).unwrap().params(), vec![0.5]);
        assert_eq!(Distribution::new("weibull", &[]).unwrap().params(), vec![1.5, 1.0]);
        assert_eq!(Distribution::new("poisson", &[]).unwrap().params(), vec![1.0]);
    }

    #[test]
    fn test_correct_arity_is_respected() {
        assert_eq!(Distribution::new("pareto", &[2.0, 3.0]).unwrap().params(), vec![2.0, 3.0]);
        assert_eq!(Distribution::new("weibull", &[0.5, 4.0]).unwrap().params(), vec![0.5, 4.0]);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(
            Distribution::new("exponential", &[-1.0]),
            Err(SamplerError::InvalidParameter { .. })
        ));
        assert!(Distribution::new("uniform", &[5.0, 1.0]).is_err());
    }

    #[test]
    fn test_default_pareto_produces_positive_variates() {
        let dist = Distribution::new("pareto", &[]).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

        for _ in 0..1000 {
            let x = dist.sample(&mut rng);
            assert!(x.is_finite() && x > 0.0);
        }
    }

    #[test]
    fn test_accessors_dispatch() {
        let dist = Distribution::new("exp", &[2.0]).unwrap();
        assert!((dist.prob(0.0) - 2.0).abs() < 1e-12);
        assert!((dist.log_prob(0.0) - 2f64.ln()).abs() < 1e-12);
        assert_eq!(dist.cdf(0.0), 0.0);

        let poisson = Distribution::new("poisson", &[1.0]).unwrap();
        assert_eq!(poisson.log_prob(0.5), f64::NEG_INFINITY);
        assert!((poisson.cdf(1e15) - 1.0).abs() < 1e-12);
        assert_eq!(poisson.to_string(), "poisson(lambda=1)");
    }

    #[test]
    fn test_default_parameters_arity() {
        assert_eq!(default_parameters("Pareto").map(|p| p.len()), Some(2));
        assert_eq!(default_parameters("exp").map(|p| p.len()), Some(1));
        assert_eq!(default_parameters("zipf").map(|p| p.len()), Some(0));
        assert_eq!(default_parameters("bogus"), None);
    }
}
