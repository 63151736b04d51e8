//! Uniform distribution
//!
//! Every value in `[min, max]` is equally likely. As a weight source this
//! produces mildly perturbed, near-equal weights for all candidates.
//!
//! Weights must be non-negative, so `min` may not be below zero. `min == max`
//! is allowed and yields exactly equal weights.

use crate::error::SamplerError;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Uniform as UniformSampler;
use statrs::distribution::{Continuous, ContinuousCDF, Uniform as UniformModel};

/// Uniform distribution over `[min, max]`
#[derive(Debug, Clone)]
pub struct UniformDistribution {
    min: f64,
    max: f64,
    /// `None` for a zero-width range, which statrs does not model
    model: Option<UniformModel>,
    sampler: UniformSampler<f64>,
}

impl UniformDistribution {
    /// Create a uniform distribution
    pub fn new(min: f64, max: f64) -> Result<Self, SamplerError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(SamplerError::invalid(
                "uniform",
                format!("bounds must be finite, got [{}, {}]", min, max),
            ));
        }
        if min < 0.0 {
            return Err(SamplerError::invalid(
                "uniform",
                format!("min must be non-negative, got {}", min),
            ));
        }
        if min > max {
            return Err(SamplerError::invalid(
                "uniform",
                format!("min ({}) must not exceed max ({})", min, max),
            ));
        }

        let model = if min < max {
            let model = UniformModel::new(min, max)
                .map_err(|e| SamplerError::invalid("uniform", e.to_string()))?;
            Some(model)
        } else {
            None
        };

        Ok(Self {
            min,
            max,
            model,
            sampler: UniformSampler::new_inclusive(min, max),
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Probability density at `x`
    ///
    /// A zero-width range is a point mass; its density is infinite at `min`.
    pub fn prob(&self, x: f64) -> f64 {
        match &self.model {
            Some(model) => model.pdf(x),
            None if x == self.min => f64::INFINITY,
            None => 0.0,
        }
    }

    pub fn log_prob(&self, x: f64) -> f64 {
        match &self.model {
            Some(model) => model.ln_pdf(x),
            None => self.prob(x).ln(),
        }
    }

    /// Cumulative probability at `x`
    pub fn cdf(&self, x: f64) -> f64 {
        match &self.model {
            Some(model) => model.cdf(x),
            None if x < self.min => 0.0,
            None => 1.0,
        }
    }
}

impl Distribution<f64> for UniformDistribution {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}
