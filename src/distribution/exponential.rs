//! Exponential distribution with rate `lambda`

use crate::error::SamplerError;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Exp as ExpSampler;
use statrs::distribution::{Continuous, ContinuousCDF, Exp as ExpModel};

/// Exponential distribution
#[derive(Debug, Clone)]
pub struct ExponentialDistribution {
    model: ExpModel,
    sampler: ExpSampler<f64>,
}

impl ExponentialDistribution {
    /// Create an exponential distribution; `rate` must be finite and positive
    pub fn new(rate: f64) -> Result<Self, SamplerError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(SamplerError::invalid(
                "exponential",
                format!("rate must be positive, got {}", rate),
            ));
        }
        let model =
            ExpModel::new(rate).map_err(|e| SamplerError::invalid("exponential", e.to_string()))?;
        let sampler =
            ExpSampler::new(rate).map_err(|e| SamplerError::invalid("exponential", e.to_string()))?;

        Ok(Self { model, sampler })
    }

    pub fn rate(&self) -> f64 {
        self.model.rate()
    }

    pub fn prob(&self, x: f64) -> f64 {
        self.model.pdf(x)
    }

    pub fn log_prob(&self, x: f64) -> f64 {
        self.model.ln_pdf(x)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.model.cdf(x)
    }
}

impl Distribution<f64> for ExponentialDistribution {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_exponential_mean() {
        let dist = ExponentialDistribution::new(0.5).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);

        let total: f64 = (0..50_000).map(|_| dist.sample(&mut rng)).sum();
        let mean = total / 50_000.0;
        // Expected mean is 1 / rate = 2.0
        assert!((mean - 2.0).abs() < 0.1, "mean was {}", mean);
    }

    #[test]
    fn test_exponential_density_and_cdf() {
        let dist = ExponentialDistribution::new(2.0).unwrap();

        assert_eq!(dist.prob(-1.0), 0.0);
        assert!((dist.prob(0.0) - 2.0).abs() < 1e-12);
        assert!((dist.log_prob(1.0) - (2f64.ln() - 2.0)).abs() < 1e-12);
        assert_eq!(dist.cdf(0.0), 0.0);
        assert!((dist.cdf(1.0) - (1.0 - (-2.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_invalid_rate() {
        assert!(ExponentialDistribution::new(0.0).is_err());
        assert!(ExponentialDistribution::new(-0.5).is_err());
    }
}
