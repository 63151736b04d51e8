//! Poisson distribution with mean `lambda`
//!
//! Discrete: variates are non-negative integers returned as `f64`. Small
//! `lambda` values produce many zero variates, which is why weight vectors
//! need an explicit zero-sum fallback.

use crate::error::SamplerError;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Poisson as PoissonSampler;
use statrs::distribution::{Discrete, DiscreteCDF, Poisson as PoissonModel};

/// Poisson distribution
#[derive(Debug, Clone)]
pub struct PoissonDistribution {
    model: PoissonModel,
    sampler: PoissonSampler<f64>,
}

impl PoissonDistribution {
    /// Create a Poisson distribution; `lambda` must be finite and positive
    pub fn new(lambda: f64) -> Result<Self, SamplerError> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(SamplerError::invalid(
                "poisson",
                format!("lambda must be positive, got {}", lambda),
            ));
        }
        let model =
            PoissonModel::new(lambda).map_err(|e| SamplerError::invalid("poisson", e.to_string()))?;
        let sampler =
            PoissonSampler::new(lambda).map_err(|e| SamplerError::invalid("poisson", e.to_string()))?;

        Ok(Self { model, sampler })
    }

    pub fn lambda(&self) -> f64 {
        self.model.lambda()
    }

    /// Log of the probability mass at `x`
    ///
    /// Non-integer and negative `x` have zero mass (`-inf`).
    pub fn log_prob(&self, x: f64) -> f64 {
        if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
            return f64::NEG_INFINITY;
        }
        self.model.ln_pmf(x as u64)
    }

    /// Probability mass at `x`
    pub fn prob(&self, x: f64) -> f64 {
        self.log_prob(x).exp()
    }

    /// Cumulative probability at `x`, evaluated in closed form
    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        if x >= u64::MAX as f64 {
            return 1.0;
        }
        self.model.cdf(x.floor() as u64)
    }
}

impl Distribution<f64> for PoissonDistribution {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        <PoissonSampler<f64> as Distribution<f64>>::sample(&self.sampler, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::time::{Duration, Instant};

    #[test]
    fn test_poisson_samples_are_counts() {
        let dist = PoissonDistribution::new(4.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);

        for _ in 0..1000 {
            let x = dist.sample(&mut rng);
            assert!(x >= 0.0);
            assert_eq!(x.fract(), 0.0);
        }
    }

    #[test]
    fn test_poisson_mass() {
        let dist = PoissonDistribution::new(1.0).unwrap();

        assert!((dist.prob(0.0) - (-1.0f64).exp()).abs() < 1e-12);
        assert!((dist.prob(2.0) - (-1.0f64).exp() / 2.0).abs() < 1e-12);
        assert_eq!(dist.prob(f64::NAN), 0.0);
        assert_eq!(dist.prob(1.5), 0.0);
        assert_eq!(dist.prob(-1.0), 0.0);
    }

    #[test]
    fn test_poisson_cdf() {
        let dist = PoissonDistribution::new(1.0).unwrap();

        assert_eq!(dist.cdf(-0.5), 0.0);
        assert!((dist.cdf(1.7) - 2.0 * (-1.0f64).exp()).abs() < 1e-10);
        assert!(dist.cdf(50.0) > 0.999_999);
    }

    #[test]
    fn test_poisson_cdf_far_tail_is_immediate() {
        let dist = PoissonDistribution::new(1.0).unwrap();
        let started = Instant::now();

        for x in [1e6, 1e12, 1e15, 1e18, f64::INFINITY] {
            let p = dist.cdf(x);
            assert!((p - 1.0).abs() < 1e-12, "cdf({}) = {}", x, p);
        }
        assert!(started.elapsed() < Duration::from_millis(100), "took {:?}", started.elapsed());
    }

    #[test]
    fn test_poisson_large_count_mass() {
        let dist = PoissonDistribution::new(1000.0).unwrap();

        // Mass near the mean of a wide Poisson is about 1 / sqrt(2 pi lambda)
        let expected = 1.0 / (2.0 * std::f64::consts::PI * 1000.0).sqrt();
        assert!((dist.prob(1000.0) - expected).abs() < 1e-4);
        assert!((dist.cdf(1000.0) - 0.5).abs() < 0.02);
        assert!(dist.log_prob(1e15).is_finite());
    }

    #[test]
    fn test_poisson_invalid_lambda() {
        assert!(PoissonDistribution::new(0.0).is_err());
        assert!(PoissonDistribution::new(f64::INFINITY).is_err());
    }
}
