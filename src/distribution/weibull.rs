//! Weibull distribution with shape `k` and scale `lambda`
//!
//! `k < 1` gives a decreasing density (many small weights, a few large ones),
//! `k = 1` is exponential, `k > 1` concentrates weights around `lambda`.

use crate::error::SamplerError;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Weibull as WeibullSampler;
use statrs::distribution::{Continuous, ContinuousCDF, Weibull as WeibullModel};

/// Weibull distribution
#[derive(Debug, Clone)]
pub struct WeibullDistribution {
    model: WeibullModel,
    sampler: WeibullSampler<f64>,
}

impl WeibullDistribution {
    /// Create a Weibull distribution from shape `k` and scale `lambda`
    pub fn new(k: f64, lambda: f64) -> Result<Self, SamplerError> {
        if !(k.is_finite() && k > 0.0) {
            return Err(SamplerError::invalid("weibull", format!("k must be positive, got {}", k)));
        }
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(SamplerError::invalid(
                "weibull",
                format!("lambda must be positive, got {}", lambda),
            ));
        }
        // statrs takes (shape, scale), rand_distr takes (scale, shape)
        let model = WeibullModel::new(k, lambda)
            .map_err(|e| SamplerError::invalid("weibull", e.to_string()))?;
        let sampler = WeibullSampler::new(lambda, k)
            .map_err(|e| SamplerError::invalid("weibull", e.to_string()))?;

        Ok(Self { model, sampler })
    }

    pub fn k(&self) -> f64 {
        self.model.shape()
    }

    pub fn lambda(&self) -> f64 {
        self.model.scale()
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

impl Distribution<f64> for WeibullDistribution {
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
    fn test_weibull_samples_non_negative() {
        let dist = WeibullDistribution::new(1.5, 1.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);

        for _ in 0..1000 {
            let x = dist.sample(&mut rng);
            assert!(x.is_finite() && x >= 0.0);
        }
    }

    #[test]
    fn test_weibull_with_unit_shape_is_exponential() {
        let dist = WeibullDistribution::new(1.0, 2.0).unwrap();

        // k = 1 reduces to Exp(1 / lambda)
        assert!((dist.prob(1.0) - 0.5 * (-0.5f64).exp()).abs() < 1e-12);
        assert!((dist.cdf(1.0) - (1.0 - (-0.5f64).exp())).abs() < 1e-12);
        assert!((dist.log_prob(1.0) - (0.5f64.ln() - 0.5)).abs() < 1e-12);
        assert_eq!(dist.prob(-1.0), 0.0);
    }

    #[test]
    fn test_weibull_scale_is_63rd_percentile() {
        let dist = WeibullDistribution::new(3.0, 5.0).unwrap();
        assert!((dist.cdf(5.0) - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_weibull_invalid_parameters() {
        assert!(WeibullDistribution::new(0.0, 1.0).is_err());
        assert!(WeibullDistribution::new(1.5, -1.0).is_err());
    }
}
