//! Pareto distribution
//!
//! Heavy-tailed distribution with scale `xm` and shape `alpha`. Used as the
//! default workload shape: a handful of candidates end up with most of the
//! weight, the long tail gets little.
//!
//! # Density
//!
//! - `P(x) = alpha * xm^alpha / x^(alpha + 1)` for `x >= xm`, otherwise 0
//! - `CDF(x) = 1 - (xm / x)^alpha` for `x >= xm`, otherwise 0
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_distr::Distribution;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use tracegen::distribution::pareto::ParetoDistribution;
//!
//! let dist = ParetoDistribution::new(1.0, 1.5).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let x = dist.sample(&mut rng);
//! assert!(x >= 1.0);
//! ```

use crate::error::SamplerError;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Pareto as ParetoSampler;
use statrs::distribution::{Continuous, ContinuousCDF, Pareto as ParetoModel};

/// Pareto distribution with scale `xm` and shape `alpha`
#[derive(Debug, Clone)]
pub struct ParetoDistribution {
    model: ParetoModel,
    sampler: ParetoSampler<f64>,
}

impl ParetoDistribution {
    /// Create a Pareto distribution
    ///
    /// Both `xm` and `alpha` must be finite and strictly positive.
    pub fn new(xm: f64, alpha: f64) -> Result<Self, SamplerError> {
        if !(xm.is_finite() && xm > 0.0) {
            return Err(SamplerError::invalid("pareto", format!("xm must be positive, got {}", xm)));
        }
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(SamplerError::invalid(
                "pareto",
                format!("alpha must be positive, got {}", alpha),
            ));
        }
        let model =
            ParetoModel::new(xm, alpha).map_err(|e| SamplerError::invalid("pareto", e.to_string()))?;
        let sampler = ParetoSampler::new(xm, alpha)
            .map_err(|e| SamplerError::invalid("pareto", e.to_string()))?;

        Ok(Self { model, sampler })
    }

    pub fn xm(&self) -> f64 {
        self.model.scale()
    }

    pub fn alpha(&self) -> f64 {
        self.model.shape()
    }

    /// Probability density at `x`
    pub fn prob(&self, x: f64) -> f64 {
        self.model.pdf(x)
    }

    pub fn log_prob(&self, x: f64) -> f64 {
        self.model.ln_pdf(x)
    }

    /// Cumulative probability at `x`
    pub fn cdf(&self, x: f64) -> f64 {
        self.model.cdf(x)
    }
}

impl Distribution<f64> for ParetoDistribution {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}
