//! Weight vector construction
//!
//! Draws `n` independent variates from a distribution and normalizes them so
//! the weights sum to 1. The resulting vector is index-aligned with the
//! candidate set it was sized for.

use crate::error::SamplerError;
use rand::Rng;
use rand_distr::Distribution;
use tracing::warn;

/// Draw `n` variates from `dist` and normalize them into a weight vector
///
/// # Errors
///
/// - [`SamplerError::Unnormalizable`] if any variate (or their sum) is not finite
/// - [`SamplerError::NegativeWeight`] if a variate is negative
///
/// If every variate is exactly zero the weights fall back to uniform `1/n`.
pub fn weight_vector<D, R>(dist: &D, n: usize, rng: &mut R) -> Result<Vec<f64>, SamplerError>
where
    D: Distribution<f64> + ?Sized,
    R: Rng + ?Sized,
{
    let variates: Vec<f64> = (0..n).map(|_| dist.sample(&mut *rng)).collect();
    normalize(variates)
}

/// Normalize non-negative values so they sum to 1
pub fn normalize(mut values: Vec<f64>) -> Result<Vec<f64>, SamplerError> {
    if values.is_empty() {
        return Ok(values);
    }

    let mut total = 0.0;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(SamplerError::Unnormalizable);
        }
        if value < 0.0 {
            return Err(SamplerError::NegativeWeight { index, value });
        }
        total += value;
    }

    if !total.is_finite() {
        return Err(SamplerError::Unnormalizable);
    }

    if total == 0.0 {
        warn!(
            candidates = values.len(),
            "all variates were zero, falling back to uniform weights"
        );
        let uniform = 1.0 / values.len() as f64;
        values.iter_mut().for_each(|v| *v = uniform);
        return Ok(values);
    }

    for value in values.iter_mut() {
        *value /= total;
    }
    Ok(values)
}
