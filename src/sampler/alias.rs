//! Alias table for O(1) weighted sampling (Vose's alias method)
//!
//! The table holds two parallel arrays of length `n`: a probability per slot
//! and an alias index per slot. A draw picks a slot uniformly, then flips a
//! biased coin to return either the slot itself or its alias. The long-run
//! frequency of index `i` equals `weights[i] / sum(weights)`.
//!
//! # Construction
//!
//! Weights are scaled so their average is 1. Indices with a scaled weight
//! below 1 go on the "small" worklist, the rest on the "large" worklist.
//! Each small index is paired with a large one: the small slot keeps its
//! scaled weight as its probability and aliases the large index, whose
//! scaled weight shrinks by the amount donated. Whatever is left on either
//! list once the other runs dry (floating-point residue) gets probability 1.
//!
//! # Performance
//!
//! - **Build**: O(n)
//! - **Sample**: O(1), one integer draw and one float draw

use crate::error::SamplerError;
use rand::Rng;

/// Immutable alias table built from a weight vector
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Build an alias table from non-negative weights
    ///
    /// Weights need not be normalized. An empty slice builds an empty table.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::NegativeWeight`] if any weight is negative
    /// - [`SamplerError::Unnormalizable`] if a weight is not finite or the
    ///   weights sum to zero
    pub fn new(weights: &[f64]) -> Result<Self, SamplerError> {
        let n = weights.len();
        if n == 0 {
            return Ok(Self::default());
        }

        let mut total = 0.0;
        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(SamplerError::Unnormalizable);
            }
            if value < 0.0 {
                return Err(SamplerError::NegativeWeight { index, value });
            }
            total += value;
        }
        if !(total.is_finite() && total > 0.0) {
            return Err(SamplerError::Unnormalizable);
        }

        let scale = n as f64 / total;
        let mut scaled: Vec<f64> = weights.iter().map(|w| w * scale).collect();
        let mut prob = vec![0.0; n];
        let mut alias: Vec<usize> = (0..n).collect();

        let (mut small, mut large): (Vec<usize>, Vec<usize>) =
            (0..n).partition(|&i| scaled[i] < 1.0);

        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            large.pop();

            prob[s] = scaled[s];
            alias[s] = l;

            // l donates (1 - scaled[s]) to fill slot s
            scaled[l] = (scaled[l] + scaled[s]) - 1.0;
            if scaled[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        for i in small.into_iter().chain(large) {
            prob[i] = 1.0;
            alias[i] = i;
        }

        Ok(Self { prob, alias })
    }

    /// Number of outcomes in the table
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Draw one outcome index in O(1)
    ///
    /// Returns `None` only for an empty table. The result is always in
    /// `[0, len())`.
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        match self.prob.len() {
            0 => None,
            1 => Some(0),
            n => {
                let slot = rng.gen_range(0..n);
                let coin: f64 = rng.gen();
                // Strict: a zero-probability slot never returns itself
                if coin < self.prob[slot] {
                    Some(slot)
                } else {
                    Some(self.alias[slot])
                }
            }
        }
    }

    /// Draw one item from `items`, which must be index-aligned with the table
    ///
    /// Returns `Ok(None)` when both the table and `items` are empty.
    pub fn choose<'a, T, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        items: &'a [T],
    ) -> Result<Option<&'a T>, SamplerError> {
        if items.len() != self.len() {
            return Err(SamplerError::LengthMismatch {
                weights: self.len(),
                candidates: items.len(),
            });
        }
        Ok(self.sample_index(rng).map(|i| &items[i]))
    }

    /// Effective probability of each outcome, reconstructed from the table
    pub fn probabilities(&self) -> Vec<f64> {
        let n = self.len();
        let mut out = vec![0.0; n];
        for slot in 0..n {
            out[slot] += self.prob[slot];
            out[self.alias[slot]] += 1.0 - self.prob[slot];
        }
        out.iter_mut().for_each(|p| *p /= n as f64);
        out
    }
}
