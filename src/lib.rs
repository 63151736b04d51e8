//! tracegen - distribution-weighted workload trace generator
//!
//! tracegen produces an unbounded stream of items drawn from a finite
//! candidate set, where each candidate's selection probability comes from a
//! parametric distribution instead of being uniform. The stream stands in for
//! "which work item is dispatched next" when benchmarking or load-testing a
//! downstream system.
//!
//! # Architecture
//!
//! - **Distributions**: Pareto, Uniform, Exponential, Weibull, Poisson
//! - **Weight vectors**: `n` variates normalized to sum to 1
//! - **Alias table**: O(n) build, O(1) weighted draws (Vose)
//! - **Generator**: one producer thread per stream, bounded channel,
//!   one-shot termination signal

pub mod candidates;
pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod sampler;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{is_valid_distribution, Distribution};
pub use error::SamplerError;
pub use generator::{Generator, GeneratorState};
pub use sampler::AliasTable;

/// Result type used by the application layer
pub type Result<T> = anyhow::Result<T>;
