//! Discrete weighted sampling
//!
//! Turns a distribution into a normalized weight vector over `n` candidates
//! ([`weights`]) and turns a weight vector into an O(1) sampler ([`alias`]).
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use tracegen::distribution::Distribution;
//! use tracegen::sampler::{weights::weight_vector, AliasTable};
//!
//! let dist = Distribution::new("pareto", &[]).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
//! let weights = weight_vector(&dist, 41, &mut rng).unwrap();
//! let table = AliasTable::new(&weights).unwrap();
//!
//! let candidates: Vec<u32> = (0..41).collect();
//! let pick = table.choose(&mut rng, &candidates).unwrap().unwrap();
//! assert!(*pick < 41);
//! ```

pub mod alias;
pub mod weights;

pub use alias::AliasTable;
pub use weights::weight_vector;
