//! Genetic-algorithm solver for the Traveling Salesman Problem.
//!
//! Given a set of 2-D cities, the solver searches for a low-total-distance
//! closed tour visiting each city exactly once:
//!
//! - **Representation**: a [`Tour`] is a permutation of the city list with
//!   a lazily memoized cyclic distance and reciprocal fitness.
//! - **Selection**: fitness-proportionate (roulette wheel) sampling over a
//!   ranked population.
//! - **Crossover**: ordered crossover, keeping a parent-1 segment in place
//!   and filling the remaining positions in parent-2 order.
//! - **Mutation**: independent per-position swaps.
//!
//! The loop is intentionally non-elitist: the best tour of one generation
//! is not guaranteed to survive into the next, so convergence is tracked
//! through the per-generation progress log in [`GaResult`].
//!
//! All randomness flows through one seedable RNG, so a fixed
//! [`GaConfig::seed`] makes a run fully reproducible.
//!
//! # Example
//!
//! ```
//! use tsp_ga::{City, GaConfig, GaRunner};
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(0.0, 1.0),
//!     City::new(1.0, 1.0),
//!     City::new(1.0, 0.0),
//! ];
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_generations(100)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&cities, &config).unwrap();
//! println!("best distance: {}", result.best_distance);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

pub mod city;
pub mod config;
pub mod error;
pub mod operators;
pub mod runner;
pub mod selection;
pub mod tour;

pub use city::City;
pub use config::GaConfig;
pub use error::GaError;
pub use runner::{GaResult, GaRunner};
pub use tour::Tour;
