//! Evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete generational cycle:
//! initialization → ranking → selection → crossover → mutation → repeat.

use crate::city::City;
use crate::config::GaConfig;
use crate::error::GaError;
use crate::operators::{breed_population, mutate_population};
use crate::selection::{rank, select};
use crate::tour::Tour;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour in the final population.
    pub best: Tour,

    /// Total distance of `best`.
    pub best_distance: f64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best distance at each generation boundary: one pre-loop snapshot of
    /// the initial population, then the best of each generation's
    /// pre-replacement population (`generations + 1` entries on an
    /// uncancelled run).
    ///
    /// Without elitism the best tour can be lost between generations, so
    /// this log is not guaranteed to be monotonic.
    pub progress: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::{City, GaConfig, GaRunner};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(50)
///     .with_seed(42);
///
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert_eq!(result.best.len(), cities.len());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA over `cities`.
    ///
    /// Fails fast with [`GaError::InvalidInput`] on a malformed config or
    /// city list, and with [`GaError::DegenerateFitness`] when every city
    /// shares one coordinate, before any evolution starts.
    pub fn run(cities: &[City], config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked once per generation boundary; when set, the run
    /// stops and returns the best tour found so far with
    /// [`GaResult::cancelled`] set.
    pub fn run_with_cancel(
        cities: &[City],
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        config.validate()?;
        validate_cities(cities)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(cities, &mut rng))
            .collect();

        let mut progress = Vec::with_capacity(config.generations + 1);
        progress.push(best_distance(&rank(&population), &population));

        let mut cancelled = false;
        let mut completed = 0usize;

        for _ in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let ranked = rank(&population);
            progress.push(best_distance(&ranked, &population));

            let parents = select(&ranked, config.population_size, &mut rng);
            let mating_pool: Vec<Tour> =
                parents.iter().map(|&i| population[i].clone()).collect();
            let children = breed_population(&mating_pool, config.population_size, &mut rng);
            population = mutate_population(&children, config.mutation_rate, &mut rng);

            completed += 1;
        }

        let ranked = rank(&population);
        let best = population[ranked[0].0].clone();
        let best_distance = best.total_distance();

        Ok(GaResult {
            best,
            best_distance,
            generations: completed,
            cancelled,
            progress,
        })
    }
}

/// Rejects city lists the fitness model cannot score.
///
/// A tour's cyclic distance is zero exactly when every city coincides, so
/// degeneracy is a property of the input, not of any particular tour.
fn validate_cities(cities: &[City]) -> Result<(), GaError> {
    if cities.len() < 2 {
        return Err(GaError::InvalidInput(format!(
            "need at least 2 cities, got {}",
            cities.len()
        )));
    }
    let first = cities[0];
    if cities.iter().all(|c| *c == first) {
        return Err(GaError::DegenerateFitness);
    }
    Ok(())
}

/// Distance of the top-ranked tour.
fn best_distance(ranked: &[(usize, f64)], population: &[Tour]) -> f64 {
    population[ranked[0].0].total_distance()
}
