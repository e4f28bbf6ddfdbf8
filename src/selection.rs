//! Ranking and fitness-proportionate (roulette wheel) parent selection.
//!
//! Selection is a two-step pass per generation: [`rank`] orders the
//! population best-first, then [`select`] draws parent indices from a
//! cumulative-fitness distribution over that ranking.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::tour::Tour;
use rand::Rng;

/// Ranks a population by fitness, best first.
///
/// Returns `(original index, fitness)` pairs sorted by fitness descending.
/// The sort is stable, so ties keep their original population order and
/// a fixed seed gives a fully deterministic run.
pub fn rank(population: &[Tour]) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, tour)| (i, tour.fitness()))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Draws `count` parent indices from a ranked population by roulette wheel.
///
/// Each draw picks a uniform value in `[0, total_fitness)` and walks the
/// ranking until the cumulative fitness reaches it, emitting that entry's
/// original population index. Shorter tours are more likely to be picked,
/// but not guaranteed; the same index may be drawn many times or never.
///
/// A non-positive or non-finite fitness total degrades to uniform sampling
/// with replacement, so the draw always terminates and never divides by
/// zero.
///
/// # Panics
/// Panics if `ranked` is empty.
pub fn select<R: Rng>(ranked: &[(usize, f64)], count: usize, rng: &mut R) -> Vec<usize> {
    assert!(!ranked.is_empty(), "cannot select from an empty ranking");

    let total: f64 = ranked.iter().map(|&(_, fitness)| fitness).sum();
    if !total.is_finite() || total <= 0.0 {
        return (0..count)
            .map(|_| ranked[rng.random_range(0..ranked.len())].0)
            .collect();
    }

    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        let mut pick = ranked[ranked.len() - 1].0; // floating-point fallback
        for &(index, fitness) in ranked {
            cumulative += fitness;
            if cumulative >= threshold {
                pick = index;
                break;
            }
        }
        chosen.push(pick);
    }
    chosen
}
