//! Candidate solutions: a tour is a closed-loop visiting order over all cities.
//!
//! A [`Tour`] is immutable once constructed. Crossover and mutation always
//! produce new `Tour` values, so the memoized distance can never go stale.

use crate::city::City;
use once_cell::sync::OnceCell;
use rand::seq::SliceRandom;
use rand::Rng;

/// One candidate solution: a permutation of the input cities, interpreted
/// as a closed loop (the edge from the last city back to the first counts).
///
/// The total distance is computed lazily on first access and memoized for
/// the lifetime of the value. Cloning a tour carries the cached distance
/// along with it.
#[derive(Debug, Clone)]
pub struct Tour {
    cities: Vec<City>,
    distance: OnceCell<f64>,
}

impl Tour {
    /// Wraps an ordered city sequence as a tour.
    ///
    /// The caller is responsible for passing a permutation of the problem's
    /// city list; the genetic operators in this crate uphold that by
    /// construction.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            distance: OnceCell::new(),
        }
    }

    /// Creates a uniform random permutation of `cities`.
    pub fn random<R: Rng>(cities: &[City], rng: &mut R) -> Self {
        let mut order = cities.to_vec();
        order.shuffle(rng);
        Self::new(order)
    }

    /// The visiting order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total cyclic distance of the loop, including the last→first edge.
    ///
    /// Computed once per instance and memoized. A single-city tour has
    /// distance 0.
    pub fn total_distance(&self) -> f64 {
        *self.distance.get_or_init(|| {
            let n = self.cities.len();
            (0..n)
                .map(|i| self.cities[i].distance(&self.cities[(i + 1) % n]))
                .sum()
        })
    }

    /// Fitness score: the reciprocal of the total distance (higher is better).
    ///
    /// A zero-distance tour (all cities coincident) gets `f64::INFINITY`,
    /// i.e. maximal fitness, rather than a division fault. [`GaRunner`]
    /// rejects such inputs up front, so the sentinel is unreachable in a
    /// normal run.
    ///
    /// [`GaRunner`]: crate::runner::GaRunner
    pub fn fitness(&self) -> f64 {
        let d = self.total_distance();
        if d > 0.0 {
            1.0 / d
        } else {
            f64::INFINITY
        }
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.cities == other.cities
    }
}
