//! Genetic operators on tours: ordered crossover and swap mutation.
//!
//! Both operators preserve the permutation invariant by construction and
//! always return new [`Tour`] values, leaving their inputs (and their
//! memoized distances) untouched.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use crate::tour::Tour;
use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Breeds one child from two parent tours by ordered crossover.
///
/// Two cut points are drawn uniformly in `[0, n)` and the half-open segment
/// between them is copied from `parent1` into the child at the same
/// positions. The remaining positions are filled in ascending index order
/// with `parent2`'s cities that the segment does not already contain,
/// preserving `parent2`'s relative order.
///
/// The child is always a valid permutation of the parents' city set.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn breed<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    ox_child(parent1, parent2, a.min(b), a.max(b))
}

/// Builds the ordered-crossover child for the half-open cut `[start, end)`.
///
/// An empty cut (`start == end`) yields a child in `parent2`'s order.
fn ox_child(parent1: &Tour, parent2: &Tour, start: usize, end: usize) -> Tour {
    let p1 = parent1.cities();
    let p2 = parent2.cities();
    let n = p1.len();

    // Mark one parent2 occurrence per segment city. Matching by occurrence
    // rather than by value keeps duplicate coordinates from being consumed
    // twice.
    let mut taken = vec![false; n];
    for city in &p1[start..end] {
        let j = p2
            .iter()
            .enumerate()
            .position(|(j, other)| !taken[j] && other == city)
            .expect("parents must be permutations of the same city set");
        taken[j] = true;
    }

    let mut filler = p2
        .iter()
        .zip(&taken)
        .filter(|&(_, &used)| !used)
        .map(|(city, _)| *city);

    let child = (0..n)
        .map(|i| {
            if i >= start && i < end {
                p1[i]
            } else {
                filler
                    .next()
                    .expect("filler holds exactly the cities outside the segment")
            }
        })
        .collect();
    Tour::new(child)
}

/// Breeds a full next generation from a mating pool.
///
/// The pool is shuffled once, then child `i` is bred from `shuffled[i]`
/// and `shuffled[pool_len - 1 - i]`, producing exactly `population_size`
/// children. No parent survives unchanged (no elitism).
///
/// # Panics
/// Panics if the pool holds fewer than `population_size` tours.
pub fn breed_population<R: Rng>(
    mating_pool: &[Tour],
    population_size: usize,
    rng: &mut R,
) -> Vec<Tour> {
    assert!(
        mating_pool.len() >= population_size,
        "mating pool must hold at least population_size tours"
    );

    let mut pool: Vec<&Tour> = mating_pool.iter().collect();
    pool.shuffle(rng);

    (0..population_size)
        .map(|i| breed(pool[i], pool[pool.len() - 1 - i], rng))
        .collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// Mutates a tour by independent positional swaps, returning a new tour.
///
/// Each position swaps with a uniformly random position (possibly itself)
/// with probability `mutation_rate`. A transposition of a permutation is a
/// permutation, so the result is always valid; rate 0 returns an identical
/// ordering.
pub fn mutate<R: Rng>(tour: &Tour, mutation_rate: f64, rng: &mut R) -> Tour {
    let mut cities = tour.cities().to_vec();
    let n = cities.len();
    for i in 0..n {
        if rng.random::<f64>() < mutation_rate {
            let j = rng.random_range(0..n);
            cities.swap(i, j);
        }
    }
    Tour::new(cities)
}

/// Applies [`mutate`] independently to every member of a population.
pub fn mutate_population<R: Rng>(
    population: &[Tour],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Tour> {
    population
        .iter()
        .map(|tour| mutate(tour, mutation_rate, rng))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Distinct cities laid out on a line, one per index.
    fn line_cities(n: usize) -> Vec<City> {
        (0..n).map(|i| City::new(i as f64, 0.0)).collect()
    }

    /// Same multiset of cities, any order.
    fn is_permutation_of(tour: &Tour, cities: &[City]) -> bool {
        tour.len() == cities.len()
            && cities.iter().all(|c| {
                tour.cities().iter().filter(|t| *t == c).count()
                    == cities.iter().filter(|o| *o == c).count()
            })
    }

    // ---- Ordered crossover ----

    #[test]
    fn test_breed_worked_example() {
        // Parents [A,B,C,D,E] and [D,B,E,C,A] with cut [1, 3): the child
        // keeps B,C at positions 1-2 and fills 0,3,4 with D,E,A in
        // parent2's order.
        let [a, b, c, d, e] = [
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
            City::new(3.0, 0.0),
            City::new(4.0, 0.0),
        ];
        let parent1 = Tour::new(vec![a, b, c, d, e]);
        let parent2 = Tour::new(vec![d, b, e, c, a]);

        let child = ox_child(&parent1, &parent2, 1, 3);
        assert_eq!(child.cities(), &[d, b, c, e, a]);
    }

    #[test]
    fn test_breed_empty_cut_copies_parent2_order() {
        let cities = line_cities(5);
        let parent1 = Tour::new(cities.clone());
        let mut reversed = cities.clone();
        reversed.reverse();
        let parent2 = Tour::new(reversed.clone());

        let child = ox_child(&parent1, &parent2, 2, 2);
        assert_eq!(child.cities(), reversed.as_slice());
    }

    #[test]
    fn test_breed_full_cut_copies_parent1() {
        let cities = line_cities(5);
        let parent1 = Tour::new(cities.clone());
        let mut reversed = cities.clone();
        reversed.reverse();
        let parent2 = Tour::new(reversed);

        let child = ox_child(&parent1, &parent2, 0, 5);
        assert_eq!(child.cities(), cities.as_slice());
    }

    #[test]
    fn test_breed_produces_valid_permutations() {
        let cities = line_cities(8);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let p1 = Tour::random(&cities, &mut rng);
            let p2 = Tour::random(&cities, &mut rng);
            let child = breed(&p1, &p2, &mut rng);
            assert!(
                is_permutation_of(&child, &cities),
                "child is not a permutation: {:?}",
                child.cities()
            );
        }
    }

    #[test]
    fn test_breed_identical_parents() {
        let cities = line_cities(6);
        let parent = Tour::new(cities.clone());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let child = breed(&parent, &parent, &mut rng);
            assert_eq!(child.cities(), cities.as_slice());
        }
    }

    #[test]
    fn test_breed_duplicate_coordinates() {
        // Two cities share a coordinate; each occurrence must still appear
        // exactly once in the child.
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
        ];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let p1 = Tour::random(&cities, &mut rng);
            let p2 = Tour::random(&cities, &mut rng);
            let child = breed(&p1, &p2, &mut rng);
            assert!(is_permutation_of(&child, &cities));
        }
    }

    #[test]
    fn test_breed_single_city() {
        let cities = line_cities(1);
        let parent = Tour::new(cities.clone());
        let mut rng = StdRng::seed_from_u64(42);
        let child = breed(&parent, &parent, &mut rng);
        assert_eq!(child.cities(), cities.as_slice());
    }

    // ---- breed_population ----

    #[test]
    fn test_breed_population_size_and_validity() {
        let cities = line_cities(7);
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<Tour> = (0..10).map(|_| Tour::random(&cities, &mut rng)).collect();

        let children = breed_population(&pool, 10, &mut rng);
        assert_eq!(children.len(), 10);
        for child in &children {
            assert!(is_permutation_of(child, &cities));
        }
    }

    #[test]
    fn test_breed_population_pool_of_one() {
        let cities = line_cities(4);
        let mut rng = StdRng::seed_from_u64(42);
        let pool = vec![Tour::random(&cities, &mut rng)];

        let children = breed_population(&pool, 1, &mut rng);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0], pool[0]);
    }

    #[test]
    #[should_panic(expected = "mating pool must hold at least population_size tours")]
    fn test_breed_population_undersized_pool_panics() {
        let cities = line_cities(4);
        let mut rng = StdRng::seed_from_u64(42);
        let pool = vec![Tour::random(&cities, &mut rng)];
        breed_population(&pool, 2, &mut rng);
    }

    // ---- Swap mutation ----

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let cities = line_cities(10);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = Tour::random(&cities, &mut rng);

        let mutated = mutate(&tour, 0.0, &mut rng);
        assert_eq!(mutated, tour);
    }

    #[test]
    fn test_mutate_rate_one_stays_valid() {
        let cities = line_cities(10);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let tour = Tour::random(&cities, &mut rng);
            let mutated = mutate(&tour, 1.0, &mut rng);
            assert!(is_permutation_of(&mutated, &cities));
        }
    }

    #[test]
    fn test_mutate_does_not_touch_input() {
        let cities = line_cities(6);
        let mut rng = StdRng::seed_from_u64(42);
        let tour = Tour::random(&cities, &mut rng);
        let before: Vec<City> = tour.cities().to_vec();

        let _ = mutate(&tour, 1.0, &mut rng);
        assert_eq!(tour.cities(), before.as_slice());
    }

    #[test]
    fn test_mutate_population_size_and_validity() {
        let cities = line_cities(6);
        let mut rng = StdRng::seed_from_u64(42);
        let population: Vec<Tour> = (0..8).map(|_| Tour::random(&cities, &mut rng)).collect();

        let mutated = mutate_population(&population, 0.5, &mut rng);
        assert_eq!(mutated.len(), population.len());
        for tour in &mutated {
            assert!(is_permutation_of(tour, &cities));
        }
    }

    // ---- Property tests ----

    proptest! {
        #[test]
        fn prop_breed_preserves_permutation(n in 2usize..24, seed: u64) {
            let cities = line_cities(n);
            let mut rng = StdRng::seed_from_u64(seed);
            let p1 = Tour::random(&cities, &mut rng);
            let p2 = Tour::random(&cities, &mut rng);

            let child = breed(&p1, &p2, &mut rng);
            prop_assert!(is_permutation_of(&child, &cities));
        }

        #[test]
        fn prop_mutate_preserves_permutation(
            n in 2usize..24,
            rate in 0.0f64..=1.0,
            seed: u64,
        ) {
            let cities = line_cities(n);
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = Tour::random(&cities, &mut rng);

            let mutated = mutate(&tour, rate, &mut rng);
            prop_assert!(is_permutation_of(&mutated, &cities));
        }
    }
}
