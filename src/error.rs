//! Error types for the solver.

use thiserror::Error;

/// Errors surfaced before or during a GA run.
///
/// All failures are detected before the evolutionary loop starts; the run
/// either completes fully or returns one of these without producing a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// Malformed input: empty or single-city list, or a zero population size.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Every tour over the input has total distance zero (all cities
    /// coincident), so fitness `1 / distance` is undefined.
    #[error("degenerate fitness: all cities are coincident, every tour has zero distance")]
    DegenerateFitness,
}
