//! Error types for the turn engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while setting up a run. Turn resolution itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configured inclusive range contains no values.
    #[error("empty {name} range: {min}..={max}")]
    EmptyRange {
        /// Which setting was misconfigured.
        name: &'static str,
        /// Lower bound as configured.
        min: i64,
        /// Upper bound as configured.
        max: i64,
    },
}
