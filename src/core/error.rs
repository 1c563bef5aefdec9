use thiserror::Error;

/// Engine error types.
///
/// Every failure is a local validation error: either a coordinate that the
/// grid contract rejects, or a construction-time configuration the engine
/// refuses to run with. Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Coordinate outside the grid, or a mutation aimed at the solid ring
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate {
        /// Requested column
        x: i64,
        /// Requested row
        y: i64,
    },
    /// Configuration rejected at construction
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
