//! Error types for the orbit simulation core.

use thiserror::Error;

/// Result type for simulation and back-end operations.
pub type OrbitResult<T> = Result<T, OrbitError>;

/// Errors surfaced by the core. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("invalid speed range: tolerance {tolerance} must be in [0, limit) with limit {limit} > 0")]
    InvalidSpeedRange { limit: f32, tolerance: f32 },

    #[error("invalid orbit bands: {0}")]
    InvalidBands(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("rendering back end unavailable: {0}")]
    BackendUnavailable(String),

    #[error("render error: {0}")]
    Render(String),
}
