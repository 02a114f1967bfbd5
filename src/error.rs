//! Error types for the simulator.
//!
//! This module provides a unified error type [`SimulationError`] and a convenient [`Result`] alias.

use thiserror::Error;

/// Main error type for the simulator.
///
/// Construction and argument failures leave the simulator untouched. The two
/// step failures are fatal for the step that raised them: the authoritative
/// configuration is whatever was last committed before the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Invalid mass, floor height or body geometry at construction time.
    #[error("construction failed: {0}")]
    Construction(String),
    /// A setter or `step` received an argument outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Bisection shrank below the time epsilon while a vertex still penetrated the floor.
    #[error("interpenetration at t = {elapsed:.6} s (sub-step interval {interval:e} s)")]
    Interpenetration { elapsed: f64, interval: f64 },
    /// Impulse resolution kept reporting a colliding vertex.
    #[error("collision resolution diverged after {iterations} iterations (vertex {vertex_index})")]
    ResolutionDivergence { iterations: u32, vertex_index: usize },
}

/// Discriminant of a [`SimulationError`], handy for matching without fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Construction,
    InvalidArgument,
    Interpenetration,
    ResolutionDivergence,
}

impl SimulationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Construction(_) => ErrorKind::Construction,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Interpenetration { .. } => ErrorKind::Interpenetration,
            Self::ResolutionDivergence { .. } => ErrorKind::ResolutionDivergence,
        }
    }

    /// Returns `true` for the errors raised from inside a simulation step.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Interpenetration { .. } | Self::ResolutionDivergence { .. }
        )
    }
}

/// Convenient Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
