//! Core types describing the simulated body, its configurations, and coefficients.

pub mod types;
pub mod rigidbody;
pub mod state;

pub use types::Coefficients;
pub use rigidbody::RigidBody;
pub use state::{BodyState, StateStore};
