//! Simulation dynamics modules: force accumulation, integration, and impulse resolution.

pub mod forces;
pub mod friction;
pub mod integrator;
pub mod solver;

pub use forces::{AnchorSpring, ForceAccumulator, ForceGenerator};
pub use friction::friction_impulse;
pub use integrator::Integrator;
pub use solver::{ContactImpulse, ImpulseResolver, StepMetrics};
