//! Tumble – rigid-triangle physics for Rust.
//!
//! This crate simulates a single free rigid body, modeled as a triangle,
//! falling under gravity and external forces onto a static floor plane.
//! Each step is sub-stepped adaptively: penetrating candidates are bisected in
//! time, touching ones receive a collision impulse with Coulomb friction, and
//! clear ones are committed.
//!
//! # Example
//! ```
//! use tumble::{DVec3, Simulator};
//!
//! // Apex pointing down, directly below the center of mass.
//! let triangle = [
//!     DVec3::new(0.0, -1.0, 0.0),
//!     DVec3::new(-0.866, 0.5, 0.0),
//!     DVec3::new(0.866, 0.5, 0.0),
//! ];
//! let mut sim = Simulator::builder()
//!     .triangle(triangle)
//!     .position(DVec3::new(0.0, 2.0, 0.0))
//!     .floor_height(0.0)
//!     .build()
//!     .expect("valid body");
//!
//! for _ in 0..120 {
//!     let vertices = sim.step(1.0 / 60.0).expect("contact resolved");
//!     assert!(vertices.iter().all(|v| v.y > -0.01));
//! }
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::{DMat3, DVec3};

pub use collision::{
    detector::{CollisionDetector, CollisionRecord, CollisionState},
    plane::Floor,
};
pub use core::{
    rigidbody::RigidBody,
    state::{BodyState, StateStore},
    types::Coefficients,
};
pub use dynamics::{
    forces::{AnchorSpring, ForceAccumulator, ForceGenerator},
    integrator::Integrator,
    solver::{ContactImpulse, ImpulseResolver, StepMetrics},
};
pub use error::{ErrorKind, Result, SimulationError};
pub use world::{Simulator, SimulatorBuilder};
