//! Collision detection against the static floor plane.

pub mod detector;
pub mod plane;

pub use detector::{CollisionDetector, CollisionRecord, CollisionState};
pub use plane::Floor;
