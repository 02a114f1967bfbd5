use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_ANGULAR_DAMPING, DEFAULT_DEPTH_EPSILON, DEFAULT_DYNAMIC_FRICTION, DEFAULT_GRAVITY,
    DEFAULT_LINEAR_DAMPING, DEFAULT_RESTITUTION, DEFAULT_STATIC_FRICTION, DEFAULT_TIME_EPSILON,
};

/// Common math types re-exported for convenience.
pub use glam::{DMat3, DVec3};

/// Coefficient bundle consumed by one simulation step.
///
/// Replaced as a whole between steps through
/// [`Simulator::set_coefficients`](crate::world::Simulator::set_coefficients).
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    /// Fraction of the approaching normal velocity reflected by an impact.
    pub restitution: f64,
    /// Linear damping factor; the net force gains `-no_kdl * linear_velocity`.
    pub no_kdl: f64,
    /// Angular damping factor; the net torque gains `-no_kda * angular_velocity`.
    pub no_kda: f64,
    /// Bisection fails once the sub-step interval shrinks to this size.
    pub time_epsilon: f64,
    /// Half-width of the contact band around the floor.
    pub depth_epsilon: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
    /// Gravitational acceleration magnitude along -Y.
    pub gravity: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
            no_kdl: DEFAULT_LINEAR_DAMPING,
            no_kda: DEFAULT_ANGULAR_DAMPING,
            time_epsilon: DEFAULT_TIME_EPSILON,
            depth_epsilon: DEFAULT_DEPTH_EPSILON,
            static_friction: DEFAULT_STATIC_FRICTION,
            dynamic_friction: DEFAULT_DYNAMIC_FRICTION,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl Coefficients {
    /// Coefficients with gravity and damping switched off.
    pub fn frictionless_vacuum() -> Self {
        Self {
            no_kdl: 0.0,
            no_kda: 0.0,
            gravity: 0.0,
            static_friction: 0.0,
            dynamic_friction: 0.0,
            ..Self::default()
        }
    }

    /// Perfectly inelastic contact: impacts stop the approaching vertex.
    pub fn inelastic() -> Self {
        Self {
            restitution: 0.0,
            ..Self::default()
        }
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_damping(mut self, linear: f64, angular: f64) -> Self {
        self.no_kdl = linear;
        self.no_kda = angular;
        self
    }

    pub fn with_friction(mut self, static_friction: f64, dynamic_friction: f64) -> Self {
        self.static_friction = static_friction;
        self.dynamic_friction = dynamic_friction;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_epsilons(mut self, time_epsilon: f64, depth_epsilon: f64) -> Self {
        self.time_epsilon = time_epsilon;
        self.depth_epsilon = depth_epsilon;
        self
    }
}
