use glam::{DMat3, DVec3};

use crate::error::{Result, SimulationError};

/// Immutable description of the simulated triangle.
///
/// Vertices are given in body space, relative to the center of mass.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub body_vertices: [DVec3; 3],
    pub inverse_body_inertia: DMat3,
    pub inverse_mass: f64,
}

impl RigidBody {
    pub fn new(vertices: [DVec3; 3], inverse_body_inertia: DMat3, mass: f64) -> Result<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimulationError::Construction(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::Construction(
                "body vertices must be finite".into(),
            ));
        }
        if !inverse_body_inertia.is_finite() {
            return Err(SimulationError::Construction(
                "inverse inertia tensor must be finite".into(),
            ));
        }

        Ok(Self {
            body_vertices: vertices,
            inverse_body_inertia,
            inverse_mass: 1.0 / mass,
        })
    }

    pub fn mass(&self) -> f64 {
        1.0 / self.inverse_mass
    }

    /// World-space inverse inertia for the given orientation: `R * I⁻¹ * Rᵀ`.
    pub fn world_inverse_inertia(&self, orientation: &DMat3) -> DMat3 {
        *orientation * self.inverse_body_inertia * orientation.transpose()
    }

    /// Transforms the body-space vertices by a position and orientation.
    pub fn world_vertices(&self, position: DVec3, orientation: &DMat3) -> [DVec3; 3] {
        self.body_vertices.map(|v| position + *orientation * v)
    }
}
