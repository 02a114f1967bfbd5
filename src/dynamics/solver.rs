use glam::DVec3;
use log::warn;

use super::friction::friction_impulse;
use crate::{
    collision::detector::CollisionRecord,
    core::{state::BodyState, types::Coefficients},
};

/// Counters describing the work done by one `step` call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepMetrics {
    pub commits: usize,
    pub bisections: usize,
    pub resolutions: usize,
    pub normal_impulse_sum: f64,
    pub friction_impulse_sum: f64,
}

impl StepMetrics {
    pub fn record_impulse(&mut self, impulse: &ContactImpulse) {
        self.resolutions += 1;
        self.normal_impulse_sum += impulse.normal.abs();
        self.friction_impulse_sum += impulse.friction.length();
    }
}

/// Impulse applied at a contact point, split into its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactImpulse {
    pub normal: f64,
    pub friction: DVec3,
    pub total: DVec3,
}

/// Single-contact impulse resolver with Coulomb friction.
pub struct ImpulseResolver;

impl ImpulseResolver {
    /// Applies a collision impulse at the contact recorded in `contact`.
    ///
    /// Only the momenta and the angular velocity change; the angular velocity is
    /// rebuilt from the cached world inverse inertia. Returns `None` without
    /// touching `state` when the effective mass is degenerate.
    pub fn resolve(
        state: &mut BodyState,
        contact: &CollisionRecord,
        coefficients: &Coefficients,
        inverse_mass: f64,
    ) -> Option<ContactImpulse> {
        let vertex = state.vertices[contact.vertex_index];
        let normal = contact.normal;
        let lever = vertex - state.position;
        let full_velocity = state.point_velocity(vertex);

        let numerator = -(1.0 + coefficients.restitution) * full_velocity.dot(normal);
        let denominator = inverse_mass
            + (state.world_inverse_inertia * lever.cross(normal))
                .cross(lever)
                .dot(normal);
        if !denominator.is_finite() || denominator <= f64::EPSILON {
            warn!(
                "Skipping impulse on vertex {}: degenerate effective mass {denominator}",
                contact.vertex_index
            );
            return None;
        }

        let magnitude = numerator / denominator;
        let friction = friction_impulse(full_velocity, magnitude, inverse_mass, coefficients);
        let total = normal * magnitude + friction;

        state.linear_velocity += inverse_mass * total;
        state.angular_momentum += lever.cross(total);
        state.angular_velocity = state.world_inverse_inertia * state.angular_momentum;

        Some(ContactImpulse {
            normal: magnitude,
            friction,
            total,
        })
    }
}
