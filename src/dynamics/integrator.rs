use crate::{
    core::{rigidbody::RigidBody, state::BodyState},
    utils::math::{orthonormalize, skew},
};

/// Explicit Euler integrator over the primary rigid-body state.
///
/// Angular momentum, not angular velocity, is integrated. Derived quantities of
/// the target are rebuilt from scratch after every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn new() -> Self {
        Self
    }

    /// Advances `source` by `dt` into `target`, using the net force and torque
    /// already accumulated on `source`.
    pub fn integrate(&self, body: &RigidBody, source: &BodyState, target: &mut BodyState, dt: f64) {
        target.position = source.position + source.linear_velocity * dt;

        target.orientation_derivative = skew(source.angular_velocity) * source.orientation;
        target.orientation = orthonormalize(source.orientation + target.orientation_derivative * dt);

        target.linear_velocity = source.linear_velocity + (dt * body.inverse_mass) * source.net_force;
        target.angular_momentum = source.angular_momentum + source.net_torque * dt;

        target.net_force = source.net_force;
        target.net_torque = source.net_torque;

        target.refresh_derived(body);
    }
}
