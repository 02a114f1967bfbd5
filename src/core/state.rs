use glam::{DMat3, DVec3};

use super::rigidbody::RigidBody;

/// One rigid-body configuration.
///
/// `position`, `orientation`, `linear_velocity` and `angular_momentum` are the
/// primary state. Everything else is derived and must be refreshed through
/// [`BodyState::refresh_derived`] whenever the primary state is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub position: DVec3,
    pub orientation: DMat3,
    pub linear_velocity: DVec3,
    pub angular_momentum: DVec3,

    // Derived
    pub world_inverse_inertia: DMat3,
    pub angular_velocity: DVec3,
    pub orientation_derivative: DMat3,
    pub net_force: DVec3,
    pub net_torque: DVec3,
    pub vertices: [DVec3; 3],
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DMat3::IDENTITY,
            linear_velocity: DVec3::ZERO,
            angular_momentum: DVec3::ZERO,
            world_inverse_inertia: DMat3::IDENTITY,
            angular_velocity: DVec3::ZERO,
            orientation_derivative: DMat3::ZERO,
            net_force: DVec3::ZERO,
            net_torque: DVec3::ZERO,
            vertices: [DVec3::ZERO; 3],
        }
    }
}

impl BodyState {
    /// Rest configuration at the origin with derived quantities filled in.
    pub fn at_rest(body: &RigidBody) -> Self {
        let mut state = Self::default();
        state.refresh_derived(body);
        state
    }

    /// Recomputes inertia, angular velocity and world vertices from the primary state.
    pub fn refresh_derived(&mut self, body: &RigidBody) {
        self.world_inverse_inertia = body.world_inverse_inertia(&self.orientation);
        self.angular_velocity = self.world_inverse_inertia * self.angular_momentum;
        self.update_vertices(body);
    }

    pub fn update_vertices(&mut self, body: &RigidBody) {
        self.vertices = body.world_vertices(self.position, &self.orientation);
    }

    /// Velocity of a world-space point rigidly attached to the body.
    pub fn point_velocity(&self, point: DVec3) -> DVec3 {
        self.linear_velocity + self.angular_velocity.cross(point - self.position)
    }
}

/// Double buffer holding the authoritative configuration and a scratch candidate.
#[derive(Debug, Clone)]
pub struct StateStore {
    states: [BodyState; 2],
    current: usize,
}

impl StateStore {
    pub fn new(initial: BodyState) -> Self {
        Self {
            states: [initial.clone(), initial],
            current: 0,
        }
    }

    pub fn current(&self) -> &BodyState {
        &self.states[self.current]
    }

    pub fn current_mut(&mut self) -> &mut BodyState {
        &mut self.states[self.current]
    }

    pub fn candidate(&self) -> &BodyState {
        &self.states[1 - self.current]
    }

    pub fn candidate_mut(&mut self) -> &mut BodyState {
        &mut self.states[1 - self.current]
    }

    /// Shared access to the current configuration alongside mutable access to the candidate.
    pub fn split(&mut self) -> (&BodyState, &mut BodyState) {
        let (left, right) = self.states.split_at_mut(1);
        if self.current == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        }
    }

    /// Promotes the candidate to the authoritative configuration.
    pub fn commit(&mut self) {
        self.current = 1 - self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_flips_authority() {
        let mut store = StateStore::new(BodyState::default());
        store.candidate_mut().position = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(store.current().position, DVec3::ZERO);

        store.commit();
        assert_eq!(store.current().position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(store.candidate().position, DVec3::ZERO);
    }

    #[test]
    fn split_pairs_current_with_candidate() {
        let mut store = StateStore::new(BodyState::default());
        store.commit();
        store.current_mut().linear_velocity = DVec3::X;
        let (source, target) = store.split();
        target.linear_velocity = source.linear_velocity * 2.0;
        assert_eq!(store.candidate().linear_velocity, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(store.current().linear_velocity, DVec3::X);
    }

    #[test]
    fn derived_quantities_follow_momentum() {
        let verts = [DVec3::Y, DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, -1.0, 0.0)];
        let inv = DMat3::from_diagonal(DVec3::new(2.0, 3.0, 4.0));
        let body = RigidBody::new(verts, inv, 1.0).unwrap();
        let mut state = BodyState::at_rest(&body);
        state.angular_momentum = DVec3::new(1.0, 1.0, 1.0);
        state.refresh_derived(&body);
        assert_eq!(state.angular_velocity, DVec3::new(2.0, 3.0, 4.0));
        assert_eq!(state.vertices[0], DVec3::Y);
    }
}
