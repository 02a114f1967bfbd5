use glam::DVec3;

use crate::{
    config::{
        ANCHOR_TELEPORT_CLEARANCE, DEFAULT_ANCHOR_DAMPING, DEFAULT_ANCHOR_REACH,
        DEFAULT_ANCHOR_STIFFNESS,
    },
    core::{state::BodyState, types::Coefficients},
    world::Simulator,
};

/// Pending one-shot forces and torques queued between steps.
///
/// The queues are drained by [`ForceAccumulator::accumulate`], which the step
/// driver calls before every integration attempt. Entries are consumed by the
/// first attempt only; bisection retries see just gravity and damping.
#[derive(Debug, Default, Clone)]
pub struct ForceAccumulator {
    forces: Vec<DVec3>,
    torques: Vec<DVec3>,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_force(&mut self, force: DVec3) {
        self.forces.push(force);
    }

    pub fn push_torque(&mut self, torque: DVec3) {
        self.torques.push(torque);
    }

    pub fn pending_forces(&self) -> &[DVec3] {
        &self.forces
    }

    pub fn pending_torques(&self) -> &[DVec3] {
        &self.torques
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty() && self.torques.is_empty()
    }

    /// Writes the net force and torque acting on `state` and empties the queues.
    pub fn accumulate(&mut self, state: &mut BodyState, coefficients: &Coefficients, inverse_mass: f64) {
        let gravity = DVec3::new(0.0, -coefficients.gravity / inverse_mass, 0.0);
        let queued_force: DVec3 = self.forces.drain(..).sum();
        let queued_torque: DVec3 = self.torques.drain(..).sum();

        state.net_force = gravity + queued_force + (-coefficients.no_kdl * state.linear_velocity);
        state.net_torque = queued_torque + (-coefficients.no_kda * state.angular_velocity);
    }
}

/// Caller-side hook that feeds external input into a [`Simulator`].
///
/// Implementations are invoked by the caller between two `step` calls, never
/// during one. They may queue forces and torques or use the direct state
/// setters. Whatever they queue is consumed by the next `step` only.
pub trait ForceGenerator {
    fn apply(&self, sim: &mut Simulator);
}

impl<F> ForceGenerator for F
where
    F: Fn(&mut Simulator),
{
    fn apply(&self, sim: &mut Simulator) {
        self(sim)
    }
}

/// Damped Hookean spring pulling one vertex of the body towards an anchor point.
///
/// When the vertex is out of reach the body's center is moved onto the anchor
/// instead, bypassing integration. The move is raised if needed so the body
/// lands at least [`ANCHOR_TELEPORT_CLEARANCE`] above the floor. Vertex indices
/// past the last vertex address vertex 2.
#[derive(Debug, Clone, Copy)]
pub struct AnchorSpring {
    pub anchor: DVec3,
    pub vertex_index: usize,
    pub stiffness: f64,
    pub damping: f64,
    pub reach: f64,
}

impl AnchorSpring {
    pub fn new(anchor: DVec3, vertex_index: usize) -> Self {
        Self {
            anchor,
            vertex_index: vertex_index.min(2),
            stiffness: DEFAULT_ANCHOR_STIFFNESS,
            damping: DEFAULT_ANCHOR_DAMPING,
            reach: DEFAULT_ANCHOR_REACH,
        }
    }

    pub fn with_constants(mut self, stiffness: f64, damping: f64) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    pub fn with_reach(mut self, reach: f64) -> Self {
        self.reach = reach;
        self
    }

    fn vertex(&self, state: &BodyState) -> DVec3 {
        state.vertices[self.vertex_index.min(state.vertices.len() - 1)]
    }

    /// Center position used when the vertex is out of reach.
    pub fn teleport_target(&self, state: &BodyState, floor_height: f64) -> DVec3 {
        let lowest_offset = state
            .vertices
            .iter()
            .map(|v| v.y - state.position.y)
            .fold(f64::INFINITY, f64::min);
        let min_y = -floor_height - lowest_offset + ANCHOR_TELEPORT_CLEARANCE;
        DVec3::new(self.anchor.x, self.anchor.y.max(min_y), self.anchor.z)
    }

    /// Spring-damper force on the attached vertex, or `None` when it coincides with the anchor.
    pub fn force_on(&self, state: &BodyState) -> Option<DVec3> {
        let vertex = self.vertex(state);
        let spring = -self.stiffness * (vertex - self.anchor);
        let spring_sq = spring.dot(spring);
        if spring_sq <= f64::EPSILON * f64::EPSILON {
            return None;
        }

        let vertex_velocity = state.point_velocity(vertex);
        let damping = -self.damping * (vertex_velocity.dot(spring) / spring_sq) * spring;
        Some(spring + damping)
    }
}

impl ForceGenerator for AnchorSpring {
    fn apply(&self, sim: &mut Simulator) {
        let state = sim.state();
        let vertex = self.vertex(state);
        if (vertex - self.anchor).length_squared() >= self.reach * self.reach {
            let target = self.teleport_target(state, sim.floor_height());
            sim.set_center_pos(target);
            return;
        }

        if let Some(force) = self.force_on(state) {
            let lever = vertex - state.position;
            sim.apply_force(force);
            sim.apply_torque(lever.cross(force));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn accumulate_adds_gravity_damping_and_queue() {
        let mut acc = ForceAccumulator::new();
        acc.push_force(DVec3::new(1.0, 0.0, 0.0));
        acc.push_force(DVec3::new(0.0, 0.0, 2.0));
        acc.push_torque(DVec3::new(0.0, 3.0, 0.0));

        let mut state = BodyState {
            linear_velocity: DVec3::new(10.0, 0.0, 0.0),
            angular_velocity: DVec3::new(0.0, 0.0, 4.0),
            ..BodyState::default()
        };
        let coefs = Coefficients::default().with_damping(0.5, 0.25);

        acc.accumulate(&mut state, &coefs, 0.5);

        assert_abs_diff_eq!(state.net_force.x, 1.0 - 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.net_force.y, -9.8 * 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.net_force.z, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.net_torque.y, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.net_torque.z, -1.0, epsilon = 1e-12);
        assert!(acc.is_empty());
    }

    #[test]
    fn queue_is_consumed_once() {
        let mut acc = ForceAccumulator::new();
        acc.push_force(DVec3::X * 4.0);
        let mut state = BodyState::default();
        let coefs = Coefficients::frictionless_vacuum();

        acc.accumulate(&mut state, &coefs, 1.0);
        assert_eq!(state.net_force, DVec3::X * 4.0);

        acc.accumulate(&mut state, &coefs, 1.0);
        assert_eq!(state.net_force, DVec3::ZERO);
    }

    #[test]
    fn anchor_spring_pulls_towards_anchor() {
        let state = BodyState {
            vertices: [DVec3::new(0.0, 1.0, 0.0), DVec3::ZERO, DVec3::ZERO],
            ..BodyState::default()
        };
        let spring = AnchorSpring::new(DVec3::new(0.0, 3.0, 0.0), 0);
        let force = spring.force_on(&state).expect("vertex is away from anchor");
        assert_abs_diff_eq!(force.y, 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(force.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn anchor_spring_damps_motion_along_spring() {
        let state = BodyState {
            vertices: [DVec3::new(0.0, 1.0, 0.0), DVec3::ZERO, DVec3::ZERO],
            linear_velocity: DVec3::new(0.0, 1.0, 0.0),
            ..BodyState::default()
        };
        let spring = AnchorSpring::new(DVec3::new(0.0, 3.0, 0.0), 0);
        let force = spring.force_on(&state).unwrap();
        // Moving towards the anchor at 1 m/s removes 10 * 1 * 20 / 400 * 20 = 10 N.
        assert_abs_diff_eq!(force.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_vertex_index_uses_last_vertex() {
        let state = BodyState {
            vertices: [DVec3::ZERO, DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0)],
            ..BodyState::default()
        };
        let spring = AnchorSpring {
            vertex_index: 7,
            ..AnchorSpring::new(DVec3::new(0.0, 3.0, 0.0), 0)
        };
        let force = spring.force_on(&state).expect("vertex 2 is away from anchor");
        assert_abs_diff_eq!(force.y, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn teleport_target_stays_above_floor() {
        let state = BodyState {
            position: DVec3::new(0.0, 4.0, 0.0),
            vertices: [
                DVec3::new(0.0, 3.0, 0.0),
                DVec3::new(1.0, 5.0, 0.0),
                DVec3::new(-1.0, 5.0, 0.0),
            ],
            ..BodyState::default()
        };
        let spring = AnchorSpring::new(DVec3::new(20.0, -3.0, 1.0), 0);

        // Floor at y = -2; the lowest vertex sits 1 below the center.
        let target = spring.teleport_target(&state, 2.0);
        assert!(target.abs_diff_eq(DVec3::new(20.0, -0.5, 1.0), 1e-12));

        let high = AnchorSpring::new(DVec3::new(20.0, 6.0, 1.0), 0);
        assert_eq!(high.teleport_target(&state, 2.0), high.anchor);
    }

    #[test]
    fn anchor_on_vertex_yields_no_force() {
        let state = BodyState {
            vertices: [DVec3::ONE, DVec3::ZERO, DVec3::ZERO],
            ..BodyState::default()
        };
        let spring = AnchorSpring::new(DVec3::ONE, 0);
        assert!(spring.force_on(&state).is_none());
    }
}
