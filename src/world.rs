use glam::{DMat3, DVec3};
use log::{debug, trace, warn};

use crate::{
    collision::{
        detector::{CollisionDetector, CollisionRecord, CollisionState},
        plane::Floor,
    },
    config::{DEFAULT_FLOOR_HEIGHT, MAX_RESOLUTION_ITERATIONS},
    core::{
        rigidbody::RigidBody,
        state::{BodyState, StateStore},
        types::Coefficients,
    },
    dynamics::{
        forces::ForceAccumulator,
        integrator::Integrator,
        solver::{ImpulseResolver, StepMetrics},
    },
    error::{Result, SimulationError},
    utils::{logging::ScopedTimer, math::triangle_inverse_inertia},
};

/// Simulator of one rigid triangle above a static floor.
///
/// Owns two configurations: the authoritative one, visible through every
/// getter, and a scratch candidate that only exists while [`Simulator::step`]
/// runs. Setters mutate the authoritative configuration directly and must not
/// be interleaved with a step, which `&mut self` already guarantees.
#[derive(Debug, Clone)]
pub struct Simulator {
    body: RigidBody,
    states: StateStore,
    forces: ForceAccumulator,
    integrator: Integrator,
    floor: Floor,
    coefficients: Coefficients,
    last_collision: CollisionRecord,
    metrics: StepMetrics,
    elapsed: f64,
}

impl Simulator {
    /// Creates a simulator for a triangle with body-space `vertices` resting at the origin.
    pub fn new(
        vertices: [DVec3; 3],
        inverse_body_inertia: DMat3,
        mass: f64,
        floor_height: f64,
    ) -> Result<Self> {
        let body = RigidBody::new(vertices, inverse_body_inertia, mass)?;
        let floor = Floor::new(floor_height)?;
        let initial = BodyState::at_rest(&body);

        Ok(Self {
            body,
            states: StateStore::new(initial),
            forces: ForceAccumulator::new(),
            integrator: Integrator::new(),
            floor,
            coefficients: Coefficients::default(),
            last_collision: CollisionRecord::default(),
            metrics: StepMetrics::default(),
            elapsed: 0.0,
        })
    }

    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    /// Advances the simulation by `dt` seconds and returns the committed world-space vertices.
    ///
    /// The full interval is tried first. A penetrating candidate halves the
    /// attempted interval; a colliding one is resolved in place; a clear one is
    /// committed and the remainder of `dt` is attempted next.
    pub fn step(&mut self, dt: f64) -> Result<[DVec3; 3]> {
        if !(dt >= 0.0 && dt.is_finite()) {
            return Err(SimulationError::InvalidArgument(format!(
                "time step must be finite and >= 0, got {dt}"
            )));
        }

        let _timer = ScopedTimer::new("simulator::step");
        self.metrics = StepMetrics::default();

        let mut current_time = 0.0;
        let mut target_time = dt;

        while current_time < dt {
            let record = self.integrate_candidate(target_time - current_time);
            self.last_collision = record;

            match record.state {
                CollisionState::Penetrating => {
                    self.metrics.bisections += 1;
                    target_time = (current_time + target_time) * 0.5;
                    let interval = (target_time - current_time).abs();
                    if interval <= self.coefficients.time_epsilon {
                        warn!(
                            "Vertex {} still penetrates after bisecting to {interval:e} s",
                            record.vertex_index
                        );
                        return Err(SimulationError::Interpenetration {
                            elapsed: self.elapsed,
                            interval,
                        });
                    }
                    debug!(
                        "Vertex {} penetrates; retrying sub-step of {interval:e} s",
                        record.vertex_index
                    );
                    continue;
                }
                CollisionState::Colliding => self.resolve_candidate(record)?,
                CollisionState::Clear => {}
            }

            self.states.commit();
            self.metrics.commits += 1;
            self.elapsed += target_time - current_time;
            trace!("Committed sub-step {current_time:.6}..{target_time:.6}");

            current_time = target_time;
            target_time = dt;
        }

        Ok(self.states.current().vertices)
    }

    /// Drains the force queue onto the current configuration, integrates the
    /// candidate over `dt`, and classifies it.
    fn integrate_candidate(&mut self, dt: f64) -> CollisionRecord {
        self.forces.accumulate(
            self.states.current_mut(),
            &self.coefficients,
            self.body.inverse_mass,
        );

        let (source, target) = self.states.split();
        self.integrator.integrate(&self.body, source, target, dt);
        CollisionDetector::detect(target, &self.floor, self.coefficients.depth_epsilon)
    }

    fn resolve_candidate(&mut self, mut record: CollisionRecord) -> Result<()> {
        let mut iterations = 0;

        while record.state == CollisionState::Colliding {
            if iterations >= MAX_RESOLUTION_ITERATIONS {
                warn!(
                    "Contact on vertex {} did not resolve after {iterations} impulses",
                    record.vertex_index
                );
                return Err(SimulationError::ResolutionDivergence {
                    iterations,
                    vertex_index: record.vertex_index,
                });
            }

            let candidate = self.states.candidate_mut();
            if let Some(impulse) = ImpulseResolver::resolve(
                candidate,
                &record,
                &self.coefficients,
                self.body.inverse_mass,
            ) {
                trace!(
                    "Impulse {:.6} on vertex {} (friction {:?})",
                    impulse.normal,
                    record.vertex_index,
                    impulse.friction
                );
                self.metrics.record_impulse(&impulse);
            }
            iterations += 1;

            record = CollisionDetector::detect(
                self.states.candidate(),
                &self.floor,
                self.coefficients.depth_epsilon,
            );
            self.last_collision = record;
        }

        Ok(())
    }

    // Setters

    pub fn set_floor_height(&mut self, height: f64) -> Result<()> {
        self.floor.set_height(height)
    }

    pub fn set_coefficients(&mut self, coefficients: Coefficients) {
        self.coefficients = coefficients;
    }

    pub fn set_center_pos(&mut self, position: DVec3) {
        let state = self.states.current_mut();
        state.position = position;
        state.update_vertices(&self.body);
    }

    /// Replaces the orientation; callers must pass an orthonormal matrix.
    pub fn set_orientation(&mut self, orientation: DMat3) {
        let state = self.states.current_mut();
        state.orientation = orientation;
        state.refresh_derived(&self.body);
    }

    pub fn set_linear_velocity(&mut self, velocity: DVec3) {
        self.states.current_mut().linear_velocity = velocity;
    }

    pub fn set_angular_momentum(&mut self, momentum: DVec3) {
        let state = self.states.current_mut();
        state.angular_momentum = momentum;
        state.refresh_derived(&self.body);
    }

    /// Queues a force consumed by the next `step` only.
    pub fn apply_force(&mut self, force: DVec3) {
        self.forces.push_force(force);
    }

    /// Queues a torque consumed by the next `step` only.
    pub fn apply_torque(&mut self, torque: DVec3) {
        self.forces.push_torque(torque);
    }

    // Getters

    pub fn floor_height(&self) -> f64 {
        self.floor.height()
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    /// The authoritative configuration as of the last completed step or setter.
    pub fn state(&self) -> &BodyState {
        self.states.current()
    }

    pub fn vertices(&self) -> [DVec3; 3] {
        self.states.current().vertices
    }

    pub fn center_pos(&self) -> DVec3 {
        self.states.current().position
    }

    pub fn orientation(&self) -> DMat3 {
        self.states.current().orientation
    }

    pub fn linear_velocity(&self) -> DVec3 {
        self.states.current().linear_velocity
    }

    pub fn angular_velocity(&self) -> DVec3 {
        self.states.current().angular_velocity
    }

    pub fn angular_momentum(&self) -> DVec3 {
        self.states.current().angular_momentum
    }

    pub fn inverse_mass(&self) -> f64 {
        self.body.inverse_mass
    }

    /// World-space inverse inertia tensor of the authoritative configuration.
    pub fn inverse_inertia_tensor(&self) -> DMat3 {
        self.states.current().world_inverse_inertia
    }

    pub fn force_queue(&self) -> &ForceAccumulator {
        &self.forces
    }

    /// Simulated time consumed by committed sub-steps since construction.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn last_step_metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Detector verdict from the last classification performed by `step`.
    pub fn last_collision(&self) -> &CollisionRecord {
        &self.last_collision
    }
}

/// Builder for [`Simulator`] with the demo triangle as default geometry.
#[derive(Debug, Clone)]
pub struct SimulatorBuilder {
    vertices: [DVec3; 3],
    inverse_inertia: Option<DMat3>,
    mass: f64,
    floor_height: f64,
    coefficients: Coefficients,
    position: DVec3,
    orientation: DMat3,
    linear_velocity: DVec3,
    angular_momentum: DVec3,
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self {
            vertices: [
                DVec3::new(-0.5, 1.5, 0.0),
                DVec3::new(-0.2, -1.0, 0.0),
                DVec3::new(0.7, -0.5, 0.0),
            ],
            inverse_inertia: Some(DMat3::from_cols(
                DVec3::new(0.58, 0.11, 0.0),
                DVec3::new(0.11, 2.59, 0.0),
                DVec3::new(0.0, 0.0, 0.47),
            )),
            mass: 1.0,
            floor_height: DEFAULT_FLOOR_HEIGHT,
            coefficients: Coefficients::default(),
            position: DVec3::ZERO,
            orientation: DMat3::IDENTITY,
            linear_velocity: DVec3::ZERO,
            angular_momentum: DVec3::ZERO,
        }
    }

    /// Sets the body-space vertices and derives a thin-plate inertia tensor for them.
    pub fn triangle(mut self, vertices: [DVec3; 3]) -> Self {
        self.vertices = vertices;
        self.inverse_inertia = None;
        self
    }

    pub fn inverse_inertia(mut self, inverse_inertia: DMat3) -> Self {
        self.inverse_inertia = Some(inverse_inertia);
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn floor_height(mut self, height: f64) -> Self {
        self.floor_height = height;
        self
    }

    pub fn coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn orientation(mut self, orientation: DMat3) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn linear_velocity(mut self, velocity: DVec3) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn angular_momentum(mut self, momentum: DVec3) -> Self {
        self.angular_momentum = momentum;
        self
    }

    pub fn build(self) -> Result<Simulator> {
        let inverse_inertia = match self.inverse_inertia {
            Some(tensor) => tensor,
            None => triangle_inverse_inertia(&self.vertices, self.mass)?,
        };

        let mut sim = Simulator::new(self.vertices, inverse_inertia, self.mass, self.floor_height)?;
        sim.set_coefficients(self.coefficients);
        sim.set_orientation(self.orientation);
        sim.set_center_pos(self.position);
        sim.set_linear_velocity(self.linear_velocity);
        sim.set_angular_momentum(self.angular_momentum);
        Ok(sim)
    }
}
