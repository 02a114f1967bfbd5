use glam::DVec3;

use super::plane::Floor;
use crate::core::state::BodyState;

/// Contact classification of one configuration against the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionState {
    /// No vertex is inside the contact band while approaching, none penetrates.
    #[default]
    Clear,
    /// A vertex lies deeper than the depth epsilon below the floor.
    Penetrating,
    /// A vertex sits in the contact band and moves towards the floor.
    Colliding,
}

/// Result of one detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionRecord {
    pub state: CollisionState,
    pub normal: DVec3,
    pub vertex_index: usize,
}

impl CollisionRecord {
    pub fn is_clear(&self) -> bool {
        self.state == CollisionState::Clear
    }
}

/// Vertex-versus-floor narrow phase.
pub struct CollisionDetector;

impl CollisionDetector {
    /// Classifies `state` against `floor`.
    ///
    /// Vertices are visited in index order. The first penetrating vertex ends
    /// the pass. Colliding vertices do not, so the highest colliding index is
    /// the one reported.
    pub fn detect(state: &BodyState, floor: &Floor, depth_epsilon: f64) -> CollisionRecord {
        let mut record = CollisionRecord::default();

        for (index, vertex) in state.vertices.iter().enumerate() {
            let wall_dist = floor.signed_distance(*vertex);
            if wall_dist < -depth_epsilon {
                record.state = CollisionState::Penetrating;
                record.normal = floor.normal();
                record.vertex_index = index;
                break;
            }

            if wall_dist < depth_epsilon {
                let relative_velocity = floor.normal().dot(state.point_velocity(*vertex));
                if relative_velocity < 0.0 {
                    record.state = CollisionState::Colliding;
                    record.normal = floor.normal();
                    record.vertex_index = index;
                }
            }
        }

        record
    }
}
