use glam::DVec3;

use crate::error::{Result, SimulationError};

/// Static half-space floor: a point `p` is above it when `normal·p + offset >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    normal: DVec3,
    offset: f64,
}

impl Floor {
    /// Horizontal floor at `y = -height`.
    pub fn new(height: f64) -> Result<Self> {
        Self::validate_height(height)?;
        Ok(Self {
            normal: DVec3::Y,
            offset: height,
        })
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn height(&self) -> f64 {
        self.offset
    }

    pub fn set_height(&mut self, height: f64) -> Result<()> {
        Self::validate_height(height).map_err(|err| match err {
            SimulationError::Construction(msg) => SimulationError::InvalidArgument(msg),
            other => other,
        })?;
        self.offset = height;
        Ok(())
    }

    /// Signed distance of `point` from the floor, positive above it.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    fn validate_height(height: f64) -> Result<()> {
        if height >= 0.0 && height.is_finite() {
            Ok(())
        } else {
            Err(SimulationError::Construction(format!(
                "floor height must be finite and >= 0, got {height}"
            )))
        }
    }
}
