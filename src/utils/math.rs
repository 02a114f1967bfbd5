//! Additional math helpers layered on top of `glam`.

use glam::{DMat3, DVec3};

use crate::error::{Result, SimulationError};

/// Builds the skew-symmetric matrix `S` with `S * u == v.cross(u)`.
pub fn skew(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// Re-orthonormalizes a rotation matrix that drifted under first-order integration.
///
/// The first column keeps its direction, the third becomes the normalized
/// cross product of the first two, and the second is rebuilt from the other two.
pub fn orthonormalize(m: DMat3) -> DMat3 {
    let x = m.x_axis.normalize_or_zero();
    let z = x.cross(m.y_axis).normalize_or_zero();
    let y = z.cross(x).normalize_or_zero();
    DMat3::from_cols(x, y, z)
}

/// Largest deviation of `m`'s columns from unit length and mutual orthogonality.
pub fn orthonormality_error(m: &DMat3) -> f64 {
    let cols = [m.x_axis, m.y_axis, m.z_axis];
    let mut worst: f64 = 0.0;
    for (i, a) in cols.iter().enumerate() {
        worst = worst.max((a.length() - 1.0).abs());
        for b in cols.iter().skip(i + 1) {
            worst = worst.max(a.dot(*b).abs());
        }
    }
    worst
}

/// Body-space inverse inertia tensor of a thin triangular plate.
///
/// The tensor is taken about the centroid of `vertices`, which should coincide
/// with the body's center of mass.
pub fn triangle_inverse_inertia(vertices: &[DVec3; 3], mass: f64) -> Result<DMat3> {
    if !(mass > 0.0 && mass.is_finite()) {
        return Err(SimulationError::Construction(format!(
            "mass must be positive and finite, got {mass}"
        )));
    }

    let centroid = (vertices[0] + vertices[1] + vertices[2]) / 3.0;
    let area2 = (vertices[1] - vertices[0])
        .cross(vertices[2] - vertices[0])
        .length();
    if area2 <= f64::EPSILON {
        return Err(SimulationError::Construction(
            "triangle is degenerate (zero area)".into(),
        ));
    }

    // Second moment of the plate about its centroid.
    let mut covariance = DMat3::ZERO;
    for v in vertices {
        let q = *v - centroid;
        covariance += DMat3::from_cols(q * q.x, q * q.y, q * q.z);
    }
    covariance *= mass / 12.0;

    let trace = covariance.x_axis.x + covariance.y_axis.y + covariance.z_axis.z;
    let inertia = DMat3::from_diagonal(DVec3::splat(trace)) - covariance;
    if inertia.determinant().abs() <= f64::EPSILON {
        return Err(SimulationError::Construction(
            "triangle inertia tensor is singular".into(),
        ));
    }
    Ok(inertia.inverse())
}
