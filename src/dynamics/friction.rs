use glam::DVec3;

use crate::core::types::Coefficients;

/// Coulomb friction impulse for a single floor contact.
///
/// `full_velocity` is the contact point velocity before the impulse and
/// `normal_impulse` the magnitude of the reaction impulse. Friction acts
/// against the full contact velocity, normal component included. A contact
/// point at rest takes the static branch; its canceling impulse is zero, so no
/// direction is ever derived from a zero vector.
pub fn friction_impulse(
    full_velocity: DVec3,
    normal_impulse: f64,
    inverse_mass: f64,
    coefficients: &Coefficients,
) -> DVec3 {
    let tangent = full_velocity.normalize_or_zero();

    let static_limit = coefficients.static_friction * normal_impulse;
    let required = (full_velocity / inverse_mass).dot(tangent);

    if full_velocity.dot(tangent) == 0.0 && required <= static_limit {
        -required * tangent
    } else {
        -coefficients.dynamic_friction * normal_impulse * tangent
    }
}
