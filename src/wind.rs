//! Wind forces: the drag kernel driven by velocity relative to the air mass.
//!
//! Identical per-axis quadratic model as [`drag`](crate::drag), but the
//! relevant velocity on each axis is `body velocity − wind velocity`. A body
//! carried along with the wind feels no force; a body at rest in a wind
//! feels the full quadratic push downwind.

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::body::RigidBody;
use crate::constants::CD_SPHERE;
use crate::drag::axis_force;

/// Apply wind force to a body with one drag coefficient and area for all
/// axes.
///
/// # Arguments
/// * `body` - Rigid body handle
/// * `wind` - Wind velocity vector (m/s), the velocity of the air mass
/// * `cxo` - Dimensionless drag coefficient
/// * `s` - Reference area (m²)
/// * `p` - Air density (kg/m³)
pub fn apply_wind<B: RigidBody>(body: &mut B, wind: Vector3<f64>, cxo: f64, s: f64, p: f64) {
    let rel = body.linear_velocity() - wind;
    let force = Vector3::new(
        axis_force(rel.x, cxo, s, p),
        axis_force(rel.y, cxo, s, p),
        axis_force(rel.z, cxo, s, p),
    );
    body.add_force(force);
}

/// Apply wind force with a separate drag coefficient and reference area per
/// axis, for bodies whose profile differs along x, y, and z.
pub fn apply_wind_per_axis<B: RigidBody>(
    body: &mut B,
    wind: Vector3<f64>,
    cxo: [f64; 3],
    s: [f64; 3],
    p: f64,
) {
    let rel = body.linear_velocity() - wind;
    let force = Vector3::new(
        axis_force(rel.x, cxo[0], s[0], p),
        axis_force(rel.y, cxo[1], s[1], p),
        axis_force(rel.z, cxo[2], s[2], p),
    );
    body.add_force(force);
}

/// Apply wind force to a spherical body of radius `r` meters
/// (`cxo = 0.47`, reference area `π·r²`).
pub fn apply_wind_sphere<B: RigidBody>(body: &mut B, wind: Vector3<f64>, r: f64, p: f64) {
    apply_wind(body, wind, CD_SPHERE, r * r * PI, p);
}
