//! Quadratic aerodynamic drag applied per coordinate axis.
//!
//! Each applier reads the body's linear velocity, computes
//! `F = v² · cxo · p · s / 2` independently on every axis with the force
//! opposing the velocity sign, and pushes the resulting vector into the
//! engine's force accumulator. The per-axis decomposition is deliberate:
//! consumers tune against it, so it is not collapsed into a
//! velocity-magnitude formulation even though the latter is the physically
//! exact one.

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::body::RigidBody;
use crate::constants::CD_SPHERE;

/// Quadratic force contribution of one axis.
///
/// An exactly-zero velocity component contributes exactly zero force; the
/// magnitude test is strict and the sign flip keys off the signed velocity,
/// so the force always opposes the component's direction of motion.
#[inline(always)]
pub(crate) fn axis_force(v: f64, cxo: f64, s: f64, p: f64) -> f64 {
    if v.abs() > 0.0 {
        let f = v * v * cxo * p * s / 2.0;
        if v > 0.0 {
            -f
        } else {
            f
        }
    } else {
        0.0
    }
}

/// Per-axis quadratic drag force from a relative velocity vector.
#[inline]
pub(crate) fn drag_force(vel: Vector3<f64>, cxo: f64, s: f64, p: f64) -> Vector3<f64> {
    Vector3::new(
        axis_force(vel.x, cxo, s, p),
        axis_force(vel.y, cxo, s, p),
        axis_force(vel.z, cxo, s, p),
    )
}

/// Apply aerodynamic drag to a body.
///
/// # Arguments
/// * `body` - Rigid body handle
/// * `cxo` - Dimensionless drag coefficient (see the shape constants in
///   [`constants`](crate::constants))
/// * `s` - Reference area (m²)
/// * `p` - Air density (kg/m³);
///   [`SEA_LEVEL_AIR_DENSITY`](crate::constants::SEA_LEVEL_AIR_DENSITY)
///   when no atmosphere model is in play
pub fn apply_drag<B: RigidBody>(body: &mut B, cxo: f64, s: f64, p: f64) {
    let force = drag_force(body.linear_velocity(), cxo, s, p);
    body.add_force(force);
}

/// Apply aerodynamic drag to a spherical body of radius `r` meters.
///
/// Fixes `cxo = 0.47` and uses the cross-section `π·r²` as reference area.
pub fn apply_drag_sphere<B: RigidBody>(body: &mut B, r: f64, p: f64) {
    apply_drag(body, CD_SPHERE, r * r * PI, p);
}
