//! Seam to the external rigid-body engine.

use nalgebra::Vector3;

/// The two engine operations the force appliers depend on.
///
/// This crate never owns or steps bodies; it reads one velocity and pushes
/// one force per call. Implement this for whatever handle your physics
/// engine hands out.
///
/// Contract expected of implementations:
/// - `linear_velocity` must not mutate engine state;
/// - `add_force` accumulates an additive force for the current simulation
///   step; the engine clears the accumulator per its own step lifecycle.
pub trait RigidBody {
    /// Current linear velocity of the body (m/s).
    fn linear_velocity(&self) -> Vector3<f64>;

    /// Accumulate an additive force (N) on the body for the current step.
    fn add_force(&mut self, force: Vector3<f64>);
}
