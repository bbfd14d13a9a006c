//! # aerodrag
//!
//! Ambient-air properties and per-axis quadratic drag/wind forces for
//! rigid-body simulations.
//!
//! The crate is a formula library: pure humid-air atmosphere calculations
//! (density, barometric pressure, latitude-corrected gravity), an immutable
//! [`Atmosphere`] snapshot answering altitude queries for a fixed site, and
//! force appliers that read a body's linear velocity through the
//! [`RigidBody`] seam and push a quadratic drag or wind force back into the
//! engine's accumulator. SI units throughout.

// Re-export the public API
pub use atmosphere::{
    air_density, air_molar_mass, gravity_at_latitude, pressure_at_altitude,
    saturation_vapor_pressure, Atmosphere, AtmosphereError, SATURATION_SINGULARITY_K,
};
pub use body::RigidBody;
pub use drag::{apply_drag, apply_drag_sphere};
pub use wind::{apply_wind, apply_wind_per_axis, apply_wind_sphere};

// Module declarations
mod atmosphere;
mod body;
pub mod constants;
mod drag;
mod wind;
