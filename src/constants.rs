/// Physical constants used in atmosphere and drag calculations

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY_AIR: f64 = 287.058;

/// Specific gas constant for water vapor (J/(kg·K))
pub const R_WATER_VAPOR: f64 = 461.495;

/// Universal gas constant (J/(mol·K))
///
/// Kept at the two-decimal value the barometric formula here was calibrated
/// with, not the CODATA 8.314462618.
pub const R_UNIVERSAL: f64 = 8.31;

/// Molar mass of dry air (kg/mol)
pub const DRY_AIR_MOLAR_MASS: f64 = 0.02896;

/// Slope of the humid-air molar mass correction (kg/mol)
///
/// Humid air is lighter than dry air; molar mass drops linearly with the
/// fraction of total pressure contributed by water vapor:
/// `u = DRY_AIR_MOLAR_MASS - HUMIDITY_MOLAR_MASS_SLOPE * (pv / p)`.
pub const HUMIDITY_MOLAR_MASS_SLOPE: f64 = 0.010944;

/// Air density at sea level under typical conditions (kg/m³)
///
/// Conventional `p` for the force appliers when the caller has no
/// atmosphere model of their own.
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.22;

/// Conventional gravitational acceleration (m/s²)
///
/// Fallback `g` for [`pressure_at_altitude`](crate::pressure_at_altitude)
/// when no latitude-corrected value is available.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Gravitational acceleration at the equator at sea level (m/s²)
///
/// Leading coefficient of the International Gravity Formula.
pub const EQUATORIAL_GRAVITY: f64 = 9.780318;

/// International Gravity Formula sin²(lat) coefficient
pub const IGF_SIN2_COEFF: f64 = 0.005302;

/// International Gravity Formula sin²(2·lat) coefficient
pub const IGF_SIN2_2LAT_COEFF: f64 = 0.000006;

/// Free-air gravity gradient (m/s² per meter of altitude)
pub const FREE_AIR_GRADIENT: f64 = 0.000003086;

// Reference drag coefficients for common shapes, for callers picking a cxo.
// The reference area S depends on the shape: cross-section for a sphere,
// planform area for wings and tail surfaces, blade or swept area for rotors,
// wetted area for streamlined submerged hulls, and V^(2/3) for elongated
// bodies of revolution aligned with the flow (fuselages, airship envelopes).

/// Drag coefficient of a sphere
pub const CD_SPHERE: f64 = 0.47;

/// Drag coefficient of a 2:1 cone, apex into the flow
pub const CD_CONE_2_1: f64 = 0.5;

/// Drag coefficient of a cube, face into the flow
pub const CD_CUBE: f64 = 1.05;

/// Drag coefficient of a cylinder two diameters long, end into the flow
pub const CD_CYLINDER_2D: f64 = 0.82;

/// Drag coefficient of a streamlined teardrop body
pub const CD_TEARDROP: f64 = 0.04;
