//! Ambient-atmosphere formulas and the fixed-conditions snapshot.
//!
//! Closed-form humid-air calculations: molar mass, latitude-corrected
//! gravity, density from the two-component ideal gas law, and barometric
//! pressure by altitude. All inputs and outputs are SI (Kelvin, Pascal,
//! meter, kg).

use thiserror::Error;

use crate::constants::{
    DRY_AIR_MOLAR_MASS, EQUATORIAL_GRAVITY, FREE_AIR_GRADIENT, HUMIDITY_MOLAR_MASS_SLOPE,
    IGF_SIN2_2LAT_COEFF, IGF_SIN2_COEFF, R_DRY_AIR, R_UNIVERSAL, R_WATER_VAPOR,
};

/// Temperature (K) at which the saturation vapor pressure formula divides
/// by zero. The Magnus fit is only meaningful over terrestrial temperatures;
/// the fast-path functions do not guard this.
pub const SATURATION_SINGULARITY_K: f64 = 35.85;

/// Domain violations reported by [`Atmosphere::try_new`].
///
/// The formula functions themselves never return errors; out-of-domain
/// inputs degrade silently to NaN/Inf.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmosphereError {
    #[error("absolute temperature must be positive, got {0} K")]
    NonPositiveTemperature(f64),
    #[error("temperature {0} K sits on the saturation vapor pressure singularity")]
    SaturationSingularity(f64),
    #[error("sea-level pressure must be positive, got {0} Pa")]
    NonPositivePressure(f64),
    #[error("relative humidity must be a fraction in [0, 1], got {0}")]
    HumidityOutOfRange(f64),
}

/// Molar mass of humid air (kg/mol).
///
/// Dry-air molar mass adjusted downward by the fraction of total pressure
/// contributed by water vapor.
///
/// # Arguments
/// * `p` - Total absolute pressure (Pa); must be nonzero
/// * `p_vapor` - Partial pressure of water vapor (Pa)
pub fn air_molar_mass(p: f64, p_vapor: f64) -> f64 {
    DRY_AIR_MOLAR_MASS - HUMIDITY_MOLAR_MASS_SLOPE * (p_vapor / p)
}

/// Gravitational acceleration by latitude and altitude (m/s²).
///
/// International Gravity Formula with a free-air altitude correction.
/// Latitude outside [-90, 90] is not rejected; the result is still a number,
/// just not one describing anywhere on Earth.
///
/// # Arguments
/// * `latitude_deg` - Geographic latitude in degrees
/// * `altitude_m` - Height above sea level in meters (0 for sea level)
pub fn gravity_at_latitude(latitude_deg: f64, altitude_m: f64) -> f64 {
    let lat = latitude_deg.to_radians();
    let sin2_lat = lat.sin() * lat.sin();
    let sin_2lat = (2.0 * lat).sin();
    let sin2_2lat = sin_2lat * sin_2lat;
    EQUATORIAL_GRAVITY * (1.0 + IGF_SIN2_COEFF * sin2_lat - IGF_SIN2_2LAT_COEFF * sin2_2lat)
        - FREE_AIR_GRADIENT * altitude_m
}

/// Saturation vapor pressure of water (Pa) at absolute temperature `t` (K).
///
/// Magnus-form empirical fit, valid over typical terrestrial temperatures.
/// Divides by zero at [`SATURATION_SINGULARITY_K`].
pub fn saturation_vapor_pressure(t: f64) -> f64 {
    let psat_mbar = 6.1078 * 10f64.powf((7.5 * t - 2048.625) / (t - SATURATION_SINGULARITY_K));
    psat_mbar * 100.0
}

/// Density of humid air (kg/m³).
///
/// Splits total pressure into dry-air and water-vapor partial pressures and
/// sums their ideal-gas contributions.
///
/// # Arguments
/// * `t` - Absolute temperature (K); must be nonzero and not the
///   saturation singularity
/// * `p` - Absolute pressure (Pa)
/// * `rh` - Relative humidity as a fraction in [0, 1]
pub fn air_density(t: f64, p: f64, rh: f64) -> f64 {
    let p_vapor = rh * saturation_vapor_pressure(t);
    let p_dry = p - p_vapor;
    p_dry / (R_DRY_AIR * t) + p_vapor / (R_WATER_VAPOR * t)
}

/// Barometric pressure (Pa) at altitude `h` above sea level.
///
/// Exponential barometric formula with the molar mass of humid air derived
/// from the sea-level conditions.
///
/// # Arguments
/// * `h` - Altitude above sea level (m)
/// * `t` - Absolute temperature (K); must be nonzero
/// * `p0` - Pressure at sea level (Pa)
/// * `rh` - Relative humidity as a fraction in [0, 1]
/// * `g` - Gravitational acceleration (m/s²);
///   [`STANDARD_GRAVITY`](crate::constants::STANDARD_GRAVITY) when no
///   latitude-corrected value is available
pub fn pressure_at_altitude(h: f64, t: f64, p0: f64, rh: f64, g: f64) -> f64 {
    let p_vapor = rh * saturation_vapor_pressure(t);
    let u = air_molar_mass(p0, p_vapor);
    p0 * (-u * g * h / (R_UNIVERSAL * t)).exp()
}

/// Fixed reference conditions for one location, with gravity and sea-level
/// density derived once at construction.
///
/// Suited to a simulation run at a fixed site: build it once, then answer
/// altitude-dependent pressure/density queries for the lifetime of the run.
/// All queries are pure functions of the stored state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    temperature: f64,
    relative_humidity: f64,
    sea_level_pressure: f64,
    latitude: f64,
    gravity: f64,
    density0: f64,
}

impl Atmosphere {
    /// Build a snapshot from reference conditions, deriving gravity at the
    /// given latitude and the sea-level air density.
    ///
    /// No validation: out-of-domain inputs (nonpositive temperature or
    /// pressure) propagate as NaN/Inf through every query. Use
    /// [`try_new`](Self::try_new) to reject them up front.
    ///
    /// # Arguments
    /// * `temperature` - Absolute temperature (K)
    /// * `relative_humidity` - Fraction in [0, 1]
    /// * `sea_level_pressure` - Pressure at sea level (Pa)
    /// * `latitude` - Geographic latitude in degrees
    pub fn new(
        temperature: f64,
        relative_humidity: f64,
        sea_level_pressure: f64,
        latitude: f64,
    ) -> Self {
        let gravity = gravity_at_latitude(latitude, 0.0);
        let density0 = air_density(temperature, sea_level_pressure, relative_humidity);
        Self {
            temperature,
            relative_humidity,
            sea_level_pressure,
            latitude,
            gravity,
            density0,
        }
    }

    /// Checked variant of [`new`](Self::new): rejects inputs outside the
    /// physical domain of the formulas.
    pub fn try_new(
        temperature: f64,
        relative_humidity: f64,
        sea_level_pressure: f64,
        latitude: f64,
    ) -> Result<Self, AtmosphereError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(AtmosphereError::NonPositiveTemperature(temperature));
        }
        if temperature == SATURATION_SINGULARITY_K {
            return Err(AtmosphereError::SaturationSingularity(temperature));
        }
        if !sea_level_pressure.is_finite() || sea_level_pressure <= 0.0 {
            return Err(AtmosphereError::NonPositivePressure(sea_level_pressure));
        }
        if !(0.0..=1.0).contains(&relative_humidity) {
            return Err(AtmosphereError::HumidityOutOfRange(relative_humidity));
        }
        Ok(Self::new(
            temperature,
            relative_humidity,
            sea_level_pressure,
            latitude,
        ))
    }

    /// Gravitational acceleration at the snapshot's latitude, sea level
    /// (m/s²). Stored at construction, no recomputation.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Air density at sea level for the reference conditions (kg/m³).
    pub fn reference_density(&self) -> f64 {
        self.density0
    }

    /// Barometric pressure (Pa) at altitude `h` meters above sea level,
    /// using the snapshot's own gravity.
    pub fn pressure_at(&self, h: f64) -> f64 {
        pressure_at_altitude(
            h,
            self.temperature,
            self.sea_level_pressure,
            self.relative_humidity,
            self.gravity,
        )
    }

    /// Air density (kg/m³) at altitude `h` meters above sea level.
    pub fn density_at(&self, h: f64) -> f64 {
        air_density(self.temperature, self.pressure_at(h), self.relative_humidity)
    }

    /// Reference absolute temperature (K).
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Reference relative humidity, fraction in [0, 1].
    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    /// Reference pressure at sea level (Pa).
    pub fn sea_level_pressure(&self) -> f64 {
        self.sea_level_pressure
    }

    /// Geographic latitude (degrees).
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_equator_sea_level() {
        let g = gravity_at_latitude(0.0, 0.0);
        assert!((g - 9.780318).abs() < 1e-12, "equator gravity: {g}");
    }

    #[test]
    fn test_gravity_pole_sea_level() {
        // sin²(90°) = 1 and sin²(180°) = 0, so only the first correction
        // term survives at the pole
        let g = gravity_at_latitude(90.0, 0.0);
        let expected = 9.780318 * (1.0 + 0.005302);
        assert!((g - expected).abs() < 1e-9, "pole gravity: {g}");
    }

    #[test]
    fn test_gravity_increases_toward_pole() {
        let mut prev = gravity_at_latitude(0.0, 0.0);
        for lat in [15.0, 30.0, 45.0, 60.0, 75.0, 90.0] {
            let g = gravity_at_latitude(lat, 0.0);
            assert!(g > prev, "gravity not increasing at latitude {lat}: {g}");
            prev = g;
        }
    }

    #[test]
    fn test_gravity_decreases_with_altitude() {
        let sea = gravity_at_latitude(45.0, 0.0);
        let high = gravity_at_latitude(45.0, 8848.0);
        assert!(high < sea);
        assert!((sea - high - 0.000003086 * 8848.0).abs() < 1e-12);
    }

    #[test]
    fn test_saturation_vapor_pressure_room_temperature() {
        // Accepted value at 20°C is about 2339 Pa
        let psat = saturation_vapor_pressure(293.15);
        assert!((psat - 2339.0).abs() < 10.0, "psat at 20C: {psat}");
    }

    #[test]
    fn test_saturation_vapor_pressure_grows_with_temperature() {
        let cold = saturation_vapor_pressure(263.15);
        let warm = saturation_vapor_pressure(303.15);
        assert!(warm > cold);
    }

    #[test]
    fn test_air_molar_mass_dry() {
        assert_eq!(air_molar_mass(101325.0, 0.0), 0.02896);
    }

    #[test]
    fn test_air_molar_mass_humid_is_lighter() {
        let dry = air_molar_mass(101325.0, 0.0);
        let humid = air_molar_mass(101325.0, 2000.0);
        assert!(humid < dry);
    }

    #[test]
    fn test_air_density_standard_dry() {
        // 15°C, 1013.25 hPa, dry air: about 1.225 kg/m³
        let rho = air_density(288.15, 101325.0, 0.0);
        assert!((rho - 1.225).abs() < 0.001, "standard dry density: {rho}");
    }

    #[test]
    fn test_humid_air_is_less_dense() {
        let dry = air_density(288.15, 101325.0, 0.0);
        let humid = air_density(288.15, 101325.0, 0.8);
        assert!(humid < dry);
    }

    #[test]
    fn test_pressure_decreases_with_altitude() {
        let mut prev = pressure_at_altitude(0.0, 288.15, 101325.0, 0.5, 9.81);
        assert!((prev - 101325.0).abs() < 1e-9);
        for h in [500.0, 1000.0, 2000.0, 4000.0, 8000.0] {
            let p = pressure_at_altitude(h, 288.15, 101325.0, 0.5, 9.81);
            assert!(p < prev, "pressure not decreasing at {h} m: {p}");
            assert!(p > 0.0);
            prev = p;
        }
    }

    #[test]
    fn test_pressure_at_altitude_plausible_scale_height() {
        // Near sea level, pressure falls by roughly 12 Pa per meter
        let p0 = pressure_at_altitude(0.0, 288.15, 101325.0, 0.0, 9.81);
        let p100 = pressure_at_altitude(100.0, 288.15, 101325.0, 0.0, 9.81);
        let drop = p0 - p100;
        assert!(drop > 1000.0 && drop < 1400.0, "pressure drop over 100 m: {drop}");
    }

    #[test]
    fn test_density_decreases_with_altitude() {
        let atmo = Atmosphere::new(288.15, 0.5, 101325.0, 45.0);
        let mut prev = atmo.density_at(0.0);
        for h in [1000.0, 3000.0, 6000.0, 10000.0] {
            let rho = atmo.density_at(h);
            assert!(rho < prev, "density not decreasing at {h} m: {rho}");
            prev = rho;
        }
    }

    #[test]
    fn test_snapshot_round_trip() {
        let atmo = Atmosphere::new(288.15, 0.5, 101325.0, 45.0);
        let direct = air_density(288.15, 101325.0, 0.5);
        assert!((atmo.density_at(0.0) - direct).abs() < 1e-12);
        assert!((atmo.reference_density() - direct).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_gravity_stored_once() {
        let atmo = Atmosphere::new(288.15, 0.5, 101325.0, 45.0);
        assert_eq!(atmo.gravity(), gravity_at_latitude(45.0, 0.0));
    }

    #[test]
    fn test_snapshot_accessors() {
        let atmo = Atmosphere::new(288.15, 0.5, 101325.0, 45.0);
        assert_eq!(atmo.temperature(), 288.15);
        assert_eq!(atmo.relative_humidity(), 0.5);
        assert_eq!(atmo.sea_level_pressure(), 101325.0);
        assert_eq!(atmo.latitude(), 45.0);
    }

    #[test]
    fn test_try_new_accepts_standard_conditions() {
        assert!(Atmosphere::try_new(288.15, 0.5, 101325.0, 45.0).is_ok());
    }

    #[test]
    fn test_try_new_rejects_bad_domain() {
        assert_eq!(
            Atmosphere::try_new(0.0, 0.5, 101325.0, 45.0),
            Err(AtmosphereError::NonPositiveTemperature(0.0))
        );
        assert_eq!(
            Atmosphere::try_new(-10.0, 0.5, 101325.0, 45.0),
            Err(AtmosphereError::NonPositiveTemperature(-10.0))
        );
        assert_eq!(
            Atmosphere::try_new(35.85, 0.5, 101325.0, 45.0),
            Err(AtmosphereError::SaturationSingularity(35.85))
        );
        assert_eq!(
            Atmosphere::try_new(288.15, 0.5, 0.0, 45.0),
            Err(AtmosphereError::NonPositivePressure(0.0))
        );
        assert_eq!(
            Atmosphere::try_new(288.15, 1.5, 101325.0, 45.0),
            Err(AtmosphereError::HumidityOutOfRange(1.5))
        );
        assert_eq!(
            Atmosphere::try_new(288.15, -0.1, 101325.0, 45.0),
            Err(AtmosphereError::HumidityOutOfRange(-0.1))
        );
    }
}
