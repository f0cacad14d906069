//! # Angle value type
//!
//! [`Angle`] stores an angular measure in decimal degrees together with its radian
//! equivalent, computed once at construction. No range normalization is applied:
//! negative and large values are kept as given, which is what a declination or an
//! intermediate ephemeris term needs.
//!
//! Two renderings are available:
//!
//! - [`Angle::to_decimal_string`] — `"{d}°.{fffff}"`, e.g. `30°.20400`
//! - [`Display`](std::fmt::Display) — `"{d}° {m}' {s}''"`, e.g. `-7° 47' 6''`
//!
//! ## The `from_hms` asymmetry
//!
//! [`Angle::from_hms`] sums `h + m/60 + s/3600` and uses the result **as degrees**.
//! It does not apply the ×15 hour-to-degree factor that
//! [`RightAscension::from_hms`](crate::right_ascension::RightAscension::from_hms) applies.
//! The obliquity series relies on this: `Angle::from_hms(23, 26, 21.448)` is the
//! degree/arcminute/arcsecond value 23°26'21.448". Callers holding a genuine hour angle
//! should go through `RightAscension` instead.
use std::fmt;
use std::str::FromStr;

use crate::constants::{Degree, Radian, RADEG, SECONDS_PER_HOUR, SEXAGESIMAL_BASE};
use crate::conversion::{fractional_part, integer_part, integral, parse_dec_to_deg};
use crate::solar_errors::SolarError;

/// Number of fractional digits used by [`Angle::to_decimal_string`].
const DECIMAL_DIGITS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    degrees: Degree,
    radians: Radian,
}

impl Angle {
    /// Construct an angle from decimal degrees, e.g. `30.204`.
    pub fn new(degrees: Degree) -> Self {
        Angle {
            degrees,
            radians: degrees * RADEG,
        }
    }

    /// Construct an angle from a sexagesimal triple, summed as `h + m/60 + s/3600` degrees.
    ///
    /// Arguments
    /// ---------
    /// * `hours`: leading field, taken as whole degrees (e.g. `23`)
    /// * `minutes`: second field, divided by 60 (e.g. `26`)
    /// * `seconds`: third field, divided by 3600 (e.g. `44.001`)
    ///
    /// Note
    /// ----
    /// No ×15 factor is applied, see the module documentation.
    pub fn from_hms(hours: f64, minutes: f64, seconds: f64) -> Self {
        Angle::new(hours + minutes / SEXAGESIMAL_BASE + seconds / SECONDS_PER_HOUR)
    }

    pub fn degrees(&self) -> Degree {
        self.degrees
    }

    pub fn radians(&self) -> Radian {
        self.radians
    }

    /// Render in decimal degrees with five fractional digits, e.g. `30°.20400`.
    pub fn to_decimal_string(&self) -> String {
        let i = integer_part(self.degrees);
        let f = fractional_part(self.degrees, DECIMAL_DIGITS);
        format!("{i}°.{f:0width$}", width = DECIMAL_DIGITS as usize)
    }
}

impl From<Degree> for Angle {
    fn from(degrees: Degree) -> Self {
        Angle::new(degrees)
    }
}

/// Degrees, arcminutes and arcseconds, truncated at each step, e.g. `30° 20' 10''`.
///
/// The sign is carried by the degree field only.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = integer_part(self.degrees);

        let arcmin = integral(self.degrees) * SEXAGESIMAL_BASE;
        let m = integer_part(arcmin).abs();

        let arcsec = integral(arcmin) * SEXAGESIMAL_BASE;
        let s = integer_part(arcsec).abs();

        write!(f, "{d}° {m}' {s}''")
    }
}

/// Parse a signed `±DD MM SS.ss` declination-style string.
impl FromStr for Angle {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dec_to_deg(s)
            .map(Angle::new)
            .ok_or_else(|| SolarError::InvalidSexagesimal(s.to_string()))
    }
}

#[cfg(test)]
mod angle_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_round_trip_exactly() {
        for x in [0.0, -7.785069268532791, 198.38082542940822, 1.0e9, -1234.5] {
            assert_eq!(Angle::new(x).degrees(), x);
        }
    }

    #[test]
    fn test_radians_follow_degrees() {
        assert_relative_eq!(Angle::new(180.0).radians(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(Angle::new(-90.0).radians(), -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(Angle::new(720.0).radians(), 4.0 * std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_from_hms_does_not_scale_by_fifteen() {
        let obliquity = Angle::from_hms(23.0, 26.0, 21.448);
        assert_relative_eq!(obliquity.degrees(), 23.43929111111111, epsilon = 1e-12);

        // Same triple through an hour-angle constructor would be 15 times larger.
        let hours = Angle::from_hms(9.0, 14.0, 55.8);
        assert_relative_eq!(hours.degrees(), 9.248833333333333, epsilon = 1e-12);
    }

    #[test]
    fn test_arcseconds_only() {
        assert_relative_eq!(
            Angle::from_hms(0.0, 0.0, 4680.93).degrees(),
            1.300258333333333,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Angle::new(30.204).to_decimal_string(), "30°.20400");
        assert_eq!(Angle::new(28.0625).to_decimal_string(), "28°.06250");
        assert_eq!(
            Angle::new(-7.785069268532791).to_decimal_string(),
            "-7°.78506"
        );
    }

    #[test]
    fn test_sexagesimal_display() {
        assert_eq!(Angle::new(-7.785069268532791).to_string(), "-7° 47' 6''");
        assert_eq!(Angle::new(7.668169586269541).to_string(), "7° 40' 5''");
        assert_eq!(Angle::new(-23.032515938065938).to_string(), "-23° 1' 57''");
        assert_eq!(Angle::new(0.0).to_string(), "0° 0' 0''");
    }

    #[test]
    fn test_from_str() {
        let a: Angle = "-07 47 06.25".parse().unwrap();
        assert_relative_eq!(a.degrees(), -7.785069444444444, epsilon = 1e-12);

        assert_eq!(
            "7 47".parse::<Angle>(),
            Err(SolarError::InvalidSexagesimal("7 47".into()))
        );
    }
}
