//! # Low-precision apparent solar coordinates
//!
//! Geocentric apparent right ascension and declination of the Sun from the
//! truncated solar theory of Meeus, *Astronomical Algorithms*, ch. 25, with the
//! Laskar obliquity series of ch. 22. Accuracy is about one arcminute for dates
//! within a few centuries of J2000.0.
//!
//! ## Pipeline
//!
//! Every step is evaluated in degrees; trigonometric functions receive their
//! argument converted to radians immediately before the call.
//!
//! | Step | Quantity | Normalized |
//! |------|----------|------------|
//! | 1 | geometric mean longitude `L0` (25.2) | yes |
//! | 2 | mean anomaly `M` (25.3) | yes |
//! | 3 | eccentricity `e` (25.4) | no |
//! | 4 | equation of center `C` | no |
//! | 5 | true longitude `L0 + C`, true anomaly `M + C` | yes |
//! | 6 | radius vector `R` (USNO form, cf. 25.5) | no |
//! | 7 | nutation/aberration argument `Ω` | no |
//! | 8 | apparent longitude `λ` | no |
//! | 9 | mean obliquity `ε0` (22.3) | no |
//! | 10 | corrected obliquity `ε` (25.8) | no |
//! | 11 | `α = atan2(cos ε sin λ, cos λ)`, `δ = asin(sin ε sin λ)` | — |
//!
//! The true anomaly and the radius vector do not feed later steps. They are kept in
//! [`SolarTerms`] so a run can be checked line by line against the worked example 25.a.
//!
//! ## Example
//!
//! ```rust
//! use solar_coords::solar::solar_coordinates;
//! use solar_coords::time::Moment;
//!
//! let c = solar_coordinates(&Moment::new(1992, 10, 13, 0, 0, 0));
//! assert_eq!(c.right_ascension.to_string(), "13h 13m 31s");
//! assert_eq!(c.declination.to_string(), "-7° 47' 6''");
//! ```
use crate::angle::Angle;
use crate::constants::{Degree, JulianCentury, Radian};
use crate::conversion::{correct_degree_range, to_degrees, to_radians};
use crate::coordinates::Coordinates;
use crate::right_ascension::RightAscension;
use crate::time::Moment;

/// Coefficients of `U²` through `U¹⁰` in the mean obliquity series.
const OBLIQUITY_TAIL: [f64; 9] = [
    -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Every intermediate quantity of the solar position pipeline for one instant.
///
/// Units:
/// * angles: degrees, except `right_ascension` and `declination` in radians
/// * `eccentricity`: unitless
/// * `radius_vector`: AU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerms {
    pub t: JulianCentury,
    pub mean_longitude: Degree,
    pub mean_anomaly: Degree,
    pub eccentricity: f64,
    pub equation_of_center: Degree,
    pub true_longitude: Degree,
    pub true_anomaly: Degree,
    pub radius_vector: f64,
    pub omega: Degree,
    pub apparent_longitude: Degree,
    pub mean_obliquity: Degree,
    pub obliquity: Degree,
    pub right_ascension: Radian,
    pub declination: Radian,
}

impl SolarTerms {
    /// Evaluate the full pipeline at `t` Julian centuries from J2000.0.
    pub fn at(t: JulianCentury) -> Self {
        let t2 = t.powi(2);

        // geometric mean longitude of the Sun referred to the mean equinox of T (25.2)
        let l0 = correct_degree_range(280.46646 + 36000.76983 * t + 0.0003032 * t2);

        // mean anomaly of the Sun (25.3)
        let m = correct_degree_range(357.52911 + 35999.05029 * t - 0.0001537 * t2);

        // eccentricity of Earth's orbit (25.4)
        let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

        let m_rad = to_radians(m);
        let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
            + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
            + 0.000289 * (3.0 * m_rad).sin();

        let l_true = correct_degree_range(l0 + c);
        let nu = correct_degree_range(m + c);

        // U.S. Naval Observatory form of the radius vector
        let r = 1.00014 - 0.01671 * m_rad.cos() - 0.00014 * (2.0 * m_rad).cos();

        let omega = 125.04 - 1934.136 * t;
        let omega_rad = to_radians(omega);

        let lambda = l_true - 0.00569 - 0.00478 * omega_rad.sin();

        let eps0 = mean_obliquity(t);
        let eps = eps0 + 0.00256 * omega_rad.cos();

        let (eps_rad, lambda_rad) = (to_radians(eps), to_radians(lambda));
        let alpha = (eps_rad.cos() * lambda_rad.sin()).atan2(lambda_rad.cos());
        let delta = (eps_rad.sin() * lambda_rad.sin()).asin();

        SolarTerms {
            t,
            mean_longitude: l0,
            mean_anomaly: m,
            eccentricity: e,
            equation_of_center: c,
            true_longitude: l_true,
            true_anomaly: nu,
            radius_vector: r,
            omega,
            apparent_longitude: lambda,
            mean_obliquity: eps0,
            obliquity: eps,
            right_ascension: alpha,
            declination: delta,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(
            RightAscension::new(to_degrees(self.right_ascension)),
            Angle::new(to_degrees(self.declination)),
        )
    }
}

/// Mean obliquity of the ecliptic (Laskar series, Meeus 22.3), in degrees.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0. The series runs in `U = T/100`.
///
/// Returns
/// --------
/// * ε0 in degrees.
///
/// Formula
/// -------
/// ```text
/// ε0 = 23°26'21.448" − 4680.93"·U − 1.55·U² + 1999.25·U³ − 51.38·U⁴ − 249.67·U⁵
///      − 39.05·U⁶ + 7.12·U⁷ + 27.87·U⁸ + 5.79·U⁹ + 2.45·U¹⁰
/// ```
///
/// The constant and linear terms are converted from arcseconds through
/// [`Angle::from_hms`]; the higher-order coefficients are added as they stand.
/// With `|U| < 0.01` those terms stay below a microdegree.
pub fn mean_obliquity(t: JulianCentury) -> Degree {
    let u = t / 100.0;

    let head = Angle::from_hms(23.0, 26.0, 21.448).degrees()
        - Angle::from_hms(0.0, 0.0, 4680.93).degrees() * u;

    OBLIQUITY_TAIL
        .iter()
        .zip(2..)
        .fold(head, |acc, (coeff, power)| acc + coeff * u.powi(power))
}

/// Apparent geocentric right ascension and declination of the Sun at `moment`.
pub fn solar_coordinates(moment: &Moment) -> Coordinates {
    SolarTerms::at(moment.julian_centuries()).coordinates()
}

/// Evaluate [`solar_coordinates`] for each moment, keeping input order.
pub fn solar_coordinates_batch(moments: &[Moment]) -> Vec<Coordinates> {
    moments.iter().map(solar_coordinates).collect()
}

#[cfg(test)]
mod solar_test {
    use super::*;
    use approx::assert_relative_eq;

    fn meeus_25a() -> SolarTerms {
        SolarTerms::at(Moment::new(1992, 10, 13, 0, 0, 0).julian_centuries())
    }

    #[test]
    fn test_worked_example_intermediates() {
        let terms = meeus_25a();

        assert_relative_eq!(terms.t, -0.072183436, epsilon = 1e-9);
        assert_relative_eq!(terms.mean_longitude, 201.80719650670744, epsilon = 1e-9);
        assert_relative_eq!(terms.mean_anomaly, 278.9939664315975, epsilon = 1e-9);
        assert_relative_eq!(terms.eccentricity, 0.01671166771493543, epsilon = 1e-15);
        assert_relative_eq!(terms.equation_of_center, -1.897323843371985, epsilon = 1e-9);
        assert_relative_eq!(terms.true_longitude, 199.90987266333545, epsilon = 1e-9);
        assert_relative_eq!(terms.true_anomaly, 277.09664258822556, epsilon = 1e-9);
        assert_relative_eq!(terms.radius_vector, 0.9976608751173903, epsilon = 1e-12);
        assert_relative_eq!(terms.omega, 264.6525821765914, epsilon = 1e-9);
        assert_relative_eq!(terms.apparent_longitude, 199.90894186035274, epsilon = 1e-9);
        assert_relative_eq!(terms.mean_obliquity, 23.440228122685557, epsilon = 1e-9);
        assert_relative_eq!(terms.obliquity, 23.439989544472095, epsilon = 1e-9);
    }

    #[test]
    fn test_worked_example_textbook_values() {
        // Published figures of example 25.a
        let terms = meeus_25a();
        assert_relative_eq!(terms.mean_longitude, 201.80720, epsilon = 1e-5);
        assert_relative_eq!(terms.mean_anomaly, 278.99397, epsilon = 1e-5);
        assert_relative_eq!(terms.eccentricity, 0.016711668, epsilon = 1e-9);
        assert_relative_eq!(terms.equation_of_center, -1.89732, epsilon = 1e-5);
        assert_relative_eq!(terms.apparent_longitude, 199.90895, epsilon = 1e-5);
        assert_relative_eq!(terms.obliquity, 23.43999, epsilon = 1e-5);

        let c = terms.coordinates();
        assert_relative_eq!(c.right_ascension.degrees(), 198.38083, epsilon = 1e-4);
        assert_relative_eq!(c.declination.degrees(), -7.78507, epsilon = 1e-4);
    }

    #[test]
    fn test_mean_obliquity_at_epoch() {
        assert_relative_eq!(mean_obliquity(0.0), 23.43929111111111, epsilon = 1e-12);
        assert!(mean_obliquity(1.0) < mean_obliquity(0.0));

        // U² and above are summed as degrees: 40.17" per century instead of 46.8"
        assert_relative_eq!(mean_obliquity(1.0), 23.428132238971802, epsilon = 1e-12);
        assert_relative_eq!(
            (mean_obliquity(0.0) - mean_obliquity(1.0)) * 3600.0,
            40.17194,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_j2000_epoch() {
        let terms = SolarTerms::at(0.0);
        assert_eq!(terms.mean_longitude, 280.46646);
        assert_eq!(terms.mean_anomaly, 357.52911);
        assert_eq!(terms.eccentricity, 0.016708634);
        assert_eq!(terms.omega, 125.04);

        let c = terms.coordinates();
        assert!(c.right_ascension.degrees().is_finite());
        assert!((0.0..360.0).contains(&c.right_ascension.degrees()));
        assert!((-90.0..=90.0).contains(&c.declination.degrees()));
        assert_relative_eq!(c.right_ascension.degrees(), 281.2823560308542, epsilon = 1e-9);
        assert_relative_eq!(c.declination.degrees(), -23.032515938065938, epsilon = 1e-9);
    }

    #[test]
    fn test_pure_function() {
        let moment = Moment::new(2024, 3, 20, 3, 6, 0);
        let a = solar_coordinates(&moment);
        let b = solar_coordinates(&moment);
        assert_eq!(a.right_ascension.degrees().to_bits(), b.right_ascension.degrees().to_bits());
        assert_eq!(a.declination.degrees().to_bits(), b.declination.degrees().to_bits());
    }

    #[test]
    fn test_equinox_2024() {
        // March equinox 2024 fell at 03:06 UTC: λ ≈ 0, δ ≈ 0
        let c = solar_coordinates(&Moment::new(2024, 3, 20, 3, 6, 0));
        assert!(c.declination.degrees().abs() < 0.02);
        let ra = c.right_ascension.degrees();
        assert!(ra < 0.05 || ra > 359.95, "{ra}");
    }

    #[test]
    fn test_batch_keeps_order() {
        let moments = [
            Moment::new(1992, 10, 13, 0, 0, 0),
            Moment::new(2000, 1, 1, 12, 0, 0),
            Moment::new(1987, 4, 10, 0, 0, 0),
        ];
        let batch = solar_coordinates_batch(&moments);
        assert_eq!(batch.len(), 3);
        for (moment, coords) in moments.iter().zip(&batch) {
            assert_eq!(*coords, solar_coordinates(moment));
        }
        assert_eq!(batch[2].right_ascension.to_string(), "1h 12m 21s");
        assert_eq!(batch[2].declination.to_string(), "7° 40' 5''");
    }

    #[test]
    fn test_output_stays_in_range_over_centuries() {
        let mut t = -5.0;
        while t <= 5.0 {
            let c = SolarTerms::at(t).coordinates();
            let ra = c.right_ascension.degrees();
            let dec = c.declination.degrees();
            assert!((0.0..360.0).contains(&ra), "T={t}: ra={ra}");
            assert!((-24.0..=24.0).contains(&dec), "T={t}: dec={dec}");
            t += 0.0137;
        }
    }
}
