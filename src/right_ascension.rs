use std::fmt;
use std::str::FromStr;

use crate::constants::{
    Degree, Radian, DEG_PER_HOUR, FULL_CIRCLE_DEG, RADEG, SECONDS_PER_HOUR, SEXAGESIMAL_BASE,
};
use crate::conversion::{integral, parse_ra_to_deg};
use crate::solar_errors::SolarError;

/// Right ascension tracked in degrees, nominally in `[0, 360)`.
///
/// Negative inputs to [`RightAscension::new`] are wrapped by a single full turn,
/// which covers the `(-180, 180]` output of `atan2`. Values at or below -360°
/// stay negative; use [`correct_degree_range`](crate::conversion::correct_degree_range)
/// beforehand if arbitrary magnitudes can occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightAscension {
    degrees: Degree,
}

impl RightAscension {
    pub fn new(degrees: Degree) -> Self {
        let degrees = if degrees < 0.0 {
            degrees + FULL_CIRCLE_DEG
        } else {
            degrees
        };
        RightAscension { degrees }
    }

    /// Construct from an hour angle given as hours, minutes and seconds.
    ///
    /// Given α = 9h14m55.8s:
    ///
    /// ```text
    /// 9 + 14/60 + 55.8/3600 = 9.248833333 h
    /// 9.248833333 × 15      = 138.73250°
    /// ```
    pub fn from_hms(hours: i32, minutes: i32, seconds: f64) -> Self {
        let h = f64::from(hours) + f64::from(minutes) / SEXAGESIMAL_BASE + seconds / SECONDS_PER_HOUR;
        RightAscension::new(h * DEG_PER_HOUR)
    }

    pub fn degrees(&self) -> Degree {
        self.degrees
    }

    /// Right ascension expressed in hours.
    pub fn hours(&self) -> f64 {
        self.degrees / DEG_PER_HOUR
    }

    pub fn to_radians(&self) -> Radian {
        self.degrees * RADEG
    }
}

/// Hours, minutes and seconds of time, floored at each step, e.g. `13h 13m 31s`.
impl fmt::Display for RightAscension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.hours();
        let h = hours.floor();

        let minutes = integral(hours) * SEXAGESIMAL_BASE;
        let m = minutes.floor();

        let seconds = integral(minutes) * SEXAGESIMAL_BASE;
        let s = seconds.floor();

        write!(f, "{h}h {m}m {s}s")
    }
}

/// Parse a `HH MM SS.ss` string.
impl FromStr for RightAscension {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ra_to_deg(s)
            .map(RightAscension::new)
            .ok_or_else(|| SolarError::InvalidSexagesimal(s.to_string()))
    }
}
