//! # Calendar instants and Julian centuries
//!
//! [`Moment`] is a UTC calendar instant reduced to whole seconds. Its only derived
//! quantity is the time argument of the solar series, `T`, the number of Julian
//! centuries elapsed since J2000.0:
//!
//! ```text
//! T = (JD − 2451545.0) / 36525
//! ```
//!
//! The Julian Day is computed from the calendar fields with the closed-form
//! Meeus (7.1) expression, proleptic Gregorian throughout. String parsing and the
//! conversions to and from [`hifitime::Epoch`] go through `hifitime`.
use std::fmt;
use std::str::FromStr;

use hifitime::{Epoch, HifitimeError};

use crate::constants::{DAYS_PER_JULIAN_CENTURY, HOURS_PER_DAY, JD, JD2000, JulianCentury};
use crate::constants::{SECONDS_PER_HOUR, SEXAGESIMAL_BASE};
use crate::solar_errors::SolarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Moment {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Moment {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Moment {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build a moment from the UTC Gregorian fields of an epoch. Sub-second parts are dropped.
    pub fn from_epoch(epoch: Epoch) -> Self {
        let (year, month, day, hour, minute, second, _nanos) = epoch.to_gregorian_utc();
        Moment::new(year, month, day, hour, minute, second)
    }

    /// Convert back to a UTC [`Epoch`], failing if the calendar fields are not a valid date.
    pub fn to_epoch(&self) -> Result<Epoch, HifitimeError> {
        Epoch::maybe_from_gregorian_utc(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            0,
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Julian Day of this instant (Meeus, Astronomical Algorithms, eq. 7.1).
    ///
    /// January and February are counted as months 13 and 14 of the previous year,
    /// and the Gregorian correction `B = 2 − A + ⌊A/4⌋` is always applied.
    pub fn julian_day(&self) -> JD {
        let (mut y, mut m) = (f64::from(self.year), f64::from(self.month));
        if self.month <= 2 {
            y -= 1.0;
            m += 12.0;
        }

        let time_of_day = f64::from(self.hour)
            + f64::from(self.minute) / SEXAGESIMAL_BASE
            + f64::from(self.second) / SECONDS_PER_HOUR;
        let d = f64::from(self.day) + time_of_day / HOURS_PER_DAY;

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5
    }

    /// Julian centuries of 36525 days elapsed since J2000.0 (`T`).
    pub fn julian_centuries(&self) -> JulianCentury {
        (self.julian_day() - JD2000) / DAYS_PER_JULIAN_CENTURY
    }
}

impl From<Epoch> for Moment {
    fn from(epoch: Epoch) -> Self {
        Moment::from_epoch(epoch)
    }
}

/// Parse an ISO-8601-like UTC timestamp, e.g. `1992-10-13T00:00:00Z`.
///
/// A trailing `Z` designator is accepted; the rest is handed to [`Epoch::from_str`],
/// which treats a timestamp without a time scale as UTC.
impl FromStr for Moment {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_suffix('Z').unwrap_or(trimmed);

        Epoch::from_str(body)
            .map(Moment::from_epoch)
            .map_err(|_| SolarError::UnparseableTimestamp(s.to_string()))
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
