//! # Constants and type aliases for solar_coords
//!
//! Conversion factors, epoch constants and the unit aliases shared by the value types
//! ([`Angle`](crate::angle::Angle), [`RightAscension`](crate::right_ascension::RightAscension))
//! and the ephemeris pipeline in [`solar`](crate::solar).

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Degrees of arc covered by one hour of right ascension
pub const DEG_PER_HOUR: f64 = 15.0;

/// Minutes per hour / arcminutes per degree
pub const SEXAGESIMAL_BASE: f64 = 60.0;

/// Seconds per hour / arcseconds per degree
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Full circle in degrees
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// Julian Date of J2000.0 (2000-01-01 12:00:00 TT)
pub const JD2000: f64 = 2_451_545.0;

/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Julian Date (days)
pub type JD = f64;
/// Julian centuries of 36525 days elapsed since J2000.0
pub type JulianCentury = f64;
