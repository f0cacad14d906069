//! # solar_coords
//!
//! Apparent geocentric right ascension and declination of the Sun for given UTC
//! instants, from the low-order solar theory of Meeus, *Astronomical Algorithms*,
//! ch. 25 (about one arcminute near J2000.0).
//!
//! ```rust
//! use solar_coords::{solar_coordinates, Moment};
//!
//! let moment: Moment = "1992-10-13T00:00:00Z".parse().unwrap();
//! let c = solar_coordinates(&moment);
//! assert_eq!(c.right_ascension.to_string(), "13h 13m 31s");
//! assert_eq!(c.declination.to_decimal_string(), "-7°.78506");
//! ```
pub mod angle;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod display;
pub mod driver;
pub mod right_ascension;
pub mod solar;
pub mod solar_errors;
pub mod time;

pub use angle::Angle;
pub use coordinates::Coordinates;
pub use right_ascension::RightAscension;
pub use solar::{solar_coordinates, solar_coordinates_batch, SolarTerms};
pub use solar_errors::SolarError;
pub use time::Moment;
