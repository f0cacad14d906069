use std::fmt;

use crate::angle::Angle;
use crate::right_ascension::RightAscension;

/// Geocentric astronomical coordinates in R.A. and Dec as projected
/// onto the celestial sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub right_ascension: RightAscension,
    pub declination: Angle,
}

impl Coordinates {
    pub fn new(right_ascension: RightAscension, declination: Angle) -> Self {
        Coordinates {
            right_ascension,
            declination,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R.A.: {}, Dec: {}",
            self.right_ascension, self.declination
        )
    }
}
