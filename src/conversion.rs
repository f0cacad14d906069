use crate::constants::{
    Degree, Radian, DEGRAD, DEG_PER_HOUR, FULL_CIRCLE_DEG, RADEG, SECONDS_PER_HOUR,
    SEXAGESIMAL_BASE,
};

/// Reduce an angle in degrees to the principal range `[0, 360)`.
///
/// Works for any finite magnitude: the remainder is taken first, then a single
/// full turn is added if the remainder is negative. A tiny negative remainder can
/// round up to exactly 360 after the addition, which is folded back to 0.
pub fn correct_degree_range(x: Degree) -> Degree {
    let mut r = x % FULL_CIRCLE_DEG;
    if r < 0.0 {
        r += FULL_CIRCLE_DEG;
    }
    if r >= FULL_CIRCLE_DEG {
        r = 0.0;
    }
    r
}

#[inline]
pub fn to_radians(degrees: Degree) -> Radian {
    degrees * RADEG
}

#[inline]
pub fn to_degrees(radians: Radian) -> Degree {
    radians * DEGRAD
}

/// Integer portion of `x`, truncated toward zero. The sign is kept, so `-0.5` gives `-0.0`.
#[inline]
pub fn integer_part(x: f64) -> f64 {
    x.trunc()
}

/// Signed fractional remainder `x - integer_part(x)`.
///
/// Used to cascade sexagesimal conversions: degrees → arcminutes → arcseconds.
#[inline]
pub fn integral(x: f64) -> f64 {
    x - integer_part(x)
}

/// Fractional digits of `x` as an integer.
///
/// The magnitude of the remainder is multiplied by `10^precision` and truncated,
/// e.g. `30.204` at precision 5 gives `20400`. Digits that do not survive the
/// binary representation are dropped rather than rounded.
pub fn fractional_part(x: f64, precision: u32) -> u64 {
    (integral(x).abs() * 10f64.powi(precision as i32)).trunc() as u64
}

/// Split a sexagesimal string into its three numeric fields.
fn split_sexagesimal(field: &str) -> Option<(&str, f64, f64)> {
    let parts: Vec<&str> = field.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;
    Some((parts[0], m, s))
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS`
///
/// Returns
/// -------
/// * `Option<Degree>`: the right ascension in degrees, or `None` if the input format is invalid.
pub fn parse_ra_to_deg(ra: &str) -> Option<Degree> {
    let (h_raw, m, s) = split_sexagesimal(ra)?;
    let h: f64 = h_raw.parse().ok()?;

    Some((h + m / SEXAGESIMAL_BASE + s / SECONDS_PER_HOUR) * DEG_PER_HOUR)
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS`
///
/// Returns
/// -------
/// * `Option<Degree>`: the declination in degrees, or `None` if the input format is invalid.
pub fn parse_dec_to_deg(dec: &str) -> Option<Degree> {
    let (d_raw, m, s) = split_sexagesimal(dec)?;

    let sign = if d_raw.starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = d_raw.trim_start_matches(&['-', '+'][..]).parse().ok()?;

    Some(sign * (d + m / SEXAGESIMAL_BASE + s / SECONDS_PER_HOUR))
}
