//! Scan a year hour by hour and report the instants where the Sun's declination
//! changes sign (the equinoxes), with a table of the bracketing solutions.
//!
//! Usage:
//!   cargo run --example equinox_scan -- [YEAR]
//! Example:
//!   cargo run --example equinox_scan -- 2024
use std::env;

use solar_coords::display::SolarReport;
use solar_coords::driver::compute_all;
use solar_coords::time::Moment;

const DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn hourly_moments(year: i32) -> Vec<Moment> {
    let mut moments = Vec::new();
    for month in 1..=12u8 {
        let mut days = DAYS[month as usize - 1];
        if month == 2 && is_leap(year) {
            days += 1;
        }
        for day in 1..=days {
            for hour in 0..24 {
                moments.push(Moment::new(year, month, day, hour, 0, 0));
            }
        }
    }
    moments
}

fn main() {
    let year = env::args()
        .nth(1)
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or(2024);

    let rows = compute_all(&hourly_moments(year));

    let crossings: Vec<_> = rows
        .windows(2)
        .filter(|w| w[0].1.declination.degrees().signum() != w[1].1.declination.degrees().signum())
        .flat_map(|w| [w[0], w[1]])
        .collect();

    println!("Declination sign changes in {year}: {}", crossings.len() / 2);
    println!("{}", SolarReport::new(&crossings).table(true));
}
