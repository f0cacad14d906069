//! # Batch driver
//!
//! Turns raw command-line timestamps into [`Moment`]s, evaluates the solar
//! position for each and renders a [`SolarReport`].
//!
//! Failure policy
//! --------------
//! * No arguments at all → [`SolarError::MissingInput`], nothing is computed.
//! * Any argument that cannot be parsed → [`SolarError::UnparseableTimestamp`]
//!   naming that argument; the whole batch is rejected.
//! * Empty arguments are skipped without error.
use crate::coordinates::Coordinates;
use crate::display::SolarReport;
use crate::solar::solar_coordinates;
use crate::solar_errors::SolarError;
use crate::time::Moment;

/// Parse timestamp arguments into moments, in input order.
///
/// Arguments
/// -----------------
/// * `args`: timestamps in the format `yyyy-MM-ddTHH:mm:ssZ`.
///
/// Return
/// ----------
/// * `Ok(Vec<Moment>)` — one moment per non-empty argument.
/// * `Err(SolarError)` — missing input or the first unparseable argument.
pub fn parse_date_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Moment>, SolarError> {
    if args.is_empty() {
        return Err(SolarError::MissingInput);
    }

    args.iter()
        .map(|arg| arg.as_ref())
        .filter(|arg| !arg.is_empty())
        .map(str::parse::<Moment>)
        .collect()
}

/// Compute the solar coordinates of every moment, paired with its moment.
pub fn compute_all(moments: &[Moment]) -> Vec<(Moment, Coordinates)> {
    moments
        .iter()
        .map(|moment| (*moment, solar_coordinates(moment)))
        .collect()
}

/// Full pipeline: parse, compute and render.
///
/// Arguments
/// -----------------
/// * `args`: raw timestamp arguments.
/// * `table`: render a single table instead of one block per instant.
pub fn run<S: AsRef<str>>(args: &[S], table: bool) -> Result<String, SolarError> {
    let moments = parse_date_args(args)?;
    let rows = compute_all(&moments);
    Ok(SolarReport::new(&rows).table(table).to_string())
}
