use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolarError {
    #[error("Must pass in at least one arg in format 'yyyy-MM-ddTHH:mm:ssZ'")]
    MissingInput,

    #[error("Could not parse arg into a UTC timestamp: {0}")]
    UnparseableTimestamp(String),

    #[error("Invalid sexagesimal angle: {0}")]
    InvalidSexagesimal(String),
}
