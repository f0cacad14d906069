use std::process::ExitCode;

use clap::Parser;
use solar_coords::driver::run;

#[derive(Parser)]
#[command(
    name = "solar_coords",
    about = "Geocentric solar coordinates (R.A. and Dec) for one or more UTC instants"
)]
struct Cli {
    /// UTC timestamps (yyyy-MM-ddTHH:mm:ssZ)
    dates: Vec<String>,

    /// Render all instants as a single table
    #[arg(long)]
    table: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.dates, cli.table) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
