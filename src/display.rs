//! # Report rendering for solar coordinates
//!
//! [`SolarReport`] borrows a list of `(Moment, Coordinates)` rows and renders them
//! through Rust formatting (`{}`), without cloning the rows.
//!
//! Two layouts are available:
//!
//! - **Plain** (default): one block per instant,
//!   ```text
//!   Calculate solar coordinates for: 1992-10-13T00:00:00Z
//!   R.A.: 13h 13m 31s
//!   Dec: -7° 47' 6''
//!
//!   ```
//! - **Table** (uses `comfy-table`): one row per instant with
//!   `# | UTC | T [cy] | R.A. [hms] | R.A. [deg] | Dec [dms] | Dec [deg]`.
//!
//! ```rust
//! use solar_coords::display::SolarReport;
//! use solar_coords::solar::solar_coordinates;
//! use solar_coords::time::Moment;
//!
//! let moment = Moment::new(1992, 10, 13, 0, 0, 0);
//! let rows = vec![(moment, solar_coordinates(&moment))];
//! println!("{}", SolarReport::new(&rows).table(true));
//! ```
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::coordinates::Coordinates;
use crate::time::Moment;

/// Column layout selector for [`SolarReport`].
enum ReportMode {
    Plain, // one text block per moment
    Table, // comfy-table, one row per moment
}

/// Display adaptor rendering solar coordinates for a batch of instants.
pub struct SolarReport<'a> {
    rows: &'a [(Moment, Coordinates)],
    mode: ReportMode,
}

impl<'a> SolarReport<'a> {
    /// Build a new report adaptor in **plain** mode.
    pub fn new(rows: &'a [(Moment, Coordinates)]) -> Self {
        Self {
            rows,
            mode: ReportMode::Plain,
        }
    }

    /// Switch to **table** mode.
    ///
    /// Arguments
    /// -----------------
    /// * `yes` – If `true`, selects the table layout; otherwise resets to plain.
    ///
    /// Return
    /// ----------
    /// * `Self` (builder style).
    pub fn table(mut self, yes: bool) -> Self {
        self.mode = if yes {
            ReportMode::Table
        } else {
            ReportMode::Plain
        };
        self
    }

    fn render_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (moment, coords) in self.rows {
            writeln!(f, "Calculate solar coordinates for: {moment}")?;
            writeln!(f, "R.A.: {}", coords.right_ascension)?;
            writeln!(f, "Dec: {}", coords.declination)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_table_comfy(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("#"),
            Cell::new("UTC"),
            Cell::new("T [cy]"),
            Cell::new("R.A. [hms]"),
            Cell::new("R.A. [deg]"),
            Cell::new("Dec [dms]"),
            Cell::new("Dec [deg]"),
        ]);

        for (i, (moment, coords)) in self.rows.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i).set_alignment(CellAlignment::Right),
                Cell::new(moment.to_string()),
                Cell::new(format!("{:.9}", moment.julian_centuries()))
                    .set_alignment(CellAlignment::Right),
                Cell::new(coords.right_ascension.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.5}", coords.right_ascension.degrees()))
                    .set_alignment(CellAlignment::Right),
                Cell::new(coords.declination.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(coords.declination.to_decimal_string())
                    .set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}

impl fmt::Display for SolarReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ReportMode::Plain => self.render_plain(f),
            ReportMode::Table => {
                let out = self.render_table_comfy();
                writeln!(f, "{out}")
            }
        }
    }
}
