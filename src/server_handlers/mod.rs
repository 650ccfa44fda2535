pub mod bookkeeping;
pub mod datafiles;
pub mod docs;
pub mod rooms;
pub mod timetable;

pub use bookkeeping::*;
pub use datafiles::*;
pub use docs::*;
pub use rooms::*;
pub use timetable::*;

use crate::error::Result;
use crate::models::Weekday;

/// Acepta "Monday" o "Monday.xlsx".
pub(crate) fn parse_day(file: &str) -> Result<Weekday> {
    let name = file.trim();
    name.strip_suffix(".xlsx").unwrap_or(name).parse()
}
