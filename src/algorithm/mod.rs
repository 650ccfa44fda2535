// Algoritmos de consulta sobre la semana cargada.

pub mod free_rooms;
pub mod resolver;
pub mod subjects;
pub mod time_match;
pub mod week;

pub use free_rooms::{find_free_rooms, region_timeslots, resolve_timeslot_column, timeslots};
pub use resolver::{resolve, resolve_day};
pub use subjects::list_subjects;
pub use time_match::{compact_label, match_timeslot, match_timeslot_label, normalize_label, parse_clock_time};
pub use week::{DaySchedule, SnapshotStore, WeekSnapshot};
