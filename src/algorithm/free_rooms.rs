//! Franjas horarias de una región y búsqueda de salas/labs libres.

use crate::algorithm::time_match::compact_label;
use crate::algorithm::week::WeekSnapshot;
use crate::error::{Result, TimetableError};
use crate::models::{Cell, Region, RegionKind, Weekday};

/// Encabezados de la región sin la columna marcador (`Room`/`Lab`).
pub fn timeslots(week: &WeekSnapshot, day: Weekday, kind: RegionKind) -> Result<Vec<String>> {
    let schedule = week.day(day)?;
    region_timeslots(day.name(), schedule.region(kind))
}

pub fn region_timeslots(day: &str, region: &Region) -> Result<Vec<String>> {
    let marker = region.kind.marker();
    let marker_idx = region.marker_index().ok_or_else(|| {
        TimetableError::malformed(day, format!("marker column '{}' not found", marker))
    })?;
    Ok(region
        .table
        .headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != marker_idx)
        .map(|(_, h)| h.clone())
        .collect())
}

/// Columna de la franja: primero coincidencia exacta, luego por clave compacta
/// ("11:00-1:30" encuentra "11:00 - 1:30 (inc. 10 min. break)").
pub fn resolve_timeslot_column(region: &Region, timeslot: &str) -> Result<usize> {
    let marker_idx = region.marker_index();
    if let Some(i) = region.table.column_index(timeslot) {
        if Some(i) != marker_idx {
            return Ok(i);
        }
    }

    let wanted = compact_label(timeslot);
    if !wanted.is_empty() {
        if let Some(i) = region
            .table
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != marker_idx)
            .find(|(_, h)| compact_label(h) == wanted)
            .map(|(i, _)| i)
        {
            return Ok(i);
        }
    }
    Err(TimetableError::InvalidTimeslot(timeslot.to_string()))
}

/// Una celda libre está vacía o contiene "cancel" (sin distinguir mayúsculas).
pub fn is_free(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => true,
        Cell::Present(s) => s.to_lowercase().contains("cancel"),
    }
}

/// Salas/labs libres en `timeslot`, en el orden de las filas.
pub fn find_free_rooms(region: &Region, timeslot: &str) -> Result<Vec<String>> {
    let col = resolve_timeslot_column(region, timeslot)?;
    let mut result = Vec::new();
    for (row_idx, _) in region.table.rows.iter().enumerate() {
        let name = match region.marker_value(row_idx) {
            Some(n) => n,
            None => continue,
        };
        if is_free(region.table.cell(row_idx, col)) {
            result.push(name.to_string());
        }
    }
    Ok(result)
}
