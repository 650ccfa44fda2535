//! Generación del horario personal a partir de una lista de asignaturas.

use crate::algorithm::week::{DaySchedule, WeekSnapshot};
use crate::error::Result;
use crate::models::{Region, ScheduleEntry, Weekday};

/// Busca cada asignatura en todos los días cargados (clases y luego laboratorios).
///
/// Orden de salida: asignatura (orden de entrada), día (lunes..domingo), región
/// y columna dentro de la fila.
pub fn resolve(subjects: &[String], week: &WeekSnapshot) -> Vec<ScheduleEntry> {
    let mut out = Vec::new();
    for subject in subjects {
        for day in week.days() {
            resolve_in_day(subject, day, &mut out);
        }
    }
    out
}

/// Igual que `resolve` pero limitado a un día; falla con `UnknownDay` si no está cargado.
pub fn resolve_day(subjects: &[String], day: Weekday, week: &WeekSnapshot) -> Result<Vec<ScheduleEntry>> {
    let schedule = week.day(day)?;
    let mut out = Vec::new();
    for subject in subjects {
        resolve_in_day(subject, schedule, &mut out);
    }
    Ok(out)
}

fn resolve_in_day(subject: &str, day: &DaySchedule, out: &mut Vec<ScheduleEntry>) {
    for region in [&day.classes, &day.labs] {
        out.extend(entries_in_region(subject, day.day, region));
    }
}

/// Entradas de una asignatura dentro de una región.
///
/// Se usa sólo la primera fila (de arriba hacia abajo) con sala/lab no vacía que
/// contenga la asignatura; si aparece en varias filas las siguientes se ignoran.
pub fn entries_in_region(subject: &str, day: Weekday, region: &Region) -> Vec<ScheduleEntry> {
    let marker_idx = match region.marker_index() {
        Some(i) => i,
        None => return Vec::new(),
    };
    let table = &region.table;

    for (row_idx, row) in table.rows.iter().enumerate() {
        let room = match region.marker_value(row_idx) {
            Some(r) => r,
            None => continue,
        };

        let matching: Vec<&String> = table
            .headers
            .iter()
            .enumerate()
            .filter(|(col, _)| *col != marker_idx)
            .filter(|(col, _)| row.get(*col).is_some_and(|c| c.equals(subject)))
            .map(|(_, h)| h)
            .collect();
        if matching.is_empty() {
            continue;
        }

        return matching
            .into_iter()
            .map(|time| {
                let (start_time, end_time) = split_time_label(time);
                ScheduleEntry {
                    day,
                    time: time.clone(),
                    room: room.to_string(),
                    subject: subject.to_string(),
                    start_time,
                    end_time,
                }
            })
            .collect();
    }
    Vec::new()
}

/// "8:00-9:20" -> ("8:00", "9:20"). Texto crudo, sin normalizar.
pub fn split_time_label(label: &str) -> (String, String) {
    let mut parts = label.split('-');
    let start = parts.next().unwrap_or_default().to_string();
    let end = parts.next().unwrap_or_default().to_string();
    (start, end)
}
