use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::algorithm::week::WeekSnapshot;
use crate::models::DayTable;

// franjas embebidas en las celdas, p.ej. "1:30-2:50"
fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+:\d+-\d+:\d+").expect("valid time regex"))
}

/// Texto de asignatura de una celda: sin franjas horarias embebidas y recortado.
pub fn clean_subject(cell: &str) -> Option<String> {
    let cleaned = time_pattern().replace_all(cell, "");
    let t = cleaned.trim();
    if t.is_empty() || t == "nan" {
        None
    } else {
        Some(t.to_string())
    }
}

fn collect_from_table(table: &DayTable, out: &mut BTreeSet<String>) {
    for row in &table.rows {
        // la primera columna es la de salas/labs
        for cell in row.iter().skip(1) {
            if let Some(subject) = cell.as_str().and_then(clean_subject) {
                out.insert(subject);
            }
        }
    }
}

/// Lista ordenada y sin duplicados de todas las asignaturas de la semana.
pub fn list_subjects(week: &WeekSnapshot) -> Vec<String> {
    let mut subjects = BTreeSet::new();
    for day in week.days() {
        collect_from_table(&day.table, &mut subjects);
    }
    subjects.into_iter().collect()
}
