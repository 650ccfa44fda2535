#![allow(dead_code)]

use std::path::{Path, PathBuf};

use timetable_backend::excel::write_sheet_values;

fn row(vals: &[&str]) -> Vec<String> {
    vals.iter().map(|v| v.to_string()).collect()
}

/// Hoja de un día con el formato del export: fila de títulos, 3 filas de
/// presentación, franjas de clases, salas, marcador "Lab" y laboratorios.
pub fn day_values() -> Vec<Vec<String>> {
    vec![
        row(&["Unnamed: 0", "Unnamed: 1", "Unnamed: 2", "Unnamed: 3"]),
        row(&["FSC Timetable"]),
        row(&["Spring 2024"]),
        row(&[""]),
        row(&["Room", "8:00-9:20", "9:30-10:50", "11:00 - 1:30 (inc. 10 min. break)"]),
        row(&["R5", "Calculus", "", "Physics"]),
        row(&["R6", "Cancelled - OOP", "", ""]),
        row(&["R7", "OOP", "Calculus", ""]),
        row(&["Lab", "8:00-10:50", "11:00-1:30"]),
        row(&["Lab-1", "OOP Lab", ""]),
        row(&["Lab-2", "", "Networks Lab"]),
    ]
}

/// Misma hoja pero sin la fila marcador de laboratorios.
pub fn day_values_without_lab_marker() -> Vec<Vec<String>> {
    day_values().into_iter().filter(|r| r.first().map(String::as_str) != Some("Lab")).collect()
}

pub fn write_day(dir: &Path, title: &str) -> PathBuf {
    write_sheet_values(dir, title, &day_values()).expect("write fixture sheet")
}
