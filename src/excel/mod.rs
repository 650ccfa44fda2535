//! Módulo `excel`: todo lo que toca los archivos `.xlsx` de cada día.
//!
//! Submódulos:
//! - `io`: lectura de la primera hoja con calamine
//! - `loader`: descarta la presentación y promueve la fila de franjas a encabezado
//! - `splitter`: separa clases y laboratorios
//! - `writer`: escribe hojas recibidas desde la planilla remota

mod io;
pub mod loader;
pub mod splitter;
mod writer;

pub use io::{cell_from_data, read_first_sheet, read_sheet_body};
pub use loader::{load_day_table, promote_header};
pub use splitter::{find_lab_boundary, split_regions};
pub use writer::write_sheet_values;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{DayTable, Weekday};

/// Día correspondiente a un nombre de archivo `{Weekday}.xlsx` (sensible a mayúsculas).
pub fn weekday_from_file_name(name: &str) -> Option<Weekday> {
    let stem = name.strip_suffix(".xlsx")?;
    Weekday::ALL.iter().copied().find(|d| d.name() == stem)
}

/// Ruta del archivo de un día dentro del directorio de ingesta.
pub fn day_file_path(dir: &Path, day: Weekday) -> PathBuf {
    dir.join(day.file_name())
}

/// Lee y promueve la hoja de un día: cuerpo crudo -> `DayTable`.
pub fn load_day_file(path: &Path, day: Weekday) -> Result<DayTable> {
    let raw = read_sheet_body(path)?;
    load_day_table(day.name(), raw)
}

/// Días con archivo presente en `dir`, en orden lunes..domingo.
pub fn available_days(dir: &Path) -> Vec<Weekday> {
    Weekday::ALL
        .iter()
        .copied()
        .filter(|d| day_file_path(dir, *d).is_file())
        .collect()
}

/// Elimina todo `.xlsx` que no sea de lunes a viernes. Devuelve los nombres borrados.
pub fn purge_non_weekday_files(dir: &Path) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    let read = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(removed),
        Err(e) => return Err(e.into()),
    };

    for entry in read.flatten() {
        let p = entry.path();
        if !p.is_file() { continue; }
        let name = match p.file_name().and_then(|s| s.to_str()) { Some(s) => s.to_string(), None => continue };
        if !name.ends_with(".xlsx") { continue; }

        let keep = weekday_from_file_name(&name).is_some_and(|d| Weekday::RETAINED.contains(&d));
        if !keep {
            fs::remove_file(&p)?;
            log::info!("Removed file: {}", p.display());
            removed.push(name);
        }
    }
    removed.sort();
    Ok(removed)
}
