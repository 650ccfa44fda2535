use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::{Result, TimetableError};
use crate::models::Cell;

/// Convierte un `Data` de calamine a `Cell` (los blancos y errores quedan como `Empty`)
pub fn cell_from_data(c: &Data) -> Cell {
    match c {
        Data::String(s) => Cell::from_text(s),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                Cell::Present(format!("{}", *f as i64))
            } else {
                Cell::Present(format!("{}", f))
            }
        }
        Data::Int(i) => Cell::Present(format!("{}", i)),
        Data::Bool(b) => Cell::Present(format!("{}", b)),
        Data::Empty => Cell::Empty,
        Data::Error(_) => Cell::Empty,
        Data::DateTime(dt) => Cell::Present(dt.as_f64().to_string()),
        Data::DateTimeIso(s) => Cell::from_text(s),
        Data::DurationIso(s) => Cell::from_text(s),
    }
}

/// Lee la primera hoja del archivo y devuelve la grilla completa desde A1.
///
/// calamine entrega sólo el rango usado; las filas/columnas anteriores al inicio
/// del rango se rellenan con `Cell::Empty` para que los índices coincidan con la hoja.
pub fn read_first_sheet<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<Cell>>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let first = names.first().cloned().ok_or_else(|| {
        TimetableError::malformed(path.display().to_string(), "workbook has no sheets")
    })?;

    let range = workbook.worksheet_range(&first)?;
    let (row_offset, col_offset) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Ok(Vec::new()),
    };

    let mut grid: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for r in range.rows() {
        let mut row_vec: Vec<Cell> = vec![Cell::Empty; col_offset];
        row_vec.extend(r.iter().map(cell_from_data));
        grid.push(row_vec);
    }
    Ok(grid)
}

/// Lee la hoja de un día descartando la fila de títulos de columna del export.
///
/// La primera fila del archivo es la cabecera que escribe la exportación de la
/// planilla; el "cuerpo" restante es lo que procesa `loader::load_day_table`.
pub fn read_sheet_body<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<Cell>>> {
    let mut grid = read_first_sheet(path)?;
    if !grid.is_empty() {
        grid.remove(0);
    }
    Ok(grid)
}
