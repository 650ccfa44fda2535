//! Carga de la hoja de un día: descarta las filas de presentación y promueve
//! la fila de franjas horarias a encabezado.

use crate::error::{Result, TimetableError};
use crate::models::{Cell, DayTable};

/// Filas de presentación (título, semestre, leyenda) antes de la fila de franjas.
pub const BOILERPLATE_ROWS: usize = 3;

/// Convierte el cuerpo crudo de la hoja de un día en una `DayTable`.
///
/// `day` sólo se usa para los mensajes de error.
pub fn load_day_table(day: &str, raw: Vec<Vec<Cell>>) -> Result<DayTable> {
    if raw.len() < BOILERPLATE_ROWS + 1 {
        return Err(TimetableError::malformed(
            day,
            format!("expected at least {} rows, found {}", BOILERPLATE_ROWS + 1, raw.len()),
        ));
    }
    let body: Vec<Vec<Cell>> = raw.into_iter().skip(BOILERPLATE_ROWS).collect();
    promote_header(day, body)
}

/// La primera fila pasa a ser el encabezado; las columnas sin encabezado se
/// eliminan y la fila de encabezado sale del cuerpo.
pub fn promote_header(day: &str, rows: Vec<Vec<Cell>>) -> Result<DayTable> {
    let mut iter = rows.into_iter();
    let header_row = iter
        .next()
        .ok_or_else(|| TimetableError::malformed(day, "missing header row"))?;

    let kept: Vec<(usize, String)> = header_row
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.as_str().map(|s| (i, s.to_string())))
        .collect();
    if kept.is_empty() {
        return Err(TimetableError::malformed(day, "header row has no labels"));
    }

    let headers: Vec<String> = kept.iter().map(|(_, h)| h.clone()).collect();
    let body: Vec<Vec<Cell>> = iter
        .map(|row| {
            kept.iter()
                .map(|(i, _)| row.get(*i).cloned().unwrap_or(Cell::Empty))
                .collect()
        })
        .collect();

    Ok(DayTable { headers, rows: body })
}
