use crate::error::{Result, TimetableError};
use crate::excel::loader::promote_header;
use crate::models::{DayTable, Region, RegionKind};

/// Valor literal que marca el inicio del bloque de laboratorios.
pub const LAB_MARKER: &str = "Lab";

/// Índice de la primera fila que contiene "Lab" en cualquier celda.
pub fn find_lab_boundary(table: &DayTable) -> Option<usize> {
    table
        .rows
        .iter()
        .position(|row| row.iter().any(|c| c.equals(LAB_MARKER)))
}

/// Separa la tabla de un día en (clases, laboratorios).
///
/// Las filas sobre el marcador forman la región de clases con los encabezados
/// originales; desde el marcador en adelante se re-encabeza igual que en la carga.
pub fn split_regions(day: &str, table: &DayTable) -> Result<(Region, Region)> {
    let boundary = find_lab_boundary(table)
        .ok_or_else(|| TimetableError::malformed(day, "no 'Lab' marker row found"))?;

    let classes = DayTable {
        headers: table.headers.clone(),
        rows: table.rows[..boundary].to_vec(),
    };
    let labs = promote_header(day, table.rows[boundary..].to_vec())?;

    Ok((Region::new(RegionKind::Class, classes), Region::new(RegionKind::Lab, labs)))
}
