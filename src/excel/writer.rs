use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

use crate::error::{Result, TimetableError};

/// Escribe `{title}.xlsx` en `dir` con los valores de una hoja (filas de texto).
///
/// Las celdas en blanco no se escriben, de modo que al releer quedan vacías.
pub fn write_sheet_values<P: AsRef<Path>>(dir: P, title: &str, values: &[Vec<String>]) -> Result<PathBuf> {
    let title = title.trim();
    if title.is_empty() || title.contains(['/', '\\']) || title.contains("..") {
        return Err(TimetableError::InvalidInput(format!("invalid sheet title '{}'", title)));
    }

    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    // nombres de hoja de Excel: máx. 31 caracteres y sin []:*?
    worksheet
        .set_name(title)
        .map_err(|e| TimetableError::InvalidInput(format!("invalid sheet title '{}': {}", title, e)))?;

    for (r, row) in values.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if value.trim().is_empty() {
                continue;
            }
            let col = u16::try_from(c)
                .map_err(|_| TimetableError::InvalidInput(format!("too many columns in sheet '{}'", title)))?;
            worksheet.write_string(r as u32, col, value.as_str())?;
        }
    }

    let path = dir.join(format!("{}.xlsx", title));
    workbook.save(&path)?;
    log::debug!("sheet '{}' saved as {}", title, path.display());
    Ok(path)
}
