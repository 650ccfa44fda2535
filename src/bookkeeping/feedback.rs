use std::fs::create_dir_all;
use std::path::Path;

use crate::error::{Result, TimetableError};

pub const FEEDBACK_FILE: &str = "feedback.json";

/// Agrega un objeto de feedback al arreglo de `feedback.json`. Devuelve el total guardado.
///
/// Un archivo existente que no es un arreglo JSON válido no se toca: se devuelve
/// el error y el feedback nuevo no se guarda.
pub fn store_feedback(data_dir: &Path, entry: serde_json::Value) -> Result<usize> {
    if !entry.is_object() {
        return Err(TimetableError::InvalidInput("feedback must be a JSON object".to_string()));
    }

    create_dir_all(data_dir)?;
    let file_path = data_dir.join(FEEDBACK_FILE);
    let mut entries: Vec<serde_json::Value> = match std::fs::read_to_string(&file_path) {
        Ok(contents) if contents.trim().is_empty() => Vec::new(),
        Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
            log::error!("{} is not a JSON array, refusing to overwrite it: {}", file_path.display(), e);
            e
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    entries.push(entry);
    std::fs::write(&file_path, serde_json::to_string_pretty(&entries)?)?;
    Ok(entries.len())
}
