//! Errores del motor de horarios.
//!
//! `NoMatch` no existe como variante: una búsqueda sin resultados devuelve un
//! vector vacío o `None`, nunca un error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    /// La hoja no respeta el formato semanal (filas de cabecera, marcador "Lab", columna marcador).
    #[error("malformed sheet '{day}': {reason}")]
    MalformedSheet { day: String, reason: String },

    #[error("unknown day '{0}': no sheet loaded for it")]
    UnknownDay(String),

    #[error("invalid timeslot '{0}'")]
    InvalidTimeslot(String),

    #[error("invalid time '{0}'")]
    InvalidTime(String),

    #[error("invalid rating {0}: expected an integer between 1 and 5")]
    InvalidRating(i64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("failed to write workbook: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TimetableError {
    pub fn malformed(day: impl Into<String>, reason: impl Into<String>) -> Self {
        TimetableError::MalformedSheet { day: day.into(), reason: reason.into() }
    }

    /// True para errores causados por la petición del cliente (no por los datos cargados).
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            TimetableError::InvalidTimeslot(_)
                | TimetableError::InvalidTime(_)
                | TimetableError::InvalidRating(_)
                | TimetableError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
