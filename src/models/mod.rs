// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;

/// Celda de una hoja: texto presente o vacía (blanco, error o NaN en el origen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Present(String),
    Empty,
}

impl Cell {
    /// Construye una celda a partir de texto; los textos en blanco se consideran vacíos.
    pub fn from_text(s: &str) -> Cell {
        let t = s.trim();
        if t.is_empty() { Cell::Empty } else { Cell::Present(t.to_string()) }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Present(s) => Some(s.as_str()),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Igualdad exacta con un texto (una celda vacía nunca coincide).
    pub fn equals(&self, value: &str) -> bool {
        match self {
            Cell::Present(s) => s == value,
            Cell::Empty => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::from_text(s)
    }
}

/// Días de la semana en el orden fijo de carga (lunes a domingo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Días cuyos archivos conserva el sistema a largo plazo.
    pub const RETAINED: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Nombre del archivo de ingesta, p.ej. `Monday.xlsx`.
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.name())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    // case-sensitive, igual que los nombres de archivo
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s.trim())
            .ok_or_else(|| TimetableError::UnknownDay(s.to_string()))
    }
}

/// Tipo de región dentro de la hoja de un día.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    #[serde(rename = "Room")]
    Class,
    #[serde(rename = "Lab")]
    Lab,
}

impl RegionKind {
    /// Nombre de la columna marcador de la región.
    pub fn marker(&self) -> &'static str {
        match self {
            RegionKind::Class => "Room",
            RegionKind::Lab => "Lab",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for RegionKind {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Room" => Ok(RegionKind::Class),
            "Lab" => Ok(RegionKind::Lab),
            other => Err(TimetableError::InvalidInput(format!(
                "selection_type must be 'Room' or 'Lab', got '{}'",
                other
            ))),
        }
    }
}

/// Tabla de un día: encabezados (franjas + columna marcador) y filas de salas/labs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DayTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Porción de la tabla de un día etiquetada como clases o laboratorios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub table: DayTable,
}

impl Region {
    pub fn new(kind: RegionKind, table: DayTable) -> Self {
        Region { kind, table }
    }

    pub fn marker_index(&self) -> Option<usize> {
        self.table.column_index(self.kind.marker())
    }

    /// Valor de la columna marcador (nombre de sala/lab) para una fila.
    pub fn marker_value(&self, row: usize) -> Option<&str> {
        let idx = self.marker_index()?;
        self.table.cell(row, idx).as_str()
    }
}

/// Una aparición de una asignatura en el horario semanal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "Day")]
    pub day: Weekday,
    #[serde(rename = "Time")]
    pub time: String,
    /// Sala o laboratorio
    #[serde(rename = "Class")]
    pub room: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Start_Time")]
    pub start_time: String,
    #[serde(rename = "End_Time")]
    pub end_time: String,
}
