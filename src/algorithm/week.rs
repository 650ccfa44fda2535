//! Modelo semanal: una `WeekSnapshot` inmutable por carga y el contenedor que la
//! publica para las consultas.

use chrono::{DateTime, Local};
use parking_lot::{Mutex, RwLock};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, TimetableError};
use crate::excel::{available_days, day_file_path, load_day_file, split_regions};
use crate::models::{DayTable, Region, RegionKind, Weekday};

/// Un día cargado: la tabla completa (encabezado promovido) y sus dos regiones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub table: DayTable,
    pub classes: Region,
    pub labs: Region,
}

impl DaySchedule {
    pub fn from_table(day: Weekday, table: DayTable) -> Result<Self> {
        let (classes, labs) = split_regions(day.name(), &table)?;
        Ok(DaySchedule { day, table, classes, labs })
    }

    pub fn region(&self, kind: RegionKind) -> &Region {
        match kind {
            RegionKind::Class => &self.classes,
            RegionKind::Lab => &self.labs,
        }
    }
}

/// Conjunto de días cargados, siempre en orden lunes..domingo.
#[derive(Debug, Clone)]
pub struct WeekSnapshot {
    days: Vec<DaySchedule>,
    loaded_at: DateTime<Local>,
}

impl PartialEq for WeekSnapshot {
    // la hora de carga no forma parte de la estructura
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl WeekSnapshot {
    pub fn empty() -> Self {
        WeekSnapshot { days: Vec::new(), loaded_at: Local::now() }
    }

    /// Construye la semana a partir de días ya parseados (se reordenan lunes..domingo).
    pub fn from_days(mut days: Vec<DaySchedule>) -> Self {
        days.sort_by_key(|d| d.day);
        days.dedup_by_key(|d| d.day);
        WeekSnapshot { days, loaded_at: Local::now() }
    }

    /// Lee `{Weekday}.xlsx` de cada día presente en `dir`.
    ///
    /// Cualquier hoja mal formada aborta la carga completa.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut days = Vec::new();
        for day in available_days(dir) {
            let path = day_file_path(dir, day);
            let table = load_day_file(&path, day)?;
            let schedule = DaySchedule::from_table(day, table)?;
            log::debug!(
                "{}: {} class rows, {} lab rows",
                day,
                schedule.classes.table.len(),
                schedule.labs.table.len()
            );
            days.push(schedule);
        }
        log::info!("✅ week loaded from {}: {} day(s)", dir.display(), days.len());
        Ok(WeekSnapshot::from_days(days))
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> Result<&DaySchedule> {
        self.days
            .iter()
            .find(|d| d.day == day)
            .ok_or_else(|| TimetableError::UnknownDay(day.name().to_string()))
    }

    /// Nombres de los días cargados en orden de semana.
    pub fn list_days(&self) -> Vec<String> {
        self.days.iter().map(|d| d.day.name().to_string()).collect()
    }

    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }
}

/// Contenedor de la semana publicada.
///
/// Los lectores clonan el `Arc` (el lock sólo cubre la copia del puntero); la
/// recarga construye la nueva semana fuera del lock y la publica con un único swap.
pub struct SnapshotStore {
    current: RwLock<Arc<WeekSnapshot>>,
    refresh_lock: Mutex<()>,
}

impl SnapshotStore {
    pub fn new(initial: WeekSnapshot) -> Self {
        SnapshotStore { current: RwLock::new(Arc::new(initial)), refresh_lock: Mutex::new(()) }
    }

    pub fn current(&self) -> Arc<WeekSnapshot> {
        Arc::clone(&*self.current.read())
    }

    pub fn publish(&self, snapshot: WeekSnapshot) -> Arc<WeekSnapshot> {
        let arc = Arc::new(snapshot);
        *self.current.write() = Arc::clone(&arc);
        arc
    }

    /// Recarga desde `dir`. Si falla, la semana publicada no cambia.
    pub fn refresh(&self, dir: &Path) -> Result<Arc<WeekSnapshot>> {
        self.refresh_with(|| WeekSnapshot::load(dir))
    }

    /// Serializa a los escritores: `prepare` corre con el lock de recarga tomado
    /// (p.ej. escribir archivos y luego leerlos).
    pub fn refresh_with<F>(&self, prepare: F) -> Result<Arc<WeekSnapshot>>
    where
        F: FnOnce() -> Result<WeekSnapshot>,
    {
        let _guard = self.refresh_lock.lock();
        match prepare() {
            Ok(snapshot) => Ok(self.publish(snapshot)),
            Err(e) => {
                log::warn!("refresh aborted, keeping previous week: {}", e);
                Err(e)
            }
        }
    }
}
