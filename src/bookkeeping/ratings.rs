use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TimetableError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingTally {
    pub total_ratings: u64,
    pub sum_rating: u64,
    pub average: f64,
}

impl RatingTally {
    fn add(&mut self, rating: u64) {
        self.total_ratings += 1;
        self.sum_rating += rating;
        self.average = self.sum_rating as f64 / self.total_ratings as f64;
    }
}

/// Acumulador de calificaciones persistido en `ratings.json`.
pub struct RatingBook {
    path: PathBuf,
    tally: Mutex<RatingTally>,
}

impl RatingBook {
    pub const FILE_NAME: &'static str = "ratings.json";

    /// Abre el acumulador en `data_dir`; un archivo ausente o vacío empieza en cero.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(Self::FILE_NAME);
        let tally = match std::fs::read_to_string(&path) {
            Ok(contents) if !contents.trim().is_empty() => serde_json::from_str(&contents)?,
            Ok(_) => RatingTally::default(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RatingTally::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(RatingBook { path, tally: Mutex::new(tally) })
    }

    /// Acumulador en cero para `data_dir`, sin leer el archivo existente.
    pub fn empty(data_dir: &Path) -> Self {
        RatingBook { path: data_dir.join(Self::FILE_NAME), tally: Mutex::new(RatingTally::default()) }
    }

    /// Registra una calificación entre 1 y 5 y guarda el acumulado.
    pub fn submit(&self, rating: i64) -> Result<RatingTally> {
        if !(1..=5).contains(&rating) {
            return Err(TimetableError::InvalidRating(rating));
        }
        let mut tally = self.tally.lock();
        let mut next = tally.clone();
        next.add(rating as u64);

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&next)?)?;
        *tally = next.clone();
        log::info!(
            "rating {} received: total_ratings {}, sum_rating {}, average {:.2}",
            rating, next.total_ratings, next.sum_rating, next.average
        );
        Ok(next)
    }

    pub fn current(&self) -> RatingTally {
        self.tally.lock().clone()
    }
}
