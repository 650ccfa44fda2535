use std::env;
use std::path::PathBuf;

/// Configuración del proceso, leída de variables de entorno (y `.env` si existe).
#[derive(Debug, Clone)]
pub struct Config {
    /// Carpeta de ingesta con los `{Weekday}.xlsx`
    pub timetable_path: PathBuf,
    /// Carpeta de los archivos planos (ratings, emails, feedback)
    pub data_dir: PathBuf,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timetable_path: PathBuf::from("timetable"),
            data_dir: PathBuf::from("data"),
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        let defaults = Config::default();
        Config {
            timetable_path: env::var("TIMETABLE_PATH").map(PathBuf::from).unwrap_or(defaults.timetable_path),
            data_dir: env::var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}
