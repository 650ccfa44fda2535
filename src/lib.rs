// Biblioteca raíz del crate `timetable_backend`.
// Lectura de las hojas semanales, consultas sobre la semana cargada y la API HTTP.
pub mod algorithm;
pub mod bookkeeping;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod server;
mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
pub use error::{Result, TimetableError};
