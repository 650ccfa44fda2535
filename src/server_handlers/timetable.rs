use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::algorithm::{list_subjects, resolve, resolve_day};
use crate::error::TimetableError;
use crate::server::AppState;
use crate::server_handlers::parse_day;

#[derive(Debug, Deserialize)]
pub struct TimeTableRequest {
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Opcional: limitar la búsqueda a un día
    #[serde(default)]
    pub day: Option<String>,
}

/// GET /get_modification_time
/// Momento en que se construyó la semana publicada.
pub async fn modification_time_handler(state: web::Data<AppState>) -> HttpResponse {
    let loaded_at = state.week.current().loaded_at();
    HttpResponse::Ok().json(json!(loaded_at.to_rfc3339()))
}

/// GET /all-subjects
pub async fn all_subjects_handler(state: web::Data<AppState>) -> HttpResponse {
    let week = state.week.current();
    HttpResponse::Ok().json(list_subjects(&week))
}

/// POST /time-table {"subjects": [...]}
pub async fn time_table_handler(
    state: web::Data<AppState>,
    body: web::Json<TimeTableRequest>,
) -> Result<HttpResponse, TimetableError> {
    let req = body.into_inner();
    log::info!("Selected subjects: {:?}", req.subjects);

    let week = state.week.current();
    let entries = match req.day.as_deref() {
        Some(d) => resolve_day(&req.subjects, parse_day(d)?, &week)?,
        None => resolve(&req.subjects, &week),
    };
    log::debug!("generated timetable with {} entries", entries.len());
    Ok(HttpResponse::Ok().json(entries))
}

/// GET /get_files
/// Días cargados en orden de semana.
pub async fn get_files_handler(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.week.current().list_days())
}
