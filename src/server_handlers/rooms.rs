use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::algorithm::{compact_label, find_free_rooms, match_timeslot_label, region_timeslots, timeslots};
use crate::error::TimetableError;
use crate::models::RegionKind;
use crate::server::{AppState, Selection};
use crate::server_handlers::parse_day;

#[derive(Debug, Deserialize)]
pub struct SelectedFileRequest {
    pub file: String,
    pub selection_type: RegionKind,
}

#[derive(Debug, Deserialize)]
pub struct FreeRoomRequest {
    pub timeslot: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub selection_type: Option<RegionKind>,
}

#[derive(Debug, Deserialize)]
pub struct NowEmptyRequest {
    #[serde(rename = "current-day")]
    pub current_day: String,
    #[serde(rename = "current-time")]
    pub current_time: String,
}

/// POST /selected-file {"file": "Monday", "selection_type": "Room"|"Lab"}
/// Devuelve las franjas de la región y recuerda la selección para `/get-free-room`.
pub async fn selected_file_handler(
    state: web::Data<AppState>,
    body: web::Json<SelectedFileRequest>,
) -> Result<HttpResponse, TimetableError> {
    let req = body.into_inner();
    let day = parse_day(&req.file)?;
    log::info!("Client selected file {} and asked to search in {}", day, req.selection_type);

    let slots = timeslots(&state.week.current(), day, req.selection_type)?;
    *state.selection.lock() = Some(Selection { day, kind: req.selection_type });
    Ok(HttpResponse::Ok().json(slots))
}

/// POST /get-free-room {"timeslot": "8:00-9:20", "file"?: "Monday", "selection_type"?: "Room"}
pub async fn get_free_room_handler(
    state: web::Data<AppState>,
    body: web::Json<FreeRoomRequest>,
) -> Result<HttpResponse, TimetableError> {
    let req = body.into_inner();
    let remembered = *state.selection.lock();

    let day = match req.file.as_deref() {
        Some(f) => parse_day(f)?,
        None => remembered
            .map(|s| s.day)
            .ok_or_else(|| TimetableError::InvalidInput("no file selected; call /selected-file first".to_string()))?,
    };
    let kind = req.selection_type.or(remembered.map(|s| s.kind)).unwrap_or(RegionKind::Class);
    log::info!("free rooms requested: {} {} {}", day, kind, req.timeslot);

    let week = state.week.current();
    let rooms = find_free_rooms(week.day(day)?.region(kind), &req.timeslot)?;
    Ok(HttpResponse::Ok().json(rooms))
}

/// POST /now-empty {"current-day": "Monday", "current-time": "10:15 AM"}
/// Salas y labs libres en la franja que contiene la hora indicada.
pub async fn now_empty_handler(
    state: web::Data<AppState>,
    body: web::Json<NowEmptyRequest>,
) -> Result<HttpResponse, TimetableError> {
    let req = body.into_inner();
    let day = parse_day(&req.current_day)?;
    let week = state.week.current();
    let schedule = week.day(day)?;

    let room_slots = region_timeslots(day.name(), &schedule.classes)?;
    let lab_slots = region_timeslots(day.name(), &schedule.labs)?;
    let slot1 = match_timeslot_label(&req.current_time, &room_slots, RegionKind::Class)?;
    let slot2 = match_timeslot_label(&req.current_time, &lab_slots, RegionKind::Lab)?;

    if slot1.is_none() && slot2.is_none() {
        return Ok(HttpResponse::Created()
            .json(json!({"message": "University Closed. Try Again later in office timings."})));
    }

    let result1 = match slot1 {
        Some(label) => find_free_rooms(&schedule.classes, label)?,
        None => Vec::new(),
    };
    let result2 = match slot2 {
        Some(label) => find_free_rooms(&schedule.labs, label)?,
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(json!({
        "result1": result1,
        "result2": result2,
        "timeslot1": slot1.map(compact_label),
        "timeslot2": slot2.map(compact_label),
    })))
}
