use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::stream::StreamExt;
use serde::Deserialize;
use serde_json::json;
use tokio::io::AsyncWriteExt;

use crate::algorithm::WeekSnapshot;
use crate::error::TimetableError;
use crate::excel::{purge_non_weekday_files, weekday_from_file_name, write_sheet_values};
use crate::server::AppState;

/// Valores de una hoja tal como los entrega la planilla remota.
#[derive(Debug, Deserialize)]
pub struct SheetValues {
    pub title: String,
    pub values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTimetableRequest {
    pub sheets: Vec<SheetValues>,
}

fn refreshed_response(week: &WeekSnapshot, extra: serde_json::Value) -> HttpResponse {
    let mut body = json!({
        "message": "Timetable update successful",
        "code": 200,
        "days": week.list_days(),
        "modified": week.loaded_at().to_rfc3339(),
    });
    if let (Some(obj), Some(extra_obj)) = (body.as_object_mut(), extra.as_object()) {
        for (k, v) in extra_obj {
            obj.insert(k.clone(), v.clone());
        }
    }
    HttpResponse::Ok().json(body)
}

/// GET /update-timetable
/// Vuelve a leer la carpeta de ingesta (los archivos ya fueron reemplazados afuera).
pub async fn reload_timetable_handler(state: web::Data<AppState>) -> Result<HttpResponse, TimetableError> {
    let st = state.clone();
    let handle = tokio::task::spawn_blocking(move || st.week.refresh(&st.config.timetable_path));
    match handle.await {
        Ok(res) => {
            let week = res?;
            Ok(refreshed_response(&week, json!({})))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)}))),
    }
}

/// POST /update-timetable {"sheets": [{"title": "Monday", "values": [[...], ...]}]}
/// Escribe cada hoja como `{title}.xlsx`, borra lo que no sea lunes..viernes y recarga.
pub async fn update_timetable_handler(
    state: web::Data<AppState>,
    body: web::Json<UpdateTimetableRequest>,
) -> Result<HttpResponse, TimetableError> {
    let req = body.into_inner();
    if req.sheets.is_empty() {
        return Err(TimetableError::InvalidInput("no sheets provided".to_string()));
    }

    let st = state.clone();
    let handle = tokio::task::spawn_blocking(move || {
        let dir = st.config.timetable_path.clone();
        let mut removed: Vec<String> = Vec::new();
        let week = st.week.refresh_with(|| {
            for sheet in &req.sheets {
                let path = write_sheet_values(&dir, &sheet.title, &sheet.values)?;
                log::info!("Sheet \"{}\" saved as {}", sheet.title, path.display());
            }
            removed = purge_non_weekday_files(&dir)?;
            WeekSnapshot::load(&dir)
        })?;
        Ok::<_, TimetableError>((week, removed))
    });

    match handle.await {
        Ok(res) => {
            let (week, removed) = res?;
            Ok(refreshed_response(&week, json!({"removed": removed})))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)}))),
    }
}

/// POST /datafiles (multipart)
/// Sube archivos `{Weekday}.xlsx` a la carpeta de ingesta y recarga la semana.
pub async fn datafiles_upload_handler(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, TimetableError> {
    let base = state.config.timetable_path.clone();
    tokio::fs::create_dir_all(&base).await?;

    let mut saved: Vec<String> = Vec::new();
    let mut rejected: Vec<String> = Vec::new();
    while let Some(field_res) = payload.next().await {
        let mut field = field_res.map_err(|e| TimetableError::InvalidInput(format!("multipart error: {}", e)))?;

        let filename = field.content_disposition().get_filename().map(|s| s.to_string());
        let filename = match filename {
            Some(n) if weekday_from_file_name(&n).is_some() => n,
            other => {
                // descartar el contenido del campo rechazado
                while let Some(chunk) = field.next().await {
                    if chunk.is_err() {
                        break;
                    }
                }
                rejected.push(other.unwrap_or_default());
                continue;
            }
        };

        // se escribe a un `.part` y sólo se renombra con el archivo completo,
        // así una subida cortada no pisa la hoja vigente
        let target = base.join(&filename);
        let staging = base.join(format!(".{}.part", filename));
        let mut f = tokio::fs::File::create(&staging).await?;
        let mut stream_error = None;
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => f.write_all(&bytes).await?,
                Err(e) => {
                    stream_error = Some(e.to_string());
                    break;
                }
            }
        }
        if let Some(e) = stream_error {
            drop(f);
            let _ = tokio::fs::remove_file(&staging).await;
            log::warn!("upload of {} interrupted: {}", filename, e);
            return Err(TimetableError::InvalidInput(format!("upload of {} interrupted: {}", filename, e)));
        }
        f.flush().await?;
        drop(f);
        tokio::fs::rename(&staging, &target).await?;
        saved.push(filename);
    }

    if saved.is_empty() {
        return Err(TimetableError::InvalidInput(format!(
            "no weekday sheets uploaded (expected files named like Monday.xlsx), rejected: {:?}",
            rejected
        )));
    }

    let st = state.clone();
    let handle = tokio::task::spawn_blocking(move || st.week.refresh(&st.config.timetable_path));
    match handle.await {
        Ok(res) => {
            let week = res?;
            Ok(refreshed_response(&week, json!({"saved": saved, "rejected": rejected})))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)}))),
    }
}
