use actix_web::HttpResponse;
use serde_json::json;

pub async fn index_handler() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(
        r#"<html>
<h1>Timetable Scheduler Backend</h1>
<a href="/help">Documentation</a>
</html>"#,
    )
}

pub async fn help_handler() -> HttpResponse {
    let help = json!({
        "description": "API del horario semanal. Las hojas se leen de TIMETABLE_PATH como {Weekday}.xlsx; cada hoja tiene un bloque de salas (columna 'Room') y un bloque de laboratorios que empieza en la fila 'Lab'.",
        "routes": {
            "GET /all-subjects": "lista ordenada de asignaturas",
            "POST /time-table": {"subjects": ["Calculus", "OOP Lab"]},
            "GET /get_files": "días cargados en orden de semana",
            "POST /selected-file": {"file": "Monday", "selection_type": "Room"},
            "POST /get-free-room": {"timeslot": "8:00-9:20"},
            "POST /now-empty": {"current-day": "Monday", "current-time": "10:15 AM"},
            "GET /get_modification_time": "hora de la última carga",
            "GET /update-timetable": "recarga la carpeta de ingesta",
            "POST /update-timetable": {"sheets": [{"title": "Monday", "values": [["..."]]}]},
            "POST /datafiles": "multipart con archivos Monday.xlsx ... Friday.xlsx",
            "POST /submit-rating": {"rating": 5},
            "GET /current-rating": "promedio y total de votos",
            "POST /subscribe-email": {"email": "alumno@ejemplo.edu"},
            "POST /post-feedback": {"name": "...", "message": "..."}
        },
        "note": "selection_type es 'Room' (clases) o 'Lab'. /get-free-room usa la última selección de /selected-file si no se envía 'file'."
    });

    HttpResponse::Ok().json(help)
}
