use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, ResponseError};
use parking_lot::Mutex;
use serde_json::json;

use crate::algorithm::{SnapshotStore, WeekSnapshot};
use crate::bookkeeping::RatingBook;
use crate::config::Config;
use crate::error::TimetableError;
use crate::models::{RegionKind, Weekday};
use crate::server_handlers::*;

/// Última selección (día + tipo) hecha vía `/selected-file`, usada por `/get-free-room`
/// cuando el cliente no repite el día.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub day: Weekday,
    pub kind: RegionKind,
}

/// Estado compartido por todos los handlers.
pub struct AppState {
    pub config: Config,
    pub week: SnapshotStore,
    pub ratings: RatingBook,
    pub selection: Mutex<Option<Selection>>,
}

impl AppState {
    /// Carga la semana inicial desde `config.timetable_path`.
    ///
    /// Si la carpeta tiene hojas mal formadas el servidor arranca con una semana
    /// vacía; una recarga posterior la reemplaza. Un `ratings.json` ilegible
    /// deja las calificaciones en cero.
    pub fn from_config(config: Config) -> Self {
        let week = match WeekSnapshot::load(&config.timetable_path) {
            Ok(w) => w,
            Err(e) => {
                log::error!("failed to load week from {}: {}", config.timetable_path.display(), e);
                WeekSnapshot::empty()
            }
        };
        let ratings = match RatingBook::open(&config.data_dir) {
            Ok(book) => book,
            Err(e) => {
                log::error!("failed to read ratings from {}: {}", config.data_dir.display(), e);
                RatingBook::empty(&config.data_dir)
            }
        };
        AppState { config, week: SnapshotStore::new(week), ratings, selection: Mutex::new(None) }
    }
}

impl ResponseError for TimetableError {
    fn status_code(&self) -> StatusCode {
        match self {
            TimetableError::UnknownDay(_) => StatusCode::NOT_FOUND,
            e if e.is_bad_input() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}

/// Registra todas las rutas (también lo usan los tests con `App::configure`).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/help", web::get().to(help_handler))
        .route("/get_modification_time", web::get().to(modification_time_handler))
        .route("/all-subjects", web::get().to(all_subjects_handler))
        .route("/time-table", web::post().to(time_table_handler))
        .route("/get_files", web::get().to(get_files_handler))
        .route("/selected-file", web::post().to(selected_file_handler))
        .route("/get-free-room", web::post().to(get_free_room_handler))
        .route("/now-empty", web::post().to(now_empty_handler))
        .route("/update-timetable", web::get().to(reload_timetable_handler))
        .route("/update-timetable", web::post().to(update_timetable_handler))
        .route("/datafiles", web::post().to(datafiles_upload_handler))
        .route("/submit-rating", web::post().to(submit_rating_handler))
        .route("/current-rating", web::get().to(current_rating_handler))
        .route("/subscribe-email", web::post().to(subscribe_email_handler))
        .route("/post-feedback", web::post().to(post_feedback_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let data = web::Data::new(AppState::from_config(config));

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
