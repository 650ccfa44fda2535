// --- Timetable Scheduler Backend - Archivo principal ---

use timetable_backend::config::Config;
use timetable_backend::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!("=== Timetable Scheduler Backend (API) ===");
    log::info!("timetable folder: {}", config.timetable_path.display());
    log::info!("Iniciando servidor en http://{}", config.bind_addr);
    run_server(config).await
}
