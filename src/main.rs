//! Server entry point: config → logging → sessions → triggers → serve.

use tokio::net::TcpListener;

use app_server::lifecycle::{shutdown::EXIT_STATUS, signals, ShutdownController};
use app_server::{config, modules, observability, FileSessionStore, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_config = config::load_from_env()?;
    let log_guards = observability::init(app_config.environment, ".");

    tracing::info!(
        port = app_config.port,
        environment = ?app_config.environment,
        session_path = %app_config.session_path.display(),
        "Configuration loaded"
    );

    let sessions = FileSessionStore::open(&app_config.session_path).await?;

    let controller = ShutdownController::new();
    signals::install(controller.handle());

    // Bind failure propagates: the process never reaches LISTENING.
    let listener = TcpListener::bind(("0.0.0.0", app_config.port)).await?;

    let server = HttpServer::new(
        app_config,
        sessions,
        controller.handle(),
        modules::collect(),
    );
    server.run(listener, controller).await?;

    // Termination is always treated as abnormal, whatever the trigger was.
    tracing::info!("Server closed successfully");

    // Flush the non-blocking log writers before the process dies, or the
    // final records never reach the files.
    drop(log_guards);
    std::process::exit(EXIT_STATUS);
}
