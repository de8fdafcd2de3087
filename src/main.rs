use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use portfolio_api::{
    background_task::bootstrap_schema,
    db::postgres::Database,
    graceful_shutdown::stop_on_signal,
    middlewares::cors::CorsMiddleware,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;

    init_tracing(config.is_production());
    tracing::info!("Loaded configuration: {:?}", config);

    let db = Database::connect_lazy(config.database_url.as_deref(), config.database_max_connections);

    let app_state = web::Data::new(AppState::new(&config, db.clone()));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(CorsMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run();

    actix_web::rt::spawn(bootstrap_schema(db));
    actix_web::rt::spawn(stop_on_signal(server.handle()));

    server.await.context("Server error")?;
    Ok(())
}
