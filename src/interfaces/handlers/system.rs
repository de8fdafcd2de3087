use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::instrument;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize, Debug)]
struct HealthCheckResponse {
    status: &'static str,
    database: &'static str,
    timestamp: Option<String>,
    duration: Option<String>,
    uptime: String,
    version: &'static str,
}

/// Reports datastore reachability. Answers 500 while the database is unconfigured or down.
#[instrument(skip(state))]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let uptime_secs = chrono::Utc::now()
        .signed_duration_since(*START_TIME)
        .num_seconds()
        .max(0) as u64;
    let uptime = format_duration(Duration::from_secs(uptime_secs)).to_string();

    if !state.db.is_configured() {
        return HttpResponse::InternalServerError().json(HealthCheckResponse {
            status: "error",
            database: "Not configured",
            timestamp: None,
            duration: None,
            uptime,
            version: env!("CARGO_PKG_VERSION"),
        });
    }

    let started = Instant::now();
    match state.db.check_connection().await {
        Ok(db_time) => HttpResponse::Ok().json(HealthCheckResponse {
            status: "healthy",
            database: "OK",
            timestamp: Some(db_time.to_rfc3339()),
            duration: Some(format!("{}ms", started.elapsed().as_millis())),
            uptime,
            version: env!("CARGO_PKG_VERSION"),
        }),
        Err(e) => {
            tracing::error!("Health check could not reach the database: {}", e);
            HttpResponse::InternalServerError().json(HealthCheckResponse {
                status: "error",
                database: "Unavailable",
                timestamp: None,
                duration: None,
                uptime,
                version: env!("CARGO_PKG_VERSION"),
            })
        }
    }
}
