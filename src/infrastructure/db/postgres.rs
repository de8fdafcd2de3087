use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};
use std::time::Duration;

use crate::errors::AppError;

const ACQUIRE_TIMEOUT_SECS: u64 = 5;

const CREATE_PROJECTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS projects (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        image TEXT NOT NULL,
        technologies TEXT[] NOT NULL,
        live_url TEXT NOT NULL,
        github_url TEXT NOT NULL,
        category TEXT NOT NULL
            CHECK (category IN ('Frontend', 'Fullstack', 'Mobile Apps', 'Games')),
        featured BOOLEAN NOT NULL DEFAULT FALSE,
        content TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_CONTACT_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS contact_messages (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        subject TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Handle to the datastore. Holds no pool when no connection string is configured,
/// in which case every data call fails with an internal error instead of crashing.
#[derive(Clone, Default)]
pub struct Database {
    pool: Option<PgPool>,
}

impl Database {
    /// Builds a pool that opens connections on first use.
    pub fn connect_lazy(database_url: Option<&str>, max_connections: u32) -> Self {
        let Some(url) = database_url else {
            warn!("No database URL configured; data endpoints will respond with 500");
            return Database::unavailable();
        };

        match PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
            .connect_lazy(url)
        {
            Ok(pool) => {
                info!("Database pool configured.");
                Database { pool: Some(pool) }
            }
            Err(e) => {
                warn!("Invalid database URL: {}", e);
                Database::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Database { pool: None }
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    pub fn pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::InternalError("Database is not configured".into()))
    }

    /// Round-trips to the server and returns its clock.
    pub async fn check_connection(&self) -> Result<DateTime<Utc>, AppError> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(self.pool()?)
            .await?;

        Ok(now)
    }

    /// Creates the tables this service owns if they are missing.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let pool = self.pool()?;

        for statement in [CREATE_PROJECTS_TABLE, CREATE_CONTACT_MESSAGES_TABLE] {
            sqlx::query(statement).execute(pool).await?;
        }

        info!("Database schema is ready.");
        Ok(())
    }
}
