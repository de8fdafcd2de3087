use tokio::time::{sleep, Duration};

use crate::db::postgres::Database;

const MAX_RETRIES: u32 = 5;

/// Creates the schema in the background so a slow or absent database never blocks startup.
pub async fn bootstrap_schema(db: Database) {
    if !db.is_configured() {
        return;
    }

    let mut retry_count = 0;
    let mut wait_seconds = 2;

    loop {
        match db.ensure_schema().await {
            Ok(()) => return,
            Err(e) if retry_count < MAX_RETRIES => {
                retry_count += 1;
                tracing::warn!(
                    "Schema bootstrap failed (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, MAX_RETRIES, e, wait_seconds
                );

                sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => {
                tracing::error!("Schema bootstrap gave up: {}", e);
                return;
            }
        }
    }
}
