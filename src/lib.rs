use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{db, utils};

use db::postgres::Database;
use repositories::{
    contact::ContactRepository,
    project::ProjectRepository,
    sqlx_repo::{SqlxContactRepo, SqlxProjectRepo},
};
use use_cases::{auth::AuthHandler, contact::ContactHandler, projects::ProjectHandler};

pub type AppProjectHandler = ProjectHandler<Arc<dyn ProjectRepository>>;
pub type AppContactHandler = ContactHandler<Arc<dyn ContactRepository>>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub auth_handler: AuthHandler,
    pub db: Database,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, db: Database) -> Self {
        AppState::with_repositories(
            Arc::new(SqlxProjectRepo::new(db.clone())),
            Arc::new(SqlxContactRepo::new(db.clone())),
            AuthHandler::new(config.admin_secret()),
            db,
        )
    }

    /// Wires the handlers over arbitrary repository implementations.
    pub fn with_repositories(
        project_repo: Arc<dyn ProjectRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        auth_handler: AuthHandler,
        db: Database,
    ) -> Self {
        AppState {
            project_handler: ProjectHandler::new(project_repo),
            contact_handler: ContactHandler::new(contact_repo),
            auth_handler,
            db,
        }
    }
}
