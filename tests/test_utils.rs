#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use portfolio_api::{
    db::postgres::Database,
    entities::{
        contact::{ContactMessage, ContactMessageInsert},
        project::{Project, ProjectCategory, ProjectChanges, ProjectInsert},
    },
    errors::AppError,
    repositories::{
        contact::ContactRepository,
        project::ProjectRepository,
        sqlx_repo::{SqlxContactRepo, SqlxProjectRepo},
    },
    use_cases::auth::AuthHandler,
    AppState,
};
use actix_web::web;
use serde_json::{json, Value};
use zeroize::Zeroizing;

pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// Builds the real route table around the given state.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .wrap(portfolio_api::middlewares::cors::CorsMiddleware)
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(portfolio_api::routes::configure_routes),
        )
        .await
    };
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Stand-in datastore; every insert is one second newer than the previous one.
#[derive(Default)]
pub struct InMemoryProjectRepo {
    rows: Mutex<Vec<Project>>,
    next_id: Mutex<i32>,
    writes: AtomicUsize,
}

impl InMemoryProjectRepo {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn list_projects(&self, category: Option<ProjectCategory>) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();

        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let stored = Project {
            id: *next_id,
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            technologies: project.technologies.clone(),
            live_url: project.live_url.clone(),
            github_url: project.github_url.clone(),
            category: project.category,
            featured: project.featured,
            content: project.content.clone(),
            created_at: base_time() + Duration::seconds(i64::from(*next_id)),
        };

        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update_project(&self, id: i32, changes: &ProjectChanges) -> Result<Option<Project>, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|p| p.id == id).map(|project| {
            changes.apply_to(project);
            project.clone()
        }))
    }

    async fn delete_project(&self, id: i32) -> Result<u64, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryContactRepo {
    rows: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContactRepo {
    pub fn stored(&self) -> Vec<ContactMessage> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepo {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<ContactMessage, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;

        let stored = ContactMessage {
            id,
            name: msg.name.clone(),
            email: msg.email.clone(),
            subject: msg.subject.clone(),
            message: msg.message.clone(),
            created_at: base_time() + Duration::seconds(i64::from(id)),
        };

        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let mut messages = self.rows.lock().unwrap().clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(messages)
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub projects: Arc<InMemoryProjectRepo>,
    pub contacts: Arc<InMemoryContactRepo>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_admin_password(Some(ADMIN_PASSWORD))
    }

    pub fn with_admin_password(password: Option<&str>) -> Self {
        let projects = Arc::new(InMemoryProjectRepo::default());
        let contacts = Arc::new(InMemoryContactRepo::default());

        let state = web::Data::new(AppState::with_repositories(
            projects.clone(),
            contacts.clone(),
            AuthHandler::new(password.map(|p| Zeroizing::new(p.to_string()))),
            Database::unavailable(),
        ));

        TestContext { state, projects, contacts }
    }
}

/// State backed by the Postgres repositories with no connection string configured.
pub fn state_without_database() -> web::Data<AppState> {
    let db = Database::unavailable();

    web::Data::new(AppState::with_repositories(
        Arc::new(SqlxProjectRepo::new(db.clone())),
        Arc::new(SqlxContactRepo::new(db.clone())),
        AuthHandler::new(Some(Zeroizing::new(ADMIN_PASSWORD.to_string()))),
        db,
    ))
}

pub fn admin_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", ADMIN_PASSWORD))
}

pub fn project_payload() -> Value {
    json!({
        "title": "A",
        "description": "B",
        "image": "i.png",
        "technologies": ["React"],
        "liveUrl": "http://x",
        "githubUrl": "http://y",
        "category": "Frontend",
        "featured": false
    })
}

pub fn titled_payload(title: &str) -> Value {
    let mut payload = project_payload();
    payload["title"] = json!(title);
    payload
}

pub fn contact_payload() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Collaboration",
        "message": "I enjoyed your portfolio."
    })
}

/// Field names listed in a validation error body.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .filter_map(|d| d["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
