//! Repository tests against a real Postgres. They only run when `DATABASE_URL`
//! is set; otherwise each test returns early.

use once_cell::sync::Lazy;
use portfolio_api::{
    db::postgres::Database,
    entities::{
        contact::ContactMessageInsert,
        option_fields::OptionField,
        project::{ProjectCategory, ProjectChanges, ProjectInsert},
    },
    repositories::{
        contact::ContactRepository,
        project::ProjectRepository,
        sqlx_repo::{SqlxContactRepo, SqlxProjectRepo},
    },
};
use tokio::sync::{Mutex, MutexGuard};

// Every test truncates the same tables
static DB_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

async fn test_database() -> Option<(MutexGuard<'static, ()>, Database)> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping Postgres repository test");
        return None;
    };

    let guard = DB_LOCK.lock().await;
    let db = Database::connect_lazy(Some(&url), 2);

    db.ensure_schema().await.expect("Failed to create schema");

    sqlx::query("TRUNCATE TABLE projects, contact_messages RESTART IDENTITY")
        .execute(db.pool().expect("Database pool configured"))
        .await
        .expect("Failed to truncate tables");

    Some((guard, db))
}

fn insert(title: &str, category: ProjectCategory) -> ProjectInsert {
    ProjectInsert {
        title: title.to_string(),
        description: "Personal site".into(),
        image: "cover.png".into(),
        technologies: vec!["React".into(), "TypeScript".into(), "Rust".into()],
        live_url: "https://example.com".into(),
        github_url: "https://github.com/example/portfolio".into(),
        category,
        featured: false,
        content: Some("# Notes".into()),
    }
}

#[actix_rt::test]
async fn created_project_reads_back_unchanged() {
    let Some((_guard, db)) = test_database().await else { return };
    let repo = SqlxProjectRepo::new(db);

    let created = repo
        .create_project(&insert("Portfolio", ProjectCategory::MobileApps))
        .await
        .unwrap();
    let fetched = repo.get_project_by_id(created.id).await.unwrap();

    assert_eq!(fetched.as_ref(), Some(&created));
    assert_eq!(created.technologies, vec!["React", "TypeScript", "Rust"]);
    assert_eq!(created.category, ProjectCategory::MobileApps);
    assert_eq!(created.content.as_deref(), Some("# Notes"));
}

#[actix_rt::test]
async fn partial_update_only_touches_provided_fields() {
    let Some((_guard, db)) = test_database().await else { return };
    let repo = SqlxProjectRepo::new(db);
    let created = repo
        .create_project(&insert("Portfolio", ProjectCategory::Frontend))
        .await
        .unwrap();

    let renamed = repo
        .update_project(created.id, &ProjectChanges {
            title: Some("Renamed".into()),
            featured: Some(true),
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("project exists");

    assert_eq!(renamed.title, "Renamed");
    assert!(renamed.featured);
    assert_eq!(renamed.description, created.description);
    assert_eq!(renamed.technologies, created.technologies);
    assert_eq!(renamed.category, created.category);
    assert_eq!(renamed.content, created.content);
    assert_eq!(renamed.created_at, created.created_at);

    let rewritten = repo
        .update_project(created.id, &ProjectChanges {
            content: OptionField::SetToValue("Rewritten".into()),
            category: Some(ProjectCategory::Games),
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("project exists");

    assert_eq!(rewritten.content.as_deref(), Some("Rewritten"));
    assert_eq!(rewritten.category, ProjectCategory::Games);
    assert_eq!(rewritten.title, "Renamed");

    let cleared = repo
        .update_project(created.id, &ProjectChanges {
            content: OptionField::SetToNull,
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("project exists");

    assert_eq!(cleared.content, None);
    assert_eq!(cleared.title, "Renamed");
}

#[actix_rt::test]
async fn update_and_delete_of_missing_project() {
    let Some((_guard, db)) = test_database().await else { return };
    let repo = SqlxProjectRepo::new(db);

    let changes = ProjectChanges {
        title: Some("Ghost".into()),
        ..Default::default()
    };
    assert_eq!(repo.update_project(404, &changes).await.unwrap(), None);
    assert_eq!(repo.delete_project(404).await.unwrap(), 0);

    let created = repo
        .create_project(&insert("Portfolio", ProjectCategory::Fullstack))
        .await
        .unwrap();
    assert_eq!(repo.delete_project(created.id).await.unwrap(), 1);
    assert_eq!(repo.get_project_by_id(created.id).await.unwrap(), None);
}

#[actix_rt::test]
async fn list_is_newest_first_and_filters_by_category() {
    let Some((_guard, db)) = test_database().await else { return };
    let repo = SqlxProjectRepo::new(db);

    for (title, category) in [
        ("t1", ProjectCategory::Frontend),
        ("t2", ProjectCategory::Games),
        ("t3", ProjectCategory::Games),
    ] {
        repo.create_project(&insert(title, category)).await.unwrap();
    }

    let all = repo.list_projects(None).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["t3", "t2", "t1"]);

    let games = repo.list_projects(Some(ProjectCategory::Games)).await.unwrap();
    let titles: Vec<&str> = games.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["t3", "t2"]);

    let mobile = repo.list_projects(Some(ProjectCategory::MobileApps)).await.unwrap();
    assert!(mobile.is_empty());
}

#[actix_rt::test]
async fn contact_messages_are_stored_and_listed_newest_first() {
    let Some((_guard, db)) = test_database().await else { return };
    let repo = SqlxContactRepo::new(db);

    for subject in ["first", "second"] {
        let stored = repo
            .create_contact_message(&ContactMessageInsert {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                subject: subject.into(),
                message: "I enjoyed your portfolio.".into(),
            })
            .await
            .unwrap();
        assert_eq!(stored.subject, subject);
    }

    let messages = repo.list_contact_messages().await.unwrap();
    let subjects: Vec<&str> = messages.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, vec!["second", "first"]);
}
