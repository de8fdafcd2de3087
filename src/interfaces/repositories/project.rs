use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use crate::{
    db::postgres::Database,
    entities::project::{Project, ProjectCategory, ProjectChanges, ProjectInsert, ProjectRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

const PROJECT_COLUMNS: &str =
    "id, title, description, image, technologies, live_url, github_url, category, featured, content, created_at";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Newest first, optionally restricted to one category.
    async fn list_projects(&self, category: Option<ProjectCategory>) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    /// Returns `None` when no project has the given id.
    async fn update_project(&self, id: i32, changes: &ProjectChanges) -> Result<Option<Project>, AppError>;
    /// Returns the number of deleted rows.
    async fn delete_project(&self, id: i32) -> Result<u64, AppError>;
}

#[async_trait]
impl<T> ProjectRepository for Arc<T>
where
    T: ProjectRepository + ?Sized,
{
    async fn list_projects(&self, category: Option<ProjectCategory>) -> Result<Vec<Project>, AppError> {
        (**self).list_projects(category).await
    }

    async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        (**self).get_project_by_id(id).await
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        (**self).create_project(project).await
    }

    async fn update_project(&self, id: i32, changes: &ProjectChanges) -> Result<Option<Project>, AppError> {
        (**self).update_project(id, changes).await
    }

    async fn delete_project(&self, id: i32) -> Result<u64, AppError> {
        (**self).delete_project(id).await
    }
}

impl SqlxProjectRepo {
    pub fn new(db: Database) -> Self {
        SqlxProjectRepo { db }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, category: Option<ProjectCategory>) -> Result<Vec<Project>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!("SELECT {PROJECT_COLUMNS} FROM projects"));

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category.as_str());
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows: Vec<ProjectRow> = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(self.db.pool()?)
            .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn get_project_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.db.pool()?)
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            INSERT INTO projects (
                title, description, image, technologies, live_url, github_url,
                category, featured, content
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.technologies)
        .bind(&project.live_url)
        .bind(&project.github_url)
        .bind(project.category.as_str())
        .bind(project.featured)
        .bind(&project.content)
        .fetch_one(self.db.pool()?)
        .await?;

        Project::try_from(row)
    }

    async fn update_project(&self, id: i32, changes: &ProjectChanges) -> Result<Option<Project>, AppError> {
        // COALESCE keeps the stored value for every field left out of the patch;
        // content is nullable so it carries an explicit "was provided" flag
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                image = COALESCE($3, image),
                technologies = COALESCE($4, technologies),
                live_url = COALESCE($5, live_url),
                github_url = COALESCE($6, github_url),
                category = COALESCE($7, category),
                featured = COALESCE($8, featured),
                content = CASE WHEN $9 THEN $10 ELSE content END
            WHERE id = $11
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.image)
        .bind(&changes.technologies)
        .bind(&changes.live_url)
        .bind(&changes.github_url)
        .bind(changes.category.map(|category| category.as_str()))
        .bind(changes.featured)
        .bind(!changes.content.is_unchanged())
        .bind(changes.content.value_ref())
        .bind(id)
        .fetch_optional(self.db.pool()?)
        .await?;

        row.map(Project::try_from).transpose()
    }

    async fn delete_project(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(self.db.pool()?)
            .await?;

        Ok(result.rows_affected())
    }
}
