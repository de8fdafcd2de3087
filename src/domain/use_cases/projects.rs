use crate::{
    entities::project::{
        NewProjectRequest, Project, ProjectCategory, ProjectChanges, ProjectInsert,
        UpdateProjectRequest,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_id::valid_id,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest first, optionally filtered by an exact category name
    pub async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        let category = category
            .map(str::parse::<ProjectCategory>)
            .transpose()?;

        self.project_repo.list_projects(category).await
    }

    /// Retrieves a project by its ID
    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_id(id)?;

        self.project_repo
            .get_project_by_id(valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".into()))
    }

    /// Validates and stores a new project, returning the stored record
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        let project = self.project_repo.create_project(&insert).await?;

        tracing::info!(project_id = project.id, "Project created");
        Ok(project)
    }

    /// Merges the provided fields onto an existing project
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let valid_id = valid_id(id)?;
        let changes = ProjectChanges::try_from(request)?;

        let updated = if changes.is_empty() {
            self.project_repo.get_project_by_id(valid_id).await?
        } else {
            self.project_repo.update_project(valid_id, &changes).await?
        };

        updated.ok_or_else(|| AppError::NotFound("Project".into()))
    }

    /// Deletes a project; a missing id is not an error
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_id(id)?;

        let deleted = self.project_repo.delete_project(valid_id).await?;

        tracing::info!(project_id = valid_id, deleted, "Project delete processed");
        Ok(())
    }
}
