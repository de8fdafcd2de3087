use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::PROJECT_DELETED_MESSAGE,
    entities::project::{NewProjectRequest, ProjectListQuery, UpdateProjectRequest},
    errors::AppError,
    use_cases::extractors::AdminToken,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> Result<impl Responder, AppError> {
    let projects = state
        .project_handler
        .list_projects(query.category.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_id(&project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

// 200 rather than 201: existing clients check for it
#[instrument(skip(_admin, state, data))]
pub async fn create_project(
    _admin: AdminToken,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_project(
    _admin: AdminToken,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state
        .project_handler
        .update_project(&project_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(_admin, state))]
pub async fn delete_project(
    _admin: AdminToken,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": PROJECT_DELETED_MESSAGE
    })))
}
