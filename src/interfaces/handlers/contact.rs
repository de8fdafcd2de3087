use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact::NewContactMessageRequest, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn submit_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactMessageRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .contact_handler
        .submit_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

// Unauthenticated, matching the public site's behaviour; an admin gate here
// needs a product decision first.
#[instrument(skip(state))]
pub async fn list_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_contact_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}
