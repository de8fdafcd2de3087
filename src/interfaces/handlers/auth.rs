use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::INVALID_PASSWORD_MESSAGE,
    entities::auth::{LoginFailure, LoginRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: Option<web::Json<LoginRequest>>,
) -> impl Responder {
    // An unreadable body counts as a missing password
    let credentials = credentials.map(web::Json::into_inner).unwrap_or_default();

    match state.auth_handler.login(credentials) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(AppError::UnauthorizedAccess) => HttpResponse::Unauthorized().json(LoginFailure {
            success: false,
            message: INVALID_PASSWORD_MESSAGE.to_string(),
        }),
        Err(e) => e.to_http_response(),
    }
}
