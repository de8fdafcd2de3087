use actix_web::{http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{errors::AppError, AppState};

/// Extractor that admits only callers presenting the admin secret as a bearer token.
/// Returns 401 otherwise.
/// Usage: add `_admin: AdminToken` as the first parameter of a handler so the
/// check runs before the body is parsed.
#[derive(Debug)]
pub struct AdminToken;

impl FromRequest for AdminToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing in admin extractor");
            return ready(Err(AppError::InternalError("Application state not configured".into()).into()));
        };

        match state.auth_handler.authorize(extract_bearer_token(req)) {
            Ok(()) => ready(Ok(AdminToken)),
            Err(e) => {
                tracing::warn!("Rejected admin request to {}", req.path());
                ready(Err(e.into()))
            }
        }
    }
}

/// Value of an `Authorization: Bearer <token>` header, scheme matched case-insensitively.
pub fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let (scheme, token) = header.trim().split_once(' ')?;
            if scheme.eq_ignore_ascii_case("bearer") {
                Some(token.trim())
            } else {
                None
            }
        })
        .filter(|token| !token.is_empty())
}
