use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    web,
};

use crate::errors::AppError;

/// Malformed bodies and query strings surface as ordinary validation failures.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::invalid_field("body", format!("JSON payload error: {}", err))
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::invalid_field("query", format!("Query string error: {}", err))
    }
}
