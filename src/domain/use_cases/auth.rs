use zeroize::Zeroizing;

use crate::{
    entities::auth::{LoginRequest, LoginResponse},
    errors::AppError,
};

/// Shared-secret admin gate. One password both "logs in" and, echoed back as
/// the token, authorizes mutating calls as `Authorization: Bearer <secret>`.
pub struct AuthHandler {
    admin_secret: Option<Zeroizing<String>>,
}

impl AuthHandler {
    pub fn new(admin_secret: Option<Zeroizing<String>>) -> Self {
        let admin_secret = admin_secret.filter(|secret| !secret.is_empty());

        if admin_secret.is_none() {
            tracing::warn!("No admin password configured; every admin request will be rejected");
        }

        AuthHandler { admin_secret }
    }

    /// True only when a secret is configured and the candidate equals it.
    pub fn is_admin_secret(&self, candidate: Option<&str>) -> bool {
        match (&self.admin_secret, candidate) {
            (Some(secret), Some(candidate)) => secret.as_str() == candidate,
            _ => false,
        }
    }

    /// Checks a bearer token against the admin secret
    pub fn authorize(&self, bearer_token: Option<&str>) -> Result<(), AppError> {
        if self.is_admin_secret(bearer_token) {
            Ok(())
        } else {
            Err(AppError::UnauthorizedAccess)
        }
    }

    /// Exchanges the admin password for the bearer token
    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if !self.is_admin_secret(request.password.as_deref()) {
            tracing::warn!("Admin login rejected");
            return Err(AppError::UnauthorizedAccess);
        }

        tracing::info!("Admin logged in successfully");
        Ok(LoginResponse {
            success: true,
            token: request.password.unwrap_or_default(),
        })
    }
}
