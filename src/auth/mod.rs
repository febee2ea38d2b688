mod login;
mod register;
mod token;

use axum::{Router, extract::FromRequestParts, http::request::Parts, routing::post};

use crate::{AppError, AppState};

pub use token::Claims;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login))
}

/// Caller identity resolved from the `Authorization: Bearer` header. Handlers
/// downstream trust this id without re-checking it.
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Forbidden)?;
        let token = header.strip_prefix("Bearer ").ok_or(AppError::Forbidden)?;
        let claims = token::validate(token, &state.config.jwt_secret).ok_or(AppError::Forbidden)?;

        Ok(AuthUser {
            id: claims.id,
            email: claims.email,
        })
    }
}
