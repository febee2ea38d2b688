use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Conditions the handlers translate into specific responses. Anything that
/// is not one of the named lookups/conflicts falls through as a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ProfileNotFound")]
    ProfileNotFound,
    #[error("TargetProfileNotFound")]
    TargetProfileNotFound,
    #[error("RequesterProfileNotFound")]
    RequesterProfileNotFound,
    #[error("EventNotFound")]
    EventNotFound,
    #[error("FriendRequestNotFound")]
    FriendRequestNotFound,
    #[error("FriendRequestAlreadyMade")]
    FriendRequestAlreadyMade,
    #[error("ProfileAlreadyExists")]
    ProfileAlreadyExists,
    #[error("the email provided was already used")]
    EmailTaken,
    #[error("password must contain at least 8 characters and less than 50 characters")]
    PasswordRejected,
    #[error("missing or invalid bearer token")]
    Forbidden,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        use AppError::*;
        match self {
            ProfileNotFound | TargetProfileNotFound | RequesterProfileNotFound | EventNotFound
            | FriendRequestNotFound => StatusCode::NOT_FOUND,
            FriendRequestAlreadyMade | ProfileAlreadyExists | EmailTaken => StatusCode::CONFLICT,
            PasswordRejected => StatusCode::BAD_REQUEST,
            Forbidden => StatusCode::FORBIDDEN,
            Database(_) | Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{self:#}");
            "there was a failure, please try again".to_owned()
        } else {
            self.to_string()
        };

        (
            status,
            Json(json!({
                "status": "failure",
                "message": message,
            })),
        )
            .into_response()
    }
}
