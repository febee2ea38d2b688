use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::{AppError, AppResult};

#[derive(Deserialize)]
pub(crate) struct RegisterBody {
    email: String,
    password: String,
}

#[debug_handler]
pub(crate) async fn register(
    State(db_pool): State<SqlitePool>,
    Json(RegisterBody { email, password }): Json<RegisterBody>,
) -> AppResult<Response> {
    if password.len() < 8 || password.len() > 50 {
        return Err(AppError::PasswordRejected);
    }

    let hash = bcrypt::hash(&password, 10).map_err(anyhow::Error::from)?;

    let inserted = sqlx::query("INSERT INTO users (id,email,password) VALUES (?,?,?)")
        .bind(Uuid::now_v7().to_string())
        .bind(&email)
        .bind(&hash)
        .execute(&db_pool)
        .await;

    match inserted {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::EmailTaken);
        }
        Err(e) => return Err(e.into()),
    }

    info!("registered {email}");

    Ok(Json(json!({
        "status": "success",
        "message": format!("User with email {email} has been successfully saved to our database"),
    }))
    .into_response())
}
