use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::info;

use crate::{AppResult, AppState, Config};

use super::token;

#[derive(Deserialize)]
pub(crate) struct LoginBody {
    email: String,
    password: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(LoginBody { email, password }): Json<LoginBody>,
) -> AppResult<Response> {
    let failure = || {
        Json(json!({
            "status": "failure",
            "message": "login unsuccessful due to incorrect email or password",
        }))
        .into_response()
    };

    let user: Option<(String, String, String)> =
        sqlx::query_as("SELECT id,email,password FROM users WHERE email=?")
            .bind(&email)
            .fetch_optional(&db_pool)
            .await?;

    let Some((id, email, hash)) = user else {
        return Ok(failure());
    };

    if !bcrypt::verify(&password, &hash).map_err(anyhow::Error::from)? {
        return Ok(failure());
    }

    let token = token::generate(&id, &email, &config.jwt_secret)?;
    info!("welcome {email}");

    Ok(Json(json!({
        "status": "success",
        "message": "login successful",
        "email": email,
        "token": token,
    }))
    .into_response())
}
