use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppError, AppResult, AppState, auth::AuthUser, profiles};

use super::store;

/// Flips `user_id`'s membership in `event_id`: absent becomes registered,
/// present becomes unregistered. Returns true when the call removed an
/// existing registration. Deliberately not idempotent.
///
/// Membership is one row in `registrations`, so the profile-side and
/// event-side views cannot drift apart; the row flip runs in a transaction.
pub async fn toggle_registration(
    db_pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> Result<bool, AppError> {
    if !profiles::store::profile_exists(db_pool, user_id).await? {
        return Err(AppError::ProfileNotFound);
    }
    if !store::event_exists(db_pool, event_id).await? {
        return Err(AppError::EventNotFound);
    }

    let mut tx = db_pool.begin().await?;

    let removed = sqlx::query("DELETE FROM registrations WHERE user_id=? AND event_id=?")
        .bind(user_id)
        .bind(event_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if removed == 0 {
        sqlx::query("INSERT INTO registrations (user_id,event_id) VALUES (?,?)")
            .bind(user_id)
            .bind(event_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(removed > 0)
}

#[derive(Deserialize)]
pub(crate) struct RegisterBody {
    #[serde(rename = "eventId")]
    event_id: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn register(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Json(RegisterBody { event_id }): Json<RegisterBody>,
) -> AppResult<Response> {
    let unregistered = toggle_registration(&db_pool, &auth.id, &event_id).await?;

    Ok(Json(json!({
        "status": "success",
        "unregistered": unregistered,
    }))
    .into_response())
}
