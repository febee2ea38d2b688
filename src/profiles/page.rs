use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppError, AppResult, AppState, auth::AuthUser, events, people::matching};

use super::store;

/// The caller's own document, membership lists included. Redaction only
/// applies when someone else is looking (see `people::view`).
#[debug_handler(state = AppState)]
pub(crate) async fn profile(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
) -> AppResult<Response> {
    let Some(profile) = store::fetch_profile(&db_pool, &auth.id).await? else {
        return Err(AppError::ProfileNotFound);
    };

    let friend = matching::friends_of(&db_pool, &auth.id).await?;
    let friend_requested = matching::requested_targets(&db_pool, &auth.id).await?;
    let event_registered = events::store::registered_event_ids(&db_pool, &auth.id).await?;

    let mut body = serde_json::to_value(&profile).map_err(anyhow::Error::from)?;
    body["friend"] = json!(friend);
    body["friend_requested"] = json!(friend_requested);
    body["event_registered"] = json!(event_registered);

    Ok(Json(json!({
        "status": "success",
        "profile": body,
    }))
    .into_response())
}
