use std::collections::HashSet;

use axum::{
    Json, debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::store;

#[debug_handler(state = AppState)]
pub(crate) async fn event(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(event) = store::fetch_event(&db_pool, &id).await? else {
        return Err(AppError::EventNotFound);
    };

    let counts = store::attendee_counts(&db_pool).await?;
    let mine: HashSet<String> = store::registered_event_ids(&db_pool, &auth.id)
        .await?
        .into_iter()
        .collect();

    Ok(Json(json!({
        "status": "success",
        "event": store::to_response(event, &counts, &mine),
    }))
    .into_response())
}
