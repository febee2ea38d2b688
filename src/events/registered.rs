use std::collections::HashSet;

use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppResult, AppState, auth::AuthUser, db::Event};

use super::store::{self, EventResponse};

#[debug_handler(state = AppState)]
pub(crate) async fn registered(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
) -> AppResult<Response> {
    let mut events: Vec<Event> = sqlx::query_as(
        "SELECT e.* FROM events e JOIN registrations r ON r.event_id = e.id WHERE r.user_id=?",
    )
    .bind(&auth.id)
    .fetch_all(&db_pool)
    .await?;
    events.sort_by_key(|event| event.event_date);

    let counts = store::attendee_counts(&db_pool).await?;
    let mine: HashSet<String> = events.iter().map(|event| event.id.clone()).collect();

    let events: Vec<EventResponse> = events
        .into_iter()
        .map(|event| store::to_response(event, &counts, &mine))
        .collect();

    Ok(Json(json!({
        "status": "success",
        "events": events,
    }))
    .into_response())
}
