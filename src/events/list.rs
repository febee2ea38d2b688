use std::collections::HashSet;

use axum::{
    Json, debug_handler,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppResult, AppState, auth::AuthUser, db::Event};

use super::store::{self, EventResponse};

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    sort: Option<String>,
    max: Option<usize>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn events(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Query(ListQuery { sort, max }): Query<ListQuery>,
) -> AppResult<Response> {
    let mut events: Vec<Event> = sqlx::query_as("SELECT * FROM events")
        .fetch_all(&db_pool)
        .await?;

    events.sort_by_key(|event| event.event_date);
    if sort.as_deref() == Some("dsc") {
        events.reverse();
    }
    if let Some(max) = max {
        events.truncate(max);
    }

    let counts = store::attendee_counts(&db_pool).await?;
    let mine: HashSet<String> = store::registered_event_ids(&db_pool, &auth.id)
        .await?
        .into_iter()
        .collect();

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
