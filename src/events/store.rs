use std::collections::{HashMap, HashSet};

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::Event;

/// Event document plus the two per-viewer fields the frontend renders on
/// every listing: how many people go, and whether the viewer is one of them.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub attendee: i64,
    pub registered: bool,
}

pub(crate) async fn fetch_event(db_pool: &SqlitePool, id: &str) -> sqlx::Result<Option<Event>> {
    sqlx::query_as("SELECT * FROM events WHERE id=?")
        .bind(id)
        .fetch_optional(db_pool)
        .await
}

pub(crate) async fn event_exists(db_pool: &SqlitePool, id: &str) -> sqlx::Result<bool> {
    Ok(sqlx::query("SELECT 1 FROM events WHERE id=?")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .is_some())
}

/// Ids of the events `user_id` is currently in, insertion order.
pub(crate) async fn registered_event_ids(
    db_pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Vec<String>> {
    Ok(
        sqlx::query_as::<_, (String,)>("SELECT event_id FROM registrations WHERE user_id=?")
            .bind(user_id)
            .fetch_all(db_pool)
            .await?
            .into_iter()
            .map(|(id,)| id)
            .collect(),
    )
}

pub(crate) async fn attendee_counts(db_pool: &SqlitePool) -> sqlx::Result<HashMap<String, i64>> {
    Ok(sqlx::query_as::<_, (String, i64)>(
        "SELECT event_id,COUNT(*) FROM registrations GROUP BY event_id",
    )
    .fetch_all(db_pool)
    .await?
    .into_iter()
    .collect())
}

pub(crate) fn to_response(
    event: Event,
    counts: &HashMap<String, i64>,
    viewer_events: &HashSet<String>,
) -> EventResponse {
    let attendee = counts.get(&event.id).copied().unwrap_or(0);
    let registered = viewer_events.contains(&event.id);
    EventResponse {
        event,
        attendee,
        registered,
    }
}
