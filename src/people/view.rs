use axum::{
    Json, debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    AppError, AppResult, AppState,
    auth::AuthUser,
    db::{Event, Profile},
    events, profiles,
};

use super::matching;

/// What one user sees of another. Pending-request state is never part of
/// this; contact details only survive when the viewer is a friend.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub friend: Vec<String>,
    pub event_registered: Vec<String>,
    pub event_details: Vec<Event>,
}

pub async fn view_profile(
    db_pool: &SqlitePool,
    profile_id: &str,
    requester_id: &str,
) -> Result<Option<ProfileView>, AppError> {
    let Some(profile) = profiles::store::fetch_profile(db_pool, profile_id).await? else {
        return Ok(None);
    };

    let friend = matching::friends_of(db_pool, profile_id).await?;
    let profile = if friend.iter().any(|id| id == requester_id) {
        profile
    } else {
        profile.redacted()
    };

    let event_registered = events::store::registered_event_ids(db_pool, profile_id).await?;
    let mut event_details = Vec::with_capacity(event_registered.len());
    for id in &event_registered {
        // stale ids stay in the list but expand to nothing
        if let Some(event) = events::store::fetch_event(db_pool, id).await? {
            event_details.push(event);
        }
    }

    Ok(Some(ProfileView {
        profile,
        friend,
        event_registered,
        event_details,
    }))
}

#[debug_handler(state = AppState)]
pub(crate) async fn view(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Path(profile_id): Path<String>,
) -> AppResult<Response> {
    match view_profile(&db_pool, &profile_id, &auth.id).await? {
        Some(profile) => Ok(Json(json!({
            "status": "success",
            "profile": profile,
        }))
        .into_response()),
        None => Err(AppError::ProfileNotFound),
    }
}
