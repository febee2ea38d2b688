use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    AppError, AppResult, AppState,
    auth::AuthUser,
    db::{Event, Profile},
    events::store::{self as events_store, EventResponse},
    profiles,
};

use super::matching;

const MAX_RECOMMENDATIONS: usize = 100;

/// Candidate profile with its event memberships expanded for the requesting
/// user. Contact details are never part of a recommendation.
#[derive(Debug, Serialize)]
pub struct RecommendedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    pub friend: Vec<String>,
    pub event_registered: Vec<EventResponse>,
}

/// Shared-event overlap between two users' registration sets. `other` holds
/// no duplicates (it comes off a keyed relation). An empty union scores 0.
pub(crate) fn similarity(current: &HashSet<String>, other: &[String]) -> f64 {
    let intersection = other.iter().filter(|id| current.contains(*id)).count();
    let union = current.len() + other.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Ranks every other profile by shared-event overlap with `user_id`, highest
/// first, capped at the top 100. Users already friended or already asked are
/// not candidates.
pub async fn recommendations(
    db_pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<RecommendedProfile>, AppError> {
    if !profiles::store::profile_exists(db_pool, user_id).await? {
        return Err(AppError::ProfileNotFound);
    }

    let mut excluded: HashSet<String> = matching::friends_of(db_pool, user_id)
        .await?
        .into_iter()
        .collect();
    excluded.extend(matching::requested_targets(db_pool, user_id).await?);
    excluded.insert(user_id.to_owned());

    let candidates: Vec<Profile> = sqlx::query_as("SELECT * FROM profiles")
        .fetch_all(db_pool)
        .await?
        .into_iter()
        .filter(|profile: &Profile| !excluded.contains(&profile.user_id))
        .collect();

    // registration lists for everyone, one pass
    let mut event_lists: HashMap<String, Vec<String>> = HashMap::new();
    for (user, event) in
        sqlx::query_as::<_, (String, String)>("SELECT user_id,event_id FROM registrations")
            .fetch_all(db_pool)
            .await?
    {
        event_lists.entry(user).or_default().push(event);
    }

    let my_events: HashSet<String> = event_lists
        .get(user_id)
        .map(|list| list.iter().cloned().collect())
        .unwrap_or_default();

    let mut scored: Vec<(f64, Profile)> = candidates
        .into_iter()
        .map(|profile| {
            let theirs = event_lists
                .get(&profile.user_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (similarity(&my_events, theirs), profile)
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_RECOMMENDATIONS);

    let counts = events_store::attendee_counts(db_pool).await?;
    let events: HashMap<String, Event> = sqlx::query_as::<_, Event>("SELECT * FROM events")
        .fetch_all(db_pool)
        .await?
        .into_iter()
        .map(|event| (event.id.clone(), event))
        .collect();

    let mut out = Vec::with_capacity(scored.len());
    for (_, profile) in scored {
        let friend = matching::friends_of(db_pool, &profile.user_id).await?;
        let event_registered = event_lists
            .get(&profile.user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            // ids that no longer resolve to an event are dropped
            .filter_map(|id| events.get(id).cloned())
            .map(|event| events_store::to_response(event, &counts, &my_events))
            .collect();

        out.push(RecommendedProfile {
            profile: profile.redacted(),
            friend,
            event_registered,
        });
    }

    Ok(out)
}

#[debug_handler(state = AppState)]
pub(crate) async fn recommendations_route(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
) -> AppResult<Response> {
    let recommendations = recommendations(&db_pool, &auth.id).await?;

    Ok(Json(json!({
        "status": "success",
        "recommendations": recommendations,
    }))
    .into_response())
}
