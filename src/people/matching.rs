use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    AppError, AppResult, AppState, auth::AuthUser, db::NotificationKind, db::Profile,
    notifications, profiles,
};

pub(crate) async fn friends_of(db_pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<String>> {
    Ok(
        sqlx::query_as::<_, (String,)>("SELECT friend_id FROM friends WHERE user_id=?")
            .bind(user_id)
            .fetch_all(db_pool)
            .await?
            .into_iter()
            .map(|(id,)| id)
            .collect(),
    )
}

/// Outgoing request targets, i.e. who `requester_id` has asked and not yet
/// been answered about.
pub(crate) async fn requested_targets(
    db_pool: &SqlitePool,
    requester_id: &str,
) -> sqlx::Result<Vec<String>> {
    Ok(sqlx::query_as::<_, (String,)>(
        "SELECT target_id FROM friend_requests WHERE requester_id=?",
    )
    .bind(requester_id)
    .fetch_all(db_pool)
    .await?
    .into_iter()
    .map(|(id,)| id)
    .collect())
}

async fn request_pending(
    db_pool: &SqlitePool,
    requester_id: &str,
    target_id: &str,
) -> sqlx::Result<bool> {
    Ok(
        sqlx::query("SELECT 1 FROM friend_requests WHERE requester_id=? AND target_id=?")
            .bind(requester_id)
            .bind(target_id)
            .fetch_optional(db_pool)
            .await?
            .is_some(),
    )
}

/// Records the requester's intent and notifies the target. A second request
/// for the same pair is rejected until the first is answered. Two opposite
/// pending requests do NOT auto-match; each side answers its own.
pub async fn send_friend_request(
    db_pool: &SqlitePool,
    requester_id: &str,
    target_id: &str,
) -> Result<(), AppError> {
    if !profiles::store::profile_exists(db_pool, requester_id).await? {
        return Err(AppError::ProfileNotFound);
    }
    if !profiles::store::profile_exists(db_pool, target_id).await? {
        return Err(AppError::TargetProfileNotFound);
    }
    if request_pending(db_pool, requester_id, target_id).await? {
        return Err(AppError::FriendRequestAlreadyMade);
    }

    let mut tx = db_pool.begin().await?;
    sqlx::query("INSERT INTO friend_requests (requester_id,target_id) VALUES (?,?)")
        .bind(requester_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;
    notifications::record(&mut tx, target_id, NotificationKind::MatchRequest, requester_id)
        .await?;
    tx.commit().await?;

    Ok(())
}

/// Settles the pending request from `requester_id` to `recipient_id`. Accept
/// makes the friendship mutual in the same transaction that clears the
/// request; reject only clears it. Either way the original request notice is
/// replaced by the outcome notice.
pub async fn respond_to_friend_request(
    db_pool: &SqlitePool,
    recipient_id: &str,
    requester_id: &str,
    accept: bool,
) -> Result<(), AppError> {
    if !profiles::store::profile_exists(db_pool, recipient_id).await? {
        return Err(AppError::ProfileNotFound);
    }
    if !profiles::store::profile_exists(db_pool, requester_id).await? {
        return Err(AppError::RequesterProfileNotFound);
    }
    if !request_pending(db_pool, requester_id, recipient_id).await? {
        return Err(AppError::FriendRequestNotFound);
    }

    let mut tx = db_pool.begin().await?;
    sqlx::query("DELETE FROM friend_requests WHERE requester_id=? AND target_id=?")
        .bind(requester_id)
        .bind(recipient_id)
        .execute(&mut *tx)
        .await?;
    notifications::clear_match_request(&mut tx, recipient_id, requester_id).await?;

    if accept {
        sqlx::query("INSERT INTO friends (user_id,friend_id) VALUES (?,?),(?,?)")
            .bind(recipient_id)
            .bind(requester_id)
            .bind(requester_id)
            .bind(recipient_id)
            .execute(&mut *tx)
            .await?;
        notifications::record(&mut tx, recipient_id, NotificationKind::Matched, requester_id)
            .await?;
        notifications::record(&mut tx, requester_id, NotificationKind::Matched, recipient_id)
            .await?;
    } else {
        notifications::record(&mut tx, requester_id, NotificationKind::MatchDenied, recipient_id)
            .await?;
    }

    tx.commit().await?;

    Ok(())
}

#[derive(Deserialize)]
pub(crate) struct MatchBody {
    #[serde(rename = "targetUserId")]
    target_user_id: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn send(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Json(MatchBody { target_user_id }): Json<MatchBody>,
) -> AppResult<Response> {
    send_friend_request(&db_pool, &auth.id, &target_user_id).await?;

    Ok(Json(json!({
        "status": "success",
        "message": "Match request sent",
    }))
    .into_response())
}

#[derive(Deserialize)]
pub(crate) struct RespondBody {
    #[serde(rename = "requesterId")]
    requester_id: String,
    accept: bool,
}

#[debug_handler(state = AppState)]
pub(crate) async fn respond(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Json(RespondBody {
        requester_id,
        accept,
    }): Json<RespondBody>,
) -> AppResult<Response> {
    respond_to_friend_request(&db_pool, &auth.id, &requester_id, accept).await?;

    let message = if accept {
        "match accepted"
    } else {
        "match declined"
    };

    Ok(Json(json!({
        "status": "success",
        "message": message,
    }))
    .into_response())
}

/// GET /people/match: everyone with an unanswered request to the caller.
#[debug_handler(state = AppState)]
pub(crate) async fn pending(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
) -> AppResult<Response> {
    let requesters: Vec<Profile> = sqlx::query_as(
        "SELECT p.* FROM profiles p JOIN friend_requests r ON r.requester_id = p.user_id \
         WHERE r.target_id=?",
    )
    .bind(&auth.id)
    .fetch_all(&db_pool)
    .await?;

    let matches: Vec<Profile> = requesters.into_iter().map(Profile::redacted).collect();

    Ok(Json(json!({
        "status": "success",
        "matches": matches,
    }))
    .into_response())
}
