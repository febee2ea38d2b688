use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use sqlx::{SqliteConnection, SqlitePool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    AppResult, AppState,
    auth::AuthUser,
    db::{Notification, NotificationKind},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", get(notifications))
}

#[debug_handler(state = AppState)]
async fn notifications(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
) -> AppResult<Response> {
    let notifications = list_for_user(&db_pool, &auth.id).await?;

    Ok(Json(json!({
        "status": "success",
        "notifications": notifications,
    }))
    .into_response())
}

pub async fn list_for_user(
    db_pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Vec<Notification>> {
    sqlx::query_as(
        "SELECT user_id,kind,target_id,date FROM notifications WHERE user_id=? ORDER BY date DESC",
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await
}

pub(crate) async fn record(
    conn: &mut SqliteConnection,
    user_id: &str,
    kind: NotificationKind,
    target_id: &str,
) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO notifications (id,user_id,kind,target_id,date) VALUES (?,?,?,?,?)")
        .bind(Uuid::now_v7().to_string())
        .bind(user_id)
        .bind(kind)
        .bind(target_id)
        .bind(OffsetDateTime::now_utc())
        .execute(conn)
        .await?;

    Ok(())
}

/// Drops the pending request notice once it has been answered; the outcome
/// notice replaces it.
pub(crate) async fn clear_match_request(
    conn: &mut SqliteConnection,
    user_id: &str,
    target_id: &str,
) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM notifications WHERE user_id=? AND kind=? AND target_id=?")
        .bind(user_id)
        .bind(NotificationKind::MatchRequest)
        .bind(target_id)
        .execute(conn)
        .await?;

    Ok(())
}
