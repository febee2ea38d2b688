use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::new::ProfileBody;

#[debug_handler(state = AppState)]
pub(crate) async fn edit_profile(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Json(body): Json<ProfileBody>,
) -> AppResult<Response> {
    let updated = sqlx::query(
        "UPDATE profiles SET username=?,description=?,date_of_birth=?,year=?,major=?,college=?,classes=?,hobby=?,music_preference=?,fav_artists=?,contact=? \
         WHERE user_id=?",
    )
    .bind(&body.username)
    .bind(&body.description)
    .bind(&body.date_of_birth)
    .bind(&body.year)
    .bind(&body.major)
    .bind(&body.college)
    .bind(&body.classes)
    .bind(&body.hobby)
    .bind(&body.music_preference)
    .bind(&body.fav_artists)
    .bind(&body.contact)
    .bind(&auth.id)
    .execute(&db_pool)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(AppError::ProfileNotFound);
    }

    Ok(Json(json!({
        "status": "success",
        "message": "profile updated",
    }))
    .into_response())
}
