use axum::{
    Json, debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{AppError, AppResult, AppState, auth::AuthUser};

use super::store;

#[derive(Deserialize)]
pub(crate) struct ProfileBody {
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(rename = "dateOfBirth")]
    pub(crate) date_of_birth: String,
    pub(crate) year: String,
    pub(crate) major: String,
    pub(crate) college: String,
    pub(crate) classes: String,
    pub(crate) hobby: String,
    #[serde(rename = "musicPreference")]
    pub(crate) music_preference: String,
    #[serde(rename = "favArtists")]
    pub(crate) fav_artists: String,
    pub(crate) contact: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_profile(
    State(db_pool): State<SqlitePool>,
    auth: AuthUser,
    Json(body): Json<ProfileBody>,
) -> AppResult<Response> {
    if store::profile_exists(&db_pool, &auth.id).await? {
        return Err(AppError::ProfileAlreadyExists);
    }

    sqlx::query(
        "INSERT INTO profiles (user_id,username,description,date_of_birth,year,major,college,classes,hobby,music_preference,fav_artists,contact) \
         VALUES (?,?,?,?,?,?,?,?,?,?,?,?)",
    )
    .bind(&auth.id)
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
    .execute(&db_pool)
    .await?;

    Ok(Json(json!({
        "status": "success",
        "message": "profile created",
    }))
    .into_response())
}
