use axum::{
    Json, debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::{AppResult, AppState, auth::AuthUser};

#[derive(Deserialize)]
pub(crate) struct NewEventBody {
    #[serde(rename = "eventName")]
    event_name: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "eventDate", with = "time::serde::rfc3339")]
    event_date: OffsetDateTime,
    location: String,
    #[serde(rename = "priceEstimate", default)]
    price_estimate: f64,
    #[serde(rename = "coverPhoto", default)]
    cover_photo: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_event(
    State(db_pool): State<SqlitePool>,
    _auth: AuthUser,
    Json(body): Json<NewEventBody>,
) -> AppResult<Response> {
    let id = Uuid::now_v7().to_string();

    sqlx::query(
        "INSERT INTO events (id,event_name,description,event_date,location,price_estimate,cover_photo) \
         VALUES (?,?,?,?,?,?,?)",
    )
    .bind(&id)
    .bind(&body.event_name)
    .bind(&body.description)
    // normalized to UTC so the stored text sorts chronologically
    .bind(body.event_date.to_offset(UtcOffset::UTC))
    .bind(&body.location)
    .bind(body.price_estimate)
    .bind(&body.cover_photo)
    .execute(&db_pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "id": id,
            "message": "Event created successfully",
        })),
    )
        .into_response())
}
