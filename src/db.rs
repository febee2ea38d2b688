use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Social-facing record for a user, distinct from the login-only `users` row.
///
/// Friendship, pending requests and event membership live in their own
/// relations (`friends`, `friend_requests`, `registrations`) rather than on
/// the profile row itself.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub description: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub year: String,
    pub major: String,
    pub college: String,
    pub classes: String,
    pub hobby: String,
    #[serde(rename = "musicPreference")]
    pub music_preference: String,
    #[serde(rename = "favArtists")]
    pub fav_artists: String,
    // contact details are friends-only, so serialization may blank them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Profile {
    pub fn redacted(mut self) -> Self {
        self.contact = None;
        self
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: String,
    #[serde(rename = "eventName")]
    pub event_name: String,
    pub description: String,
    #[serde(rename = "eventDate", with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub location: String,
    #[serde(rename = "priceEstimate")]
    pub price_estimate: f64,
    #[serde(rename = "coverPhoto")]
    pub cover_photo: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    MatchRequest,
    Matched,
    MatchDenied,
}

/// Directed notice generated by the match workflow. Insert/delete only, no
/// update-in-place.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(rename = "targetId")]
    pub target_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub is_superuser: bool,
}
