use sqlx::SqlitePool;

use crate::db::Profile;

pub(crate) async fn fetch_profile(
    db_pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Option<Profile>> {
    sqlx::query_as("SELECT * FROM profiles WHERE user_id=?")
        .bind(user_id)
        .fetch_optional(db_pool)
        .await
}

pub(crate) async fn profile_exists(db_pool: &SqlitePool, user_id: &str) -> sqlx::Result<bool> {
    Ok(sqlx::query("SELECT 1 FROM profiles WHERE user_id=?")
        .bind(user_id)
        .fetch_optional(db_pool)
        .await?
        .is_some())
}
