use sqlx::SqlitePool;

pub async fn seed_profile(pool: &SqlitePool, user_id: &str, username: &str) {
    sqlx::query(
        "INSERT INTO profiles (user_id,username,description,date_of_birth,year,major,college,classes,hobby,music_preference,fav_artists,contact) \
         VALUES (?,?,'','2003-05-14','Sophomore','CS','Engineering','CIS 1200','climbing','indie rock','Big Thief',?)",
    )
    .bind(user_id)
    .bind(username)
    .bind(format!("{username}@example.edu"))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_event(pool: &SqlitePool, id: &str, name: &str, date: &str) {
    sqlx::query(
        "INSERT INTO events (id,event_name,description,event_date,location,price_estimate,cover_photo) \
         VALUES (?,?,'',?,'Hall A',10,'')",
    )
    .bind(id)
    .bind(name)
    .bind(date)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_registration(pool: &SqlitePool, user_id: &str, event_id: &str) {
    sqlx::query("INSERT INTO registrations (user_id,event_id) VALUES (?,?)")
        .bind(user_id)
        .bind(event_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count(pool: &SqlitePool, sql: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(sql).fetch_one(pool).await.unwrap();
    n
}
