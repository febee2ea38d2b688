mod common;

use concertbuds::AppError;
use concertbuds::people::{
    recommendations, respond_to_friend_request, send_friend_request, view_profile,
};
use sqlx::SqlitePool;

async fn notices(pool: &SqlitePool) -> Vec<(String, String, String)> {
    sqlx::query_as("SELECT user_id,kind,target_id FROM notifications ORDER BY date")
        .fetch_all(pool)
        .await
        .unwrap()
}

fn notice(user: &str, kind: &str, target: &str) -> (String, String, String) {
    (user.to_owned(), kind.to_owned(), target.to_owned())
}

#[sqlx::test]
async fn ranks_by_shared_events(pool: SqlitePool) {
    for (id, name) in [("u1", "ada"), ("u2", "bea"), ("u3", "cal"), ("u4", "dot")] {
        common::seed_profile(&pool, id, name).await;
    }
    for id in ["e1", "e2", "e3"] {
        common::seed_event(&pool, id, id, "2026-09-01T19:00:00Z").await;
    }

    // u1 {e1,e2}; u2 {e2,e3} overlaps 1/3; u4 {e1,e2} is identical; u3 nothing
    for (user, event) in [
        ("u1", "e1"),
        ("u1", "e2"),
        ("u2", "e2"),
        ("u2", "e3"),
        ("u4", "e1"),
        ("u4", "e2"),
    ] {
        common::seed_registration(&pool, user, event).await;
    }

    let recs = recommendations(&pool, "u1").await.unwrap();
    let order: Vec<&str> = recs.iter().map(|r| r.profile.user_id.as_str()).collect();
    assert_eq!(order, ["u4", "u2", "u3"]);
}

#[sqlx::test]
async fn excludes_self_friends_and_already_requested(pool: SqlitePool) {
    for (id, name) in [("u1", "ada"), ("u2", "bea"), ("u3", "cal"), ("u4", "dot")] {
        common::seed_profile(&pool, id, name).await;
    }

    // u2 becomes a friend, u3 has an unanswered request from u1
    send_friend_request(&pool, "u1", "u2").await.unwrap();
    respond_to_friend_request(&pool, "u2", "u1", true).await.unwrap();
    send_friend_request(&pool, "u1", "u3").await.unwrap();

    let recs = recommendations(&pool, "u1").await.unwrap();
    let ids: Vec<&str> = recs.iter().map(|r| r.profile.user_id.as_str()).collect();
    assert_eq!(ids, ["u4"]);
}

#[sqlx::test]
async fn expands_events_and_drops_stale_ids(pool: SqlitePool) {
    common::seed_profile(&pool, "u1", "ada").await;
    common::seed_profile(&pool, "u2", "bea").await;
    common::seed_event(&pool, "e1", "Open Mic", "2026-09-01T19:00:00Z").await;

    common::seed_registration(&pool, "u1", "e1").await;
    common::seed_registration(&pool, "u2", "e1").await;
    // id that no longer resolves to an event
    common::seed_registration(&pool, "u2", "gone").await;

    let recs = recommendations(&pool, "u1").await.unwrap();
    assert_eq!(recs.len(), 1);

    let events = &recs[0].event_registered;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.id, "e1");
    assert_eq!(events[0].attendee, 2);
    // registered is about the requesting user, not the candidate
    assert!(events[0].registered);

    // contact never leaks into recommendations
    assert!(recs[0].profile.contact.is_none());
}

#[sqlx::test]
async fn recommendations_require_profile(pool: SqlitePool) {
    let err = recommendations(&pool, "ghost").await.unwrap_err();
    assert!(matches!(err, AppError::ProfileNotFound));
}

#[sqlx::test]
async fn duplicate_request_is_rejected(pool: SqlitePool) {
    common::seed_profile(&pool, "a", "ada").await;
    common::seed_profile(&pool, "b", "bea").await;

    send_friend_request(&pool, "a", "b").await.unwrap();
    let err = send_friend_request(&pool, "a", "b").await.unwrap_err();
    assert!(matches!(err, AppError::FriendRequestAlreadyMade));
}

#[sqlx::test]
async fn request_checks_both_profiles(pool: SqlitePool) {
    common::seed_profile(&pool, "a", "ada").await;

    let err = send_friend_request(&pool, "ghost", "a").await.unwrap_err();
    assert!(matches!(err, AppError::ProfileNotFound));

    let err = send_friend_request(&pool, "a", "ghost").await.unwrap_err();
    assert!(matches!(err, AppError::TargetProfileNotFound));
}

#[sqlx::test]
async fn accept_makes_friendship_mutual(pool: SqlitePool) {
    common::seed_profile(&pool, "a", "ada").await;
    common::seed_profile(&pool, "b", "bea").await;

    send_friend_request(&pool, "a", "b").await.unwrap();
    assert_eq!(notices(&pool).await, [notice("b", "MATCH_REQUEST", "a")]);

    respond_to_friend_request(&pool, "b", "a", true).await.unwrap();

    assert_eq!(
        common::count(&pool, "SELECT COUNT(*) FROM friends WHERE user_id='a' AND friend_id='b'").await,
        1
    );
    assert_eq!(
        common::count(&pool, "SELECT COUNT(*) FROM friends WHERE user_id='b' AND friend_id='a'").await,
        1
    );
    assert_eq!(common::count(&pool, "SELECT COUNT(*) FROM friend_requests").await, 0);

    // request notice replaced by one MATCHED notice per side
    let mut outcome = notices(&pool).await;
    outcome.sort();
    assert_eq!(
        outcome,
        [notice("a", "MATCHED", "b"), notice("b", "MATCHED", "a")]
    );
}

#[sqlx::test]
async fn reject_leaves_no_friendship(pool: SqlitePool) {
    common::seed_profile(&pool, "a", "ada").await;
    common::seed_profile(&pool, "b", "bea").await;

    send_friend_request(&pool, "a", "b").await.unwrap();
    respond_to_friend_request(&pool, "b", "a", false).await.unwrap();

    assert_eq!(common::count(&pool, "SELECT COUNT(*) FROM friends").await, 0);
    assert_eq!(common::count(&pool, "SELECT COUNT(*) FROM friend_requests").await, 0);
    assert_eq!(notices(&pool).await, [notice("a", "MATCH_DENIED", "b")]);

    // the request is settled, answering again finds nothing
    let err = respond_to_friend_request(&pool, "b", "a", false).await.unwrap_err();
    assert!(matches!(err, AppError::FriendRequestNotFound));
}

#[sqlx::test]
async fn mutual_requests_need_two_answers(pool: SqlitePool) {
    common::seed_profile(&pool, "a", "ada").await;
    common::seed_profile(&pool, "b", "bea").await;

    send_friend_request(&pool, "a", "b").await.unwrap();
    send_friend_request(&pool, "b", "a").await.unwrap();

    // neither request has been answered, so nobody is friends yet
    assert_eq!(common::count(&pool, "SELECT COUNT(*) FROM friends").await, 0);
    assert_eq!(common::count(&pool, "SELECT COUNT(*) FROM friend_requests").await, 2);
}

#[sqlx::test]
async fn view_redacts_for_strangers(pool: SqlitePool) {
    common::seed_profile(&pool, "p", "ada").await;
    common::seed_profile(&pool, "r", "bea").await;
    common::seed_event(&pool, "e1", "Open Mic", "2026-09-01T19:00:00Z").await;
    common::seed_registration(&pool, "p", "e1").await;
    common::seed_registration(&pool, "p", "gone").await;

    let view = view_profile(&pool, "p", "r").await.unwrap().unwrap();
    assert!(view.profile.contact.is_none());
    assert_eq!(view.event_registered, ["e1", "gone"]);
    assert_eq!(view.event_details.len(), 1);
    assert_eq!(view.event_details[0].id, "e1");

    // pending-request state never appears in the serialized view
    let serialized = serde_json::to_value(&view).unwrap();
    assert!(serialized.get("friend_requested").is_none());
    assert!(serialized.get("contact").is_none());
}

#[sqlx::test]
async fn view_shows_contact_to_friends(pool: SqlitePool) {
    common::seed_profile(&pool, "p", "ada").await;
    common::seed_profile(&pool, "r", "bea").await;

    send_friend_request(&pool, "r", "p").await.unwrap();
    respond_to_friend_request(&pool, "p", "r", true).await.unwrap();

    let view = view_profile(&pool, "p", "r").await.unwrap().unwrap();
    assert_eq!(view.profile.contact.as_deref(), Some("ada@example.edu"));
    assert_eq!(view.friend, ["r"]);
}

#[sqlx::test]
async fn view_of_missing_profile_is_none(pool: SqlitePool) {
    common::seed_profile(&pool, "r", "bea").await;

    let view = view_profile(&pool, "ghost", "r").await.unwrap();
    assert!(view.is_none());
}
