pub(crate) mod matching;
pub(crate) mod recommend;
pub(crate) mod view;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub use matching::{respond_to_friend_request, send_friend_request};
pub use recommend::{RecommendedProfile, recommendations};
pub use view::{ProfileView, view_profile};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people/recommendations", get(recommend::recommendations_route))
        .route("/people/match", get(matching::pending).post(matching::send))
        .route("/people/match/respond", post(matching::respond))
        .route("/people/view/{id}", get(view::view))
}
