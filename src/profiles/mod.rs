mod edit;
mod new;
mod page;

pub(crate) mod store;

use axum::{
    Router,
    routing::{get, put},
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(page::profile).post(new::new_profile))
        .route("/profile/edit", put(edit::edit_profile))
}
