mod list;
mod new;
mod page;
mod register;
mod registered;

pub mod store;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub use register::toggle_registration;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list::events).post(new::new_event))
        .route("/events/registered", get(registered::registered))
        .route("/events/register", post(register::register))
        .route("/events/{id}", get(page::event))
}
