pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod notifications;
pub mod people;
pub mod profiles;

use axum::{Router, extract::FromRef};
use sqlx::SqlitePool;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Config,
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(auth::router())
        .merge(profiles::router())
        .merge(events::router())
        .merge(people::router())
        .merge(notifications::router())
        .with_state(app_state)
}
