use axum::http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use concertbuds::{AppState, Config, app};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(&config.database_url)
        .await
        .unwrap();
    sqlx::migrate!().run(&db_pool).await.unwrap();

    // the SPA is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let bind_addr = config.bind_addr.clone();
    let app = app(AppState { db_pool, config }).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("listening on {bind_addr}");
    axum::serve(listener, app).await.unwrap();
}
