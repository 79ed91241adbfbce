use axum::{routing::post, Router};
use sqlx::PgPool;

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod persistence;
pub mod xml;

mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

pub struct InjectableServices {
    pub db: PgPool,
}

pub async fn app(services: InjectableServices) -> Router {
    Router::new()
        .route("/sms", post(routes::post_sms))
        .with_state(AppState { db: services.db })
}
