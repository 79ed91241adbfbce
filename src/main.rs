use smslog::{
    app,
    config::{ConfigProvider, EnvVarProvider},
    InjectableServices,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let env_config_provider = EnvVarProvider::new(env::vars().collect());
    let config = env_config_provider.get_config();

    let db = PgPoolOptions::new()
        .connect(config.database_url.as_str())
        .await
        .expect("Failed to connect to database");

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.listen_port))
        .await
        .expect("Failed to bind listen port");

    log::info!("Listening on port {}", config.listen_port);

    axum::serve(listener, app(InjectableServices { db }).await)
        .await
        .expect("Failed to serve app");
}
