use reqwest::Client;
use smslog::{app, InjectableServices};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

pub async fn post_form(
    path: &str,
    form_body: &str,
    services: InjectableServices,
) -> Result<reqwest::Response, reqwest::Error> {
    let app_address = spawn_app(services).await.address;

    let client = Client::new();
    let url = format!("{}{}", app_address, path);

    client
        .post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body.to_string())
        .send()
        .await
}

async fn spawn_app(services: InjectableServices) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app(services).await.into_make_service())
            .await
            .unwrap();
    });

    TestApp { address }
}
