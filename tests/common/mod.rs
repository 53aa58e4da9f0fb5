#![allow(dead_code)]

use std::sync::Once;

use linkshelf::handlers::AuthResponse;
use serde_json::{Value, json};
use sqlx::PgPool;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("linkshelf=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random local port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(test_db_pool: PgPool) -> String {
    dotenvy::from_filename_override("tests/data/.test.env").unwrap();
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = linkshelf::app(test_db_pool);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Creates an account through the signup endpoint.
pub async fn signup_user(client: &reqwest::Client, address: &str, email: &str, password: &str) {
    let response = client
        .post(format!("{address}/api/auth/signup"))
        .json(&json!({
            "email": email,
            "password": password,
            "confirm_password": password
        }))
        .send()
        .await
        .expect("Failed to sign up");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
}

/// Logs in and returns the full token pair response.
pub async fn login_user(
    client: &reqwest::Client,
    address: &str,
    identifier: &str,
    password: &str,
) -> AuthResponse {
    let response = client
        .post(format!("{address}/api/auth/login"))
        .json(&json!({
            "identifier": identifier,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    response.json().await.expect("Failed to parse login response")
}

/// Signs up a fresh account and returns an access token for it.
pub async fn get_access_token(
    client: &reqwest::Client,
    address: &str,
    email: &str,
    password: &str,
) -> String {
    signup_user(client, address, email, password).await;
    login_user(client, address, email, password)
        .await
        .access_token
}

/// Creates a bookmark for the token's owner and returns the response body.
pub async fn create_bookmark(
    client: &reqwest::Client,
    address: &str,
    access_token: &str,
    title: &str,
    url: &str,
) -> Value {
    let response = client
        .post(format!("{address}/api/bookmarks"))
        .header("Authorization", format!("Bearer {access_token}"))
        .json(&json!({"title": title, "url": url}))
        .send()
        .await
        .expect("Failed to create bookmark");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    response.json().await.expect("Failed to parse bookmark")
}
