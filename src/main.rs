use std::env;

use linkshelf::app;
use linkshelf::utils::telemetry::init_telemetry;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_telemetry("linkshelf");

    let database_url =
        env::var("DATABASE_URL").expect("Env variable `DATABASE_URL` should be set");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    let port = env::var("APP_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let app = app(db_pool);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind server address");
    info!(port, "Server started");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server crashed");
}
