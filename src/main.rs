use std::sync::Arc;

use axum::Server;
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axum_todo_app::{clock::SystemClock, config::Config, db, route::create_router, AppState};

// Entry point of the application
#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axum_todo_app=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env();

    // Connect to the database, creating it on first run
    let pool = match db::init(&config.database_url).await {
        Ok(pool) => {
            tracing::info!("connection to the database is successful");
            pool
        }
        Err(err) => {
            tracing::error!("failed to connect to the database: {err}");
            std::process::exit(1);
        }
    };

    // Create an Arc-wrapped instance of the application state
    let app_state = Arc::new(AppState {
        db: pool,
        clock: Arc::new(SystemClock),
    });

    let app = create_router(app_state, &config.cors_origin);

    tracing::info!("server listening on {}", config.server_addr);

    // Start the Axum server
    Server::bind(&config.server_addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
