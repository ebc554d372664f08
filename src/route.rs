use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>, cors_origin: &str) -> Router {
    // Allow the web client's origin to call the API from the browser
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    Router::new()
        .route("/todos", get(get_todos).post(create_todo))
        .route("/todos/:id", patch(update_todo).delete(delete_todo))
        .route("/todos/:id/toggle", post(toggle_todo))
        .route("/", get(health_checker_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
