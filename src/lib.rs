pub mod client;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod route;
pub mod schema;

use std::sync::Arc;

use sqlx::{Pool, Sqlite};

use crate::clock::Clock;

// Struct representing the application state
pub struct AppState {
    pub db: Pool<Sqlite>,
    pub clock: Arc<dyn Clock>,
}
