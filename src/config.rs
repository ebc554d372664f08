use std::env;
use std::net::SocketAddr;

// Runtime configuration, read from the environment (a .env file is loaded by
// the binaries before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todo.db".to_string());

        let server_addr = env::var("SERVER_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            database_url,
            server_addr,
            cors_origin,
        }
    }
}

// Base URL the client binary talks to
pub fn api_url_from_env() -> String {
    env::var("TODO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
}
