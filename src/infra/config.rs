use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    /// Postgres connection string. Contains credentials, never log it.
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    /// Browser origin allowed to post the signup form.
    pub cors_origin: HeaderValue,
    pub db_max_connections: u32,
    /// Destination of the JSON log layer.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString = SecretString::new(get_env::<String>("DATABASE_URL").into());

        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            database_url,
            bind_addr,
            cors_origin,
            db_max_connections,
            log_file,
        }
    }
}
