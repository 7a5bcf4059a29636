use std::env;
use std::time::Duration;

use serde::Deserialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::core::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            // mode=rwc creates the database file on first run
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:menucraft.db?mode=rwc".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_MAX_CONNECTIONS".to_string())
                })?,
        })
    }

    /// Create the SQLite connection pool shared by all requests
    pub async fn create_pool(&self) -> Result<SqlitePool> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}
