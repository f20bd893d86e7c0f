//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits.

use caredir_core::DbConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
/// Kept low for a single small gateway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a MySQL connection pool from structured credentials.
///
/// Connects eagerly: a bad host or bad credentials fail here rather than on
/// the first request, so startup can abort before the listener binds.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a MySQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    config: &DbConfig,
    max_connections: u32,
) -> Result<MySqlPool, sqlx::Error> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database.
    // Run with: DB_HOST=... DB_USER=... DB_PASSWORD=... DB_NAME=... \
    //   cargo test -p caredir-server -- --ignored

    fn config_from_env() -> DbConfig {
        DbConfig {
            host: std::env::var("DB_HOST").expect("DB_HOST required"),
            user: std::env::var("DB_USER").expect("DB_USER required"),
            password: std::env::var("DB_PASSWORD").expect("DB_PASSWORD required"),
            database: std::env::var("DB_NAME").expect("DB_NAME required"),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&config_from_env())
            .await
            .expect("pool creation failed");

        // Verify we can execute a query
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let pool = create_pool(&config_from_env())
            .await
            .expect("pool creation failed");

        // Spawn 10 concurrent tasks
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT ?")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        // All tasks should complete successfully
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
