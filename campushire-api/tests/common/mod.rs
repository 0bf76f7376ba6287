/// Common test utilities for integration tests
///
/// Two ways to build the router:
/// - [`TestContext::new`] uses a lazy pool, so request handling, extraction,
///   validation and the response envelope can be exercised without a live
///   database.
/// - [`TestContext::with_database`] connects eagerly and runs migrations;
///   it returns `None` when `DATABASE_URL` is not set so those tests are
///   skipped rather than failing.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use campushire_api::app::{build_router, AppState};
use campushire_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::Service as _;

/// Test context wrapping the assembled router and its pool
pub struct TestContext {
    pub app: axum::Router,
    pub db: PgPool,
}

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 4000,
            cors_origin: "http://localhost:3000".to_string(),
            upload_dir: std::env::temp_dir()
                .join("campushire-test-uploads")
                .display()
                .to_string(),
        },
        database: DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost/campushire_test".to_string()),
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-at-least-32-bytes".to_string(),
        },
    }
}

impl TestContext {
    /// Creates a context whose pool connects lazily, so paths that never
    /// reach the database run without one
    pub fn new() -> anyhow::Result<Self> {
        let config = test_config();

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_lazy(&config.database.url)?;

        let app = build_router(AppState::new(pool.clone(), config));

        Ok(Self { app, db: pool })
    }

    /// Creates a context over a live database with migrations applied, or
    /// `None` when `DATABASE_URL` is not set
    pub async fn with_database() -> anyhow::Result<Option<Self>> {
        if std::env::var("DATABASE_URL").is_err() {
            return Ok(None);
        }

        let config = test_config();

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;

        sqlx::migrate!("../migrations").run(&pool).await?;

        let app = build_router(AppState::new(pool.clone(), config));

        Ok(Some(Self { app, db: pool }))
    }

    /// Sends a JSON request and returns the status and parsed body
    pub async fn request_json(
        &mut self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self.app.call(builder.body(body)?).await?;
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        // Extractor rejections produce plain-text bodies; surface those as null
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        Ok((status, json))
    }
}

/// Unique suffix so parallel runs never collide on unique columns
pub fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos()
}
