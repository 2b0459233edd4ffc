//! Test helpers for integration tests
//!
//! Builds the full Axum application over an in-memory SQLite database and
//! drives it with `tower::ServiceExt::oneshot`, so no network or external
//! services are involved.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use batepapo_api::{create_app, state::AppState};
use batepapo_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, PresenceConfig, ServerConfig,
};
use batepapo_db::{create_memory_pool, DbPool, SqliteMessageRepository, SqliteParticipantRepository};
use batepapo_service::{PresenceSweeper, ServiceContext, ServiceContextBuilder};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test application wrapping the router and its service context
///
/// The context is exposed so tests can reach behind the API, e.g. to
/// backdate a participant's heartbeat before a sweep.
pub struct TestApp {
    app: Router,
    ctx: ServiceContext,
    pool: DbPool,
    presence_config: PresenceConfig,
}

impl TestApp {
    /// Build a fresh application over an in-memory database
    pub async fn spawn() -> Result<Self> {
        let config = test_config();
        let presence_config = config.presence.clone();

        let pool = create_memory_pool().await?;
        let ctx = ServiceContextBuilder::new()
            .participant_repo(Arc::new(SqliteParticipantRepository::new(pool.clone())))
            .message_repo(Arc::new(SqliteMessageRepository::new(pool.clone())))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build context: {e}"))?;

        let state = AppState::new(ctx.clone(), pool.clone(), config);
        let app = create_app(state);

        Ok(Self {
            app,
            ctx,
            pool,
            presence_config,
        })
    }

    /// Get the service context backing the application
    pub fn ctx(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Get the database pool backing the application
    ///
    /// Closing it lets tests simulate an unavailable store.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Build a presence sweeper over the application's store
    pub fn sweeper(&self) -> PresenceSweeper {
        PresenceSweeper::new(self.ctx.clone(), &self.presence_config)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response<Body>> {
        let request = Request::builder().uri(path).body(Body::empty())?;
        Ok(self.app.clone().oneshot(request).await?)
    }

    /// Make a GET request with a `User` header
    pub async fn get_as(&self, path: &str, user: &str) -> Result<Response<Body>> {
        let request = Request::builder()
            .uri(path)
            .header("User", user)
            .body(Body::empty())?;
        Ok(self.app.clone().oneshot(request).await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Response<Body>> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;
        Ok(self.app.clone().oneshot(request).await?)
    }

    /// Make a POST request with a JSON body and a `User` header
    pub async fn post_json_as(
        &self,
        path: &str,
        user: &str,
        body: &Value,
    ) -> Result<Response<Body>> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("User", user)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;
        Ok(self.app.clone().oneshot(request).await?)
    }

    /// Make an empty-body POST request with a `User` header
    pub async fn post_as(&self, path: &str, user: &str) -> Result<Response<Body>> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("User", user)
            .body(Body::empty())?;
        Ok(self.app.clone().oneshot(request).await?)
    }

    /// Register a participant, asserting success
    pub async fn register(&self, name: &str) -> Result<()> {
        let response = self.post_json("/participants", &json!({ "name": name })).await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        Ok(())
    }
}

/// Create a test configuration
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "batepapo".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        presence: PresenceConfig {
            inactivity_threshold_secs: 10,
            sweep_interval_secs: 15,
        },
        cors: CorsConfig::default(),
    }
}

/// Parse a response body as JSON, asserting the expected status first
pub async fn assert_json(response: Response<Body>, expected_status: StatusCode) -> Result<Value> {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {expected_status}, got {status}. Body: {}",
            String::from_utf8_lossy(&bytes)
        );
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Assert response status without parsing the body
pub async fn assert_status(response: Response<Body>, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        anyhow::bail!(
            "Expected status {expected_status}, got {status}. Body: {}",
            String::from_utf8_lossy(&bytes)
        );
    }
    Ok(())
}
