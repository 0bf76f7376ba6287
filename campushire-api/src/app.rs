//! Application state and router builder
//!
//! Defines the shared application state and builds the axum router with all
//! routes and middleware.
//!
//! # Route map
//!
//! ```text
//! /
//! ├── /auth/
//! │   ├── POST /login                    # Admin authentication
//! │   ├── GET  /deleteAnonymousUser      # Unbounded anonymous purge
//! │   └── GET  /deleteAnonymousUsers     # Paginated anonymous purge
//! ├── /dashboard/
//! │   ├── GET  /profile/:id              # Admin profile
//! │   ├── PUT  /profile/:id              # Profile update + optional image
//! │   ├── GET  /user-chart               # Faculty counts
//! │   ├── GET  /job-chart                # Job counts
//! │   └── GET  /employer-job-chart       # Growth series
//! ├── /users/      + /users/:id          # Admin CRUD
//! ├── /faculty/    + /faculty/:id        # Faculty CRUD
//! ├── /employers/  + /employers/:id      # Employer CRUD
//! └── /job/        + /job/:id            # Job CRUD
//! ```

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Config;
use crate::routes;

/// Shared application state
///
/// Cloned into each request handler via axum's `State` extractor. The config
/// is immutable after startup; the pool is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }

    /// Gets the image upload directory
    pub fn upload_dir(&self) -> &str {
        &self.config.api.upload_dir
    }
}

/// Builds the complete axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/login", axum::routing::post(routes::auth::login))
        .route(
            "/deleteAnonymousUser",
            get(routes::auth::delete_anonymous_user),
        )
        .route(
            "/deleteAnonymousUsers",
            get(routes::auth::delete_anonymous_users),
        );

    let dashboard_routes = Router::new()
        .route(
            "/profile/:id",
            get(routes::dashboard::profile).put(routes::dashboard::update_profile),
        )
        .route("/user-chart", get(routes::dashboard::user_chart))
        .route("/job-chart", get(routes::dashboard::job_chart))
        .route(
            "/employer-job-chart",
            get(routes::dashboard::employer_job_chart),
        );

    let admin_routes = Router::new()
        .route("/", get(routes::admins::list).post(routes::admins::create))
        .route(
            "/:id",
            get(routes::admins::get_by_id)
                .put(routes::admins::update)
                .delete(routes::admins::delete),
        );

    let faculty_routes = Router::new()
        .route(
            "/",
            get(routes::faculty::list).post(routes::faculty::create),
        )
        .route(
            "/:id",
            get(routes::faculty::get_by_id)
                .put(routes::faculty::update)
                .delete(routes::faculty::delete),
        );

    let employer_routes = Router::new()
        .route(
            "/",
            get(routes::employers::list).post(routes::employers::create),
        )
        .route(
            "/:id",
            get(routes::employers::get_by_id)
                .put(routes::employers::update)
                .delete(routes::employers::delete),
        );

    let job_routes = Router::new()
        .route("/", get(routes::jobs::list).post(routes::jobs::create))
        .route(
            "/:id",
            get(routes::jobs::get_by_id)
                .put(routes::jobs::update)
                .delete(routes::jobs::delete),
        );

    let cors = build_cors(&state.config.api.cors_origin);

    Router::new()
        .nest("/auth", auth_routes)
        .nest("/dashboard", dashboard_routes)
        .nest("/users", admin_routes)
        .nest("/faculty", faculty_routes)
        .nest("/employers", employer_routes)
        .nest("/job", job_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Configures CORS for the admin console origin
///
/// "*" or an unparseable origin falls back to permissive mode (development).
fn build_cors(origin: &str) -> CorsLayer {
    match origin.parse::<HeaderValue>() {
        Ok(value) if origin != "*" => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        _ => CorsLayer::permissive(),
    }
}
