//! # confassist-server
//!
//! axum routes over [`AssistRuntime`]. Service calls are synchronous and may
//! wait on the external assistant, so every handler runs its call on the
//! blocking pool.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use confassist_service::AssistRuntime;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<AssistRuntime>,
}

impl AppState {
    pub fn new(runtime: AssistRuntime) -> Self {
        Self {
            runtime: Arc::new(runtime),
        }
    }
}

/// All routes, with permissive CORS for the conference front end.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/api/ai/features", get(handlers::features))
        .route("/api/ai/author/spellcheck", post(handlers::spellcheck))
        .route("/api/ai/author/polish", post(handlers::polish))
        .route("/api/ai/author/keywords", post(handlers::keywords))
        .route("/api/ai/reviewer/summary", post(handlers::summary))
        .route("/api/ai/reviewer/similarity", post(handlers::similarity))
        .layer(cors)
        .with_state(state)
}
