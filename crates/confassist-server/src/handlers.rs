//! Request handlers.

use axum::extract::State;
use axum::response::Json;

use confassist_core::config::FeatureStatus;
use confassist_core::constants::VERSION;
use confassist_core::errors::{ServiceError, ServiceResult};
use confassist_core::models::api::{
    HealthCheckResponse, KeywordSuggestionRequest, KeywordSuggestionResponse, PolishRequest,
    PolishResponse, ReviewerSummaryRequest, ReviewerSummaryResponse, SimilarityRequest,
    SimilarityResponse, SpellCheckRequest, SpellCheckResponse,
};
use confassist_service::AssistRuntime;

use crate::{ApiError, AppState};

/// Run a service call on the blocking pool.
async fn run_blocking<T, F>(state: AppState, op: F) -> Result<Json<T>, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&AssistRuntime) -> ServiceResult<T> + Send + 'static,
{
    let runtime = state.runtime.clone();
    let result = tokio::task::spawn_blocking(move || op(&runtime))
        .await
        .map_err(|e| ServiceError::Internal {
            message: format!("worker task failed: {e}"),
        })?;
    Ok(Json(result?))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let config = &state.runtime.config;
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: config.service.effective_name().to_string(),
        version: VERSION.to_string(),
        features_enabled: state.runtime.feature_status(),
    })
}

pub async fn features(State(state): State<AppState>) -> Json<FeatureStatus> {
    Json(state.runtime.feature_status())
}

pub async fn spellcheck(
    State(state): State<AppState>,
    Json(request): Json<SpellCheckRequest>,
) -> Result<Json<SpellCheckResponse>, ApiError> {
    run_blocking(state, move |rt| rt.author.spellcheck(&request)).await
}

pub async fn polish(
    State(state): State<AppState>,
    Json(request): Json<PolishRequest>,
) -> Result<Json<PolishResponse>, ApiError> {
    run_blocking(state, move |rt| rt.author.polish(&request)).await
}

pub async fn keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordSuggestionRequest>,
) -> Result<Json<KeywordSuggestionResponse>, ApiError> {
    run_blocking(state, move |rt| rt.author.suggest_keywords(&request)).await
}

pub async fn summary(
    State(state): State<AppState>,
    Json(request): Json<ReviewerSummaryRequest>,
) -> Result<Json<ReviewerSummaryResponse>, ApiError> {
    run_blocking(state, move |rt| rt.reviewer.summarize(&request)).await
}

pub async fn similarity(
    State(state): State<AppState>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    run_blocking(state, move |rt| rt.reviewer.similarity(&request)).await
}
