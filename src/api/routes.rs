use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{Result, AppError};
use crate::api::models::{HealthResponse, SummariseRequest, SummaryResponse};
use crate::classifier::is_url;
use crate::summarizer::summarize;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/summarise", post(summarise_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn summarise_handler(
    State(state): State<AppState>,
    Json(req): Json<SummariseRequest>,
) -> Result<Json<SummaryResponse>> {
    let start_time = Instant::now();
    let result = process_summarise_request(&state, &req).await;

    match &result {
        Ok(response) => info!(
            "Summary of {} chars produced in {:?}",
            response.summary.chars().count(),
            start_time.elapsed()
        ),
        Err(err) => warn!("Request rejected after {:?}: {}", start_time.elapsed(), err),
    }

    result.map(Json)
}

async fn process_summarise_request(state: &AppState, req: &SummariseRequest) -> Result<SummaryResponse> {
    if req.input.is_empty() {
        return Err(AppError::MissingInput);
    }

    let text = if is_url(&req.input) {
        info!("Input is a URL, fetching: {}", req.input.trim());
        match state.fetcher.fetch(&req.input).await {
            Ok(content) => content,
            Err(err) => {
                warn!("Fetch failed for {}: {}", req.input.trim(), err);
                return Err(err.into());
            }
        }
    } else {
        debug!("Input is literal text ({} chars)", req.input.chars().count());
        req.input.clone()
    };

    Ok(SummaryResponse {
        summary: summarize(&text, req.length),
    })
}
