//! System API endpoints.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiResponse, AppState, SystemStatus};

/// Returns service version, uptime, and catalog counts.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SystemStatus>> {
    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        movie_count: state.movie_service().all_movies().len(),
        genre_count: state.movie_service().all_genres().len(),
        review_count: state.review_service().total_reviews(),
    };

    Json(ApiResponse::success(status))
}
