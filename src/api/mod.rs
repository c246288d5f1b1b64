use axum::{Router, http::HeaderValue, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{MovieService, ReviewService};
use crate::state::SharedState;

mod assets;
mod error;
pub mod icons;
mod movies;
mod observability;
mod pages;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
    pub start_time: std::time::Instant,
    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn movie_service(&self) -> &Arc<dyn MovieService> {
        &self.shared.movie_service
    }

    #[must_use]
    pub fn review_service(&self) -> &Arc<dyn ReviewService> {
        &self.shared.review_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

#[must_use]
pub fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let shared = Arc::new(SharedState::from_config(config));
    create_app_state(shared, prometheus_handle)
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/movies", get(movies::list_movies))
        .route("/movies/search", get(movies::search_movies))
        .route("/movies/genres", get(movies::list_genres))
        .route("/movies/{id}", get(movies::get_movie))
        .route("/movies/{id}/reviews", get(movies::list_reviews))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state.clone());

    let pages_router = Router::new()
        .route("/", get(pages::home))
        .route("/movies", get(pages::movies_page))
        .route("/movies/{id}/details", get(pages::movie_details_page))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .merge(pages_router)
        .route("/assets/{*path}", get(assets::serve_asset))
        .fallback(pages::not_found_page)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
}
