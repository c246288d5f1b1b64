use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::services::{
    CatalogMovieService, MovieService, ReviewService, StaticReviewService,
};

/// Everything the handlers and CLI commands need, built once at startup.
///
/// The catalog and reviews are immutable after loading, so the services are
/// plain `Arc`s with no locking anywhere.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,
    pub movie_service: Arc<dyn MovieService>,
    pub review_service: Arc<dyn ReviewService>,
}

impl SharedState {
    /// Load the catalog and reviews named by `config` and wire the services
    /// over them. Never fails: a broken data source leaves the matching
    /// service empty and logs a warning.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let catalog = Arc::new(Catalog::load(config.catalog.data_path()));
        info!(movies = catalog.len(), "Movie catalog ready");

        let movie_service: Arc<dyn MovieService> =
            Arc::new(CatalogMovieService::new(catalog));
        let review_service: Arc<dyn ReviewService> =
            Arc::new(StaticReviewService::load(config.catalog.reviews_path()));

        Self {
            config: Arc::new(config),
            movie_service,
            review_service,
        }
    }

    /// Wire the state over caller-supplied services. Used by tests to swap
    /// in fixture implementations.
    #[must_use]
    pub fn with_services(
        config: Config,
        movie_service: Arc<dyn MovieService>,
        review_service: Arc<dyn ReviewService>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            movie_service,
            review_service,
        }
    }
}
