//! Catalog-backed implementation of [`MovieService`].

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{MovieId, MovieRecord};

use super::movie_service::{MovieQuery, MovieService, is_blank};

/// Queries served straight from the in-memory [`Catalog`]. Purely
/// read-only, so it is freely shared across threads without locking.
pub struct CatalogMovieService {
    catalog: Arc<Catalog>,
}

impl CatalogMovieService {
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl MovieService for CatalogMovieService {
    fn all_movies(&self) -> Vec<MovieRecord> {
        self.catalog.all().to_vec()
    }

    fn movie_by_id(&self, id: MovieId) -> Option<MovieRecord> {
        self.catalog.get(id).cloned()
    }

    fn search(&self, query: &MovieQuery) -> Vec<MovieRecord> {
        // A positive id settles the search by itself. Name and genre do not
        // re-filter the result, even when they would not match it.
        if let Some(id) = query.id
            && id > 0
        {
            let results: Vec<MovieRecord> = self.catalog.get(id).cloned().into_iter().collect();
            debug!(id, matched = results.len(), "Search resolved by id");
            return results;
        }

        let name = effective_term(query.name.as_deref());
        let genre = effective_term(query.genre.as_deref());

        let mut results: Vec<&MovieRecord> = self.catalog.all().iter().collect();
        if let Some(term) = &name {
            results.retain(|m| m.title.to_lowercase().contains(term));
        }
        if let Some(term) = &genre {
            results.retain(|m| m.genre.to_lowercase().contains(term));
        }

        debug!(
            name = name.as_deref(),
            genre = genre.as_deref(),
            matched = results.len(),
            "Search ran over the catalog"
        );
        results.into_iter().cloned().collect()
    }

    fn all_genres(&self) -> Vec<String> {
        self.catalog.genres()
    }
}

/// Trim a text criterion and lowercase it for matching. Blank criteria
/// collapse to `None` and are skipped entirely.
fn effective_term(raw: Option<&str>) -> Option<String> {
    if is_blank(raw) {
        return None;
    }
    raw.map(|s| s.trim().to_lowercase())
}
