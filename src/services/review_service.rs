//! Review lookup abstraction.

use crate::models::{MovieId, Review};

/// Read-only access to viewer reviews.
pub trait ReviewService: Send + Sync {
    /// Reviews for one movie, in document order. Unknown ids get an empty
    /// list, whether or not the movie exists is the caller's question.
    fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review>;

    /// Total number of reviews held, across all movies.
    fn total_reviews(&self) -> usize;

    /// Mean star rating for one movie, `None` when it has no reviews.
    fn average_rating(&self, movie_id: MovieId) -> Option<f64> {
        let reviews = self.reviews_for_movie(movie_id);
        if reviews.is_empty() {
            return None;
        }
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / reviews.len() as f64)
    }
}
