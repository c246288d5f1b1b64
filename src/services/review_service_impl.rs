//! Static, load-once implementation of [`ReviewService`].

use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::catalog::{REVIEWS_FILE, read_source};
use crate::models::{MovieId, Review};

use super::review_service::ReviewService;

/// Reviews held in memory for the lifetime of the process. Loaded from a
/// JSON file or the embedded `data/reviews.json`, and like the catalog it
/// degrades to empty instead of failing startup.
pub struct StaticReviewService {
    reviews: Vec<Review>,
}

impl StaticReviewService {
    #[must_use]
    pub const fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Load reviews, falling back to none when the source is missing or
    /// malformed. The failure is logged, never propagated.
    #[must_use]
    pub fn load(reviews_file: Option<&Path>) -> Self {
        match try_load_reviews(reviews_file) {
            Ok(reviews) => {
                debug!(reviews = reviews.len(), "Reviews loaded");
                Self::new(reviews)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load reviews, continuing without any");
                Self::new(Vec::new())
            }
        }
    }
}

impl ReviewService for StaticReviewService {
    fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect()
    }

    fn total_reviews(&self) -> usize {
        self.reviews.len()
    }
}

fn try_load_reviews(reviews_file: Option<&Path>) -> anyhow::Result<Vec<Review>> {
    let raw = read_source(reviews_file, REVIEWS_FILE)?;
    let reviews: Vec<Review> =
        serde_json::from_str(&raw).context("Failed to parse reviews document")?;
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn review(movie_id: MovieId, reviewer: &str, rating: u8) -> Review {
        Review {
            movie_id,
            reviewer: reviewer.to_string(),
            rating,
            comment: "A comment.".to_string(),
            posted_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn filters_reviews_by_movie() {
        let svc = StaticReviewService::new(vec![
            review(1, "Ann", 5),
            review(2, "Ben", 3),
            review(1, "Cat", 4),
        ]);

        let for_one = svc.reviews_for_movie(1);
        assert_eq!(for_one.len(), 2);
        assert_eq!(for_one[0].reviewer, "Ann");
        assert_eq!(for_one[1].reviewer, "Cat");
        assert!(svc.reviews_for_movie(99).is_empty());
        assert_eq!(svc.total_reviews(), 3);
    }

    #[test]
    fn average_is_the_mean_of_star_ratings() {
        let svc = StaticReviewService::new(vec![
            review(1, "Ann", 5),
            review(1, "Ben", 4),
        ]);

        let average = svc.average_rating(1).unwrap();
        assert!((average - 4.5).abs() < f64::EPSILON);
        assert!(svc.average_rating(2).is_none());
    }

    #[test]
    fn missing_source_degrades_to_no_reviews() {
        let svc = StaticReviewService::load(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(svc.total_reviews(), 0);
    }

    #[test]
    fn embedded_reviews_load() {
        let svc = StaticReviewService::load(None);
        assert!(svc.total_reviews() > 0);
        assert!(!svc.reviews_for_movie(1).is_empty());
    }
}
