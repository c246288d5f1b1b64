use serde::Serialize;

use crate::models::{MovieRecord, Review};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// The full catalog listing.
#[derive(Debug, Serialize)]
pub struct MovieListDto {
    pub count: usize,
    pub movies: Vec<MovieRecord>,
}

impl MovieListDto {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self {
            count: movies.len(),
            movies,
        }
    }
}

/// Search results with a human-readable summary line.
#[derive(Debug, Serialize)]
pub struct SearchResultsDto {
    pub message: String,
    pub count: usize,
    pub movies: Vec<MovieRecord>,
}

#[derive(Debug, Serialize)]
pub struct GenreListDto {
    pub count: usize,
    pub genres: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewListDto {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime_seconds: u64,
    pub movie_count: usize,
    pub genre_count: usize,
    pub review_count: usize,
}
