//! Movie catalog API endpoints.
//!
//! All business logic is delegated to [`MovieService`] and
//! [`ReviewService`], the handlers only validate input and shape the
//! response envelope.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::parse_movie_id;
use super::{
    ApiError, ApiResponse, AppState, GenreListDto, MovieListDto, ReviewListDto, SearchResultsDto,
};
use crate::models::{MovieId, MovieRecord};
use crate::services::MovieQuery;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    /// Taken as a raw string so a malformed value gets the same response
    /// envelope as every other rejection.
    pub id: Option<String>,
    pub genre: Option<String>,
}

/// Returns the whole catalog in its load order.
///
/// # Endpoint
/// `GET /api/movies`
pub async fn list_movies(State(state): State<Arc<AppState>>) -> Json<ApiResponse<MovieListDto>> {
    let movies = state.movie_service().all_movies();
    Json(ApiResponse::success(MovieListDto::new(movies)))
}

/// Searches the catalog by name, id, and genre.
///
/// A positive id is authoritative: when it matches, the result is that one
/// movie even if the other criteria disagree. Non-positive or malformed ids
/// are rejected with 400 before any query runs.
///
/// # Endpoint
/// `GET /api/movies/search?name=&id=&genre=`
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResultsDto>>, ApiError> {
    let id = parse_optional_id(params.id.as_deref())?;
    let query = MovieQuery::new(params.name, id, params.genre);

    let movies = state.movie_service().search(&query);
    let message = search_message(query.is_unconstrained(), movies.len());

    Ok(Json(ApiResponse::success(SearchResultsDto {
        message,
        count: movies.len(),
        movies,
    })))
}

/// Returns one movie by id.
///
/// # Endpoint
/// `GET /api/movies/{id}`
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MovieRecord>>, ApiError> {
    let id = parse_movie_id(&id)?;
    let movie = state
        .movie_service()
        .movie_by_id(id)
        .ok_or_else(|| ApiError::movie_not_found(id))?;

    Ok(Json(ApiResponse::success(movie)))
}

/// Returns the reviews for one movie in document order, with the mean rating.
///
/// The movie must exist; reviews themselves are optional and an empty list
/// is a normal answer.
///
/// # Endpoint
/// `GET /api/movies/{id}/reviews`
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReviewListDto>>, ApiError> {
    let id = parse_movie_id(&id)?;
    if state.movie_service().movie_by_id(id).is_none() {
        return Err(ApiError::movie_not_found(id));
    }

    let reviews = state.review_service().reviews_for_movie(id);
    let average_rating = state.review_service().average_rating(id);

    Ok(Json(ApiResponse::success(ReviewListDto {
        count: reviews.len(),
        average_rating,
        reviews,
    })))
}

/// Returns the distinct genres, sorted.
///
/// # Endpoint
/// `GET /api/movies/genres`
pub async fn list_genres(State(state): State<Arc<AppState>>) -> Json<ApiResponse<GenreListDto>> {
    let genres = state.movie_service().all_genres();
    Json(ApiResponse::success(GenreListDto {
        count: genres.len(),
        genres,
    }))
}

fn parse_optional_id(raw: Option<&str>) -> Result<Option<MovieId>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Ok(Some(parse_movie_id(raw)?)),
        None => Ok(None),
    }
}

pub(super) fn search_message(unconstrained: bool, count: usize) -> String {
    if unconstrained {
        "No search criteria provided, returning the full catalog.".to_string()
    } else if count == 0 {
        "No movies found matching your search criteria.".to_string()
    } else if count == 1 {
        "Found 1 movie matching your search.".to_string()
    } else {
        format!("Found {count} movies matching your search.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_id_treats_blank_as_absent() {
        assert_eq!(parse_optional_id(None).unwrap(), None);
        assert_eq!(parse_optional_id(Some("")).unwrap(), None);
        assert_eq!(parse_optional_id(Some("   ")).unwrap(), None);
        assert_eq!(parse_optional_id(Some("3")).unwrap(), Some(3));
        assert!(parse_optional_id(Some("0")).is_err());
        assert!(parse_optional_id(Some("nope")).is_err());
    }

    #[test]
    fn summary_lines_cover_every_outcome() {
        assert_eq!(
            search_message(true, 12),
            "No search criteria provided, returning the full catalog."
        );
        assert_eq!(
            search_message(false, 0),
            "No movies found matching your search criteria."
        );
        assert_eq!(search_message(false, 1), "Found 1 movie matching your search.");
        assert_eq!(search_message(false, 3), "Found 3 movies matching your search.");
    }
}
