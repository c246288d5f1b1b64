use crate::models::MovieId;

use super::ApiError;

/// Reject ids a catalog entry can never have. Used at the API boundary
/// before any query runs, the engine itself would just ignore the value.
pub fn validate_movie_id(id: MovieId) -> Result<MovieId, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid movie id: {}. Id must be a positive integer",
            id
        )));
    }
    Ok(id)
}

/// Parse a raw path or query value into a positive movie id.
pub fn parse_movie_id(raw: &str) -> Result<MovieId, ApiError> {
    let id: MovieId = raw.trim().parse().map_err(|_| {
        ApiError::validation(format!("Invalid movie id: '{}'. Id must be an integer", raw))
    })?;
    validate_movie_id(id)
}
