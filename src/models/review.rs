use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::movie::MovieId;

/// A viewer review attached to one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: MovieId,
    pub reviewer: String,
    /// Star rating from 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub posted_at: NaiveDate,
}
