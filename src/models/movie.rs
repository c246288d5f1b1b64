use serde::{Deserialize, Serialize};

/// Identifier for a movie in the catalog. Catalog entries always carry a
/// positive id; zero and negative values only ever appear as query input,
/// where they mean "no such movie".
pub type MovieId = i64;

/// One movie in the catalog, immutable once loaded.
///
/// Field names on the wire follow the bundled `movies.json` document, so the
/// same struct covers both the data file and the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,

    #[serde(rename = "movieName")]
    pub title: String,

    pub director: String,

    pub year: i32,

    /// May be composite, e.g. `"Crime/Drama"`. Composite values are treated
    /// as one opaque string everywhere except substring search.
    pub genre: String,

    pub description: String,

    #[serde(rename = "duration")]
    pub duration_minutes: i32,

    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_data_file_field_names() {
        let json = r#"{
            "id": 7,
            "movieName": "Space Odyssey",
            "director": "Jonathan Blake",
            "year": 2014,
            "genre": "Adventure/Drama/Sci-Fi",
            "description": "Explorers travel through a wormhole.",
            "duration": 169,
            "imdbRating": 8.7
        }"#;

        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Space Odyssey");
        assert_eq!(record.duration_minutes, 169);
        assert!((record.rating - 8.7).abs() < f64::EPSILON);

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"movieName\""));
        assert!(out.contains("\"duration\""));
        assert!(out.contains("\"imdbRating\""));
        assert!(!out.contains("\"title\""));
    }
}
