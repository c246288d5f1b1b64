//! Immutable movie catalog, loaded once at startup.
//!
//! The catalog reads either a JSON file named in the config or the copy of
//! `data/movies.json` embedded in the binary. A load failure is never fatal:
//! callers get an empty catalog and the service keeps running, it just has
//! nothing to show.

use std::collections::HashMap;
use std::path::Path;

use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{MovieId, MovieRecord};

#[derive(RustEmbed)]
#[folder = "data"]
struct BundledData;

/// Embedded catalog document.
pub const MOVIES_FILE: &str = "movies.json";

/// Embedded reviews document.
pub const REVIEWS_FILE: &str = "reviews.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Data source not found: {0}")]
    MissingSource(String),

    #[error("Failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} as JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record in {path}: {reason}")]
    InvalidRecord { path: String, reason: String },
}

/// Read a document bundled into the binary under `data/`.
pub(crate) fn read_bundled(name: &str) -> Result<String, CatalogError> {
    let file = BundledData::get(name)
        .ok_or_else(|| CatalogError::MissingSource(format!("embedded:{name}")))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}

/// Read a catalog-style document from an explicit path, or from the embedded
/// copy when no path is given.
pub(crate) fn read_source(path: Option<&Path>, bundled_name: &str) -> Result<String, CatalogError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CatalogError::MissingSource(path.display().to_string()));
            }
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
        None => read_bundled(bundled_name),
    }
}

/// The full movie catalog with an id index for point lookups.
///
/// Records keep the order of the source document, and every listing or
/// search result preserves that order.
pub struct Catalog {
    records: Vec<MovieRecord>,
    index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecord`] for a non-positive id, an
    /// empty title, or a duplicate id. One bad record rejects the whole
    /// document so a half-loaded catalog can never serve results.
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id <= 0 {
                return Err(invalid_record(format!(
                    "movie id {} must be positive",
                    record.id
                )));
            }
            if record.title.trim().is_empty() {
                return Err(invalid_record(format!(
                    "movie {} has an empty title",
                    record.id
                )));
            }
            if index.insert(record.id, position).is_some() {
                return Err(invalid_record(format!("duplicate movie id {}", record.id)));
            }
        }
        Ok(Self { records, index })
    }

    /// A catalog with no movies in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Load the catalog, falling back to an empty one when anything goes
    /// wrong. The failure is logged, never propagated.
    #[must_use]
    pub fn load(data_file: Option<&Path>) -> Self {
        match Self::try_load(data_file) {
            Ok(catalog) => {
                debug!(movies = catalog.len(), "Movie catalog loaded");
                catalog
            }
            Err(e) => {
                warn!(error = %e, "Failed to load movie catalog, continuing with an empty one");
                Self::empty()
            }
        }
    }

    /// Load and validate the catalog from `data_file`, or from the embedded
    /// document when `data_file` is `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the source is missing, unreadable,
    /// not valid JSON, or contains an invalid record.
    pub fn try_load(data_file: Option<&Path>) -> Result<Self, CatalogError> {
        let source = data_file.map_or_else(
            || format!("embedded:{MOVIES_FILE}"),
            |p| p.display().to_string(),
        );
        let raw = read_source(data_file, MOVIES_FILE)?;
        let records: Vec<MovieRecord> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
                path: source,
                source: e,
            })?;
        Self::from_records(records)
    }

    /// Every movie, in document order.
    #[must_use]
    pub fn all(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Point lookup by id. Non-positive ids never match anything.
    #[must_use]
    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        if id <= 0 {
            return None;
        }
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// Distinct genre strings, sorted lexicographically.
    ///
    /// Composite values like `"Crime/Drama"` count as single genres and are
    /// compared exactly, including case.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self.records.iter().map(|r| r.genre.clone()).collect();
        genres.sort();
        genres.dedup();
        genres
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn invalid_record(reason: String) -> CatalogError {
    CatalogError::InvalidRecord {
        path: "catalog".to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: MovieId, title: &str, genre: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            director: "Test Director".to_string(),
            year: 2000,
            genre: genre.to_string(),
            description: "A test movie.".to_string(),
            duration_minutes: 120,
            rating: 7.5,
        }
    }

    #[test]
    fn builds_index_over_document_order() {
        let catalog = Catalog::from_records(vec![
            record(3, "Third", "Drama"),
            record(1, "First", "Comedy"),
            record(2, "Second", "Drama"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.all()[0].title, "Third");
        assert_eq!(catalog.get(1).unwrap().title, "First");
        assert_eq!(catalog.get(2).unwrap().title, "Second");
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn non_positive_lookup_never_matches() {
        let catalog = Catalog::from_records(vec![record(1, "Only", "Drama")]).unwrap();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(-1).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::from_records(vec![
            record(1, "One", "Drama"),
            record(1, "Other One", "Comedy"),
        ]);
        assert!(matches!(result, Err(CatalogError::InvalidRecord { .. })));
    }

    #[test]
    fn rejects_non_positive_ids() {
        assert!(Catalog::from_records(vec![record(0, "Zero", "Drama")]).is_err());
        assert!(Catalog::from_records(vec![record(-7, "Negative", "Drama")]).is_err());
    }

    #[test]
    fn rejects_blank_titles() {
        assert!(Catalog::from_records(vec![record(1, "   ", "Drama")]).is_err());
    }

    #[test]
    fn genres_are_distinct_and_sorted() {
        let catalog = Catalog::from_records(vec![
            record(1, "A", "Drama"),
            record(2, "B", "Crime/Drama"),
            record(3, "C", "Drama"),
        ])
        .unwrap();

        assert_eq!(catalog.genres(), vec!["Crime/Drama", "Drama"]);
    }

    #[test]
    fn genre_comparison_is_case_sensitive() {
        let catalog = Catalog::from_records(vec![
            record(1, "A", "drama"),
            record(2, "B", "Drama"),
        ])
        .unwrap();

        assert_eq!(catalog.genres(), vec!["Drama", "drama"]);
    }

    #[test]
    fn empty_document_is_a_valid_catalog() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.genres().is_empty());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let catalog = Catalog::load(Some(Path::new("/definitely/not/here.json")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_file_reports_missing_source() {
        let result = Catalog::try_load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(CatalogError::MissingSource(_))));
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::try_load(None).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(1).unwrap().title, "The Prison Escape");

        let genres = catalog.genres();
        assert!(genres.contains(&"Drama".to_string()));
        assert!(genres.contains(&"Crime/Drama".to_string()));
        assert!(genres.iter().all(|g| !g.to_lowercase().contains("horror")));
    }
}
