//! Catalog query abstraction.

use crate::models::{MovieId, MovieRecord};

/// Search criteria for the catalog. All present criteria must match
/// (AND semantics), with one exception: a positive id is authoritative and
/// settles the search on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    /// Case-insensitive substring of the title.
    pub name: Option<String>,
    /// Exact id. Non-positive values are ignored as a criterion.
    pub id: Option<MovieId>,
    /// Case-insensitive substring of the genre.
    pub genre: Option<String>,
}

impl MovieQuery {
    #[must_use]
    pub const fn new(name: Option<String>, id: Option<MovieId>, genre: Option<String>) -> Self {
        Self { name, id, genre }
    }

    #[must_use]
    pub fn by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn by_id(id: MovieId) -> Self {
        Self {
            name: None,
            id: Some(id),
            genre: None,
        }
    }

    #[must_use]
    pub fn by_genre(genre: &str) -> Self {
        Self {
            genre: Some(genre.to_string()),
            ..Self::default()
        }
    }

    /// True when the caller supplied nothing to search for: no id at all and
    /// only blank or absent text criteria. Presentation layers use this to
    /// word their summary, the engine itself does not need it.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none() && is_blank(self.name.as_deref()) && is_blank(self.genre.as_deref())
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// Read-only queries over the movie catalog.
///
/// Implementations never fail: a catalog that could not be loaded behaves
/// exactly like an empty one.
pub trait MovieService: Send + Sync {
    /// Every movie, in catalog order.
    fn all_movies(&self) -> Vec<MovieRecord>;

    /// Point lookup by id. Non-positive ids never match.
    fn movie_by_id(&self, id: MovieId) -> Option<MovieRecord>;

    /// Run a query against the catalog. See [`MovieQuery`] for the
    /// matching rules.
    fn search(&self, query: &MovieQuery) -> Vec<MovieRecord>;

    /// Distinct genres, sorted lexicographically.
    fn all_genres(&self) -> Vec<String>;

    fn search_by_name(&self, name: &str) -> Vec<MovieRecord> {
        self.search(&MovieQuery::by_name(name))
    }

    fn search_by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        self.search(&MovieQuery::by_genre(genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_means_no_usable_criteria() {
        assert!(MovieQuery::default().is_unconstrained());
        assert!(MovieQuery::new(Some("   ".to_string()), None, Some(String::new())).is_unconstrained());

        assert!(!MovieQuery::by_name("prison").is_unconstrained());
        assert!(!MovieQuery::by_genre("drama").is_unconstrained());
        // Any explicit id counts as a criterion, even one that the engine
        // will go on to ignore.
        assert!(!MovieQuery::by_id(0).is_unconstrained());
        assert!(!MovieQuery::by_id(5).is_unconstrained());
    }
}
