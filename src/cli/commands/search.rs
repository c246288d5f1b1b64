//! Search movies command handler

use crate::services::MovieQuery;
use crate::state::SharedState;

pub fn cmd_search_movies(
    state: &SharedState,
    term: Option<&str>,
    id: Option<i64>,
    genre: Option<&str>,
) -> anyhow::Result<()> {
    let query = MovieQuery::new(
        term.map(ToString::to_string),
        id,
        genre.map(ToString::to_string),
    );

    let results = state.movie_service.search(&query);

    if results.is_empty() {
        println!("No movies found matching your search criteria.");
        return Ok(());
    }

    if query.is_unconstrained() {
        println!("No search criteria provided, showing the full catalog.");
        println!();
    }

    println!("Search Results ({} total)", results.len());
    println!("{:-<70}", "");

    for movie in results {
        println!(
            "{} {} ({})",
            crate::api::icons::movie_icon(&movie.title),
            movie.title,
            movie.year
        );
        println!(
            "  ID: {} | Genre: {} | Directed by {}",
            movie.id, movie.genre, movie.director
        );
    }

    Ok(())
}
