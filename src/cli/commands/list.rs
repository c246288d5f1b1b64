//! List movies command handler

use crate::state::SharedState;

pub fn cmd_list_movies(state: &SharedState) -> anyhow::Result<()> {
    let movies = state.movie_service.all_movies();

    if movies.is_empty() {
        println!("The catalog is empty.");
        println!();
        println!("Point catalog.data_file in config.toml at a movies JSON document.");
        return Ok(());
    }

    println!("Movie Catalog ({} total)", movies.len());
    println!("{:-<70}", "");

    for movie in movies {
        println!(
            "{} {} ({})",
            crate::api::icons::movie_icon(&movie.title),
            movie.title,
            movie.year
        );
        println!(
            "  ID: {} | Genre: {} | {} min | ⭐ {:.1}",
            movie.id, movie.genre, movie.duration_minutes, movie.rating
        );
    }

    Ok(())
}
