//! List genres command handler

use crate::state::SharedState;

pub fn cmd_list_genres(state: &SharedState) -> anyhow::Result<()> {
    let genres = state.movie_service.all_genres();

    if genres.is_empty() {
        println!("The catalog has no genres to list.");
        return Ok(());
    }

    println!("Genres ({} total)", genres.len());
    println!("{:-<70}", "");

    for genre in genres {
        println!("• {genre}");
    }

    Ok(())
}
