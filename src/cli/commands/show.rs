//! Show movie command handler

use crate::state::SharedState;

pub fn cmd_show_movie(state: &SharedState, id: i64) -> anyhow::Result<()> {
    let Some(movie) = state.movie_service.movie_by_id(id) else {
        println!("No movie with id {id} in the catalog.");
        println!();
        println!("List everything with: marquee list");
        return Ok(());
    };

    println!(
        "{} {} ({})",
        crate::api::icons::movie_icon(&movie.title),
        movie.title,
        movie.year
    );
    println!("{:-<70}", "");
    println!("ID:       {}", movie.id);
    println!("Director: {}", movie.director);
    println!("Genre:    {}", movie.genre);
    println!("Duration: {} min", movie.duration_minutes);
    println!("Rating:   ⭐ {:.1} / 10", movie.rating);
    println!();
    println!("{}", movie.description);

    let reviews = state.review_service.reviews_for_movie(movie.id);
    if reviews.is_empty() {
        println!();
        println!("No reviews yet.");
        return Ok(());
    }

    println!();
    println!("Reviews ({} total)", reviews.len());
    println!("{:-<70}", "");

    if let Some(average) = state.review_service.average_rating(movie.id) {
        println!("Average rating: {average:.1} / 5");
        println!();
    }

    for review in reviews {
        println!(
            "{} {} ({})",
            stars(review.rating),
            review.reviewer,
            review.posted_at.format("%b %-d, %Y")
        );
        println!("  {}", review.comment);
    }

    Ok(())
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
