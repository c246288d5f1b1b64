//! Server-rendered HTML pages for browsing the catalog.
//!
//! Markup is built with plain `format!` over escaped values. The pages share
//! one embedded stylesheet and carry no scripts.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::AppState;
use super::icons::movie_icon;
use super::movies::search_message;
use crate::models::{MovieId, MovieRecord, Review};
use crate::services::MovieQuery;

#[derive(Debug, Deserialize)]
pub struct PageSearchParams {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
}

/// `GET /` just lands on the catalog page.
pub async fn home() -> Redirect {
    Redirect::to("/movies")
}

/// The catalog page with its search form.
///
/// Unlike the JSON API, a malformed or non-positive id is not an error
/// here: the page shows the full catalog with a warning banner and drops
/// the other criteria, so the visitor always gets something to browse.
///
/// # Endpoint
/// `GET /movies?name=&id=&genre=`
pub async fn movies_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageSearchParams>,
) -> Html<String> {
    let name = clean(params.name.as_deref());
    let genre = clean(params.genre.as_deref());
    let raw_id = clean(params.id.as_deref());

    let (movies, banner) = match raw_id.as_deref().map(|raw| raw.parse::<MovieId>()) {
        Some(Ok(id)) if id > 0 => {
            let query = MovieQuery::new(name.clone(), Some(id), genre.clone());
            let results = state.movie_service().search(&query);
            let banner = Some(search_message(false, results.len()));
            (results, banner)
        }
        Some(_) => {
            let raw = raw_id.as_deref().unwrap_or_default();
            let banner = Some(format!(
                "Invalid movie id '{raw}'. Showing all movies instead."
            ));
            (state.movie_service().all_movies(), banner)
        }
        None if name.is_some() || genre.is_some() => {
            let query = MovieQuery::new(name.clone(), None, genre.clone());
            let results = state.movie_service().search(&query);
            let banner = Some(search_message(false, results.len()));
            (results, banner)
        }
        None => (state.movie_service().all_movies(), None),
    };

    let genres = state.movie_service().all_genres();

    let mut body = String::from("<h1>Movie Catalog</h1>\n");
    body.push_str(&render_search_form(
        name.as_deref().unwrap_or_default(),
        raw_id.as_deref().unwrap_or_default(),
        genre.as_deref().unwrap_or_default(),
        &genres,
    ));

    if let Some(banner) = &banner {
        let _ = write!(
            body,
            "<p class=\"search-message\">{}</p>\n",
            encode_text(banner)
        );
    }

    if movies.is_empty() {
        body.push_str("<p class=\"no-results\">Nothing to show.</p>\n");
    } else {
        body.push_str("<section class=\"movie-grid\">\n");
        for movie in &movies {
            body.push_str(&render_movie_card(movie));
        }
        body.push_str("</section>\n");
    }

    Html(page_shell("Movie Catalog", &body))
}

/// One movie with its reviews.
///
/// # Endpoint
/// `GET /movies/{id}/details`
pub async fn movie_details_page(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let movie = raw_id
        .trim()
        .parse::<MovieId>()
        .ok()
        .and_then(|id| state.movie_service().movie_by_id(id));

    let Some(movie) = movie else {
        return error_page(
            StatusCode::NOT_FOUND,
            "Movie not found",
            &format!("No movie with id '{raw_id}' exists in the catalog."),
        );
    };

    let reviews = state.review_service().reviews_for_movie(movie.id);
    let average = state.review_service().average_rating(movie.id);

    let body = format!(
        "<article class=\"movie-details\">\n\
         <div class=\"movie-icon large\">{icon}</div>\n\
         <h1>{title}</h1>\n\
         <p class=\"movie-meta\">{year} &middot; {duration} min &middot; {genre}</p>\n\
         <p class=\"movie-director\">Directed by {director}</p>\n\
         <p class=\"movie-rating\">⭐ {rating:.1} / 10</p>\n\
         <p class=\"movie-description\">{description}</p>\n\
         </article>\n\
         {reviews}\n\
         <p class=\"back-link\"><a href=\"/movies\">Back to the catalog</a></p>",
        icon = movie_icon(&movie.title),
        title = encode_text(&movie.title),
        year = movie.year,
        duration = movie.duration_minutes,
        genre = encode_text(&movie.genre),
        director = encode_text(&movie.director),
        rating = movie.rating,
        description = encode_text(&movie.description),
        reviews = render_reviews(&reviews, average),
    );

    Html(page_shell(&movie.title, &body)).into_response()
}

/// Fallback for any path without a route.
pub async fn not_found_page() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "Page not found",
        "The page you asked for does not exist.",
    )
}

/// Trim a query value, discarding it entirely when blank.
fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} - Marquee</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/app.css\">\n\
         </head>\n\
         <body>\n\
         <header class=\"site-header\"><a href=\"/movies\">🎬 Marquee</a></header>\n\
         <main>\n{body}\n</main>\n\
         <footer class=\"site-footer\">Marquee v{version}</footer>\n\
         </body>\n\
         </html>",
        title = encode_text(title),
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn render_search_form(name: &str, id: &str, genre: &str, genres: &[String]) -> String {
    let mut options = String::from("<option value=\"\">All genres</option>");
    for g in genres {
        let selected = if g == genre { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{value}\"{selected}>{label}</option>",
            value = encode_double_quoted_attribute(g),
            label = encode_text(g),
        );
    }

    format!(
        "<form class=\"search-form\" method=\"get\" action=\"/movies\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Movie name\" value=\"{name}\">\n\
         <input type=\"text\" name=\"id\" placeholder=\"Movie id\" value=\"{id}\">\n\
         <select name=\"genre\">{options}</select>\n\
         <button type=\"submit\">Search</button>\n\
         <a class=\"clear-link\" href=\"/movies\">Clear</a>\n\
         </form>\n",
        name = encode_double_quoted_attribute(name),
        id = encode_double_quoted_attribute(id),
    )
}

fn render_movie_card(movie: &MovieRecord) -> String {
    format!(
        "<article class=\"movie-card\">\n\
         <div class=\"movie-icon\">{icon}</div>\n\
         <h2><a href=\"/movies/{id}/details\">{title}</a></h2>\n\
         <p class=\"movie-meta\">{year} &middot; {duration} min &middot; {genre}</p>\n\
         <p class=\"movie-director\">Directed by {director}</p>\n\
         <p class=\"movie-rating\">⭐ {rating:.1}</p>\n\
         </article>\n",
        icon = movie_icon(&movie.title),
        id = movie.id,
        title = encode_text(&movie.title),
        year = movie.year,
        duration = movie.duration_minutes,
        genre = encode_text(&movie.genre),
        director = encode_text(&movie.director),
        rating = movie.rating,
    )
}

fn render_reviews(reviews: &[Review], average: Option<f64>) -> String {
    let mut out = String::from("<section class=\"reviews\">\n<h2>Reviews</h2>\n");

    if reviews.is_empty() {
        out.push_str("<p class=\"no-reviews\">No reviews yet.</p>\n</section>");
        return out;
    }

    if let Some(average) = average {
        let _ = write!(
            out,
            "<p class=\"average-rating\">Average rating: {average:.1} / 5</p>\n"
        );
    }

    for review in reviews {
        let _ = write!(
            out,
            "<article class=\"review\">\n\
             <header><span class=\"review-stars\">{stars}</span> \
             <span class=\"reviewer\">{reviewer}</span> \
             <time>{date}</time></header>\n\
             <p>{comment}</p>\n\
             </article>\n",
            stars = render_stars(review.rating),
            reviewer = encode_text(&review.reviewer),
            date = review.posted_at.format("%b %-d, %Y"),
            comment = encode_text(&review.comment),
        );
    }

    out.push_str("</section>");
    out
}

fn render_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn error_page(status: StatusCode, heading: &str, detail: &str) -> Response {
    let body = format!(
        "<section class=\"error-panel\">\n\
         <h1>{heading}</h1>\n\
         <p>{detail}</p>\n\
         <p><a href=\"/movies\">Back to the catalog</a></p>\n\
         </section>",
        heading = encode_text(heading),
        detail = encode_text(detail),
    );
    (status, Html(page_shell(heading, &body))).into_response()
}
