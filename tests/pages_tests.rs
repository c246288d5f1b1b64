use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use marquee::config::Config;
use tower::ServiceExt;

fn spawn_app() -> Router {
    let state = marquee::api::create_app_state_from_config(Config::default(), None);
    marquee::api::router(state)
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_redirects_to_the_catalog() {
    let app = spawn_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/movies");
}

#[tokio::test]
async fn test_catalog_page_renders_every_movie() {
    let app = spawn_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("The Prison Escape"));
    assert!(html.contains("The Family Boss"));
    assert!(html.contains("<form"));
    // The genre dropdown is built from the catalog.
    assert!(html.contains("Crime/Drama"));
}

#[tokio::test]
async fn test_catalog_page_filters_by_name() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/movies?name=prison").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("The Prison Escape"));
    assert!(!html.contains("The Family Boss"));
    assert!(html.contains("Found 1 movie matching your search."));
}

#[tokio::test]
async fn test_catalog_page_empty_result_says_so() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/movies?name=zzzzzz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No movies found matching your search criteria."));
    assert!(html.contains("Nothing to show."));
}

#[tokio::test]
async fn test_catalog_page_invalid_id_falls_back_to_everything() {
    let app = spawn_app();

    // Unlike the JSON API, the page does not reject the request. It warns
    // and shows the whole catalog, dropping the other criteria.
    let (status, html) = get_page(&app, "/movies?id=-1&name=prison").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Invalid movie id '-1'. Showing all movies instead."));
    assert!(html.contains("The Prison Escape"));
    assert!(html.contains("The Family Boss"));
}

#[tokio::test]
async fn test_catalog_page_id_lookup_wins() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/movies?id=2&name=prison").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("The Family Boss"));
    assert!(!html.contains("The Prison Escape"));
}

#[tokio::test]
async fn test_details_page_shows_movie_and_reviews() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/movies/1/details").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("The Prison Escape"));
    assert!(html.contains("Frank Donovan"));
    assert!(html.contains("Margaret H."));
    assert!(html.contains("Average rating"));
}

#[tokio::test]
async fn test_details_page_without_reviews() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/movies/5/details").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No reviews yet."));
}

#[tokio::test]
async fn test_details_page_for_missing_movie() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/movies/999/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Movie not found"));

    let (status, _) = get_page(&app, "/movies/abc/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stylesheet_is_embedded() {
    let app = spawn_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/assets/app.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn test_missing_asset_is_a_plain_404() {
    let app = spawn_app();

    let (status, body) = get_page(&app, "/assets/no-such-file.js").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn test_unknown_route_gets_the_error_page() {
    let app = spawn_app();

    let (status, html) = get_page(&app, "/definitely/not/here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn test_security_headers_are_present() {
    let app = spawn_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
}
