pub mod movie_service;
pub use movie_service::{MovieQuery, MovieService};

pub mod movie_service_impl;
pub use movie_service_impl::CatalogMovieService;

pub mod review_service;
pub use review_service::ReviewService;

pub mod review_service_impl;
pub use review_service_impl::StaticReviewService;
