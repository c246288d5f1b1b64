pub mod movie;
pub mod review;

pub use movie::{MovieId, MovieRecord};
pub use review::Review;
