mod genres;
mod list;
mod search;
mod show;

pub use genres::cmd_list_genres;
pub use list::cmd_list_movies;
pub use search::cmd_search_movies;
pub use show::cmd_show_movie;
