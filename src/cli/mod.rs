//! Command-line interface for Marquee.
//!
//! Argument parsing lives here, the actual command handlers are in
//! [`commands`].

mod commands;

use clap::{Parser, Subcommand};

/// Marquee - Movie catalog browser
/// Serves a small movie catalog over HTTP and on the command line
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    #[command(alias = "server")]
    Serve,

    /// List every movie in the catalog
    #[command(alias = "ls", alias = "l")]
    List,

    /// Search the catalog by name, id, or genre
    #[command(alias = "s")]
    Search {
        /// Name fragment to match against titles
        term: Option<String>,

        /// Exact movie id to look up
        #[arg(long)]
        id: Option<i64>,

        /// Genre fragment to match
        #[arg(long)]
        genre: Option<String>,
    },

    /// List the distinct genres in the catalog
    #[command(alias = "g")]
    Genres,

    /// Show one movie with its reviews
    #[command(alias = "i", alias = "info")]
    Show {
        /// Movie id
        id: i64,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
