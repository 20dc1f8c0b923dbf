use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "journal", author, version, about = "Browse and edit a book journal")]
pub struct Cli {
    /// Library snapshot (JSON). Defaults to the built-in sample library.
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    /// Config file (TOML). Defaults to `<config dir>/book-journal/config.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the genre tree with book counts.
    Tree(TreeArgs),
    /// List books, most recently updated first.
    Books(BooksArgs),
    /// Print the path from the root to a genre.
    Path {
        genre_id: String,
    },
    /// Print one book with its notes.
    Show {
        book_id: String,
    },
    /// Add a genre and print the updated tree.
    AddGenre(AddGenreArgs),
    /// Add a book and print it.
    AddBook(AddBookArgs),
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Show genre ids next to names.
    #[arg(long)]
    pub ids: bool,
}

#[derive(Debug, Args)]
pub struct BooksArgs {
    /// Only books in this genre or its descendants.
    #[arg(long)]
    pub genre: Option<String>,

    /// Case-insensitive text to look for in titles, authors, tags and notes.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddGenreArgs {
    pub name: String,

    /// Parent genre id.
    #[arg(long)]
    pub parent: Option<String>,

    /// Print the updated library snapshot (JSON) instead.
    #[arg(long)]
    pub write: bool,
}

#[derive(Debug, Args)]
pub struct AddBookArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    /// Genre id.
    #[arg(long)]
    pub genre: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Tag (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Section as `TITLE` or `TITLE: SUMMARY` (repeatable).
    #[arg(long = "section")]
    pub sections: Vec<String>,

    /// Cover color; picked from the palette when omitted.
    #[arg(long)]
    pub cover_color: Option<String>,

    /// Print the updated library snapshot (JSON) instead.
    #[arg(long)]
    pub write: bool,
}
