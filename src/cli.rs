use crate::domain::constants::DEFAULT_LIBRARY_FILE;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    version,
    about = "Personal library manager",
    long_about = "Personal library manager. Run without a command for the interactive menu."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "SHELF_FILE",
        default_value = DEFAULT_LIBRARY_FILE,
        help = "Library file to load and save"
    )]
    pub file: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a book to the library.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long, allow_hyphen_values = true)]
        year: String,
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value_t = false)]
        read: bool,
    },
    /// Remove every book with this title (case-insensitive).
    Remove { title: String },
    /// Case-insensitive substring search over titles or authors.
    Search {
        #[arg(value_enum)]
        field: SearchField,
        query: String,
    },
    List,
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
}
