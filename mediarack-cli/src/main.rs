//! mediarack CLI
//!
//! Command-line interface for tracking films, series, and books and the
//! user ratings attached to them. All state lives in one plain-text data
//! file that every command loads and, when it mutates anything, rewrites.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "mediarack")]
#[command(about = "Track films, series, and books with user ratings", long_about = None)]
struct Cli {
    /// Catalog data file
    #[arg(short, long, global = true, default_value = "data/catalog.txt")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Fields common to every item kind.
#[derive(Args, Clone)]
struct ItemArgs {
    /// Title (unique within the catalog, case-insensitive)
    title: String,

    /// Genre label, matched by the genre command
    #[arg(short, long)]
    genre: String,

    /// Release year
    #[arg(short, long)]
    year: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the catalog
    Add {
        #[command(subcommand)]
        kind: AddKind,
    },

    /// Remove an item by exact title (case-insensitive)
    Remove {
        title: String,
    },

    /// Search items by title substring
    Search {
        query: String,
    },

    /// Show one item in detail, including its ratings
    Show {
        title: String,
    },

    /// Attach a rating to an item
    Rate {
        title: String,

        /// Rating author's name (display only, not persisted)
        #[arg(long)]
        name: String,

        /// Rating author's email (persisted as the author identity)
        #[arg(long)]
        email: String,

        /// Score from 1 to 5
        #[arg(short, long)]
        score: u8,

        /// Free-text comment
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// List items of one genre, best-rated first
    Genre {
        genre: String,
    },

    /// Show the top-rated items
    Top {
        /// How many items to show
        #[arg(default_value_t = 5)]
        count: usize,
    },

    /// List the whole catalog in insertion order
    List,

    /// Create the data file with a small example catalog
    Init,
}

#[derive(Subcommand)]
enum AddKind {
    /// A film
    Movie {
        #[command(flatten)]
        item: ItemArgs,

        #[arg(long)]
        director: String,

        /// Running time in minutes
        #[arg(long)]
        duration: u32,
    },

    /// A TV series
    Series {
        #[command(flatten)]
        item: ItemArgs,

        #[arg(long)]
        seasons: u32,

        /// Total episode count across all seasons
        #[arg(long)]
        episodes: u32,
    },

    /// A book
    Book {
        #[command(flatten)]
        item: ItemArgs,

        #[arg(long)]
        author: String,

        #[arg(long)]
        publisher: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { kind } => commands::add::run_add(&cli.data, kind),
        Commands::Remove { title } => commands::remove::run_remove(&cli.data, &title),
        Commands::Search { query } => commands::search::run_search(&cli.data, &query),
        Commands::Show { title } => commands::show::run_show(&cli.data, &title),
        Commands::Rate {
            title,
            name,
            email,
            score,
            comment,
        } => commands::rate::run_rate(&cli.data, &title, name, email, score, comment),
        Commands::Genre { genre } => commands::recommend::run_genre(&cli.data, &genre),
        Commands::Top { count } => commands::recommend::run_top(&cli.data, count),
        Commands::List => commands::list::run_list(&cli.data),
        Commands::Init => commands::init::run_init(&cli.data),
    };

    if let Err(err) = result {
        eprintln!(
            "{} {err}",
            "error:".if_supports_color(Stderr, |t| t.red()),
        );
        std::process::exit(1);
    }
}
