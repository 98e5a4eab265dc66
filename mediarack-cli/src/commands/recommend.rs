use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediarack_catalog::{by_genre, top_n};

use super::{load_or_empty, ranked_line};
use crate::error::CliError;

pub(crate) fn run_genre(data: &Path, genre: &str) -> Result<(), CliError> {
    let catalog = load_or_empty(data)?;
    let items = by_genre(&catalog, genre);

    if items.is_empty() {
        println!("No items in genre {genre:?}.");
        return Ok(());
    }

    println!(
        "{}",
        format!("Genre: {genre}").if_supports_color(Stdout, |t| t.bold()),
    );
    for item in items {
        println!("  {}", ranked_line(item));
    }
    Ok(())
}

pub(crate) fn run_top(data: &Path, count: usize) -> Result<(), CliError> {
    let catalog = load_or_empty(data)?;
    let items = top_n(&catalog, count);

    if items.is_empty() {
        println!("Nothing to recommend yet.");
        return Ok(());
    }

    println!(
        "{}",
        format!("Top {count}").if_supports_color(Stdout, |t| t.bold()),
    );
    for item in items {
        println!("  {}", ranked_line(item));
    }
    Ok(())
}
