use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediarack_catalog::ItemKind;

use super::load_or_empty;
use crate::error::CliError;

pub(crate) fn run_show(data: &Path, title: &str) -> Result<(), CliError> {
    let catalog = load_or_empty(data)?;
    let item = catalog
        .find(title)
        .ok_or_else(|| CliError::not_found(format!("no item titled {title:?}")))?;

    println!("{}", item.title.if_supports_color(Stdout, |t| t.bold()));
    println!("  Kind:  {}", item.kind.name());
    println!("  Genre: {}", item.genre);
    println!("  Year:  {}", item.year);

    match &item.kind {
        ItemKind::Movie {
            director,
            duration_minutes,
        } => {
            println!("  Director: {director}");
            println!("  Duration: {duration_minutes} minutes");
        }
        ItemKind::Series {
            seasons,
            total_episodes,
        } => {
            println!("  Seasons:  {seasons}");
            println!("  Episodes: {total_episodes}");
        }
        ItemKind::Book { author, publisher } => {
            println!("  Author:    {author}");
            println!("  Publisher: {publisher}");
        }
    }

    if item.ratings().is_empty() {
        println!();
        println!("No ratings yet.");
        return Ok(());
    }

    println!();
    println!(
        "Ratings (average {:.2}):",
        item.average_rating(),
    );
    for rating in item.ratings() {
        println!(
            "  {}/5 by {} <{}>{}",
            rating.score(),
            rating.author().name,
            rating.author().email,
            if rating.comment().is_empty() {
                String::new()
            } else {
                format!(": {}", rating.comment())
            },
        );
    }
    Ok(())
}
