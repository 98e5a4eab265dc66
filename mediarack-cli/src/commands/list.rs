use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::load_or_empty;
use crate::error::CliError;

pub(crate) fn run_list(data: &Path) -> Result<(), CliError> {
    let catalog = load_or_empty(data)?;

    if catalog.is_empty() {
        println!("Catalog is empty. Try 'mediarack init' or 'mediarack add'.");
        return Ok(());
    }

    for item in catalog.items() {
        println!(
            "{} [{}] ({}) {:.2}",
            item.title.if_supports_color(Stdout, |t| t.bold()),
            item.kind.name().if_supports_color(Stdout, |t| t.cyan()),
            item.year,
            item.average_rating(),
        );
    }
    println!();
    println!("{} items.", catalog.len());
    Ok(())
}
