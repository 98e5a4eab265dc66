use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::load_or_empty;
use crate::error::CliError;

pub(crate) fn run_search(data: &Path, query: &str) -> Result<(), CliError> {
    let catalog = load_or_empty(data)?;
    let hits = catalog.search_by_title(query);

    if hits.is_empty() {
        println!("No items match {query:?}.");
        return Ok(());
    }

    for (i, item) in hits.iter().enumerate() {
        println!(
            "{}. {} [{}] {:.2}",
            i + 1,
            item.title.if_supports_color(Stdout, |t| t.bold()),
            item.kind.name().if_supports_color(Stdout, |t| t.cyan()),
            item.average_rating(),
        );
    }
    Ok(())
}
