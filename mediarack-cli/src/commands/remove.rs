use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::load_or_empty;
use crate::error::CliError;

pub(crate) fn run_remove(data: &Path, title: &str) -> Result<(), CliError> {
    let mut catalog = load_or_empty(data)?;

    if catalog.remove(title) {
        catalog.save(data)?;
        println!("Removed {}.", title.if_supports_color(Stdout, |t| t.bold()));
    } else {
        println!("No item titled {title:?}.");
    }
    Ok(())
}
