use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediarack_catalog::{Rating, User};

use super::load_or_empty;
use crate::error::CliError;

pub(crate) fn run_rate(
    data: &Path,
    title: &str,
    name: String,
    email: String,
    score: u8,
    comment: String,
) -> Result<(), CliError> {
    let mut catalog = load_or_empty(data)?;

    // Score validation happens in the constructor; an out-of-range value
    // surfaces to the user before anything is touched.
    let rating = Rating::new(User::new(name, email), score, comment)?;
    catalog.rate(title, rating)?;
    catalog.save(data)?;

    println!(
        "Rating recorded for {}.",
        title.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
