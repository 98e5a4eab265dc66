use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediarack_catalog::{Item, ItemKind};

use super::load_or_empty;
use crate::error::CliError;
use crate::AddKind;

pub(crate) fn run_add(data: &Path, kind: AddKind) -> Result<(), CliError> {
    let (common, kind) = match kind {
        AddKind::Movie {
            item,
            director,
            duration,
        } => (
            item,
            ItemKind::Movie {
                director,
                duration_minutes: duration,
            },
        ),
        AddKind::Series {
            item,
            seasons,
            episodes,
        } => (
            item,
            ItemKind::Series {
                seasons,
                total_episodes: episodes,
            },
        ),
        AddKind::Book {
            item,
            author,
            publisher,
        } => (item, ItemKind::Book { author, publisher }),
    };

    let mut catalog = load_or_empty(data)?;
    if catalog.contains(&common.title) {
        println!(
            "{} is already in the catalog.",
            common.title.if_supports_color(Stdout, |t| t.bold()),
        );
        return Ok(());
    }

    let title = common.title.clone();
    catalog.add(Item::new(common.title, common.genre, common.year, kind));
    catalog.save(data)?;

    println!("Added {}.", title.if_supports_color(Stdout, |t| t.bold()));
    Ok(())
}
