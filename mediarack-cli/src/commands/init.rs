use std::path::Path;

use mediarack_catalog::{Catalog, Item, ItemKind, Rating, User};

use crate::error::CliError;

/// Seed the data file with a small example catalog. Refuses to touch an
/// existing file.
pub(crate) fn run_init(data: &Path) -> Result<(), CliError> {
    if data.exists() {
        println!("{} already exists, leaving it alone.", data.display());
        return Ok(());
    }

    let catalog = example_catalog()?;
    catalog.save(data)?;
    println!(
        "Wrote {} example items to {}.",
        catalog.len(),
        data.display(),
    );
    Ok(())
}

fn example_catalog() -> Result<Catalog, CliError> {
    let joao = User::new("Joao", "joao@email.com");
    let maria = User::new("Maria", "maria@email.com");

    let mut book = Item::new(
        "Dom Quixote",
        "Adventure",
        1605,
        ItemKind::Book {
            author: "Miguel de Cervantes".into(),
            publisher: "Penguin Books".into(),
        },
    );
    book.add_rating(Rating::new(
        joao.clone(),
        5,
        "A masterpiece of literature.",
    )?);

    let mut movie = Item::new(
        "Inception",
        "Sci-Fi",
        2010,
        ItemKind::Movie {
            director: "Christopher Nolan".into(),
            duration_minutes: 148,
        },
    );
    movie.add_rating(Rating::new(joao, 4, "Intricate and rewarding.")?);

    let mut series = Item::new(
        "Breaking Bad",
        "Drama",
        2008,
        ItemKind::Series {
            seasons: 5,
            total_episodes: 62,
        },
    );
    series.add_rating(Rating::new(maria, 5, "Best series I have watched!")?);

    let mut catalog = Catalog::new();
    catalog.add(book);
    catalog.add(movie);
    catalog.add(series);
    Ok(catalog)
}
