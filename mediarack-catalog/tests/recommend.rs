use mediarack_catalog::{by_genre, top_n, Catalog, Item, ItemKind, Rating, User};

fn item(title: &str, genre: &str, scores: &[u8]) -> Item {
    let mut item = Item::new(
        title,
        genre,
        2000,
        ItemKind::Movie {
            director: "someone".into(),
            duration_minutes: 100,
        },
    );
    for &score in scores {
        item.add_rating(Rating::new(User::new("Ana", "a@x.com"), score, "").unwrap());
    }
    item
}

fn sample() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(item("Inception", "Sci-Fi", &[4]));
    catalog.add(item("Heat", "Crime", &[5, 4, 5]));
    catalog.add(item("Dune", "Sci-Fi", &[5]));
    catalog.add(item("Unseen", "Sci-Fi", &[]));
    catalog
}

#[test]
fn by_genre_sorts_descending_by_average() {
    let catalog = sample();
    let titles: Vec<&str> = by_genre(&catalog, "sci-fi")
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, ["Dune", "Inception", "Unseen"]);
}

#[test]
fn by_genre_is_case_insensitive_exact() {
    let catalog = sample();
    assert_eq!(by_genre(&catalog, "CRIME").len(), 1);
    assert!(by_genre(&catalog, "Sci").is_empty());
}

#[test]
fn equal_averages_keep_insertion_order() {
    let mut catalog = Catalog::new();
    catalog.add(item("First", "Drama", &[4]));
    catalog.add(item("Second", "Drama", &[4]));
    catalog.add(item("Third", "Drama", &[5]));

    let titles: Vec<&str> = top_n(&catalog, 3)
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, ["Third", "First", "Second"]);
}

#[test]
fn top_n_truncates() {
    let catalog = sample();
    let top = top_n(&catalog, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].title, "Heat");
}

#[test]
fn top_zero_is_empty() {
    assert!(top_n(&sample(), 0).is_empty());
}

#[test]
fn top_n_larger_than_catalog_returns_everything() {
    let catalog = sample();
    assert_eq!(top_n(&catalog, 100).len(), catalog.len());
}

#[test]
fn top_n_on_empty_catalog_is_empty() {
    assert!(top_n(&Catalog::new(), 5).is_empty());
}

#[test]
fn unrated_items_average_zero_and_sort_last() {
    let catalog = sample();
    let ranked = top_n(&catalog, 4);
    assert_eq!(ranked.last().unwrap().title, "Unseen");
    assert_eq!(ranked.last().unwrap().average_rating(), 0.0);
}
