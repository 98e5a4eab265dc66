//! Recommendation queries: derived, read-only views over a catalog.

use crate::store::Catalog;
use crate::types::Item;

/// Items matching `genre` (case-insensitive exact), best-rated first.
/// Equal averages keep catalog (insertion) order.
pub fn by_genre<'a>(catalog: &'a Catalog, genre: &str) -> Vec<&'a Item> {
    let matches = catalog
        .items()
        .iter()
        .filter(|item| item.genre.eq_ignore_ascii_case(genre))
        .collect();
    sorted_by_rating(matches)
}

/// The `n` best-rated items, ties resolved to catalog order. Asking for
/// more items than exist returns the whole catalog.
pub fn top_n(catalog: &Catalog, n: usize) -> Vec<&Item> {
    let mut ranked = sorted_by_rating(catalog.items().iter().collect());
    ranked.truncate(n);
    ranked
}

fn sorted_by_rating(mut items: Vec<&Item>) -> Vec<&Item> {
    // sort_by is stable, so equal averages keep their relative order.
    items.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating()));
    items
}
