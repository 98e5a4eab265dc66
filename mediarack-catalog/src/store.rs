//! In-memory catalog store and file load/save orchestration.

use std::fs;
use std::path::Path;

use crate::codec::{self, Record};
use crate::error::CatalogError;
use crate::types::{Item, Rating};

/// The ordered collection of all catalog items.
///
/// Items keep their insertion order; every query that sorts by rating uses
/// a stable sort so ties resolve to this order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Duplicate-title checks are the caller's concern
    /// (see [`Catalog::contains`]); decoded files may legally contain
    /// duplicates.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Case-insensitive exact title match.
    pub fn contains(&self, title: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.title.eq_ignore_ascii_case(title))
    }

    /// Find an item by case-insensitive exact title.
    pub fn find(&self, title: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.title.eq_ignore_ascii_case(title))
    }

    /// Mutable variant of [`Catalog::find`], used to attach ratings.
    pub fn find_mut(&mut self, title: &str) -> Option<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.title.eq_ignore_ascii_case(title))
    }

    /// Remove the first item whose title matches case-insensitively.
    /// Returns whether a removal occurred. If duplicates exist, only the
    /// first is removed.
    pub fn remove(&mut self, title: &str) -> bool {
        match self
            .items
            .iter()
            .position(|item| item.title.eq_ignore_ascii_case(title))
        {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring search over titles, in catalog order.
    pub fn search_by_title(&self, query: &str) -> Vec<&Item> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Load a catalog from `path`, replacing nothing in place: the returned
    /// value is the whole new catalog.
    ///
    /// Fails with [`CatalogError::NotFound`] when the path does not exist.
    /// Malformed lines are skipped with a warning and never abort the load.
    /// Each rating line attaches to the most recently decoded item; rating
    /// lines before any item line are skipped.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::not_found(format!(
                "catalog file {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path)?;
        let mut items: Vec<Item> = Vec::new();
        // Cursor for positional rating association: index of the item the
        // next rating line belongs to.
        let mut current: Option<usize> = None;

        for (lineno, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match codec::decode_line(line) {
                Ok(Record::Item(item)) => {
                    items.push(item);
                    current = Some(items.len() - 1);
                }
                Ok(Record::Rating(rating)) => match current {
                    Some(idx) => items[idx].add_rating(rating),
                    None => {
                        log::warn!(
                            "{}:{}: rating line before any item line, skipping",
                            path.display(),
                            lineno + 1
                        );
                    }
                },
                Err(err) => {
                    log::warn!("{}:{}: {err}, skipping", path.display(), lineno + 1);
                }
            }
        }

        log::debug!("loaded {} items from {}", items.len(), path.display());
        Ok(Self { items })
    }

    /// Write the whole catalog to `path`, creating the parent directory if
    /// needed. Each item line is followed by its rating lines. The in-memory
    /// catalog is never altered, even when the write fails partway.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        for item in &self.items {
            out.push_str(&codec::encode_item(item));
            out.push('\n');
            for rating in item.ratings() {
                out.push_str(&codec::encode_rating(rating));
                out.push('\n');
            }
        }

        fs::write(path, out)?;
        log::debug!("saved {} items to {}", self.items.len(), path.display());
        Ok(())
    }

    /// Attach a rating to the item with the given title.
    ///
    /// Fails with [`CatalogError::NotFound`] when no title matches.
    pub fn rate(&mut self, title: &str, rating: Rating) -> Result<(), CatalogError> {
        match self.find_mut(title) {
            Some(item) => {
                item.add_rating(rating);
                Ok(())
            }
            None => Err(CatalogError::not_found(format!("no item titled {title:?}"))),
        }
    }
}
