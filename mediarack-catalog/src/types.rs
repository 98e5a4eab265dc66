//! Domain types for the media catalog.
//!
//! An [`Item`] is one catalog entry (film, series, or book) together with
//! the ratings users have attached to it. The variant payload lives in
//! [`ItemKind`], a closed set: every encode/render site matches all three
//! variants exhaustively.

use crate::error::CatalogError;

// ── User ────────────────────────────────────────────────────────────────────

/// The author of a rating.
///
/// Users are ad-hoc values, not registry entries: the same email may appear
/// on any number of independently constructed `User`s. The email is the
/// stable identity when a rating is reloaded from disk; the name is display
/// text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

// ── Rating ──────────────────────────────────────────────────────────────────

/// A single user rating, immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    author: User,
    score: u8,
    comment: String,
}

impl Rating {
    /// Create a rating. Fails with [`CatalogError::InvalidScore`] when
    /// `score` is outside 1..=5; scores are never clamped.
    pub fn new(
        author: User,
        score: u8,
        comment: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        if !(1..=5).contains(&score) {
            return Err(CatalogError::InvalidScore { score });
        }
        Ok(Self {
            author,
            score,
            comment: comment.into(),
        })
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

// ── Item ────────────────────────────────────────────────────────────────────

/// Variant-specific payload of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Movie {
        director: String,
        duration_minutes: u32,
    },
    Series {
        seasons: u32,
        total_episodes: u32,
    },
    Book {
        author: String,
        publisher: String,
    },
}

impl ItemKind {
    /// The kind token used both for display and as the first field of the
    /// persisted line format.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Movie { .. } => "Movie",
            ItemKind::Series { .. } => "Series",
            ItemKind::Book { .. } => "Book",
        }
    }
}

/// One catalog entry and its ratings.
///
/// Ratings are kept in insertion order (evaluation order); they are only
/// appended, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub kind: ItemKind,
    ratings: Vec<Rating>,
}

impl Item {
    /// Create an item with no ratings. Construction never fails; title
    /// uniqueness is the caller's concern at insertion time.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        kind: ItemKind,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
            kind,
            ratings: Vec::new(),
        }
    }

    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Arithmetic mean of all rating scores, `0.0` when there are none.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|r| u32::from(r.score())).sum();
        f64::from(sum) / self.ratings.len() as f64
    }
}
