//! Line codec for the persisted catalog format.
//!
//! One record per line, fields separated by `;`, classified by the first
//! field:
//!
//! ```text
//! Movie;<title>;<genre>;<year>;<director>;<durationMinutes>
//! Series;<title>;<genre>;<year>;<seasons>;<totalEpisodes>
//! Book;<title>;<genre>;<year>;<author>;<publisher>
//! Rating;<authorEmail>;<score>;<comment>
//! ```
//!
//! A rating line carries no item title; it belongs to whichever item line
//! most recently preceded it. The delimiter is not escaped: a `;` inside a
//! title, genre, or director shifts every following field and corrupts that
//! record. Only the trailing free-text field of a record (a rating's
//! comment, a book's publisher) absorbs extra `;`-separated parts.

use thiserror::Error;

use crate::types::{Item, ItemKind, Rating, User};

/// Placeholder author name for ratings reloaded from disk, which persist
/// only the email.
const UNKNOWN_AUTHOR: &str = "unknown";

/// Errors from decoding a single line. Always recovered per line by the
/// loader; a bad line never fails a whole load.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{kind} record needs {expected} fields, got {found}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unrecognized record kind: {0:?}")]
    UnknownKind(String),

    #[error("rating score out of range: {0}")]
    ScoreOutOfRange(u8),
}

/// A successfully decoded line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Item(Item),
    Rating(Rating),
}

/// Encode one item (without its ratings) as a single line.
pub fn encode_item(item: &Item) -> String {
    match &item.kind {
        ItemKind::Movie {
            director,
            duration_minutes,
        } => format!(
            "Movie;{};{};{};{};{}",
            item.title, item.genre, item.year, director, duration_minutes
        ),
        ItemKind::Series {
            seasons,
            total_episodes,
        } => format!(
            "Series;{};{};{};{};{}",
            item.title, item.genre, item.year, seasons, total_episodes
        ),
        ItemKind::Book { author, publisher } => format!(
            "Book;{};{};{};{};{}",
            item.title, item.genre, item.year, author, publisher
        ),
    }
}

/// Encode one rating as a single line. The parent item is implied by
/// position in the file, not written.
pub fn encode_rating(rating: &Rating) -> String {
    format!(
        "Rating;{};{};{}",
        rating.author().email,
        rating.score(),
        rating.comment()
    )
}

/// Decode one line into an item or rating record.
pub fn decode_line(line: &str) -> Result<Record, DecodeError> {
    let kind = line.split(';').next().unwrap_or("");
    match kind {
        "Rating" => decode_rating(line),
        "Movie" | "Series" | "Book" => decode_item(line),
        other => Err(DecodeError::UnknownKind(other.to_string())),
    }
}

fn decode_rating(line: &str) -> Result<Record, DecodeError> {
    // The comment is the final field and may itself contain the delimiter,
    // so only split off the three leading fields.
    let parts: Vec<&str> = line.splitn(4, ';').collect();
    if parts.len() != 4 {
        return Err(DecodeError::FieldCount {
            kind: "Rating",
            expected: 4,
            found: parts.len(),
        });
    }

    let email = parts[1];
    let score: u8 = parts[2].parse().map_err(|_| DecodeError::InvalidNumber {
        field: "score",
        value: parts[2].to_string(),
    })?;
    let comment = parts[3];

    let author = User::new(UNKNOWN_AUTHOR, email);
    let rating = Rating::new(author, score, comment)
        .map_err(|_| DecodeError::ScoreOutOfRange(score))?;
    Ok(Record::Rating(rating))
}

fn decode_item(line: &str) -> Result<Record, DecodeError> {
    let parts: Vec<&str> = line.splitn(6, ';').collect();
    let kind_token = parts[0];
    if parts.len() != 6 {
        return Err(DecodeError::FieldCount {
            kind: match kind_token {
                "Movie" => "Movie",
                "Series" => "Series",
                _ => "Book",
            },
            expected: 6,
            found: parts.len(),
        });
    }

    let title = parts[1];
    let genre = parts[2];
    let year: i32 = parts[3].parse().map_err(|_| DecodeError::InvalidNumber {
        field: "year",
        value: parts[3].to_string(),
    })?;

    let kind = match kind_token {
        "Movie" => ItemKind::Movie {
            director: parts[4].to_string(),
            duration_minutes: parse_count("duration", parts[5])?,
        },
        "Series" => ItemKind::Series {
            seasons: parse_count("seasons", parts[4])?,
            total_episodes: parse_count("episodes", parts[5])?,
        },
        "Book" => ItemKind::Book {
            author: parts[4].to_string(),
            // Final free-text field: keeps any embedded delimiters.
            publisher: parts[5].to_string(),
        },
        other => return Err(DecodeError::UnknownKind(other.to_string())),
    };

    Ok(Record::Item(Item::new(title, genre, year, kind)))
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
