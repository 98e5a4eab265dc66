use mediarack_catalog::codec::{decode_line, encode_item, encode_rating, DecodeError, Record};
use mediarack_catalog::types::{Item, ItemKind, Rating, User};

fn movie() -> Item {
    Item::new(
        "Inception",
        "Sci-Fi",
        2010,
        ItemKind::Movie {
            director: "Nolan".into(),
            duration_minutes: 148,
        },
    )
}

#[test]
fn encode_movie_line() {
    assert_eq!(encode_item(&movie()), "Movie;Inception;Sci-Fi;2010;Nolan;148");
}

#[test]
fn encode_series_line() {
    let item = Item::new(
        "Breaking Bad",
        "Drama",
        2008,
        ItemKind::Series {
            seasons: 5,
            total_episodes: 62,
        },
    );
    assert_eq!(encode_item(&item), "Series;Breaking Bad;Drama;2008;5;62");
}

#[test]
fn encode_book_line() {
    let item = Item::new(
        "Dune",
        "Sci-Fi",
        1965,
        ItemKind::Book {
            author: "Herbert".into(),
            publisher: "Ace".into(),
        },
    );
    assert_eq!(encode_item(&item), "Book;Dune;Sci-Fi;1965;Herbert;Ace");
}

#[test]
fn encode_rating_line_has_no_title_field() {
    let rating = Rating::new(User::new("Ana", "a@x.com"), 4, "Great").unwrap();
    assert_eq!(encode_rating(&rating), "Rating;a@x.com;4;Great");
}

#[test]
fn movie_round_trips() {
    let original = movie();
    let line = encode_item(&original);
    match decode_line(&line).unwrap() {
        Record::Item(decoded) => assert_eq!(decoded, original),
        other => panic!("expected item, got {other:?}"),
    }
}

#[test]
fn book_round_trips() {
    let original = Item::new(
        "Dune",
        "Sci-Fi",
        1965,
        ItemKind::Book {
            author: "Herbert".into(),
            publisher: "Ace".into(),
        },
    );
    let line = encode_item(&original);
    match decode_line(&line).unwrap() {
        Record::Item(decoded) => assert_eq!(decoded, original),
        other => panic!("expected item, got {other:?}"),
    }
}

#[test]
fn decode_rating_keeps_comment_delimiters() {
    // The comment is the final field; embedded semicolons stay in it.
    let record = decode_line("Rating;a@x.com;5;Loved it; really; a classic").unwrap();
    match record {
        Record::Rating(rating) => {
            assert_eq!(rating.score(), 5);
            assert_eq!(rating.comment(), "Loved it; really; a classic");
            assert_eq!(rating.author().email, "a@x.com");
        }
        other => panic!("expected rating, got {other:?}"),
    }
}

#[test]
fn decode_book_publisher_keeps_delimiters() {
    let record = decode_line("Book;Dune;Sci-Fi;1965;Herbert;Ace; New York").unwrap();
    match record {
        Record::Item(item) => match item.kind {
            ItemKind::Book { publisher, .. } => assert_eq!(publisher, "Ace; New York"),
            other => panic!("expected book, got {other:?}"),
        },
        other => panic!("expected item, got {other:?}"),
    }
}

#[test]
fn decode_unknown_kind_fails() {
    let err = decode_line("Podcast;Serial;Crime;2014;x;y").unwrap_err();
    assert!(matches!(err, DecodeError::UnknownKind(kind) if kind == "Podcast"));
}

#[test]
fn decode_too_few_fields_fails() {
    let err = decode_line("Movie;Inception;Sci-Fi").unwrap_err();
    assert!(matches!(err, DecodeError::FieldCount { found: 3, .. }));
}

#[test]
fn decode_bad_year_fails() {
    let err = decode_line("Movie;Inception;Sci-Fi;soon;Nolan;148").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidNumber { field: "year", .. }));
}

#[test]
fn decode_bad_duration_fails() {
    // A semicolon in the director shifts the duration field; the shifted
    // value no longer parses, so the record is rejected rather than
    // silently misread.
    let err = decode_line("Movie;Heat;Crime;1995;Mann; Michael;170").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidNumber {
            field: "duration",
            ..
        }
    ));
}

#[test]
fn decode_out_of_range_score_fails() {
    let err = decode_line("Rating;a@x.com;9;way too good").unwrap_err();
    assert!(matches!(err, DecodeError::ScoreOutOfRange(9)));
}

#[test]
fn decoded_rating_author_uses_placeholder_name() {
    match decode_line("Rating;a@x.com;3;ok").unwrap() {
        Record::Rating(rating) => assert_eq!(rating.author().name, "unknown"),
        other => panic!("expected rating, got {other:?}"),
    }
}
