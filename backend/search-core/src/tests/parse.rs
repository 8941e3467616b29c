// Unit tests for tolerant response decoding

use crate::error::parse::ParseError;
use crate::messages::Messages;
use crate::parse::parse_books;

fn messages() -> Messages {
    Messages::default()
}

/// **VALUE**: Verifies the happy path decodes every field.
///
/// **WHY THIS MATTERS**: This is the canonical catalog answer; every
/// downstream display path consumes exactly these three fields.
///
/// **BUG THIS CATCHES**: Would catch renamed JSON field constants or a
/// record built from the wrong nesting level.
#[test]
fn given_complete_volume_when_parsed_then_returns_record() {
    let body = r#"{
        "totalItems": 1,
        "items": [{
            "volumeInfo": {
                "title": "Freakonomics",
                "authors": ["Steven D. Levitt", "Stephen J. Dubner"],
                "previewLink": "http://example.com/book"
            }
        }]
    }"#;

    let books = parse_books(body, &messages())
        .expect("parse should succeed")
        .expect("one record expected");

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Freakonomics");
    assert_eq!(
        books[0].authors,
        vec!["Steven D. Levitt", "Stephen J. Dubner"]
    );
    assert_eq!(books[0].preview_url, "http://example.com/book");
}

/// **VALUE**: Verifies zero totalItems means "no results", not an empty
/// success.
///
/// **WHY THIS MATTERS**: The UI distinguishes "No books found." from an
/// empty list rendered silently. `Ok(None)` is the contract for the
/// former; `Ok(Some(vec![]))` must never appear.
///
/// **BUG THIS CATCHES**: Would catch the zero check being dropped so the
/// parser walks an absent items array into `Some(vec![])`.
#[test]
fn given_zero_total_when_parsed_then_returns_none() {
    let result = parse_books(r#"{"totalItems": 0}"#, &messages()).unwrap();

    assert!(result.is_none());
}

/// **VALUE**: Verifies a string-typed totalItems still counts.
///
/// **WHY THIS MATTERS**: The catalog has produced both `"totalItems": 5`
/// and `"totalItems": "5"` over time; the original consumer parsed the
/// string form.
///
/// **BUG THIS CATCHES**: Would catch a strict `as_u64` read rejecting the
/// string encoding.
#[test]
fn given_string_total_when_parsed_then_accepted() {
    let zero = parse_books(r#"{"totalItems": "0"}"#, &messages()).unwrap();
    assert!(zero.is_none());

    let body = r#"{
        "totalItems": "1",
        "items": [{"volumeInfo": {"title": "Freakonomics"}}]
    }"#;
    let books = parse_books(body, &messages()).unwrap().unwrap();
    assert_eq!(books.len(), 1);
}

/// **VALUE**: Verifies missing/non-numeric totalItems is malformed, not
/// empty.
///
/// **WHY THIS MATTERS**: A response without a result count is structurally
/// broken. Reporting it as "no results" would hide upstream breakage from
/// the user and from logs.
///
/// **BUG THIS CATCHES**: Would catch the field defaulting to zero.
#[test]
fn given_bad_total_when_parsed_then_fails_malformed_total() {
    assert!(matches!(
        parse_books(r#"{"items": []}"#, &messages()),
        Err(ParseError::MalformedTotal { .. })
    ));
    assert!(matches!(
        parse_books(r#"{"totalItems": "many"}"#, &messages()),
        Err(ParseError::MalformedTotal { .. })
    ));
    assert!(matches!(
        parse_books(r#"{"totalItems": -3}"#, &messages()),
        Err(ParseError::MalformedTotal { .. })
    ));
}

/// **VALUE**: Verifies a positive count with no items array is "no
/// results".
///
/// **WHY THIS MATTERS**: The catalog occasionally reports a nonzero count
/// while omitting the page of items. There is nothing to show, and
/// nothing worth failing over.
///
/// **BUG THIS CATCHES**: Would catch the missing-items branch turning into
/// a parse failure.
#[test]
fn given_missing_items_when_parsed_then_returns_none() {
    let result = parse_books(r#"{"totalItems": 3}"#, &messages()).unwrap();

    assert!(result.is_none());
}

/// **VALUE**: Verifies per-record defaulting for missing optional fields.
///
/// **WHY THIS MATTERS**: Tolerant parsing is the parser's whole job: a
/// record missing its title, link, or authors must still render, with the
/// localized defaults substituted.
///
/// **BUG THIS CATCHES**: Would catch a missing field failing the record
/// or the whole parse instead of defaulting.
#[test]
fn given_missing_fields_when_parsed_then_defaults_substituted() {
    let body = r#"{
        "totalItems": 1,
        "items": [{"volumeInfo": {}}]
    }"#;

    let books = parse_books(body, &messages()).unwrap().unwrap();

    assert_eq!(books[0].title, "No title");
    assert_eq!(books[0].preview_url, "No preview link");
    assert!(books[0].authors.is_empty());
}

/// **VALUE**: Verifies one bad record never aborts the rest of the page.
///
/// **WHY THIS MATTERS**: Graceful degradation is per record. A single
/// malformed entry in the middle of the page must not cost the user the
/// other results.
///
/// **BUG THIS CATCHES**: Would catch an early return or `?` inside the
/// item loop.
#[test]
fn given_mixed_records_when_parsed_then_all_records_survive() {
    let body = r#"{
        "totalItems": 3,
        "items": [
            {"volumeInfo": {"title": "First", "authors": "not-an-array"}},
            {"noVolumeInfo": true},
            {"volumeInfo": {"title": "Third", "authors": ["A", 42, "B"]}}
        ]
    }"#;

    let books = parse_books(body, &messages()).unwrap().unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books[0].title, "First");
    assert!(books[0].authors.is_empty(), "non-array authors degrade to empty");
    assert_eq!(books[1].title, "No title");
    assert_eq!(books[2].authors, vec!["A", "B"], "non-string entries are skipped");
}

/// **VALUE**: Verifies malformed JSON is a typed failure.
///
/// **WHY THIS MATTERS**: A truncated or HTML error body must map to the
/// MalformedJson kind so the user sees the parse-failure message, not a
/// panic or a silent empty list.
///
/// **BUG THIS CATCHES**: Would catch an unwrap on serde_json::from_str.
#[test]
fn given_invalid_json_when_parsed_then_fails_malformed_json() {
    assert!(matches!(
        parse_books("not json at all", &messages()),
        Err(ParseError::MalformedJson { .. })
    ));
    assert!(matches!(
        parse_books(r#"{"totalItems": 1, "items": ["#, &messages()),
        Err(ParseError::MalformedJson { .. })
    ));
}

/// **VALUE**: Verifies defaults come from the supplied Messages value.
///
/// **WHY THIS MATTERS**: Localization is an explicit collaborator; the
/// parser must take its strings from the argument, not from constants.
///
/// **BUG THIS CATCHES**: Would catch hardcoded English defaults inside
/// the parser.
#[test]
fn given_localized_messages_when_parsed_then_their_defaults_used() {
    let mut localized = Messages::default();
    localized.no_title = String::from("Sin titulo");
    localized.no_preview_link = String::from("Sin enlace");

    let body = r#"{"totalItems": 1, "items": [{"volumeInfo": {}}]}"#;
    let books = parse_books(body, &localized).unwrap().unwrap();

    assert_eq!(books[0].title, "Sin titulo");
    assert_eq!(books[0].preview_url, "Sin enlace");
}
