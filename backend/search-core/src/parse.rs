//! Tolerant JSON decoding of the catalog response.
//!
//! The upstream API is not contractually guaranteed to populate every
//! field, so decoding degrades per record: a missing title, preview link,
//! or author list substitutes a localized default instead of failing the
//! parse. Only a structurally broken top-level document is an error.

use crate::error::parse::ParseError;
use crate::messages::Messages;

use common::{BookRecord, ErrorLocation};

use std::panic::Location;

use log::debug;
use serde_json::Value;

const TOTAL_ITEMS_FIELD: &str = "totalItems";
const ITEMS_FIELD: &str = "items";
const VOLUME_INFO_FIELD: &str = "volumeInfo";
const TITLE_FIELD: &str = "title";
const PREVIEW_LINK_FIELD: &str = "previewLink";
const AUTHORS_FIELD: &str = "authors";

/// Decode a response body into book records.
///
/// Returns `Ok(None)` when the catalog reports zero results or omits the
/// `items` array - distinct from both success-with-records and failure.
///
/// # Errors
///
/// * [`ParseError::MalformedJson`] - the body is not a JSON document
/// * [`ParseError::MalformedTotal`] - `totalItems` is missing or non-numeric
pub fn parse_books(
    raw: &str,
    messages: &Messages,
) -> Result<Option<Vec<BookRecord>>, ParseError> {
    let document: Value = serde_json::from_str(raw)?;

    if total_items(&document)? == 0 {
        return Ok(None);
    }

    let Some(items) = document.get(ITEMS_FIELD).and_then(Value::as_array) else {
        debug!("Response carries no items array, treating as zero results");
        return Ok(None);
    };

    let mut books = Vec::with_capacity(items.len());
    for item in items {
        let volume_info = item.get(VOLUME_INFO_FIELD);

        let title = field_or_default(volume_info, TITLE_FIELD, &messages.no_title);
        let preview_url =
            field_or_default(volume_info, PREVIEW_LINK_FIELD, &messages.no_preview_link);
        let authors = authors_or_empty(volume_info);

        books.push(BookRecord::new(title, authors, preview_url));
    }

    Ok(Some(books))
}

/// Read `totalItems`, accepting a JSON number or a numeric string.
///
/// The API has produced both encodings over time.
fn total_items(document: &Value) -> Result<u64, ParseError> {
    let field = document.get(TOTAL_ITEMS_FIELD);

    let parsed = match field {
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ParseError::MalformedTotal {
        found: field
            .map(Value::to_string)
            .unwrap_or_else(|| String::from("nothing")),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn field_or_default(volume_info: Option<&Value>, field: &str, default: &str) -> String {
    volume_info
        .and_then(|info| info.get(field))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Absent, non-array, or partially non-string author data degrades to the
/// string entries that are present, never a parse failure.
fn authors_or_empty(volume_info: Option<&Value>) -> Vec<String> {
    volume_info
        .and_then(|info| info.get(AUTHORS_FIELD))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
