//! The book record produced by a catalog search.

use serde::Serialize;

/// One search result row: title, authors, and a preview link.
///
/// Constructed only by the response parser, which substitutes localized
/// defaults for missing fields, so `title` and `preview_url` are never
/// empty here. The author list may be empty when the catalog entry
/// carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub preview_url: String,
}

impl BookRecord {
    pub fn new(title: String, authors: Vec<String>, preview_url: String) -> Self {
        Self {
            title,
            authors,
            preview_url,
        }
    }

    /// Render the author list for display.
    ///
    /// `unknown` is shown when the list is empty; `connector` joins the
    /// final author ("Levitt, Dubner and Smith"). Both come from the
    /// caller's localization strings.
    pub fn display_authors(&self, connector: &str, unknown: &str) -> String {
        let length = self.authors.len();
        if length == 0 {
            return unknown.to_string();
        }

        let mut result = String::new();
        for (i, author) in self.authors.iter().enumerate() {
            if i == 0 {
                result.push_str(author);
            } else if i == length - 1 {
                result.push(' ');
                result.push_str(connector);
                result.push(' ');
                result.push_str(author);
            } else {
                result.push_str(", ");
                result.push_str(author);
            }
        }
        result
    }
}
