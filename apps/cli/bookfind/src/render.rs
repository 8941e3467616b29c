//! Plain-text rendering of search outcomes.

use search_core::messages::Messages;
use search_core::pipeline::SearchOutcome;

use std::fmt::Write;

/// Render one completed search for the terminal.
///
/// Failures arrive already localized; this function never inspects the
/// error kind.
pub fn render_outcome(outcome: &SearchOutcome, messages: &Messages) -> String {
    match outcome {
        SearchOutcome::Found(books) => {
            let mut out = String::new();
            for book in books {
                let authors =
                    book.display_authors(&messages.author_connector, &messages.unknown_author);
                let _ = writeln!(out, "{}", book.title);
                let _ = writeln!(out, "    by {}", authors);
                let _ = writeln!(out, "    {}", book.preview_url);
            }
            out
        }
        SearchOutcome::Empty => format!("{}\n", messages.no_results),
        SearchOutcome::Failed { message, .. } => format!("{}\n", message),
    }
}

/// Render one completed search as a JSON document, for scripts.
pub fn render_json(outcome: &SearchOutcome, messages: &Messages) -> String {
    let value = match outcome {
        SearchOutcome::Found(books) => serde_json::json!({ "books": books }),
        SearchOutcome::Empty => {
            serde_json::json!({ "books": [], "message": messages.no_results })
        }
        SearchOutcome::Failed { message, .. } => serde_json::json!({ "error": message }),
    };
    format!("{value}\n")
}
