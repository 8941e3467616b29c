pub mod config;
pub mod fetch;
pub mod parse;
pub mod query;

use thiserror::Error;

/// Umbrella over every way a search can fail.
///
/// All variants are recoverable at the pipeline boundary; none abort the
/// process. [`crate::messages::Messages::display_message`] maps each kind
/// to a user-facing string.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Query(#[from] query::QueryError),

    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),

    #[error(transparent)]
    Parse(#[from] parse::ParseError),
}
