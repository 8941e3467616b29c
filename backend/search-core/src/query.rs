//! Search term validation and request construction.
//!
//! [`build_request`] is pure: the same term and config always produce the
//! same descriptor, with query parameters in a stable order so tests can
//! assert on the full URL.

use crate::config::ApiConfig;
use crate::error::query::QueryError;

use common::{ErrorLocation, RedactedApiKey};

use std::fmt;
use std::panic::Location;

use url::Url;

const KEY_PARAM: &str = "key";
const MAX_RESULTS_PARAM: &str = "maxResults";
const LANG_RESTRICT_PARAM: &str = "langRestrict";
const QUERY_PARAM: &str = "q";

/// A validated, non-empty search term.
///
/// Construction trims surrounding whitespace; a value of this type is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trim and validate raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyQuery`] for empty or whitespace-only
    /// input.
    pub fn new(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::EmptyQuery {
                message: String::from("search term is empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fully-resolved request for one search invocation.
///
/// Built once per search, never mutated.
#[derive(Clone)]
pub struct RequestDescriptor {
    url: Url,
}

impl RequestDescriptor {
    pub fn url(&self) -> &Url {
        &self.url
    }
}

// Descriptors get logged at debug level; the key parameter must not leak.
impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut redacted = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(name, value)| {
                let value = if name == KEY_PARAM {
                    String::from("[REDACTED]")
                } else {
                    value.into_owned()
                };
                (name.into_owned(), value)
            })
            .collect();
        redacted
            .query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(name, value)| (name.as_str(), value.as_str())));
        write!(f, "RequestDescriptor({redacted})")
    }
}

/// Build the request descriptor for one search.
///
/// Parameters are appended in a fixed order: `key`, `maxResults`,
/// `langRestrict`, `q`. The query term is carried into `q` verbatim
/// (percent-encoding aside).
///
/// # Errors
///
/// Returns [`QueryError::BaseUrl`] if the configured base URL does not
/// parse.
pub fn build_request(
    term: &SearchTerm,
    config: &ApiConfig,
    key: &RedactedApiKey,
) -> Result<RequestDescriptor, QueryError> {
    let mut url = Url::parse(&config.base_url)?;
    url.query_pairs_mut()
        .append_pair(KEY_PARAM, key.as_str())
        .append_pair(MAX_RESULTS_PARAM, &config.max_results.to_string())
        .append_pair(LANG_RESTRICT_PARAM, &config.lang_restrict)
        .append_pair(QUERY_PARAM, term.as_str());

    Ok(RequestDescriptor { url })
}
