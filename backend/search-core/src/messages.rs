//! Localized display strings.
//!
//! An explicit value object passed to the parser and pipeline instead of
//! an ambient resource lookup. The core depends on it only for string
//! values, never logic; the defaults below are the English set, and a
//! config file can override any subset of them.

use crate::error::SearchError;
use crate::error::fetch::FetchError;
use crate::error::parse::ParseError;
use crate::error::query::QueryError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    /// Substituted for a record with no title.
    #[serde(default = "default_no_title")]
    pub no_title: String,

    /// Substituted for a record with no preview link.
    #[serde(default = "default_no_preview_link")]
    pub no_preview_link: String,

    /// Shown when a record carries no authors.
    #[serde(default = "default_unknown_author")]
    pub unknown_author: String,

    /// Joins the final author in a displayed list.
    #[serde(default = "default_author_connector")]
    pub author_connector: String,

    /// Shown when the catalog reports zero matches.
    #[serde(default = "default_no_results")]
    pub no_results: String,

    #[serde(default = "default_empty_query")]
    pub empty_query: String,

    #[serde(default = "default_timeout")]
    pub timeout: String,

    #[serde(default = "default_network_failure")]
    pub network_failure: String,

    /// Prefixed to the numeric status code of a non-200 answer.
    #[serde(default = "default_bad_status_prefix")]
    pub bad_status_prefix: String,

    #[serde(default = "default_malformed_response")]
    pub malformed_response: String,

    #[serde(default = "default_bad_request")]
    pub bad_request: String,
}

impl Messages {
    /// Map a search failure to its user-facing string.
    ///
    /// Every failure kind has exactly one message; no failure is surfaced
    /// as a raw error dump.
    pub fn display_message(&self, error: &SearchError) -> String {
        match error {
            SearchError::Query(QueryError::EmptyQuery { .. }) => self.empty_query.clone(),
            SearchError::Query(QueryError::BaseUrl { .. }) => self.bad_request.clone(),
            SearchError::Fetch(FetchError::Timeout { .. }) => self.timeout.clone(),
            SearchError::Fetch(FetchError::Network { .. }) => self.network_failure.clone(),
            SearchError::Fetch(FetchError::Status { code, .. }) => {
                format!("{}{}", self.bad_status_prefix, code)
            }
            SearchError::Parse(ParseError::MalformedJson { .. })
            | SearchError::Parse(ParseError::MalformedTotal { .. }) => {
                self.malformed_response.clone()
            }
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_title: default_no_title(),
            no_preview_link: default_no_preview_link(),
            unknown_author: default_unknown_author(),
            author_connector: default_author_connector(),
            no_results: default_no_results(),
            empty_query: default_empty_query(),
            timeout: default_timeout(),
            network_failure: default_network_failure(),
            bad_status_prefix: default_bad_status_prefix(),
            malformed_response: default_malformed_response(),
            bad_request: default_bad_request(),
        }
    }
}

fn default_no_title() -> String {
    String::from("No title")
}
fn default_no_preview_link() -> String {
    String::from("No preview link")
}
fn default_unknown_author() -> String {
    String::from("Unknown author")
}
fn default_author_connector() -> String {
    String::from("and")
}
fn default_no_results() -> String {
    String::from("No books found.")
}
fn default_empty_query() -> String {
    String::from("Please enter a search term.")
}
fn default_timeout() -> String {
    String::from("The catalog took too long to answer.")
}
fn default_network_failure() -> String {
    String::from("Problem retrieving the book results.")
}
fn default_bad_status_prefix() -> String {
    String::from("Error response code: ")
}
fn default_malformed_response() -> String {
    String::from("Problem reading the book results.")
}
fn default_bad_request() -> String {
    String::from("The catalog request could not be built.")
}
