//! Query-and-parse pipeline for the book catalog search.
//!
//! The crate turns a raw query string into a typed outcome in four steps:
//! validate the term, build the request URL, fetch the response body, and
//! tolerantly decode it into [`common::BookRecord`] values. The
//! [`pipeline::SearchSession`] wraps those steps in a generation-tagged
//! driver so a newly submitted search abandons the previous one.
//!
//! UI concerns (rendering, loading indicators, connectivity pre-checks,
//! opening preview links) belong to the caller.

pub mod config;
pub mod error;
pub mod fetch;
pub mod messages;
pub mod parse;
pub mod pipeline;
pub mod query;

#[cfg(test)]
mod tests;

pub const BOOKS_API_HOSTNAME: &str = "www.googleapis.com";
pub const BOOKS_API_BASE_URL: &str =
    const_format::concatcp!("https://", BOOKS_API_HOSTNAME, "/books/v1/volumes");
