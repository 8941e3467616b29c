//! Search orchestration.
//!
//! [`SearchPipeline`] runs one search to completion: validate the term,
//! build the request, fetch, parse, and map the result to a
//! [`SearchOutcome`]. [`SearchSession`] wraps the pipeline in a
//! generation-tagged driver so that submitting a new search abandons the
//! previous one.
//!
//! # Staleness
//!
//! Every submission gets a monotonically increasing generation number. A
//! completed search publishes its outcome only while its generation is
//! still the newest one; otherwise the outcome is logged and dropped. The
//! published state therefore never moves backwards, regardless of the
//! order in which network calls resolve.

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::fetch::Fetcher;
use crate::messages::Messages;
use crate::parse::parse_books;
use crate::query::{self, SearchTerm};

use common::{BookRecord, RedactedApiKey};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;

/// Terminal result of one search invocation. Exactly one variant per
/// completed search - never a partial mix of records and error.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// At least one record parsed.
    Found(Vec<BookRecord>),

    /// The catalog reported zero matches.
    Empty,

    /// The search failed; `message` is already localized for display.
    Failed {
        error: Arc<SearchError>,
        message: String,
    },
}

/// Everything needed to turn a raw query string into a [`SearchOutcome`].
pub struct SearchPipeline {
    fetcher: Fetcher,
    api: ApiConfig,
    key: RedactedApiKey,
    messages: Messages,
}

impl SearchPipeline {
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP client cannot be constructed.
    pub fn new(
        api: ApiConfig,
        key: RedactedApiKey,
        messages: Messages,
    ) -> Result<Self, SearchError> {
        let fetcher = Fetcher::new(api.connect_timeout(), api.read_timeout())?;

        Ok(Self {
            fetcher,
            api,
            key,
            messages,
        })
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Run one search to completion.
    ///
    /// Empty or whitespace-only input fails immediately, without any
    /// network traffic.
    pub async fn search(&self, raw_query: &str) -> SearchOutcome {
        match self.run(raw_query).await {
            Ok(Some(books)) => {
                info!("Search returned {} records", books.len());
                SearchOutcome::Found(books)
            }
            Ok(None) => {
                info!("Search returned no results");
                SearchOutcome::Empty
            }
            Err(error) => {
                warn!("Search failed: {error}");
                let message = self.messages.display_message(&error);
                SearchOutcome::Failed {
                    error: Arc::new(error),
                    message,
                }
            }
        }
    }

    async fn run(&self, raw_query: &str) -> Result<Option<Vec<BookRecord>>, SearchError> {
        let term = SearchTerm::new(raw_query)?;
        let request = query::build_request(&term, &self.api, &self.key)?;
        let response = self.fetcher.fetch(&request).await?;
        let books = parse_books(&response.body, &self.messages)?;
        Ok(books)
    }
}

/// Progress of the most recent search, published through a watch channel.
#[derive(Debug, Clone)]
pub enum SearchUpdate {
    /// No search submitted yet.
    Idle,

    /// The given generation is in flight.
    Pending { generation: u64 },

    /// The given generation finished.
    Finished {
        generation: u64,
        outcome: SearchOutcome,
    },
}

/// Re-entrant driver around [`SearchPipeline`].
///
/// One session serves one consumer (the UI layer). Only one search is
/// ever authoritative at a time; last-writer-wins by generation, not by
/// completion order.
pub struct SearchSession {
    pipeline: Arc<SearchPipeline>,
    generation: Arc<AtomicU64>,
    updates: watch::Sender<SearchUpdate>,
}

impl SearchSession {
    pub fn new(pipeline: SearchPipeline) -> Self {
        let (updates, _) = watch::channel(SearchUpdate::Idle);
        Self {
            pipeline: Arc::new(pipeline),
            generation: Arc::new(AtomicU64::new(0)),
            updates,
        }
    }

    /// Observe search progress. Receivers see the latest update only.
    pub fn subscribe(&self) -> watch::Receiver<SearchUpdate> {
        self.updates.subscribe()
    }

    pub fn messages(&self) -> &Messages {
        self.pipeline.messages()
    }

    /// Start a new search, abandoning any search still in flight.
    ///
    /// The abandoned search keeps running until its network call resolves
    /// (its resources are released on drop), but its outcome is discarded.
    ///
    /// Returns the generation assigned to this submission.
    pub fn submit(&self, raw_query: &str) -> u64 {
        let mut generation = 0;

        // Bump the counter and publish Pending under the watch lock, so a
        // concurrently completing older task either sees the new counter
        // or is overwritten by this Pending update.
        self.updates.send_modify(|slot| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *slot = SearchUpdate::Pending { generation };
        });

        debug!("Submitted search generation {generation}");

        let pipeline = Arc::clone(&self.pipeline);
        let current = Arc::clone(&self.generation);
        let updates = self.updates.clone();
        let raw_query = raw_query.to_string();

        tokio::spawn(async move {
            let outcome = pipeline.search(&raw_query).await;

            let published = updates.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = SearchUpdate::Finished {
                    generation,
                    outcome,
                };
                true
            });

            if !published {
                debug!("Discarded stale result from search generation {generation}");
            }
        });

        generation
    }
}
