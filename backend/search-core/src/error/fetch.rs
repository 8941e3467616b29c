use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FetchError {
    /// Connect or read deadline exceeded.
    #[error("Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    /// Transport-layer failure: DNS, refused connection, interrupted body.
    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    /// The catalog answered with a non-200 status.
    #[error("Status Error: HTTP {code} {location}")]
    Status {
        code: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            FetchError::Network {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}
