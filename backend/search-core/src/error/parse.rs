use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ParseError {
    /// The response body is not a valid JSON document.
    #[error("Malformed JSON Error: {message} {location}")]
    MalformedJson {
        message: String,
        location: ErrorLocation,
    },

    /// `totalItems` is missing or not a number.
    #[error("Malformed Total Error: found {found} {location}")]
    MalformedTotal {
        found: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for ParseError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ParseError::MalformedJson {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
