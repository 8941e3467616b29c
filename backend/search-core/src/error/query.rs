use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("Empty Query Error: {message} {location}")]
    EmptyQuery {
        message: String,
        location: ErrorLocation,
    },

    #[error("Base URL Error: {message} {location}")]
    BaseUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for QueryError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        QueryError::BaseUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
