use common::ErrorLocation;

use thiserror::Error;

/// Errors that abort the CLI before or between searches.
///
/// Search failures themselves are not errors here - they are rendered
/// from the pipeline's localized outcome and the program keeps running.
#[derive(Debug, Error)]
pub enum CliError {
    /// Startup problem: directories, logger, terminal I/O.
    #[error("Setup Error: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },

    /// Error from search-core operations (config, key, pipeline).
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}
