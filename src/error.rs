//! Fatal error kinds
//!
//! Only conditions that make every subsequent operation pointless live here:
//! missing configuration and an unreachable endpoint. They travel up to the
//! entry point as values; `main` decides to terminate. Everything else
//! (validation failures, remote rejections, per-file upload errors) is logged
//! at the call site and reported as a `None`/`false` sentinel instead.

use thiserror::Error;

/// Crate-wide result alias; the error side is always a fatal condition.
pub type Result<T> = std::result::Result<T, Error>;

/// Unrecoverable client-side failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is absent or blank.
    #[error("missing \"{0}\" in the environment (or .env file)")]
    MissingEnv(&'static str),

    /// The configured base endpoint is empty.
    #[error("missing \"BASE_URL\" in the environment (or .env file)")]
    MissingBaseUrl,

    /// The token cannot be carried in an Authorization header.
    #[error("\"USER_TOKEN\" is not a valid header value")]
    InvalidToken,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The configured endpoint could not be reached at all.
    #[error("incorrect \"BASE_URL\": cannot reach {url}")]
    Unreachable {
        /// The base endpoint that was being contacted.
        url: String,
        /// The underlying connection failure.
        #[source]
        source: reqwest::Error,
    },
}
