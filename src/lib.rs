//! Finlens is a personal-finance analytics and export toolkit.
//!
//! The heavy lifting (storage, authentication, mutation) lives behind a
//! remote REST API. This crate fetches the raw records, normalizes them
//! into a strict internal model, and provides the two pieces of logic the
//! application is actually about:
//!
//! - the [analytics] engine, which turns flat transaction and salary lists
//!   into chart-ready monthly series, category breakdowns, and summary
//!   statistics, and
//! - the [export] pipeline, which filters and projects transaction sets
//!   into spreadsheet or paginated report artifacts.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod charts;
pub mod config;
pub mod export;
pub mod format;
pub mod logging;
pub mod model;
pub mod timezone;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The API base URL could not be parsed or joined with an endpoint path.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// The remote data store rejected the bearer token.
    #[error("the API rejected the access token, log in again to get a new one")]
    Unauthorized,

    /// The remote data store refused access to the requested resource.
    #[error("access to the requested resource was forbidden")]
    Forbidden,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The remote data store answered with an unexpected status code.
    ///
    /// The string is the response body, or a placeholder when the body
    /// could not be read.
    #[error("the API returned an error: {0}")]
    Api(String),

    /// The request never produced a usable response (connection refused,
    /// timeout, TLS failure, malformed response body).
    #[error("could not talk to the API: {0}")]
    Transport(String),

    /// An error occurred while getting the local timezone from a canonical
    /// timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// Both the primary and the simplified renderer failed to produce an
    /// export artifact.
    #[error("could not render the export: {0}")]
    RenderFailed(String),

    /// The export artifact could not be written to disk.
    #[error("could not write the export file: {0}")]
    WriteFailed(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        tracing::error!("request to the API failed: {value}");
        Error::Transport(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::WriteFailed(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::RenderFailed(value.to_string())
    }
}
