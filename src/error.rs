//! Failure taxonomy for a single run.
//!
//! Every failure belongs to exactly one of four kinds, each with its own
//! process exit code, so callers scripting around the binary can tell a
//! network problem apart from a bad document or a typo in the arguments.

use thiserror::Error;

/// Top-level failure of a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The feed could not be retrieved over HTTP.
    #[error("cannot get the daily rate feed")]
    Fetch(#[from] FetchError),

    /// The feed document is not well-formed XML.
    #[error("cannot parse the daily rate feed")]
    Parse(#[source] serde_xml_rs::Error),

    /// The document is well-formed but does not have the expected shape.
    #[error("cannot extract rates from the daily rate feed")]
    Extract(#[from] ExtractError),

    /// The given arguments cannot be acted on.
    #[error("cannot understand the given arguments")]
    Input(#[from] InputError),
}

impl Error {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Fetch(_) => 1,
            Error::Parse(_) => 2,
            Error::Extract(_) => 3,
            Error::Input(_) => 4,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("feed responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// The document did not match the fixed `Envelope > Cube > Cube > Cube`
/// shape. Extraction is all or nothing; the first mismatch aborts it.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no {0} element in the feed document")]
    MissingElement(&'static str),

    #[error("a rate entry has no currency attribute")]
    MissingCurrency,

    #[error("the rate entry for {0} has no rate attribute")]
    MissingRate(String),

    #[error("the rate for {code} is not a number: {value:?}")]
    UnparsableRate { code: String, value: String },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected <AMOUNT> <FROM> <TO>")]
    MissingArguments,

    #[error("amount {0:?} is not a number")]
    BadAmount(String),

    #[error("no rate for {0} in today's feed")]
    UnknownCurrency(String),

    #[error("cannot load configuration: {0:#}")]
    Config(anyhow::Error),
}
