use thiserror::Error;

/// Failure modes of one analysis cycle.
///
/// All variants are terminal for the cycle that produced them: the pipeline
/// never retries on its own, the caller re-runs it (e.g. via a manual
/// refresh) if it wants another attempt.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The request failed on the wire or the provider answered with a
    /// non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider payload did not match the expected two-element
    /// `[meta, records]` envelope.
    #[error("unexpected provider payload: {0}")]
    Decode(String),

    /// Well-formed response, but zero records for the selection.
    #[error("no data available for the selected parameters")]
    EmptyResult,

    /// Records were present but every value was null, so nothing survived
    /// normalization. Distinct from [`Error::EmptyResult`]: the payload was
    /// non-empty, just unusable.
    #[error("no valid data points found")]
    NoValidData,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
