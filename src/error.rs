use thiserror::Error;

pub type Result<T> = std::result::Result<T, UmodError>;

/// Every failure a call against the umod.org API can produce. All variants
/// are terminal for the call that raised them: no retries, no partial
/// results.
#[derive(Error, Debug)]
pub enum UmodError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("non ok http status code: {0}")]
    Status(u16),

    #[error("unable to parse response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no {0} page")]
    NoSuchPage(&'static str),
}
