use thiserror::Error;

/// Failures of the availability round trip that the user gets to see.
#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("availability request failed: {0}")]
    Request(reqwest::Error),

    #[error("availability request timed out")]
    Timeout,

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("could not decode availability response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid availability endpoint: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for AvailabilityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AvailabilityError::Timeout
        } else if let Some(status) = err.status() {
            AvailabilityError::Status(status.as_u16())
        } else {
            AvailabilityError::Request(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} is not a valid url: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}
