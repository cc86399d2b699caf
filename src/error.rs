use std::fmt;

use thiserror::Error;

/// Status and body of a non-success response from the Spotify Web API.
///
/// The body is kept verbatim so the provider's own error description (for
/// example `{"error": "invalid_client"}`) survives into the message shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

impl ApiError {
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError { status, body }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "HTTP {}", self.status)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.body)
        }
    }
}

/// Everything that can abort a comparison run. Each network operation
/// fails with its own variant so the first failing step is always
/// identifiable from the message alone.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required configuration value {0}")]
    MissingConfig(&'static str),

    #[error("invalid configuration value {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    #[error("authentication with Spotify failed: {0}")]
    Authentication(ApiError),

    #[error("artist search failed: {0}")]
    Lookup(ApiError),

    #[error("no artist found matching '{0}'")]
    ArtistNotFound(String),

    #[error("fetching artist data failed: {0}")]
    Fetch(ApiError),

    #[error("no top tracks available for {0}")]
    NoTopTracks(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Failure of a single authenticated request, before it has been attributed
/// to the operation that issued it. Transport problems keep their reqwest
/// error; non-success statuses carry the provider payload.
#[derive(Debug)]
pub(crate) enum RequestError {
    Transport(reqwest::Error),
    Status(ApiError),
}

impl RequestError {
    pub(crate) fn into_lookup(self) -> Error {
        match self {
            RequestError::Transport(err) => Error::Http(err),
            RequestError::Status(api) => Error::Lookup(api),
        }
    }

    pub(crate) fn into_fetch(self) -> Error {
        match self {
            RequestError::Transport(err) => Error::Http(err),
            RequestError::Status(api) => Error::Fetch(api),
        }
    }
}
