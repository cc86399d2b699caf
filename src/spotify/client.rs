use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Res,
    config::Config,
    error::{ApiError, RequestError},
    spotify::auth,
    types::AccessToken,
};

/// An authenticated Spotify Web API session.
///
/// Holds the HTTP client, the access token, and the request defaults for
/// one program run. The only way to obtain one is [`SpotifyClient::connect`],
/// which authenticates before returning, so holding a session means
/// authentication has already succeeded and no later call can start from
/// missing credentials.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    token: AccessToken,
    api_url: String,
    market: Option<String>,
}

impl SpotifyClient {
    /// Builds the HTTP client with the configured timeout, performs the
    /// client-credentials grant, and returns a ready session.
    ///
    /// The timeout applies to every request the session makes, including
    /// the token request itself.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Authentication`] when the provider
    /// rejects the credentials and [`crate::error::Error::Http`] when the
    /// client cannot be built or the token request fails on the wire.
    pub async fn connect(config: &Config) -> Res<Self> {
        let http = Client::builder().timeout(config.http_timeout).build()?;
        let token = auth::request_token(&http, config).await?;

        Ok(SpotifyClient {
            http,
            token,
            api_url: config.api_url.clone(),
            market: config.market.clone(),
        })
    }

    /// Market code for track lookups, when one was configured.
    pub fn market(&self) -> Option<&str> {
        self.market.as_deref()
    }

    /// Issues an authenticated GET for `path` under the API base URL and
    /// decodes the JSON response into `T`.
    ///
    /// All API reads go through here: the bearer token, the query encoding,
    /// and the status check live in one place. Non-success responses are
    /// returned with the provider's payload so the caller can attribute
    /// them to its own operation.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestError> {
        let url = format!("{}{}", self.api_url, path);
        let mut request = self.http.get(&url).bearer_auth(self.token.as_str());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(RequestError::Transport)?;
        if !response.status().is_success() {
            return Err(RequestError::Status(ApiError::from_response(response).await));
        }

        response.json::<T>().await.map_err(RequestError::Transport)
    }
}
