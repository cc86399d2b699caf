use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};

use crate::{
    Res,
    config::Config,
    error::{ApiError, Error},
    types::{AccessToken, TokenResponse},
};

/// Builds the value of the `Authorization` header for the token request:
/// `Basic` followed by the standard base64 encoding of
/// `client_id:client_secret`.
fn basic_credential(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges application credentials for an access token using the OAuth 2.0
/// client-credentials grant.
///
/// This is the application-only flow: all data the comparison reads is
/// public, so no user ever authorizes anything and no refresh token exists.
/// One grant at startup covers the whole run.
///
/// # Arguments
///
/// * `http` - The HTTP client the session will keep using afterwards
/// * `config` - Source of the credentials and the token endpoint URL
///
/// # Request Shape
///
/// Sends `POST {token_url}` with the form body `grant_type=client_credentials`
/// and the Basic credential in the `Authorization` header, exactly as the
/// token endpoint expects for this grant.
///
/// # Errors
///
/// Returns [`Error::Authentication`] with the provider's status and payload
/// when the endpoint rejects the credentials (typically `400` with
/// `invalid_client`), or [`Error::Http`] when the request itself fails.
pub async fn request_token(http: &Client, config: &Config) -> Res<AccessToken> {
    let response = http
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            basic_credential(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Authentication(ApiError::from_response(response).await));
    }

    let token: TokenResponse = response.json().await?;
    Ok(AccessToken::new(token.access_token))
}
