use crate::{
    Res,
    error::{Error, RequestError},
    spotify::SpotifyClient,
    types::{ArtistDetailResponse, ArtistProfile, ArtistRef, ArtistSearchResponse},
};

/// Resolves a free-text artist name to the provider's best match.
///
/// Queries the search endpoint with `type=artist&limit=1`, so the provider's
/// own relevance ranking decides which artist a loose query like "beetles"
/// means. The raw query text is passed through untouched; URL encoding is
/// the HTTP layer's job.
///
/// # Arguments
///
/// * `client` - Authenticated API session
/// * `name` - Free-text artist name as the user typed it
///
/// # Returns
///
/// The resolved artist's ID together with the provider's canonical name,
/// which is the name all later output uses.
///
/// # Errors
///
/// Returns [`Error::ArtistNotFound`] carrying the query text when the
/// search comes back empty, and [`Error::Lookup`] when the search request
/// itself fails.
pub async fn search_artist(client: &SpotifyClient, name: &str) -> Res<ArtistRef> {
    let response: ArtistSearchResponse = client
        .get_json("/search", &[("q", name), ("type", "artist"), ("limit", "1")])
        .await
        .map_err(RequestError::into_lookup)?;

    let hit = response
        .artists
        .items
        .into_iter()
        .next()
        .ok_or_else(|| Error::ArtistNotFound(name.to_string()))?;

    Ok(ArtistRef {
        id: hit.id,
        name: hit.name,
    })
}

/// Fetches follower count and popularity for a resolved artist.
///
/// Reads `GET /artists/{id}` and keeps the two judged numbers exactly as
/// the provider reports them: the total follower count and the 0-100
/// popularity score.
///
/// # Errors
///
/// Returns [`Error::Fetch`] with the provider's status and payload when
/// the request is rejected, for example for an ID that no longer exists.
pub async fn get_artist(client: &SpotifyClient, artist: &ArtistRef) -> Res<ArtistProfile> {
    let response: ArtistDetailResponse = client
        .get_json(&format!("/artists/{}", artist.id), &[])
        .await
        .map_err(RequestError::into_fetch)?;

    Ok(ArtistProfile {
        name: response.name,
        followers: response.followers.total,
        popularity: response.popularity,
    })
}
