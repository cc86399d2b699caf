use crate::{
    Res,
    error::{Error, RequestError},
    spotify::SpotifyClient,
    types::{ArtistRef, TopTrack, TopTracksResponse, TrackItem},
};

/// Fetches the single most popular track of an artist.
///
/// Reads `GET /artists/{id}/top-tracks`, which returns up to ten tracks,
/// and reduces them to one. The scan keeps the first track holding the
/// maximum popularity, so a list with equal-popularity tracks always
/// resolves to the earliest of them and repeated runs agree with each
/// other.
///
/// # Market Handling
///
/// When the session carries a market code it is forwarded as the `market`
/// query parameter; otherwise no parameter is sent and the provider picks
/// a market itself.
///
/// # Errors
///
/// Returns [`Error::NoTopTracks`] carrying the artist's name when the
/// provider returns an empty track list (new or extremely obscure artists),
/// and [`Error::Fetch`] when the request fails.
pub async fn get_top_track(client: &SpotifyClient, artist: &ArtistRef) -> Res<TopTrack> {
    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(market) = client.market() {
        query.push(("market", market));
    }

    let response: TopTracksResponse = client
        .get_json(&format!("/artists/{}/top-tracks", artist.id), &query)
        .await
        .map_err(RequestError::into_fetch)?;

    // first max wins on ties
    let mut best: Option<TrackItem> = None;
    for track in response.tracks {
        if best.as_ref().is_none_or(|b| track.popularity > b.popularity) {
            best = Some(track);
        }
    }

    match best {
        Some(track) => Ok(TopTrack {
            name: track.name,
            popularity: track.popularity,
        }),
        None => Err(Error::NoTopTracks(artist.name.clone())),
    }
}
