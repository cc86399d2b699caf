use serde::Deserialize;
use tabled::Tabled;

/// Bearer token from the client-credentials grant, valid for one run.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        AccessToken(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistProfile {
    pub name: String,
    pub followers: u64,
    pub popularity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTrack {
    pub name: String,
    pub popularity: u32,
}

#[derive(Tabled)]
pub struct ContenderRow {
    pub artist: String,
    pub followers: u64,
    pub popularity: u32,
    #[tabled(rename = "top track")]
    pub top_track: String,
    pub points: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<ArtistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistDetailResponse {
    pub name: String,
    pub followers: Followers,
    pub popularity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub popularity: u32,
}
