use std::{collections::HashMap, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};

use spotvs::cli::render_report;
use spotvs::compare::{Contender, head_to_head};
use spotvs::config::Config;
use spotvs::error::Error;
use spotvs::spotify::{SpotifyClient, artists, auth, tracks};
use spotvs::types::ArtistRef;

const CLIENT_ID: &str = "test-client-id";
const CLIENT_SECRET: &str = "test-client-secret";

// Helper function to serve a mock API on an ephemeral port
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// Helper function to build a config pointing at the mock server
fn create_test_config(base: &str) -> Config {
    Config {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        api_url: base.to_string(),
        token_url: format!("{}/api/token", base),
        market: None,
        http_timeout: Duration::from_secs(5),
    }
}

// Helper function to build an already-resolved artist reference
fn create_artist_ref(id: &str, name: &str) -> ArtistRef {
    ArtistRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

async fn token_endpoint(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", CLIENT_ID, CLIENT_SECRET))
    );

    // The grant only succeeds with the exact base64 Basic credential
    if authorization != expected {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_client"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "access_token": "mock-access-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })),
    )
}

async fn search_endpoint(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let items = match params.get("q").map(String::as_str) {
        Some("alpha") => json!([{"id": "artist-alpha", "name": "Alpha"}]),
        Some("beta") => json!([{"id": "artist-beta", "name": "Beta"}]),
        Some("ambiguous") => json!([
            {"id": "artist-primary", "name": "Primary Match"},
            {"id": "artist-secondary", "name": "Secondary Match"}
        ]),
        _ => json!([]),
    };

    Json(json!({"artists": {"items": items}}))
}

async fn artist_endpoint(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    match id.as_str() {
        "artist-alpha" => (
            StatusCode::OK,
            Json(json!({
                "id": id,
                "name": "Alpha",
                "followers": {"href": null, "total": 1000},
                "popularity": 50,
                "genres": ["electro"]
            })),
        ),
        "artist-beta" => (
            StatusCode::OK,
            Json(json!({
                "id": id,
                "name": "Beta",
                "followers": {"href": null, "total": 500},
                "popularity": 80,
                "genres": ["pop"]
            })),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"status": 404, "message": "non existing id"}})),
        ),
    }
}

async fn top_tracks_endpoint(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    match id.as_str() {
        "artist-alpha" => (
            StatusCode::OK,
            Json(json!({"tracks": [{"name": "Anthem", "popularity": 70}]})),
        ),
        "artist-beta" => (
            StatusCode::OK,
            Json(json!({"tracks": [{"name": "Ballad", "popularity": 60}]})),
        ),
        "artist-tied" => (
            StatusCode::OK,
            Json(json!({"tracks": [
                {"name": "Opener", "popularity": 40},
                {"name": "Middle Hit", "popularity": 90},
                {"name": "Late Hit", "popularity": 90}
            ]})),
        ),
        "artist-silent" => (StatusCode::OK, Json(json!({"tracks": []}))),
        "artist-echo" => {
            // Echoes the market parameter back as the track name
            let market = params
                .get("market")
                .cloned()
                .unwrap_or_else(|| "no market".to_string());
            (
                StatusCode::OK,
                Json(json!({"tracks": [{"name": market, "popularity": 10}]})),
            )
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"status": 404, "message": "non existing id"}})),
        ),
    }
}

fn mock_api() -> Router {
    Router::new()
        .route("/api/token", post(token_endpoint))
        .route("/search", get(search_endpoint))
        .route("/artists/{id}", get(artist_endpoint))
        .route("/artists/{id}/top-tracks", get(top_tracks_endpoint))
}

#[tokio::test]
async fn test_request_token_with_basic_credential() {
    let base = serve(mock_api()).await;
    let config = create_test_config(&base);
    let http = reqwest::Client::new();

    let token = auth::request_token(&http, &config).await.unwrap();

    assert_eq!(token.as_str(), "mock-access-token");
}

#[tokio::test]
async fn test_rejected_credentials_abort_before_any_lookup() {
    let base = serve(mock_api()).await;
    let mut config = create_test_config(&base);
    config.client_secret = "wrong-secret".to_string();

    // Connecting is the only way to get a session, so a rejected grant
    // means no artist request can ever be issued
    let err = SpotifyClient::connect(&config).await.unwrap_err();

    match err {
        Error::Authentication(api) => {
            assert_eq!(api.status, 400);
            assert!(api.body.contains("invalid_client"));
        }
        other => panic!("expected authentication error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_resolves_to_first_hit() {
    let base = serve(mock_api()).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let artist = artists::search_artist(&client, "ambiguous").await.unwrap();

    // The provider's ranking decides; the first item wins
    assert_eq!(artist, create_artist_ref("artist-primary", "Primary Match"));
}

#[tokio::test]
async fn test_search_unknown_name_is_artist_not_found() {
    let base = serve(mock_api()).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let err = artists::search_artist(&client, "nobody plays this")
        .await
        .unwrap_err();

    match err {
        Error::ArtistNotFound(name) => assert_eq!(name, "nobody plays this"),
        other => panic!("expected artist-not-found error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_failure_is_lookup_error() {
    async fn search_down() -> (StatusCode, Json<Value>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"status": 500, "message": "service unavailable"}})),
        )
    }

    let app = Router::new()
        .route("/api/token", post(token_endpoint))
        .route("/search", get(search_down));
    let base = serve(app).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let err = artists::search_artist(&client, "alpha").await.unwrap_err();

    match err {
        Error::Lookup(api) => {
            assert_eq!(api.status, 500);
            assert!(api.body.contains("service unavailable"));
        }
        other => panic!("expected lookup error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_artist_reads_followers_and_popularity() {
    let base = serve(mock_api()).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let profile = artists::get_artist(&client, &create_artist_ref("artist-alpha", "Alpha"))
        .await
        .unwrap();

    assert_eq!(profile.name, "Alpha");
    assert_eq!(profile.followers, 1000);
    assert_eq!(profile.popularity, 50);
}

#[tokio::test]
async fn test_get_artist_unknown_id_is_fetch_error() {
    let base = serve(mock_api()).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let err = artists::get_artist(&client, &create_artist_ref("artist-ghost", "Ghost"))
        .await
        .unwrap_err();

    match err {
        Error::Fetch(api) => assert_eq!(api.status, 404),
        other => panic!("expected fetch error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_top_track_prefers_first_on_equal_popularity() {
    let base = serve(mock_api()).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let top = tracks::get_top_track(&client, &create_artist_ref("artist-tied", "Tied"))
        .await
        .unwrap();

    // Popularities are [40, 90, 90]; the earlier of the two maxima wins
    assert_eq!(top.name, "Middle Hit");
    assert_eq!(top.popularity, 90);
}

#[tokio::test]
async fn test_empty_top_tracks_is_distinct_error() {
    let base = serve(mock_api()).await;
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();

    let err = tracks::get_top_track(&client, &create_artist_ref("artist-silent", "Silent"))
        .await
        .unwrap_err();

    match err {
        Error::NoTopTracks(name) => assert_eq!(name, "Silent"),
        other => panic!("expected no-top-tracks error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_market_is_forwarded_only_when_configured() {
    let base = serve(mock_api()).await;

    // Without a market nothing is sent and the provider decides
    let client = SpotifyClient::connect(&create_test_config(&base)).await.unwrap();
    let top = tracks::get_top_track(&client, &create_artist_ref("artist-echo", "Echo"))
        .await
        .unwrap();
    assert_eq!(top.name, "no market");

    // With a market the code is passed through verbatim
    let mut config = create_test_config(&base);
    config.market = Some("SE".to_string());
    let client = SpotifyClient::connect(&config).await.unwrap();
    let top = tracks::get_top_track(&client, &create_artist_ref("artist-echo", "Echo"))
        .await
        .unwrap();
    assert_eq!(top.name, "SE");
}

// Helper function running a full matchup against the mock API
async fn run_matchup(config: &Config) -> String {
    let client = SpotifyClient::connect(config).await.unwrap();

    let first_artist = artists::search_artist(&client, "alpha").await.unwrap();
    let second_artist = artists::search_artist(&client, "beta").await.unwrap();

    let first = Contender {
        profile: artists::get_artist(&client, &first_artist).await.unwrap(),
        top_track: tracks::get_top_track(&client, &first_artist).await.unwrap(),
    };
    let second = Contender {
        profile: artists::get_artist(&client, &second_artist).await.unwrap(),
        top_track: tracks::get_top_track(&client, &second_artist).await.unwrap(),
    };

    let outcome = head_to_head(&first, &second);
    render_report(&first, &second, &outcome)
}

#[tokio::test]
async fn test_full_matchup_is_deterministic() {
    let base = serve(mock_api()).await;
    let config = create_test_config(&base);

    let once = run_matchup(&config).await;
    let twice = run_matchup(&config).await;

    // Identical provider responses produce byte-identical reports
    assert_eq!(once, twice);

    // Alpha takes followers and top track, Beta takes popularity
    assert!(once.contains("Final score: Alpha 2 - 1 Beta"));
    assert_eq!(once.matches("is the more popular artist.").count(), 1);
    assert!(once.contains("Alpha is the more popular artist."));
}
