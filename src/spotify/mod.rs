//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! comparison command, implementing authentication, artist resolution, and
//! metric retrieval. It serves as the integration layer between the CLI and
//! Spotify's services, handling all HTTP communication, the token grant,
//! and error attribution.
//!
//! ## Overview
//!
//! The Spotify module implements exactly the API surface a head-to-head
//! comparison needs. It abstracts away HTTP requests, the token exchange,
//! and response decoding, providing a clean Rust interface for the
//! higher-level comparison logic.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Comparison)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Client Credentials)
//!     ├── Session (authenticated GET + JSON decoding)
//!     ├── Artist Operations (Search, Profile)
//!     └── Track Operations (Top Tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant:
//! - **Application-Only Access**: All data used here is public, so no user
//!   authorization or browser round trip is involved
//! - **Basic Credential**: Sends `client_id:client_secret` base64-encoded
//!   in the `Authorization` header of the token request
//! - **Single Grant Per Run**: One token is obtained at startup and reused
//!   for every request of the run; there is no refresh handling
//!
//! ### Session Module
//!
//! [`client`] - Owns the authenticated session:
//! - **One Construction Path**: [`client::SpotifyClient::connect`] builds
//!   the HTTP client with the configured timeout and authenticates before
//!   returning, so a session in hand is always a usable one
//! - **Shared Request Path**: Every API call goes through one authenticated
//!   GET helper that attaches the bearer token and decodes JSON
//! - **Status Discipline**: Non-success responses are captured with their
//!   payload before any decoding is attempted
//!
//! ### Artist Operations Module
//!
//! [`artists`] - Handles artist-related API operations:
//! - **Name Resolution**: Resolves free text to an artist ID via search,
//!   trusting the provider's ranking by requesting a single result
//! - **Profile Retrieval**: Fetches follower count and the 0-100
//!   popularity score for a resolved artist
//!
//! ### Track Operations Module
//!
//! [`tracks`] - Manages top-track retrieval:
//! - **Best Track Selection**: Reduces the provider's top-track list to the
//!   single most popular track, first one winning on equal popularity
//! - **Market Handling**: Forwards the configured market code when present
//!   and otherwise lets the provider choose
//!
//! ## Error Handling Philosophy
//!
//! A comparison is all-or-nothing: a verdict computed from partial data
//! would be misleading, so the first failing request aborts the run. To
//! make that failure diagnosable, each operation maps shared request
//! failures into its own error variant (authentication, lookup, fetch) and
//! keeps the provider's status and body verbatim.
//!
//! ## API Coverage
//!
//! The module covers the following Spotify Web API endpoints:
//!
//! ### Authentication
//! - `POST /api/token` - Client-credentials token grant
//!
//! ### Artist Information
//! - `GET /search` - Artist search with `type=artist&limit=1`
//! - `GET /artists/{id}` - Follower count and popularity
//! - `GET /artists/{id}/top-tracks` - Most popular tracks, optionally per market
//!
//! ## Usage Patterns
//!
//! ```rust
//! let config = Config::from_env()?;
//! let client = SpotifyClient::connect(&config).await?;
//!
//! let artist = artists::search_artist(&client, "daft punk").await?;
//! let profile = artists::get_artist(&client, &artist).await?;
//! let top = tracks::get_top_track(&client, &artist).await?;
//! ```
//!
//! ## Request Policy
//!
//! Requests are issued strictly one at a time in a fixed order (resolve
//! both names, then both profiles, then both top tracks). The volume is
//! six GETs per run, which keeps the program trivially inside Spotify's
//! rate limits without retry machinery.
//!
//! ## Dependencies
//!
//! The module relies on several external crates:
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde** - JSON deserialization of API responses
//! - **base64** - Encoding of the Basic authorization credential
//! - **tokio** - Async runtime
//!
//! ## Security Considerations
//!
//! - **Credentials Stay Local**: The client secret only ever appears in
//!   the token request's `Authorization` header
//! - **HTTPS Only**: All production API communication uses HTTPS
//! - **No Token Persistence**: Tokens live in memory for one run and are
//!   never written to disk

pub mod artists;
pub mod auth;
pub mod client;
pub mod tracks;

pub use client::SpotifyClient;
