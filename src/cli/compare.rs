use std::{
    borrow::Cow,
    io::{self, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    compare::{Contender, Outcome, Side, head_to_head},
    config::Config,
    error, info,
    spotify::{SpotifyClient, artists, tracks},
    success,
    types::{ArtistRef, ContenderRow},
    warning,
};

/// Runs the full head-to-head comparison between two artists.
///
/// This is the whole program in one command: load configuration,
/// authenticate, resolve both names, fetch both profiles and top tracks,
/// judge the matchup, and print the report. Any failing step terminates
/// the run with a message naming that step; no verdict is ever printed
/// from partial data.
///
/// # Arguments
///
/// * `first` - First artist name; prompted for interactively when `None`
/// * `second` - Second artist name; prompted for interactively when `None`
/// * `market` - Optional market code taking precedence over `SPOTIFY_MARKET`
///
/// # Execution Flow
///
/// 1. **Configuration**: Read credentials and settings from the environment
/// 2. **Names**: Take both artist names from arguments or prompts
/// 3. **Authentication**: Obtain an access token (client-credentials grant)
/// 4. **Resolution**: Resolve both free-text names to artist IDs via search
/// 5. **Profiles**: Fetch follower count and popularity for both artists
/// 6. **Top Tracks**: Fetch and reduce both top-track lists
/// 7. **Judgment**: Tally the three metrics and print the report
///
/// Requests run strictly one at a time in the order above, both contenders
/// side by side within each step.
///
/// # Error Handling
///
/// - Missing or rejected credentials terminate before any artist lookup
/// - An unresolvable name terminates before any metric is fetched
/// - Provider errors are shown with their HTTP status and payload
///
/// # Example Usage
///
/// ```bash
/// # Compare two artists directly
/// spotvs compare "daft punk" "justice"
///
/// # Prompt for both names
/// spotvs compare
///
/// # Pin the top-track market
/// spotvs compare "daft punk" "justice" --market SE
/// ```
///
/// # Output Example
///
/// ```text
/// [✓] Authenticated with Spotify.
/// [o] "daft punk" resolved to Daft Punk (4tZwfgrHOc3mvqYlEYSvVi)
/// [o] "justice" resolved to Justice (1gR0gsQYfi6joyO1dlp76N)
///
/// Head-to-head: Daft Punk vs Justice
/// ...
/// Daft Punk is the more popular artist.
/// ```
pub async fn compare(first: Option<String>, second: Option<String>, market: Option<String>) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
        }
    };

    // --market beats SPOTIFY_MARKET
    if market.is_some() {
        config.market = market;
    }

    let first_name = match first {
        Some(name) => name,
        None => prompt_artist("first"),
    };
    let second_name = match second {
        Some(name) => name,
        None => prompt_artist("second"),
    };

    let pb = spinner("Requesting access token...");
    let client = match SpotifyClient::connect(&config).await {
        Ok(client) => {
            pb.finish_and_clear();
            client
        }
        Err(err) => {
            pb.finish_and_clear();
            error!("{}", err);
        }
    };
    success!("Authenticated with Spotify.");

    let pb = spinner(format!("Resolving \"{}\"...", first_name));
    let first_artist = resolve(&client, &first_name, &pb).await;
    pb.set_message(format!("Resolving \"{}\"...", second_name));
    let second_artist = resolve(&client, &second_name, &pb).await;
    pb.finish_and_clear();

    info!(
        "\"{}\" resolved to {} ({})",
        first_name, first_artist.name, first_artist.id
    );
    info!(
        "\"{}\" resolved to {} ({})",
        second_name, second_artist.name, second_artist.id
    );

    if first_artist.id == second_artist.id {
        warning!(
            "Both names resolved to the same artist ({}); every round will tie.",
            first_artist.name
        );
    }

    let pb = spinner("Fetching artist profiles...");
    let first_profile = match artists::get_artist(&client, &first_artist).await {
        Ok(profile) => profile,
        Err(err) => {
            pb.finish_and_clear();
            error!("{}", err);
        }
    };
    let second_profile = match artists::get_artist(&client, &second_artist).await {
        Ok(profile) => profile,
        Err(err) => {
            pb.finish_and_clear();
            error!("{}", err);
        }
    };
    pb.finish_and_clear();

    let pb = spinner("Fetching top tracks...");
    let first_top = match tracks::get_top_track(&client, &first_artist).await {
        Ok(track) => track,
        Err(err) => {
            pb.finish_and_clear();
            error!("{}", err);
        }
    };
    let second_top = match tracks::get_top_track(&client, &second_artist).await {
        Ok(track) => track,
        Err(err) => {
            pb.finish_and_clear();
            error!("{}", err);
        }
    };
    pb.finish_and_clear();

    let first = Contender {
        profile: first_profile,
        top_track: first_top,
    };
    let second = Contender {
        profile: second_profile,
        top_track: second_top,
    };
    let outcome = head_to_head(&first, &second);

    println!();
    println!("{}", render_report(&first, &second, &outcome));
}

/// Renders the verdict report as one printable string.
///
/// The report contains, in order: a header naming both contenders by their
/// canonical names, a table with the judged numbers and point totals, one
/// line per round saying where its point went (or that it was tied), the
/// final score, and exactly one verdict line. Same outcome in, same string
/// out; nothing here consults a clock or random source.
pub fn render_report(first: &Contender, second: &Contender, outcome: &Outcome) -> String {
    let rows = vec![
        contender_row(first, outcome.first_points),
        contender_row(second, outcome.second_points),
    ];
    let table = Table::new(rows);

    let mut report = String::new();
    report.push_str(&format!(
        "Head-to-head: {} vs {}\n\n",
        first.profile.name, second.profile.name
    ));
    report.push_str(&table.to_string());
    report.push_str("\n\n");

    for round in &outcome.rounds {
        let line = match round.leader {
            Some(Side::First) => format!("{}: point to {}", round.metric, first.profile.name),
            Some(Side::Second) => format!("{}: point to {}", round.metric, second.profile.name),
            None => format!("{}: tied, no point awarded", round.metric),
        };
        report.push_str(&line);
        report.push('\n');
    }

    report.push_str(&format!(
        "\nFinal score: {} {} - {} {}\n",
        first.profile.name, outcome.first_points, outcome.second_points, second.profile.name
    ));
    report.push_str(&verdict(first, second, outcome));
    report
}

fn contender_row(contender: &Contender, points: u8) -> ContenderRow {
    ContenderRow {
        artist: contender.profile.name.clone(),
        followers: contender.profile.followers,
        popularity: contender.profile.popularity,
        top_track: format!(
            "{} ({})",
            contender.top_track.name, contender.top_track.popularity
        ),
        points,
    }
}

fn verdict(first: &Contender, second: &Contender, outcome: &Outcome) -> String {
    match outcome.winner() {
        Some(Side::First) => format!("{} is the more popular artist.", first.profile.name),
        Some(Side::Second) => format!("{} is the more popular artist.", second.profile.name),
        None => format!(
            "{} and {} finish level: it's a draw.",
            first.profile.name, second.profile.name
        ),
    }
}

async fn resolve(client: &SpotifyClient, name: &str, pb: &ProgressBar) -> ArtistRef {
    match artists::search_artist(client, name).await {
        Ok(artist) => artist,
        Err(err) => {
            pb.finish_and_clear();
            error!("{}", err);
        }
    }
}

fn prompt_artist(position: &str) -> String {
    print!("Enter the {} artist name: ", position);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(err) => {
            error!("Failed to read artist name: {}", err);
        }
    }
}

fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
