//! Head-to-head scoring rules.
//!
//! The judgment is a plain tally over three metrics: follower count, the
//! artist popularity score, and top-track popularity. Each metric awards
//! one point to the strictly greater side and nothing on equality, so the
//! final score ranges from 0-0 to 3-0 and a draw is a legitimate outcome.
//! Everything here is pure; the network layer has already produced the
//! numbers by the time this module runs.

use std::{cmp::Ordering, fmt};

use crate::types::{ArtistProfile, TopTrack};

/// One side of the matchup: an artist's profile plus their best track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contender {
    pub profile: ArtistProfile,
    pub top_track: TopTrack,
}

/// Which contender a round (or the whole matchup) went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// The three judged metrics, in the order they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Followers,
    Popularity,
    TopTrack,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Followers => write!(f, "followers"),
            Metric::Popularity => write!(f, "general popularity"),
            Metric::TopTrack => write!(f, "top track popularity"),
        }
    }
}

/// A single judged metric. `leader` is `None` when the round was tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub metric: Metric,
    pub leader: Option<Side>,
}

/// Result of a full head-to-head: the per-metric rounds and both totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub rounds: Vec<Round>,
    pub first_points: u8,
    pub second_points: u8,
}

impl Outcome {
    /// Overall winner, or `None` when the totals are level.
    pub fn winner(&self) -> Option<Side> {
        match self.first_points.cmp(&self.second_points) {
            Ordering::Greater => Some(Side::First),
            Ordering::Less => Some(Side::Second),
            Ordering::Equal => None,
        }
    }
}

/// Judges both contenders over the three metrics and tallies the points.
///
/// The rounds come back in play order (followers, general popularity, top
/// track) so a report can narrate them the same way every run.
pub fn head_to_head(first: &Contender, second: &Contender) -> Outcome {
    let rounds = vec![
        Round {
            metric: Metric::Followers,
            leader: leader(first.profile.followers, second.profile.followers),
        },
        Round {
            metric: Metric::Popularity,
            leader: leader(first.profile.popularity, second.profile.popularity),
        },
        Round {
            metric: Metric::TopTrack,
            leader: leader(first.top_track.popularity, second.top_track.popularity),
        },
    ];

    let first_points = rounds
        .iter()
        .filter(|round| round.leader == Some(Side::First))
        .count() as u8;
    let second_points = rounds
        .iter()
        .filter(|round| round.leader == Some(Side::Second))
        .count() as u8;

    Outcome {
        rounds,
        first_points,
        second_points,
    }
}

fn leader<T: Ord>(first: T, second: T) -> Option<Side> {
    match first.cmp(&second) {
        Ordering::Greater => Some(Side::First),
        Ordering::Less => Some(Side::Second),
        Ordering::Equal => None,
    }
}
