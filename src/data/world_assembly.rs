//! World Assembly records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::Happening;

/// Data returned by the World Assembly endpoint for one council.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorldAssemblyData {
    pub member_count: Option<u32>,
    pub delegate_count: Option<u32>,
    pub delegates: Option<Vec<String>>,
    pub members: Option<Vec<String>>,
    pub happenings: Option<Vec<Happening>>,
    pub member_log: Option<Vec<Happening>>,
    /// `None` as well when the shard was requested but nothing is at vote.
    pub resolution: Option<Resolution>,
    pub last_resolution: Option<String>,
}

/// The resolution currently at vote.
///
/// The vote track and delegate fields are only filled when the matching
/// shards were requested alongside the resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub title: String,
    pub category: String,
    /// Category specific option, e.g. the strength of the proposal.
    pub option: Option<String>,
    pub author: String,
    pub text: String,
    pub created: DateTime<Utc>,
    pub votes_for: u32,
    pub votes_against: u32,
    /// Hourly running total of votes for.
    pub vote_track_for: Option<Vec<u32>>,
    /// Hourly running total of votes against.
    pub vote_track_against: Option<Vec<u32>>,
    pub delegate_log: Option<Vec<DelegateLogEntry>>,
    pub delegate_votes_for: Option<Vec<DelegateVote>>,
    pub delegate_votes_against: Option<Vec<DelegateVote>>,
}

/// A delegate casting, changing or withdrawing a vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DelegateLogEntry {
    pub timestamp: DateTime<Utc>,
    pub nation: String,
    pub action: String,
    pub votes: u32,
}

/// Current vote of a delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DelegateVote {
    pub nation: String,
    pub votes: u32,
    pub timestamp: DateTime<Utc>,
}
