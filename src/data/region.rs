//! Region records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::data::Happening;

/// Data returned by the region endpoint, or one region of the regions dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionData {
    pub name: Option<String>,
    pub factbook: Option<String>,
    pub nation_count: Option<u32>,
    pub nations: Option<Vec<String>>,
    pub delegate: Option<String>,
    pub delegate_votes: Option<u32>,
    pub general_assembly_vote: Option<VoteTally>,
    pub security_council_vote: Option<VoteTally>,
    pub founder: Option<String>,
    pub power: Option<String>,
    pub flag: Option<Url>,
    pub embassies: Option<Vec<Embassy>>,
    pub tags: Option<Vec<String>>,
    pub happenings: Option<Vec<Happening>>,
    pub history: Option<Vec<Happening>>,
    pub messages: Option<Vec<Message>>,
    /// `None` as well when the shard was requested but no poll is running.
    pub poll: Option<Poll>,
}

/// How the nations of a region vote on the resolution at vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub votes_for: u32,
    pub votes_against: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embassy {
    pub region: String,
    /// Missing for established embassies, otherwise e.g. "pending" or "closing".
    pub status: Option<String>,
}

/// A post on the regional message board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub timestamp: DateTime<Utc>,
    pub nation: String,
    pub text: String,
}

/// A regional poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Poll {
    pub id: u64,
    pub title: String,
    pub text: Option<String>,
    pub region: String,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub author: String,
    pub options: Vec<PollOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PollOption {
    pub id: u32,
    pub text: String,
    pub votes: u32,
}
