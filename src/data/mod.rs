//! Typed records decoded from API responses.
//!
//! Every field of a top-level record is an [`Option`]: it is `None` when the
//! matching shard was not requested or the server left the node out, which is
//! distinct from an empty list or a zero value. Fields of nested records are
//! plain values because the server always sends them with their parent.
//!
//! # Modules
//!
//! - `nation` - [`NationData`] and its sub-records
//! - `region` - [`RegionData`], embassies, messages and polls
//! - `world` - [`WorldData`]
//! - `world_assembly` - [`WorldAssemblyData`] and the resolution at vote

use chrono::{DateTime, Utc};
use serde::Serialize;

mod nation;
mod region;
mod world;
mod world_assembly;

pub use crate::data::nation::{
    CauseOfDeath, CensusScore, DispatchMetadata, FreedomDescriptions, FreedomScores,
    GovernmentBudget, NationData,
};
pub use crate::data::region::{Embassy, Message, Poll, PollOption, RegionData, VoteTally};
pub use crate::data::world::{WorldData, WorldHappening};
pub use crate::data::world_assembly::{
    DelegateLogEntry, DelegateVote, Resolution, WorldAssemblyData,
};

/// A dated event: a happening, a history entry or a World Assembly log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Happening {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}
