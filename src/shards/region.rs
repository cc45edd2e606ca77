//! Region endpoint shards.

use std::collections::BTreeSet;

shard_catalog! {
    /// Shards of the region endpoint.
    RegionShard("region shard") {
        Name => "name",
        Factbook => "factbook",
        NationCount => "numnations",
        Nations => "nations",
        Delegate => "delegate",
        DelegateVotes => "delegatevotes",
        GeneralAssemblyVote => "gavote",
        SecurityCouncilVote => "scvote",
        Founder => "founder",
        Power => "power",
        Flag => "flag",
        Embassies => "embassies",
        Tags => "tags",
        Happenings => "happenings",
        History => "history",
        Poll => "poll",
        /// Regional message board, always sent last with its offset.
        Messages => "messages",
    }
}

/// Shards requested from the region endpoint.
///
/// # Examples
///
/// ```
/// use nsapi::shards::{RegionShard, RegionShards};
///
/// let shards = RegionShards::new()
///     .with(RegionShard::Messages)
///     .with_messages_offset(20);
///
/// assert_eq!(shards.messages_offset(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionShards {
    shards: BTreeSet<RegionShard>,
    messages_offset: u32,
}

shard_toggles!(RegionShards, RegionShard);

impl RegionShards {
    /// Create a selector with no shard enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector with every shard enabled.
    pub fn all() -> Self {
        RegionShard::ALL.iter().copied().collect()
    }

    /// Set the number of message board posts to skip.
    pub fn with_messages_offset(mut self, offset: u32) -> Self {
        self.messages_offset = offset;
        self
    }

    /// Number of message board posts to skip.
    pub fn messages_offset(&self) -> u32 {
        self.messages_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_is_last_in_catalog() {
        assert_eq!(RegionShard::ALL.last(), Some(&RegionShard::Messages));
    }

    #[test]
    fn test_default_offset() {
        assert_eq!(RegionShards::all().messages_offset(), 0);
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            "delegatevotes".parse::<RegionShard>().unwrap(),
            RegionShard::DelegateVotes
        );
        assert!("messages;offset=2".parse::<RegionShard>().is_err());
    }
}
