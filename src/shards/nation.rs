//! Nation endpoint shards.

use std::collections::BTreeSet;

shard_catalog! {
    /// Shards of the nation endpoint.
    NationShard("nation shard") {
        Name => "name",
        FullName => "fullname",
        Type => "type",
        Motto => "motto",
        Category => "category",
        /// World Assembly membership status.
        WorldAssemblyStatus => "wa",
        Endorsements => "endorsements",
        GeneralAssemblyVote => "gavote",
        SecurityCouncilVote => "scvote",
        FreedomDescriptions => "freedom",
        Region => "region",
        Population => "population",
        Tax => "tax",
        Animal => "animal",
        AnimalTrait => "animaltrait",
        Currency => "currency",
        Flag => "flag",
        MajorIndustry => "majorindustry",
        Crime => "crime",
        Sensibilities => "sensibilities",
        GovernmentPriority => "govtpriority",
        GovernmentBudget => "govt",
        GovernmentDescription => "govtdesc",
        IndustryDescription => "industrydesc",
        Notable => "notable",
        Admirable => "admirable",
        Founded => "founded",
        FirstLogin => "firstlogin",
        LastLogin => "lastlogin",
        LastActivity => "lastactivity",
        Influence => "influence",
        FreedomScores => "freedomscores",
        PublicSector => "publicsector",
        CausesOfDeath => "deaths",
        Leader => "leader",
        Capital => "capital",
        Religion => "religion",
        RegionalCensusRank => "rcensus",
        WorldCensusRank => "wcensus",
        /// Census scores, one token per selected statistic.
        CensusScores => "censusscore",
        Legislation => "legislation",
        Happenings => "happenings",
        DemonymAdjective => "demonym",
        DemonymNoun => "demonym2",
        DemonymNounPlural => "demonym2plural",
        FactbookCount => "factbooks",
        Factbooks => "factbooklist",
        DispatchCount => "dispatches",
        Dispatches => "dispatchlist",
    }
}

/// Shards requested from the nation endpoint.
///
/// When [`NationShard::CensusScores`] is enabled, one census token is emitted
/// per entry of the census ID list. A `None` entry selects the census of the
/// current day. The list defaults to a single `None`.
///
/// # Examples
///
/// ```
/// use nsapi::shards::{NationShard, NationShards};
///
/// let shards = NationShards::new()
///     .with(NationShard::CensusScores)
///     .with_census_ids(vec![None, Some(46)]);
///
/// assert_eq!(shards.census_ids(), &[None, Some(46)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationShards {
    shards: BTreeSet<NationShard>,
    census_ids: Vec<Option<u32>>,
}

shard_toggles!(NationShards, NationShard);

impl NationShards {
    /// Create a selector with no shard enabled.
    pub fn new() -> Self {
        NationShards {
            shards: BTreeSet::new(),
            census_ids: vec![None],
        }
    }

    /// Create a selector with every shard enabled.
    pub fn all() -> Self {
        NationShard::ALL.iter().copied().collect()
    }

    /// Replace the census statistics requested by [`NationShard::CensusScores`].
    ///
    /// # Arguments
    ///
    /// * `census_ids` - Census statistic IDs, `None` meaning the census of the day.
    pub fn with_census_ids(mut self, census_ids: Vec<Option<u32>>) -> Self {
        self.census_ids = census_ids;
        self
    }

    /// Census statistics requested by [`NationShard::CensusScores`].
    pub fn census_ids(&self) -> &[Option<u32>] {
        &self.census_ids
    }
}

impl Default for NationShards {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let shards = NationShards::new();
        assert!(shards.is_empty());
        assert_eq!(shards.census_ids(), &[None]);
    }

    #[test]
    fn test_all_enables_every_shard() {
        let shards = NationShards::all();
        assert_eq!(shards.enabled().count(), NationShard::ALL.len());
        assert!(NationShard::ALL.iter().all(|s| shards.is_enabled(*s)));
    }

    #[test]
    fn test_enabled_follows_catalog_order() {
        let shards = NationShards::new()
            .with(NationShard::Happenings)
            .with(NationShard::Name)
            .with(NationShard::Population);

        let enabled: Vec<NationShard> = shards.enabled().collect();
        assert_eq!(
            enabled,
            vec![
                NationShard::Name,
                NationShard::Population,
                NationShard::Happenings
            ]
        );
    }

    #[test]
    fn test_toggle() {
        let mut shards = NationShards::new().with(NationShard::Motto);
        shards.enable(NationShard::Flag);
        shards.disable(NationShard::Motto);

        assert!(shards.is_enabled(NationShard::Flag));
        assert!(!shards.is_enabled(NationShard::Motto));
        assert!(!shards.clone().without(NationShard::Flag).is_enabled(NationShard::Flag));
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            "wa".parse::<NationShard>().unwrap(),
            NationShard::WorldAssemblyStatus
        );
        assert_eq!(
            "demonym2plural".parse::<NationShard>().unwrap(),
            NationShard::DemonymNounPlural
        );
        assert!("unknown".parse::<NationShard>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut tokens: Vec<&str> = NationShard::ALL.iter().map(|s| s.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), NationShard::ALL.len());
    }
}
