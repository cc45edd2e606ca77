//! World endpoint shards.

use std::collections::BTreeSet;

shard_catalog! {
    /// Shards of the world endpoint.
    WorldShard("world shard") {
        NationCount => "numnations",
        RegionCount => "numregions",
        CensusName => "census",
        CensusId => "censusid",
        CensusSize => "censussize",
        CensusScale => "censusscale",
        CensusMedian => "censusmedian",
        FeaturedRegion => "featuredregion",
        /// World happenings, configured through [`HappeningsConfig`].
        Happenings => "happenings",
        NewNations => "newnations",
        /// Region search, configured through [`RegionsByTagConfig`].
        RegionsByTag => "regionsbytag",
    }
}

shard_catalog! {
    /// Categories of world happenings.
    HappeningFilter("happenings filter") {
        NationalLegislation => "law",
        NationalChanges => "change",
        NationalDispatches => "dispatch",
        RegionalMessageBoard => "rmb",
        RegionalEmbassies => "embassy",
        RegionalEjections => "eject",
        RegionalAdministration => "admin",
        Moves => "move",
        Foundings => "founding",
        /// Nations that ceased to exist.
        Endings => "cte",
        WorldAssemblyVotes => "vote",
        WorldAssemblyResolutions => "resolution",
        WorldAssemblyMembers => "member",
        WorldAssemblyEndorsements => "endo",
    }
}

/// Restricts world happenings to a single nation or region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HappeningsView {
    /// Happenings of the named nation.
    Nation(String),
    /// Happenings of the named region.
    Region(String),
}

impl HappeningsView {
    /// Prefix used in the `view` option.
    pub fn kind(&self) -> &'static str {
        match self {
            HappeningsView::Nation(_) => "nation",
            HappeningsView::Region(_) => "region",
        }
    }

    /// Name of the viewed nation or region.
    pub fn value(&self) -> &str {
        match self {
            HappeningsView::Nation(value) | HappeningsView::Region(value) => value,
        }
    }
}

/// Options of the [`WorldShard::Happenings`] shard.
///
/// An empty filter set requests every category.
///
/// # Examples
///
/// ```
/// use nsapi::shards::{HappeningFilter, HappeningsConfig, HappeningsView};
///
/// let config = HappeningsConfig::new()
///     .with_view(HappeningsView::Region("the_pacific".to_string()))
///     .with_filter(HappeningFilter::Moves)
///     .with_limit(10);
///
/// assert_eq!(config.limit(), Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HappeningsConfig {
    view: Option<HappeningsView>,
    filters: BTreeSet<HappeningFilter>,
    limit: Option<u32>,
    since_id: Option<u64>,
    before_id: Option<u64>,
}

impl HappeningsConfig {
    /// Create a configuration without any option.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict happenings to one nation or region.
    pub fn with_view(mut self, view: HappeningsView) -> Self {
        self.view = Some(view);
        self
    }

    /// Add a category to the filter.
    pub fn with_filter(mut self, filter: HappeningFilter) -> Self {
        self.filters.insert(filter);
        self
    }

    /// Maximum number of happenings returned.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only return happenings newer than this event ID.
    pub fn with_since_id(mut self, since_id: u64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    /// Only return happenings older than this event ID.
    pub fn with_before_id(mut self, before_id: u64) -> Self {
        self.before_id = Some(before_id);
        self
    }

    pub fn view(&self) -> Option<&HappeningsView> {
        self.view.as_ref()
    }

    /// Selected categories, in emission order.
    pub fn filters(&self) -> impl Iterator<Item = HappeningFilter> + '_ {
        self.filters.iter().copied()
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn since_id(&self) -> Option<u64> {
        self.since_id
    }

    pub fn before_id(&self) -> Option<u64> {
        self.before_id
    }
}

/// Options of the [`WorldShard::RegionsByTag`] shard.
///
/// At least one tag must be given and at most [`Self::MAX_TAGS`] in total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionsByTagConfig {
    with_tags: Vec<String>,
    without_tags: Vec<String>,
}

impl RegionsByTagConfig {
    /// Largest number of tags accepted by the API in one search.
    pub const MAX_TAGS: usize = 10;

    /// Create a configuration without any tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return regions carrying `tag`.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.with_tags.push(tag.into());
        self
    }

    /// Only return regions not carrying `tag`.
    pub fn without_tag(mut self, tag: impl Into<String>) -> Self {
        self.without_tags.push(tag.into());
        self
    }

    pub fn with_tags(&self) -> &[String] {
        &self.with_tags
    }

    pub fn without_tags(&self) -> &[String] {
        &self.without_tags
    }

    /// Total number of tags.
    pub fn len(&self) -> usize {
        self.with_tags.len() + self.without_tags.len()
    }

    /// Whether no tag was given.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shards requested from the world endpoint.
///
/// # Examples
///
/// ```
/// use nsapi::shards::{RegionsByTagConfig, WorldShard, WorldShards};
///
/// let shards = WorldShards::new()
///     .with(WorldShard::RegionsByTag)
///     .with_regions_by_tag(RegionsByTagConfig::new().with_tag("map").without_tag("password"));
///
/// assert_eq!(shards.regions_by_tag().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldShards {
    shards: BTreeSet<WorldShard>,
    happenings: HappeningsConfig,
    regions_by_tag: RegionsByTagConfig,
}

shard_toggles!(WorldShards, WorldShard);

impl WorldShards {
    /// Create a selector with no shard enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the happenings options.
    pub fn with_happenings(mut self, happenings: HappeningsConfig) -> Self {
        self.happenings = happenings;
        self
    }

    /// Replace the regions-by-tag options.
    pub fn with_regions_by_tag(mut self, regions_by_tag: RegionsByTagConfig) -> Self {
        self.regions_by_tag = regions_by_tag;
        self
    }

    pub fn happenings(&self) -> &HappeningsConfig {
        &self.happenings
    }

    pub fn regions_by_tag(&self) -> &RegionsByTagConfig {
        &self.regions_by_tag
    }
}
