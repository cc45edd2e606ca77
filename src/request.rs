//! Translation of shard selectors into NationStates API URLs.
//!
//! [`RequestBuilder`] validates a request before anything is sent and renders
//! it into a canonical URL: shards are written in catalog order, caller supplied
//! text is percent-encoded and the API version is always appended.

use log::debug;
use url::{Url, form_urlencoded};

use crate::error::{Error, Result};
use crate::shards::{
    Council, HappeningsConfig, NationShard, NationShards, RegionShard, RegionShards,
    RegionsByTagConfig, WorldAssemblyShard, WorldAssemblyShards, WorldShard, WorldShards,
};

/// Version of the API this client speaks.
pub const API_VERSION: u32 = 4;

/// Default NationStates host.
pub const DEFAULT_BASE_URL: &str = "https://www.nationstates.net";

/// Path of the API script.
const API_PATH: &str = "/cgi-bin/api.cgi";
/// Path of the nations data dump.
const NATIONS_DUMP_PATH: &str = "/pages/nations.xml.gz";
/// Path of the regions data dump.
const REGIONS_DUMP_PATH: &str = "/pages/regions.xml.gz";

/// Kind of telegram, deciding which cooldown applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelegramKind {
    Recruitment,
    NonRecruitment,
}

/// A telegram to send through the telegram API.
///
/// The client key identifies the sending tool, the telegram ID and secret key
/// identify a template telegram previously sent to `tag:api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    pub client_key: String,
    pub telegram_id: String,
    pub secret_key: String,
    pub recipient: String,
    pub kind: TelegramKind,
}

/// Builds request URLs for every endpoint.
///
/// # Examples
///
/// ```
/// use nsapi::request::RequestBuilder;
/// use nsapi::shards::{NationShard, NationShards};
///
/// let builder = RequestBuilder::new("https://www.nationstates.net");
/// let shards = NationShards::new().with(NationShard::Name).with(NationShard::Population);
///
/// assert_eq!(
///     builder.nation("Testlandia", &shards).unwrap(),
///     "https://www.nationstates.net/cgi-bin/api.cgi?nation=Testlandia&q=name+population&v=4"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    /// Scheme and host, without trailing slash
    base_url: String,
}

impl RequestBuilder {
    /// Create a new [RequestBuilder].
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme and host of the API, a trailing slash is ignored.
    pub fn new(base_url: &str) -> Self {
        RequestBuilder {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of a nation request.
    ///
    /// Without any shard the `q` parameter is left out and the API returns its
    /// default nation fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `nation` is empty, or when census
    /// scores are requested with an empty census ID list.
    pub fn nation(&self, nation: &str, shards: &NationShards) -> Result<String> {
        require_non_empty("the name of the nation", nation)?;

        let mut tokens = Vec::new();
        for shard in shards.enabled() {
            if shard == NationShard::CensusScores {
                tokens.extend(census_tokens(shards.census_ids())?);
            } else {
                tokens.push(shard.token().to_string());
            }
        }

        let mut params = vec![("nation", encode(nation))];
        push_shards(&mut params, tokens);
        self.api_url(params)
    }

    /// URL of a region request.
    ///
    /// The message board shard is always written last, carrying its offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `region` is empty.
    pub fn region(&self, region: &str, shards: &RegionShards) -> Result<String> {
        require_non_empty("the name of the region", region)?;

        let mut tokens: Vec<String> = shards
            .enabled()
            .filter(|shard| *shard != RegionShard::Messages)
            .map(|shard| shard.token().to_string())
            .collect();

        if shards.is_enabled(RegionShard::Messages) {
            tokens.push(format!(
                "{};offset={}",
                RegionShard::Messages.token(),
                shards.messages_offset()
            ));
        }

        let mut params = vec![("region", encode(region))];
        push_shards(&mut params, tokens);
        self.api_url(params)
    }

    /// URL of a world request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when no shard is enabled, when
    /// happenings and regions-by-tag are combined, when a happenings view names
    /// nothing, or when the regions-by-tag search has no tag or too many tags.
    pub fn world(&self, shards: &WorldShards) -> Result<String> {
        if shards.is_empty() {
            return Err(Error::invalid_argument(
                "at least one shard must be enabled in a world request",
            ));
        }

        if shards.is_enabled(WorldShard::Happenings) && shards.is_enabled(WorldShard::RegionsByTag)
        {
            return Err(Error::invalid_argument(
                "the happenings shard cannot be combined with the regionsbytag shard",
            ));
        }

        let mut tokens = Vec::new();
        for shard in shards.enabled() {
            match shard {
                WorldShard::Happenings => tokens.push(happenings_token(shards.happenings())?),
                WorldShard::RegionsByTag => {
                    tokens.push(regions_by_tag_token(shards.regions_by_tag())?)
                }
                _ => tokens.push(shard.token().to_string()),
            }
        }

        let mut params = Vec::new();
        push_shards(&mut params, tokens);
        self.api_url(params)
    }

    /// URL of a World Assembly request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when only dependent shards (vote track,
    /// delegate log, delegate votes) are enabled, or when one of them is enabled
    /// without the resolution shard.
    pub fn world_assembly(&self, council: Council, shards: &WorldAssemblyShards) -> Result<String> {
        if !shards.enabled().any(|shard| !shard.requires_resolution()) {
            return Err(Error::invalid_argument(
                "at least one shard other than votetrack, dellog or delvotes must be enabled in a world assembly request",
            ));
        }

        if !shards.is_enabled(WorldAssemblyShard::Resolution) {
            if let Some(shard) = shards.enabled().find(|shard| shard.requires_resolution()) {
                return Err(Error::invalid_argument(format!(
                    "the {shard} shard requires the resolution shard"
                )));
            }
        }

        let tokens = shards
            .enabled()
            .map(|shard| shard.token().to_string())
            .collect();

        let mut params = vec![("wa", council.id().to_string())];
        push_shards(&mut params, tokens);
        self.api_url(params)
    }

    /// URL sending a telegram.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when any of the telegram fields is empty.
    pub fn telegram(&self, telegram: &Telegram) -> Result<String> {
        require_non_empty("the client key", &telegram.client_key)?;
        require_non_empty("the telegram ID", &telegram.telegram_id)?;
        require_non_empty("the telegram secret key", &telegram.secret_key)?;
        require_non_empty("the recipient nation", &telegram.recipient)?;

        self.api_url(vec![
            ("a", "sendTG".to_string()),
            ("client", encode(&telegram.client_key)),
            ("tgid", encode(&telegram.telegram_id)),
            ("key", encode(&telegram.secret_key)),
            ("to", encode(&telegram.recipient)),
        ])
    }

    /// URL verifying a login checksum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `nation` or `checksum` is empty,
    /// or when a token is given but empty.
    pub fn verify(&self, nation: &str, checksum: &str, token: Option<&str>) -> Result<String> {
        require_non_empty("the name of the nation", nation)?;
        require_non_empty("the login verification code", checksum)?;

        let mut params = vec![
            ("a", "verify".to_string()),
            ("nation", encode(nation)),
            ("checksum", encode(checksum)),
        ];
        if let Some(token) = token {
            require_non_empty("the site specific token", token)?;
            params.push(("token", encode(token)));
        }

        self.api_url(params)
    }

    /// URL of the gzip compressed nations dump.
    pub fn nations_dump(&self) -> String {
        format!("{}{}", self.base_url, NATIONS_DUMP_PATH)
    }

    /// URL of the gzip compressed regions dump.
    pub fn regions_dump(&self) -> String {
        format!("{}{}", self.base_url, REGIONS_DUMP_PATH)
    }

    /// Join already encoded parameters into an API URL and check it parses.
    fn api_url(&self, mut params: Vec<(&str, String)>) -> Result<String> {
        params.push(("v", API_VERSION.to_string()));

        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}{}?{}", self.base_url, API_PATH, query);

        Url::parse(&url).map_err(|e| {
            Error::invalid_argument(format!("'{url}' is not a valid request URL: {e}"))
        })?;

        debug!("built request {}", url);
        Ok(url)
    }
}

/// Append the `q` parameter, unless there is no shard.
fn push_shards(params: &mut Vec<(&str, String)>, tokens: Vec<String>) {
    if !tokens.is_empty() {
        params.push(("q", tokens.join("+")));
    }
}

fn require_non_empty(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{what} must not be empty")));
    }
    Ok(())
}

/// Form-encode caller supplied text.
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// API id of a name embedded in a shard token: lowercase, spaces become `_`.
///
/// Shards in `q` are separated by `+`, which decodes to a space, so a space
/// left in a token would split it.
fn canonical_id(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

fn census_tokens(census_ids: &[Option<u32>]) -> Result<Vec<String>> {
    if census_ids.is_empty() {
        return Err(Error::invalid_argument(
            "the census ID list must not be empty when census scores are requested",
        ));
    }

    let token = NationShard::CensusScores.token();
    Ok(census_ids
        .iter()
        .map(|id| match id {
            Some(id) => format!("{token}-{id}"),
            None => token.to_string(),
        })
        .collect())
}

fn happenings_token(config: &HappeningsConfig) -> Result<String> {
    let mut token = WorldShard::Happenings.token().to_string();

    if let Some(view) = config.view() {
        let id = canonical_id(view.value());
        if id.is_empty() {
            return Err(Error::invalid_argument(format!(
                "the happenings view needs the name of a {}",
                view.kind()
            )));
        }
        token.push_str(&format!(";view={}.{}", view.kind(), encode(&id)));
    }

    let filters: Vec<&str> = config.filters().map(|filter| filter.token()).collect();
    if !filters.is_empty() {
        token.push_str(&format!(";filter={}", filters.join("+")));
    }

    if let Some(limit) = config.limit() {
        token.push_str(&format!(";limit={limit}"));
    }
    if let Some(since_id) = config.since_id() {
        token.push_str(&format!(";sinceid={since_id}"));
    }
    if let Some(before_id) = config.before_id() {
        token.push_str(&format!(";beforeid={before_id}"));
    }

    Ok(token)
}

fn regions_by_tag_token(config: &RegionsByTagConfig) -> Result<String> {
    if config.is_empty() {
        return Err(Error::invalid_argument(
            "the regionsbytag shard needs at least one tag to include or exclude",
        ));
    }
    if config.len() > RegionsByTagConfig::MAX_TAGS {
        return Err(Error::invalid_argument(format!(
            "the regionsbytag shard accepts at most {} tags, got {}",
            RegionsByTagConfig::MAX_TAGS,
            config.len()
        )));
    }

    let excluded = config.without_tags().iter().map(|tag| (true, tag));
    let included = config.with_tags().iter().map(|tag| (false, tag));

    let mut tags = Vec::with_capacity(config.len());
    for (exclude, tag) in excluded.chain(included) {
        let id = canonical_id(tag);
        if id.is_empty() {
            return Err(Error::invalid_argument("a region tag must not be empty"));
        }
        let prefix = if exclude { "-" } else { "" };
        tags.push(format!("{prefix}{}", encode(&id)));
    }

    Ok(format!(
        "{};tags={}",
        WorldShard::RegionsByTag.token(),
        tags.join(",")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shards::{HappeningFilter, HappeningsView};

    const BASE: &str = "https://www.nationstates.net";

    fn builder() -> RequestBuilder {
        RequestBuilder::new(BASE)
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let url = RequestBuilder::new("http://localhost:1234/")
            .nation("testlandia", &NationShards::new())
            .unwrap();
        assert_eq!(url, "http://localhost:1234/cgi-bin/api.cgi?nation=testlandia&v=4");
    }

    #[test]
    fn test_nation_without_shards() {
        let url = builder().nation("testlandia", &NationShards::new()).unwrap();
        assert_eq!(url, format!("{BASE}/cgi-bin/api.cgi?nation=testlandia&v=4"));
    }

    #[test]
    fn test_nation_name_is_encoded() {
        let url = builder()
            .nation("The Rejected Realms & co", &NationShards::new().with(NationShard::Name))
            .unwrap();
        assert_eq!(
            url,
            format!("{BASE}/cgi-bin/api.cgi?nation=The+Rejected+Realms+%26+co&q=name&v=4")
        );
    }

    #[test]
    fn test_nation_empty_name() {
        let error = builder().nation("", &NationShards::all()).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_nation_is_deterministic() {
        let shards = NationShards::new()
            .with(NationShard::Happenings)
            .with(NationShard::Motto)
            .with(NationShard::FullName);

        let first = builder().nation("testlandia", &shards).unwrap();
        let second = builder().nation("testlandia", &shards.clone()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("q=fullname+motto+happenings&"));
    }

    #[test]
    fn test_nation_all_shards_order() {
        let url = builder().nation("testlandia", &NationShards::all()).unwrap();
        let query = url.split("q=").nth(1).unwrap().split('&').next().unwrap();
        let tokens: Vec<&str> = query.split('+').collect();

        let expected: Vec<&str> = NationShard::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_nation_census_ids() {
        let shards = NationShards::new()
            .with(NationShard::CensusScores)
            .with(NationShard::Legislation)
            .with_census_ids(vec![None, Some(46), Some(0)]);

        let url = builder().nation("testlandia", &shards).unwrap();
        assert!(url.contains("q=censusscore+censusscore-46+censusscore-0+legislation&v=4"));
    }

    #[test]
    fn test_nation_census_empty_ids() {
        let shards = NationShards::new()
            .with(NationShard::CensusScores)
            .with_census_ids(vec![]);

        let error = builder().nation("testlandia", &shards).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_nation_census_ids_ignored_when_disabled() {
        let shards = NationShards::new()
            .with(NationShard::Name)
            .with_census_ids(vec![]);
        assert!(builder().nation("testlandia", &shards).is_ok());
    }

    #[test]
    fn test_region_messages_last_with_offset() {
        let shards = RegionShards::new()
            .with(RegionShard::Messages)
            .with(RegionShard::Name)
            .with(RegionShard::History)
            .with_messages_offset(15);

        let url = builder().region("the pacific", &shards).unwrap();
        assert_eq!(
            url,
            format!("{BASE}/cgi-bin/api.cgi?region=the+pacific&q=name+history+messages;offset=15&v=4")
        );
    }

    #[test]
    fn test_region_all_ends_with_messages() {
        let url = builder().region("the_pacific", &RegionShards::all()).unwrap();
        assert!(url.contains("+poll+messages;offset=0&v=4"));
    }

    #[test]
    fn test_region_empty_name() {
        let error = builder().region("", &RegionShards::new()).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_world_no_shard() {
        let error = builder().world(&WorldShards::new()).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_world_single_shard() {
        let shards = WorldShards::new().with(WorldShard::FeaturedRegion);
        let url = builder().world(&shards).unwrap();
        assert_eq!(url, format!("{BASE}/cgi-bin/api.cgi?q=featuredregion&v=4"));
    }

    #[test]
    fn test_world_every_plain_shard() {
        for shard in WorldShard::ALL {
            if matches!(shard, WorldShard::Happenings | WorldShard::RegionsByTag) {
                continue;
            }
            let url = builder().world(&WorldShards::new().with(*shard)).unwrap();
            assert_eq!(url, format!("{BASE}/cgi-bin/api.cgi?q={}&v=4", shard.token()));
        }
    }

    #[test]
    fn test_world_happenings_default() {
        let shards = WorldShards::new().with(WorldShard::Happenings);
        let url = builder().world(&shards).unwrap();
        assert_eq!(url, format!("{BASE}/cgi-bin/api.cgi?q=happenings&v=4"));
    }

    #[test]
    fn test_world_happenings_options() {
        let config = HappeningsConfig::new()
            .with_view(HappeningsView::Region("the north pacific".to_string()))
            .with_filter(HappeningFilter::WorldAssemblyMembers)
            .with_filter(HappeningFilter::Moves)
            .with_limit(25)
            .with_since_id(100)
            .with_before_id(200);
        let shards = WorldShards::new()
            .with(WorldShard::NationCount)
            .with(WorldShard::Happenings)
            .with_happenings(config);

        let url = builder().world(&shards).unwrap();
        assert_eq!(
            url,
            format!(
                "{BASE}/cgi-bin/api.cgi?q=numnations+happenings;view=region.the_north_pacific;filter=move+member;limit=25;sinceid=100;beforeid=200&v=4"
            )
        );
    }

    /// Splits the decoded `q` parameter the way the API does.
    fn shard_tokens(url: &str) -> Vec<String> {
        let url = Url::parse(url).unwrap();
        let (_, q) = url.query_pairs().find(|(key, _)| key == "q").unwrap();
        q.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_world_happenings_view_keeps_one_token() {
        let shards = WorldShards::new()
            .with(WorldShard::NationCount)
            .with(WorldShard::Happenings)
            .with_happenings(
                HappeningsConfig::new()
                    .with_view(HappeningsView::Nation("  The Greater Testlandia ".to_string())),
            );

        let url = builder().world(&shards).unwrap();
        assert_eq!(
            shard_tokens(&url),
            vec!["numnations", "happenings;view=nation.the_greater_testlandia"]
        );
    }

    #[test]
    fn test_world_happenings_blank_view_value() {
        let shards = WorldShards::new()
            .with(WorldShard::Happenings)
            .with_happenings(
                HappeningsConfig::new().with_view(HappeningsView::Region("   ".to_string())),
            );

        assert!(builder().world(&shards).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_world_happenings_empty_view_value() {
        let shards = WorldShards::new()
            .with(WorldShard::Happenings)
            .with_happenings(HappeningsConfig::new().with_view(HappeningsView::Nation(String::new())));

        assert!(builder().world(&shards).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_world_regions_by_tag() {
        let shards = WorldShards::new()
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(
                RegionsByTagConfig::new()
                    .with_tag("map")
                    .with_tag("large")
                    .without_tag("password"),
            );

        let url = builder().world(&shards).unwrap();
        assert_eq!(
            url,
            format!("{BASE}/cgi-bin/api.cgi?q=regionsbytag;tags=-password,map,large&v=4")
        );
    }

    #[test]
    fn test_world_regions_by_tag_only_included() {
        let shards = WorldShards::new()
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(RegionsByTagConfig::new().with_tag("anime"));

        let url = builder().world(&shards).unwrap();
        assert!(url.contains("q=regionsbytag;tags=anime&"));
    }

    #[test]
    fn test_world_regions_by_tag_with_spaces() {
        let shards = WorldShards::new()
            .with(WorldShard::NationCount)
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(
                RegionsByTagConfig::new()
                    .with_tag("Role Player")
                    .without_tag("Password"),
            );

        let url = builder().world(&shards).unwrap();
        assert!(url.contains("q=numnations+regionsbytag;tags=-password,role_player&"));
        assert_eq!(
            shard_tokens(&url),
            vec!["numnations", "regionsbytag;tags=-password,role_player"]
        );
    }

    #[test]
    fn test_world_regions_by_tag_blank_tag() {
        let shards = WorldShards::new()
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(RegionsByTagConfig::new().with_tag(" "));

        assert!(builder().world(&shards).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_world_regions_by_tag_without_tags() {
        let shards = WorldShards::new().with(WorldShard::RegionsByTag);
        assert!(builder().world(&shards).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_world_regions_by_tag_too_many_tags() {
        let mut config = RegionsByTagConfig::new();
        for i in 0..6 {
            config = config.with_tag(format!("with{i}")).without_tag(format!("without{i}"));
        }
        let shards = WorldShards::new()
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(config);

        assert!(builder().world(&shards).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_world_regions_by_tag_ten_tags() {
        let mut config = RegionsByTagConfig::new();
        for i in 0..5 {
            config = config.with_tag(format!("with{i}")).without_tag(format!("without{i}"));
        }
        let shards = WorldShards::new()
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(config);

        assert!(builder().world(&shards).is_ok());
    }

    #[test]
    fn test_world_happenings_and_regions_by_tag_are_exclusive() {
        let shards = WorldShards::new()
            .with(WorldShard::Happenings)
            .with(WorldShard::RegionsByTag)
            .with_regions_by_tag(RegionsByTagConfig::new().with_tag("map"));

        assert!(builder().world(&shards).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_world_assembly_no_primary_shard() {
        let shards = WorldAssemblyShards::new().with(WorldAssemblyShard::VoteTrack);
        let error = builder()
            .world_assembly(Council::GeneralAssembly, &shards)
            .unwrap_err();
        assert!(error.is_invalid_argument());

        let error = builder()
            .world_assembly(Council::GeneralAssembly, &WorldAssemblyShards::new())
            .unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_world_assembly_dependent_without_resolution() {
        for dependent in [
            WorldAssemblyShard::VoteTrack,
            WorldAssemblyShard::DelegateLog,
            WorldAssemblyShard::DelegateVotes,
        ] {
            let shards = WorldAssemblyShards::new()
                .with(WorldAssemblyShard::MemberCount)
                .with(dependent);
            let error = builder()
                .world_assembly(Council::SecurityCouncil, &shards)
                .unwrap_err();
            assert!(error.is_invalid_argument());
        }
    }

    #[test]
    fn test_world_assembly_resolution_with_vote_track() {
        let shards = WorldAssemblyShards::new()
            .with(WorldAssemblyShard::VoteTrack)
            .with(WorldAssemblyShard::Resolution);

        let url = builder()
            .world_assembly(Council::GeneralAssembly, &shards)
            .unwrap();
        assert_eq!(
            url,
            format!("{BASE}/cgi-bin/api.cgi?wa=1&q=resolution+votetrack&v=4")
        );
        assert!(url.find("resolution").unwrap() < url.find("votetrack").unwrap());
    }

    #[test]
    fn test_world_assembly_all() {
        let url = builder()
            .world_assembly(Council::SecurityCouncil, &WorldAssemblyShards::all())
            .unwrap();
        assert_eq!(
            url,
            format!(
                "{BASE}/cgi-bin/api.cgi?wa=2&q=numnations+numdelegates+delegates+members+happenings+memberlog+resolution+votetrack+dellog+delvotes+lastresolution&v=4"
            )
        );
    }

    fn telegram() -> Telegram {
        Telegram {
            client_key: "abc123".to_string(),
            telegram_id: "1234".to_string(),
            secret_key: "s3cr/t".to_string(),
            recipient: "new nation".to_string(),
            kind: TelegramKind::Recruitment,
        }
    }

    #[test]
    fn test_telegram() {
        let url = builder().telegram(&telegram()).unwrap();
        assert_eq!(
            url,
            format!(
                "{BASE}/cgi-bin/api.cgi?a=sendTG&client=abc123&tgid=1234&key=s3cr%2Ft&to=new+nation&v=4"
            )
        );
    }

    #[test]
    fn test_telegram_empty_fields() {
        let mut missing_key = telegram();
        missing_key.client_key.clear();
        assert!(builder().telegram(&missing_key).unwrap_err().is_invalid_argument());

        let mut missing_recipient = telegram();
        missing_recipient.recipient.clear();
        assert!(builder().telegram(&missing_recipient).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_verify() {
        let url = builder().verify("testlandia", "a1b2", None).unwrap();
        assert_eq!(
            url,
            format!("{BASE}/cgi-bin/api.cgi?a=verify&nation=testlandia&checksum=a1b2&v=4")
        );

        let url = builder().verify("testlandia", "a1b2", Some("my site")).unwrap();
        assert_eq!(
            url,
            format!("{BASE}/cgi-bin/api.cgi?a=verify&nation=testlandia&checksum=a1b2&token=my+site&v=4")
        );
    }

    #[test]
    fn test_verify_invalid() {
        assert!(builder().verify("", "a1b2", None).unwrap_err().is_invalid_argument());
        assert!(builder().verify("testlandia", "", None).unwrap_err().is_invalid_argument());
        assert!(
            builder()
                .verify("testlandia", "a1b2", Some(""))
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn test_dumps() {
        assert_eq!(builder().nations_dump(), format!("{BASE}/pages/nations.xml.gz"));
        assert_eq!(builder().regions_dump(), format!("{BASE}/pages/regions.xml.gz"));
    }

    #[test]
    fn test_invalid_base_url() {
        let builder = RequestBuilder::new("not a url");
        let error = builder.nation("testlandia", &NationShards::new()).unwrap_err();
        assert!(error.is_invalid_argument());
    }
}
