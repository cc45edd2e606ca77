//! nsapi - Command line front end of the NationStates API client.
//!
//! Each subcommand performs one API operation and prints the decoded record as
//! pretty JSON on the standard output. Logs go to the standard error.
//!
//! # Configuration
//!
//! The user agent is mandatory. Give it through a YAML file:
//!
//! ```yaml
//! user_agent: "MyTool/1.0 (by: Testlandia)"
//! ```
//!
//! or through the environment:
//!
//! ```bash
//! export NSAPI_USER_AGENT="MyTool/1.0 (by: Testlandia)"
//! ```
//!
//! # Usage
//!
//! ```bash
//! nsapi nation testlandia --shard population --shard motto
//! nsapi --config config.yaml region "the pacific" --all --offset 20
//! nsapi world --shard happenings --view-region the_pacific --filter move --limit 10
//! nsapi wa ga --shard resolution --shard votetrack
//! nsapi dump nations > nations.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use serde::Serialize;

use nsapi::NsClient;
use nsapi::config::Config;
use nsapi::request::{Telegram, TelegramKind};
use nsapi::shards::{
    Council, HappeningFilter, HappeningsConfig, HappeningsView, NationShard, NationShards,
    RegionShard, RegionShards, RegionsByTagConfig, WorldAssemblyShard, WorldAssemblyShards,
    WorldShard, WorldShards,
};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Values can be overridden with `NSAPI_` environment variables, e.g.
    /// `NSAPI_DELAY__STANDARD_MS=1000`.
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Shards given by their API token.
#[derive(clap::Args, Debug)]
struct ShardArgs {
    /// Shard to request, may be repeated.
    #[arg(short, long = "shard")]
    shards: Vec<String>,

    /// Request every shard of the endpoint.
    #[arg(long, conflicts_with = "shards")]
    all: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request shards of a nation.
    Nation {
        name: String,
        #[command(flatten)]
        shards: ShardArgs,
        /// Census statistic to score, may be repeated. Defaults to the census of the day.
        #[arg(long = "census-id")]
        census_ids: Vec<u32>,
    },
    /// Request shards of a region.
    Region {
        name: String,
        #[command(flatten)]
        shards: ShardArgs,
        /// Number of message board posts to skip.
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Request world shards.
    World {
        /// Shard to request, may be repeated.
        #[arg(short, long = "shard", required = true)]
        shards: Vec<String>,
        /// Only show happenings of this nation.
        #[arg(long, conflicts_with = "view_region")]
        view_nation: Option<String>,
        /// Only show happenings of this region.
        #[arg(long)]
        view_region: Option<String>,
        /// Happenings category, may be repeated.
        #[arg(long = "filter")]
        filters: Vec<String>,
        /// Maximum number of happenings.
        #[arg(long)]
        limit: Option<u32>,
        /// Only happenings newer than this event ID.
        #[arg(long)]
        since_id: Option<u64>,
        /// Only happenings older than this event ID.
        #[arg(long)]
        before_id: Option<u64>,
        /// Region tag to search for, may be repeated.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Region tag to exclude from the search, may be repeated.
        #[arg(long = "exclude-tag")]
        exclude_tags: Vec<String>,
    },
    /// Request shards of a World Assembly council (`ga` or `sc`).
    Wa {
        council: Council,
        #[command(flatten)]
        shards: ShardArgs,
    },
    /// Download a daily data dump.
    Dump {
        #[arg(value_enum)]
        kind: DumpKind,
    },
    /// Check a login verification code.
    Verify {
        nation: String,
        checksum: String,
        #[arg(long)]
        token: Option<String>,
    },
    /// Send a telegram through the telegram API.
    Telegram {
        #[arg(long)]
        client: String,
        #[arg(long)]
        tgid: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        to: String,
        /// Use the recruitment cooldown.
        #[arg(long)]
        recruitment: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DumpKind {
    Nations,
    Regions,
}

/// Parse shard tokens, or select everything with `--all`.
fn select<S, C>(args: &ShardArgs, all: impl FnOnce() -> C) -> nsapi::Result<C>
where
    S: FromStr<Err = nsapi::Error>,
    C: FromIterator<S>,
{
    if args.all {
        return Ok(all());
    }
    args.shards.iter().map(|token| token.parse::<S>()).collect()
}

fn print(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &NsClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Nation {
            name,
            shards,
            census_ids,
        } => {
            let mut shards: NationShards = select::<NationShard, _>(&shards, NationShards::all)?;
            if !census_ids.is_empty() {
                shards = shards.with_census_ids(census_ids.into_iter().map(Some).collect());
            }
            print(&client.nation(&name, &shards).await?)
        }
        Command::Region {
            name,
            shards,
            offset,
        } => {
            let shards: RegionShards = select::<RegionShard, _>(&shards, RegionShards::all)?;
            let shards = shards.with_messages_offset(offset);
            print(&client.region(&name, &shards).await?)
        }
        Command::World {
            shards,
            view_nation,
            view_region,
            filters,
            limit,
            since_id,
            before_id,
            tags,
            exclude_tags,
        } => {
            let mut happenings = HappeningsConfig::new();
            if let Some(nation) = view_nation {
                happenings = happenings.with_view(HappeningsView::Nation(nation));
            }
            if let Some(region) = view_region {
                happenings = happenings.with_view(HappeningsView::Region(region));
            }
            for filter in filters {
                happenings = happenings.with_filter(filter.parse::<HappeningFilter>()?);
            }
            if let Some(limit) = limit {
                happenings = happenings.with_limit(limit);
            }
            if let Some(since_id) = since_id {
                happenings = happenings.with_since_id(since_id);
            }
            if let Some(before_id) = before_id {
                happenings = happenings.with_before_id(before_id);
            }

            let mut regions_by_tag = RegionsByTagConfig::new();
            for tag in tags {
                regions_by_tag = regions_by_tag.with_tag(tag);
            }
            for tag in exclude_tags {
                regions_by_tag = regions_by_tag.without_tag(tag);
            }

            let shards = shards
                .iter()
                .map(|token| token.parse::<WorldShard>())
                .collect::<nsapi::Result<WorldShards>>()?
                .with_happenings(happenings)
                .with_regions_by_tag(regions_by_tag);
            print(&client.world(&shards).await?)
        }
        Command::Wa { council, shards } => {
            let shards: WorldAssemblyShards =
                select::<WorldAssemblyShard, _>(&shards, WorldAssemblyShards::all)?;
            print(&client.world_assembly(council, &shards).await?)
        }
        Command::Dump { kind } => match kind {
            DumpKind::Nations => print(&client.nation_dump().await?),
            DumpKind::Regions => print(&client.region_dump().await?),
        },
        Command::Verify {
            nation,
            checksum,
            token,
        } => print(&client.verify(&nation, &checksum, token.as_deref()).await?),
        Command::Telegram {
            client: client_key,
            tgid,
            key,
            to,
            recruitment,
        } => {
            let telegram = Telegram {
                client_key,
                telegram_id: tgid,
                secret_key: key,
                recipient: to,
                kind: if recruitment {
                    TelegramKind::Recruitment
                } else {
                    TelegramKind::NonRecruitment
                },
            };
            client.send_telegram(&telegram).await?;
            println!("queued");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting nsapi {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let client = NsClient::from_config(&config).context("failed to create client")?;

    run(&client, args.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_select_tokens() {
        let args = ShardArgs {
            shards: vec!["population".to_owned(), "name".to_owned()],
            all: false,
        };
        let shards: NationShards = select::<NationShard, _>(&args, NationShards::all).unwrap();

        let enabled: Vec<NationShard> = shards.enabled().collect();
        assert_eq!(enabled, vec![NationShard::Name, NationShard::Population]);
    }

    #[test]
    fn test_select_all() {
        let args = ShardArgs {
            shards: vec![],
            all: true,
        };
        let shards: RegionShards = select::<RegionShard, _>(&args, RegionShards::all).unwrap();
        assert_eq!(shards, RegionShards::all());
    }

    #[test]
    fn test_select_unknown_token() {
        let args = ShardArgs {
            shards: vec!["unknown".to_owned()],
            all: false,
        };
        let error = select::<WorldAssemblyShard, WorldAssemblyShards>(&args, WorldAssemblyShards::all)
            .unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_parse_world_command() {
        let args = Args::try_parse_from([
            "nsapi",
            "world",
            "--shard",
            "happenings",
            "--view-region",
            "the_pacific",
            "--filter",
            "move",
        ])
        .unwrap();

        match args.command {
            Command::World {
                shards,
                view_region,
                filters,
                ..
            } => {
                assert_eq!(shards, vec!["happenings"]);
                assert_eq!(view_region.as_deref(), Some("the_pacific"));
                assert_eq!(filters, vec!["move"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
