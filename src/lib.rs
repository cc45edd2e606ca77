//! nsapi - A rate limited client for the NationStates web API.
//!
//! The client requests nations, regions, the world, the World Assembly and the
//! daily data dumps, sends telegrams and verifies logins. Every request goes
//! through a rate gate that keeps the caller within the limits published by
//! the site.
//!
//! # Overview
//!
//! 1. Pick the fields to request with a shard selector from [`shards`].
//! 2. Call the matching [`NsClient`] operation. The request URL is built and
//!    checked by [`request::RequestBuilder`] before anything is sent.
//! 3. The call waits in the [`delay::RateGate`], then the [`transport`]
//!    performs the GET.
//! 4. The XML body is decoded by [`decode`] into a record from [`data`].
//!
//! # Examples
//!
//! ```no_run
//! use nsapi::NsClient;
//! use nsapi::shards::{RegionShard, RegionShards};
//!
//! # async fn run() -> nsapi::Result<()> {
//! let client = NsClient::new("MyTool/1.0 (by: Testlandia)")?;
//! let shards = RegionShards::new()
//!     .with(RegionShard::Delegate)
//!     .with(RegionShard::Messages)
//!     .with_messages_offset(10);
//!
//! let region = client.region("the pacific", &shards).await?;
//! println!("delegate: {:?}", region.delegate);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - Endpoint orchestration
//! - [`config`] - YAML and environment configuration
//! - [`data`] - Decoded records
//! - [`decode`] - XML and plain text response decoding
//! - [`delay`] - Request pacing
//! - [`error`] - Error taxonomy
//! - [`request`] - URL construction
//! - [`shards`] - Shard selectors per endpoint
//! - [`transport`] - HTTP transport
//! - [`xml`] - Element tree over `quick-xml`

pub mod client;
pub mod config;
pub mod data;
pub mod decode;
pub mod delay;
pub mod error;
pub mod request;
pub mod shards;
pub mod transport;
pub mod xml;

pub use crate::client::NsClient;
pub use crate::error::{Error, Result};
