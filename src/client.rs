//! NationStates API client.
//!
//! [`NsClient`] runs every operation through the same steps: build and check
//! the request URL, wait for the [`RateGate`], perform the GET through the
//! [`Transport`], record the request and decode the body.

use std::io::BufReader;

use flate2::read::GzDecoder;
use log::info;

use crate::config::Config;
use crate::data::{NationData, RegionData, WorldAssemblyData, WorldData};
use crate::decode;
use crate::delay::{DelayConfig, RateGate, RequestClass};
use crate::error::Result;
use crate::request::{DEFAULT_BASE_URL, RequestBuilder, Telegram, TelegramKind};
use crate::shards::{Council, NationShards, RegionShards, WorldAssemblyShards, WorldShards};
use crate::transport::{HttpTransport, Transport};
use crate::xml;

/// Rate limited client for the NationStates API.
///
/// Requests issued through one client, even from concurrent tasks, are spaced
/// according to its [`DelayConfig`].
///
/// # Examples
///
/// ```no_run
/// use nsapi::NsClient;
/// use nsapi::shards::{NationShard, NationShards};
///
/// # async fn run() -> nsapi::Result<()> {
/// let client = NsClient::new("MyTool/1.0 (by: Testlandia)")?;
/// let shards = NationShards::new().with(NationShard::Population);
///
/// let nation = client.nation("testlandia", &shards).await?;
/// println!("{:?} million inhabitants", nation.population);
/// # Ok(())
/// # }
/// ```
pub struct NsClient<T = HttpTransport> {
    transport: T,
    gate: RateGate,
    requests: RequestBuilder,
}

impl NsClient<HttpTransport> {
    /// Create a client for the live site with the default delays.
    ///
    /// # Arguments
    ///
    /// * `user_agent` - Identifies the tool to the site administrators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] when `user_agent` is empty.
    pub fn new(user_agent: &str) -> Result<Self> {
        let transport = HttpTransport::new(user_agent)?;
        Ok(Self::with_transport(
            transport,
            DEFAULT_BASE_URL,
            DelayConfig::default(),
        ))
    }

    /// Create a client from a loaded [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] when the user agent is empty
    /// or a configured delay is below its floor.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(
            transport,
            &config.base_url,
            config.delay_config()?,
        ))
    }
}

impl<T: Transport> NsClient<T> {
    /// Create a client over any [`Transport`].
    ///
    /// # Arguments
    ///
    /// * `transport` - Performs the GET requests.
    /// * `base_url` - Scheme and host of the API.
    /// * `delay` - Minimum spacing between requests.
    pub fn with_transport(transport: T, base_url: &str, delay: DelayConfig) -> Self {
        NsClient {
            transport,
            gate: RateGate::new(delay),
            requests: RequestBuilder::new(base_url),
        }
    }

    /// Delays applied by this client.
    pub fn delay_config(&self) -> &DelayConfig {
        self.gate.config()
    }

    /// Request the given shards of a nation.
    ///
    /// # Errors
    ///
    /// * [`crate::Error::InvalidArgument`] - `nation` or `shards` is rejected, nothing is sent.
    /// * [`crate::Error::ApiRequestFailure`] - the request failed.
    /// * [`crate::Error::ApiResponseInvalid`] - the body is not a nation document.
    pub async fn nation(&self, nation: &str, shards: &NationShards) -> Result<NationData> {
        let url = self.requests.nation(nation, shards)?;
        info!("request nation {}", nation);

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::nation(&xml::parse_document(body.as_slice())?)
    }

    /// Request the given shards of a region.
    pub async fn region(&self, region: &str, shards: &RegionShards) -> Result<RegionData> {
        let url = self.requests.region(region, shards)?;
        info!("request region {}", region);

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::region(&xml::parse_document(body.as_slice())?)
    }

    /// Request the given world shards.
    pub async fn world(&self, shards: &WorldShards) -> Result<WorldData> {
        let url = self.requests.world(shards)?;
        info!("request world");

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::world(&xml::parse_document(body.as_slice())?)
    }

    /// Request the given shards of a World Assembly council.
    pub async fn world_assembly(
        &self,
        council: Council,
        shards: &WorldAssemblyShards,
    ) -> Result<WorldAssemblyData> {
        let url = self.requests.world_assembly(council, shards)?;
        info!("request {}", council);

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::world_assembly(&xml::parse_document(body.as_slice())?)
    }

    /// Download and decode the daily nations dump.
    ///
    /// The archive is decompressed and parsed as a stream, one nation at a time.
    pub async fn nation_dump(&self) -> Result<Vec<NationData>> {
        let url = self.requests.nations_dump();
        info!("request nations dump");

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::nations_dump(BufReader::new(GzDecoder::new(body.as_slice())))
    }

    /// Download and decode the daily regions dump.
    pub async fn region_dump(&self) -> Result<Vec<RegionData>> {
        let url = self.requests.regions_dump();
        info!("request regions dump");

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::regions_dump(BufReader::new(GzDecoder::new(body.as_slice())))
    }

    /// Queue a telegram for delivery.
    ///
    /// Waits for the telegram cooldown of its kind, then for the standard one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ApiResponseInvalid`] when the site does not
    /// answer that the telegram was queued.
    pub async fn send_telegram(&self, telegram: &Telegram) -> Result<()> {
        let url = self.requests.telegram(telegram)?;
        let class = match telegram.kind {
            TelegramKind::Recruitment => RequestClass::RecruitmentTelegram,
            TelegramKind::NonRecruitment => RequestClass::NonRecruitmentTelegram,
        };
        info!(
            "send telegram {} to {}",
            telegram.telegram_id, telegram.recipient
        );

        let body = self.execute(&url, class).await?;
        decode::telegram(&body)
    }

    /// Check a login verification code.
    ///
    /// # Arguments
    ///
    /// * `nation` - The nation claiming the code.
    /// * `checksum` - The code shown to the nation on the verification page.
    /// * `token` - Site specific token, when the code was generated for one.
    ///
    /// Returns whether the code is valid for this nation.
    pub async fn verify(&self, nation: &str, checksum: &str, token: Option<&str>) -> Result<bool> {
        let url = self.requests.verify(nation, checksum, token)?;
        info!("verify login of {}", nation);

        let body = self.execute(&url, RequestClass::Standard).await?;
        decode::verification(&body)
    }

    /// Wait for the gate, perform the request and record it once it succeeded.
    async fn execute(&self, url: &str, class: RequestClass) -> Result<Vec<u8>> {
        let admission = self.gate.admit(class).await;
        let body = self.transport.get(url).await?;
        admission.record();
        Ok(body)
    }
}
