//! Process configuration for the command line tool and [`crate::NsClient::from_config`].
//!
//! Values are read from an optional YAML file, then overridden by environment
//! variables prefixed with `NSAPI_`. Nested keys are separated by a double
//! underscore.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Sent with every request, must let the site administrators reach you
//! user_agent: "MyTool/1.0 (by: Testlandia)"
//!
//! # Scheme and host of the API
//! base_url: "https://www.nationstates.net"
//!
//! # Minimum spacing between requests, in milliseconds
//! delay:
//!   enabled: true
//!   standard_ms: 600
//!   recruitment_telegram_ms: 180000
//!   non_recruitment_telegram_ms: 60000
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export NSAPI_USER_AGENT="MyTool/1.0 (by: Testlandia)"
//! export NSAPI_DELAY__STANDARD_MS=1000
//! ```

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use log::debug;
use serde::Deserialize;

use crate::delay::DelayConfig;
use crate::error::{Error, Result};
use crate::request::DEFAULT_BASE_URL;

/// Prefix of the environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "NSAPI_";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// User agent sent with every request.
    pub user_agent: String,

    /// Scheme and host of the API.
    ///
    /// Defaults to the live site, tests point it at a local server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request spacing.
    #[serde(default)]
    pub delay: Delay,
}

/// Request spacing, in milliseconds.
///
/// # YAML Section
///
/// ```yaml
/// delay:
///   enabled: true
///   standard_ms: 600
///   recruitment_telegram_ms: 180000
///   non_recruitment_telegram_ms: 60000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Delay {
    /// Turning this off removes every wait, only meant for tests.
    pub enabled: bool,
    pub standard_ms: u64,
    pub recruitment_telegram_ms: u64,
    pub non_recruitment_telegram_ms: u64,
}

impl Default for Delay {
    fn default() -> Self {
        Delay {
            enabled: true,
            standard_ms: DelayConfig::MIN_STANDARD_MS,
            recruitment_telegram_ms: DelayConfig::MIN_RECRUITMENT_TELEGRAM_MS,
            non_recruitment_telegram_ms: DelayConfig::DEFAULT_NON_RECRUITMENT_TELEGRAM_MS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load the configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - YAML file to read, environment variables alone are used when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the file does not exist, cannot
    /// be parsed, or the user agent is missing.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !Path::new(path).is_file() {
                return Err(Error::invalid_argument(format!(
                    "configuration file '{path}' does not exist"
                )));
            }
            debug!("read configuration from {}", path);
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| Error::invalid_argument(format!("invalid configuration: {e}")))?;

        if config.user_agent.trim().is_empty() {
            return Err(Error::invalid_argument("the user agent must not be empty"));
        }

        Ok(config)
    }

    /// Convert the delay section, checking each interval against its floor.
    pub fn delay_config(&self) -> Result<DelayConfig> {
        DelayConfig::default()
            .with_enabled(self.delay.enabled)
            .with_standard_ms(self.delay.standard_ms)?
            .with_recruitment_telegram_ms(self.delay.recruitment_telegram_ms)?
            .with_non_recruitment_telegram_ms(self.delay.non_recruitment_telegram_ms)
    }
}
