//! Validated delay configuration.

use std::time::Duration;

use crate::delay::RequestClass;
use crate::error::{Error, Result};

/// Intervals enforced between requests.
///
/// The intervals can only be raised above the limits published by NationStates,
/// never lowered below them. Setters reject smaller values with
/// [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use nsapi::delay::DelayConfig;
///
/// let config = DelayConfig::default().with_standard_ms(1000).unwrap();
/// assert_eq!(config.standard().as_millis(), 1000);
///
/// assert!(DelayConfig::default().with_standard_ms(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    enabled: bool,
    standard: Duration,
    recruitment_telegram: Duration,
    non_recruitment_telegram: Duration,
}

impl DelayConfig {
    /// Smallest allowed interval between two requests, in milliseconds.
    pub const MIN_STANDARD_MS: u64 = 600;
    /// Smallest allowed interval between two recruitment telegrams, in milliseconds.
    pub const MIN_RECRUITMENT_TELEGRAM_MS: u64 = 180_000;
    /// Smallest allowed interval after a non-recruitment telegram, in milliseconds.
    pub const MIN_NON_RECRUITMENT_TELEGRAM_MS: u64 = 30_000;
    /// Default interval after a non-recruitment telegram, in milliseconds.
    pub const DEFAULT_NON_RECRUITMENT_TELEGRAM_MS: u64 = 60_000;

    /// Turn pacing on or off.
    ///
    /// With pacing off the gate never suspends the caller. Only meant for tests
    /// against a local server.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the interval between two requests.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `ms` is below [`Self::MIN_STANDARD_MS`].
    pub fn with_standard_ms(mut self, ms: u64) -> Result<Self> {
        self.standard = checked_interval("standard", ms, Self::MIN_STANDARD_MS)?;
        Ok(self)
    }

    /// Set the interval between two recruitment telegrams.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `ms` is below
    /// [`Self::MIN_RECRUITMENT_TELEGRAM_MS`].
    pub fn with_recruitment_telegram_ms(mut self, ms: u64) -> Result<Self> {
        self.recruitment_telegram = checked_interval(
            "recruitment telegram",
            ms,
            Self::MIN_RECRUITMENT_TELEGRAM_MS,
        )?;
        Ok(self)
    }

    /// Set the interval enforced before a non-recruitment telegram.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `ms` is below
    /// [`Self::MIN_NON_RECRUITMENT_TELEGRAM_MS`].
    pub fn with_non_recruitment_telegram_ms(mut self, ms: u64) -> Result<Self> {
        self.non_recruitment_telegram = checked_interval(
            "non-recruitment telegram",
            ms,
            Self::MIN_NON_RECRUITMENT_TELEGRAM_MS,
        )?;
        Ok(self)
    }

    /// Whether pacing is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Interval between two requests.
    pub fn standard(&self) -> Duration {
        self.standard
    }

    /// Interval between two recruitment telegrams.
    pub fn recruitment_telegram(&self) -> Duration {
        self.recruitment_telegram
    }

    /// Interval enforced before a non-recruitment telegram.
    pub fn non_recruitment_telegram(&self) -> Duration {
        self.non_recruitment_telegram
    }

    /// Telegram cooldown for `class`, or `None` for standard requests.
    pub(crate) fn telegram_interval(&self, class: RequestClass) -> Option<Duration> {
        match class {
            RequestClass::Standard => None,
            RequestClass::RecruitmentTelegram => Some(self.recruitment_telegram),
            RequestClass::NonRecruitmentTelegram => Some(self.non_recruitment_telegram),
        }
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        DelayConfig {
            enabled: true,
            standard: Duration::from_millis(Self::MIN_STANDARD_MS),
            recruitment_telegram: Duration::from_millis(Self::MIN_RECRUITMENT_TELEGRAM_MS),
            non_recruitment_telegram: Duration::from_millis(
                Self::DEFAULT_NON_RECRUITMENT_TELEGRAM_MS,
            ),
        }
    }
}

fn checked_interval(name: &str, ms: u64, floor: u64) -> Result<Duration> {
    if ms < floor {
        return Err(Error::invalid_argument(format!(
            "the {name} delay must not be less than {floor} ms, got {ms} ms"
        )));
    }
    Ok(Duration::from_millis(ms))
}
