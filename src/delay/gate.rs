//! Rate gate suspending callers until a request may be sent.

use std::time::Duration;

use log::debug;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::{Instant, sleep_until};

use crate::delay::{DelayConfig, RequestClass};

/// Time of the last admitted requests.
///
/// `None` means no such request was recorded yet.
#[derive(Debug, Default)]
struct Timestamps {
    /// Last request of any class.
    last_standard: Option<Instant>,
    /// Last telegram, recruitment and non-recruitment share this clock.
    last_telegram: Option<Instant>,
}

/// Serializes outbound requests and spaces them according to a [`DelayConfig`].
///
/// The gate owns the two timestamps that drive pacing. They live as long as the
/// gate, so one gate must be shared by every caller using the same API identity.
/// Admission holds the gate lock until the request is recorded or abandoned,
/// which keeps concurrent callers strictly sequential.
///
/// # Examples
///
/// ```no_run
/// use nsapi::delay::{DelayConfig, RateGate, RequestClass};
///
/// # #[tokio::main]
/// # async fn main() {
/// let gate = RateGate::new(DelayConfig::default());
///
/// // Waits for the telegram cooldown, then for the standard one
/// let admission = gate.admit(RequestClass::RecruitmentTelegram).await;
/// admission.record();
/// # }
/// ```
#[derive(Debug)]
pub struct RateGate {
    config: DelayConfig,
    timestamps: Mutex<Timestamps>,
}

/// Permission to send one request, obtained from [`RateGate::admit`].
///
/// Call [`Admission::record`] once the request succeeded. Dropping the admission
/// without recording it leaves the timestamps untouched.
#[must_use = "an admission must be recorded once the request succeeded"]
pub struct Admission<'a> {
    class: RequestClass,
    timestamps: MutexGuard<'a, Timestamps>,
}

impl RateGate {
    /// Create a new [RateGate].
    ///
    /// # Arguments
    ///
    /// * `config` - Intervals to enforce.
    pub fn new(config: DelayConfig) -> Self {
        RateGate {
            config,
            timestamps: Mutex::new(Timestamps::default()),
        }
    }

    /// The intervals enforced by this gate.
    pub fn config(&self) -> &DelayConfig {
        &self.config
    }

    /// Wait until a request of `class` may be sent.
    ///
    /// For telegrams the telegram cooldown is awaited first, then the standard
    /// cooldown, since a telegram is also a regular API call. When pacing is
    /// disabled the gate only serializes callers.
    ///
    /// # Arguments
    ///
    /// * `class` - The kind of request about to be sent.
    pub async fn admit(&self, class: RequestClass) -> Admission<'_> {
        let timestamps = self.timestamps.lock().await;

        if self.config.enabled() {
            if let Some(interval) = self.config.telegram_interval(class) {
                wait_for(timestamps.last_telegram, interval, "telegram").await;
            }
            wait_for(timestamps.last_standard, self.config.standard(), "standard").await;
        }

        Admission { class, timestamps }
    }
}

impl Admission<'_> {
    /// Record the admitted request as sent.
    ///
    /// A standard request updates the standard timestamp only. A telegram
    /// updates both timestamps.
    pub fn record(mut self) {
        let now = Instant::now();
        self.timestamps.last_standard = Some(now);
        if self.class.is_telegram() {
            self.timestamps.last_telegram = Some(now);
        }
    }
}

/// Sleep until `interval` has elapsed since `last`.
async fn wait_for(last: Option<Instant>, interval: Duration, cooldown: &str) {
    let Some(last) = last else {
        return;
    };

    let deadline = last + interval;
    let now = Instant::now();
    if deadline > now {
        debug!("waiting {:?} for the {} cooldown", deadline - now, cooldown);
        sleep_until(deadline).await;
    }
}
