//! Request pacing for the NationStates API.
//!
//! NationStates publishes hard rate limits: one request every 600 ms for the
//! whole API, plus a separate cooldown between telegrams which depends on the
//! kind of telegram sent. This module keeps the client under both limits.
//!
//! # Modules
//!
//! - `config` - [`DelayConfig`], the validated intervals and the global toggle
//! - `gate` - [`RateGate`], which suspends callers until a request may be sent
//!
//! # Examples
//!
//! ```no_run
//! use nsapi::delay::{DelayConfig, RateGate, RequestClass};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let gate = RateGate::new(DelayConfig::default());
//!
//! let admission = gate.admit(RequestClass::Standard).await;
//! // ... perform the request ...
//! admission.record();
//! # }
//! ```

mod config;
mod gate;

pub use crate::delay::config::DelayConfig;
pub use crate::delay::gate::{Admission, RateGate};

/// Kind of outbound request, selecting which cooldowns apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestClass {
    /// Any API call that is not a telegram.
    Standard,
    /// A recruitment telegram.
    RecruitmentTelegram,
    /// Any other telegram.
    NonRecruitmentTelegram,
}

impl RequestClass {
    /// Returns `true` for both telegram classes.
    pub fn is_telegram(self) -> bool {
        matches!(
            self,
            RequestClass::RecruitmentTelegram | RequestClass::NonRecruitmentTelegram
        )
    }
}
