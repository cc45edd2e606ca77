//! Error types returned by the NationStates API client.
//!
//! Every public operation reports failures through [`Error`], which separates
//! the three situations a caller has to react to differently:
//!
//! - [`Error::InvalidArgument`] - the request itself is wrong, nothing was sent
//! - [`Error::ApiRequestFailure`] - the remote host could not be reached or refused the request
//! - [`Error::ApiResponseInvalid`] - the remote host answered with something unexpected

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error coming from the underlying transport.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur while talking to the NationStates API.
///
/// # Variants
///
/// * `InvalidArgument` - A caller supplied value violates a precondition
/// * `ApiRequestFailure` - Network or protocol failure reaching the remote host
/// * `ApiResponseInvalid` - The response body did not have the expected shape
#[derive(Debug, Error)]
pub enum Error {
    /// A subject, shard selector or configuration value was rejected.
    ///
    /// Raised before any network I/O, the caller can fix the input and retry.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be performed.
    ///
    /// Covers connection refused, DNS failures, malformed HTTP and error
    /// statuses returned by the remote host. The transport error is kept as
    /// the source.
    #[error("api request failed: {context}")]
    ApiRequestFailure {
        /// What was being attempted.
        context: String,
        /// Underlying transport error.
        #[source]
        source: BoxError,
    },

    /// The response body did not match what the endpoint should return.
    #[error("invalid api response: expected {expected}, found {found}")]
    ApiResponseInvalid {
        /// Description of the expected content.
        expected: String,
        /// Description of what was actually received.
        found: String,
    },
}

impl Error {
    /// Create an [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an [`Error::ApiRequestFailure`] wrapping a transport error.
    pub fn request_failure(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ApiRequestFailure {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Create an [`Error::ApiResponseInvalid`].
    pub fn response_invalid(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ApiResponseInvalid {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns `true` when the error was raised before any request was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for network and protocol failures.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::ApiRequestFailure { .. })
    }

    /// Returns `true` when the remote host answered with an unexpected body.
    pub fn is_response_invalid(&self) -> bool {
        matches!(self, Self::ApiResponseInvalid { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
