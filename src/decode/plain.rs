//! Plain text responses.

use crate::error::{Error, Result};

/// Body of a telegram request accepted into the queue.
const TELEGRAM_QUEUED: &str = "queued\n";

/// Check the body returned by the telegram endpoint.
///
/// # Errors
///
/// Returns [`Error::ApiResponseInvalid`] unless the body is exactly `queued`
/// followed by a newline.
pub fn telegram(body: &[u8]) -> Result<()> {
    if body != TELEGRAM_QUEUED.as_bytes() {
        return Err(Error::response_invalid(
            format!("{TELEGRAM_QUEUED:?}"),
            format!("{:?}", String::from_utf8_lossy(body)),
        ));
    }
    Ok(())
}

/// Read the body returned by the login verification endpoint.
///
/// Surrounding whitespace is ignored, the remaining text must be `1`
/// (verified) or `0` (not verified).
pub fn verification(body: &[u8]) -> Result<bool> {
    match String::from_utf8_lossy(body).trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(Error::response_invalid("\"0\" or \"1\"", format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_queued() {
        assert!(telegram(b"queued\n").is_ok());
    }

    #[test]
    fn test_telegram_rejected() {
        assert!(telegram(b"error\n").unwrap_err().is_response_invalid());
        assert!(telegram(b"queued").unwrap_err().is_response_invalid());
        assert!(telegram(b"").unwrap_err().is_response_invalid());
    }

    #[test]
    fn test_verification() {
        assert!(verification(b"1").unwrap());
        assert!(!verification(b"0").unwrap());
        assert!(verification(b"1\n").unwrap());
    }

    #[test]
    fn test_verification_invalid() {
        assert!(verification(b"2").unwrap_err().is_response_invalid());
        assert!(verification(b"").unwrap_err().is_response_invalid());
        assert!(verification(b"10").unwrap_err().is_response_invalid());
    }
}
