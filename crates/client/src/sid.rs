//! Search ID (SID) helpers.
//!
//! Splunk assigns ad-hoc search IDs of the form `<unix timestamp>.<suffix>`,
//! e.g. `1700000000.42`. The timestamp is the job's creation time, which lets
//! the client correct the server-reported TTL for the time elapsed since.
//!
//! Scheduled and realtime SIDs do not follow this shape; for those the
//! timestamp is unknown and callers fall back to the server's values.

use crate::error::{ClientError, Result};

/// Extract the creation timestamp (unix seconds) embedded in a SID.
///
/// # Errors
///
/// Returns [`ClientError::MalformedSid`] when the first `.`-delimited segment
/// is missing or is not an integer. This is not fatal; treat it as
/// "timestamp unknown".
pub fn sid_timestamp(sid: &str) -> Result<i64> {
    let first = sid
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ClientError::MalformedSid(sid.to_string()))?;

    first
        .parse::<i64>()
        .map_err(|_| ClientError::MalformedSid(sid.to_string()))
}

/// Remaining TTL in seconds, corrected to wall-clock time `now`.
///
/// Computed as `created + ttl - now`. When the SID carries no timestamp, or
/// the arithmetic would overflow, the server-reported `ttl` is returned unchanged.
pub fn corrected_ttl(sid: &str, ttl: i64, now: i64) -> i64 {
    let Ok(created) = sid_timestamp(sid) else {
        tracing::warn!(sid, "SID has no creation timestamp; using reported TTL");
        return ttl;
    };

    created
        .checked_add(ttl)
        .and_then(|expiry| expiry.checked_sub(now))
        .unwrap_or_else(|| {
            tracing::warn!(sid, ttl, now, "TTL correction overflowed; using reported TTL");
            ttl
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sid_timestamp_adhoc_sid() {
        assert_eq!(sid_timestamp("1700000000.42").unwrap(), 1_700_000_000);
        assert_eq!(sid_timestamp("1700000000.42_ABCDEF").unwrap(), 1_700_000_000);
        assert_eq!(sid_timestamp("1700000000").unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_sid_timestamp_malformed() {
        assert!(matches!(sid_timestamp(""), Err(ClientError::MalformedSid(_))));
        assert!(matches!(sid_timestamp(".42"), Err(ClientError::MalformedSid(_))));
        assert!(matches!(
            sid_timestamp("scheduler__admin__search__RMD5_at_1700000000_1"),
            Err(ClientError::MalformedSid(_))
        ));
        assert!(matches!(
            sid_timestamp("rt_1700000000.3"),
            Err(ClientError::MalformedSid(_))
        ));
    }

    #[test]
    fn test_corrected_ttl() {
        assert_eq!(corrected_ttl("1700000000.42", 600, 1_700_000_500), 100);
    }

    #[test]
    fn test_corrected_ttl_can_go_negative() {
        assert_eq!(corrected_ttl("1700000000.42", 600, 1_700_001_000), -400);
    }

    #[test]
    fn test_corrected_ttl_overflow_keeps_reported() {
        assert_eq!(corrected_ttl("9223372036854775807.1", 600, 1_700_000_000), 600);
        assert_eq!(corrected_ttl("-9223372036854775807.1", 600, 1_700_000_000), 600);
    }

    #[test]
    fn test_corrected_ttl_unknown_timestamp_keeps_reported() {
        assert_eq!(corrected_ttl("scheduler_abc", 600, 1_700_000_500), 600);
    }
}
