//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision.
//!
//! ## Why UTC-only
//!
//! Every eligibility rule in this system is a comparison against a stored
//! date boundary — the last day a campaign accepts requests, the instant a
//! beneficiary period ends. If two call sites evaluated "the same" instant
//! in different timezones, a record could be active for one and expired for
//! the other. Non-UTC inputs are rejected by the strict parser rather than
//! silently converted; ingestion paths that receive offset timestamps from
//! upstream systems use [`Timestamp::parse_lenient`], which normalizes to
//! UTC explicitly.
//!
//! Sub-second precision is discarded: the domain's boundaries are dates and
//! minutes, and audit records that differ only in nanoseconds would order
//! unstably across round-trips through external stores.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated. For boundary
///   callers only; resolver logic takes instants as parameters.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating.
/// - [`Timestamp::from_ymd()`] — midnight UTC on a calendar date, the
///   natural form of the domain's start/end boundaries.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, rejecting non-UTC
///   offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Midnight UTC on the given calendar date.
    ///
    /// Record validity windows in this domain are stored as dates; their
    /// instant form is midnight at the start of the day.
    ///
    /// # Errors
    ///
    /// Returns an error if the year/month/day triple is not a valid
    /// calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, KernelError> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// A specific UTC wall-clock instant on the given calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not form a valid UTC instant.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Result<Self, KernelError> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
            .ok_or_else(|| {
                KernelError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{min:02}:{sec:02}"
                ))
            })
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted — even `+00:00`, which is semantically equivalent, is
    /// refused so that stored boundary instants have exactly one textual
    /// form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-`Z` offset.
    pub fn parse(s: &str) -> Result<Self, KernelError> {
        if !s.ends_with('Z') {
            return Err(KernelError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            KernelError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// Lenient form for ingesting records from upstream systems that emit
    /// local offsets. The result is always UTC with seconds precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339.
    pub fn parse_lenient(s: &str) -> Result<Self, KernelError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            KernelError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO 8601 with `Z` suffix (e.g., `2024-09-01T00:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
