//! # Hourly Rate Schedules
//!
//! Each event type carries a timeline of hourly pay rates. Amounts are
//! integer euro-cents — pay computation never touches floats.

use serde::{Deserialize, Serialize};

use uams_core::{DateWindow, EventTypeId, Timestamp};

/// One time-sliced hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Hourly amount in euro-cents.
    pub amount_cents: u32,
    /// Validity window. An absent end means the rate applies until
    /// superseded.
    pub window: DateWindow,
}

impl RateEntry {
    /// Whether this rate applies at `at` (start inclusive, end exclusive).
    pub fn is_active(&self, at: Timestamp) -> bool {
        self.window.contains(at)
    }
}

/// The rate timeline of one event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchedule {
    /// The event type paid at these rates.
    pub event_type: EventTypeId,
    /// Rate entries, assumed non-overlapping.
    pub entries: Vec<RateEntry>,
}

impl RateSchedule {
    /// The rate in effect at `at`, if any.
    ///
    /// Linear scan, first match wins. On a well-formed timeline at most
    /// one entry matches; on an overlapping one the earliest-listed entry
    /// is returned.
    pub fn current_at(&self, at: Timestamp) -> Option<&RateEntry> {
        self.entries.iter().find(|e| e.is_active(at))
    }
}
