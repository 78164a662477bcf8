//! # Intervenants
//!
//! An intervenant is a paid staff member delivering support events. The
//! record carries an optional archive boundary and the event types the
//! intervenant is qualified for; the RENFORT sentinel type distinguishes
//! reinforcement staff from per-event intervenants in the role rules.

use serde::{Deserialize, Serialize};

use uams_core::{Timestamp, UserId};

use crate::event::EventType;

/// A paid support staff member's record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervenant {
    /// The user account behind this record.
    pub user: UserId,
    /// Archive boundary. The record is archived from this instant on;
    /// absent means never archived.
    pub end: Option<Timestamp>,
    /// Event types this intervenant delivers.
    pub event_types: Vec<EventType>,
}

impl Intervenant {
    /// Whether the record is archived at `now`.
    ///
    /// Archived from the boundary instant on (`now >= end`).
    pub fn is_archived(&self, now: Timestamp) -> bool {
        self.end.map_or(false, |e| now >= e)
    }

    /// Whether the record carries at least one event type other than the
    /// RENFORT sentinel.
    pub fn has_non_renfort_event_type(&self) -> bool {
        self.event_types.iter().any(|t| !t.is_renfort())
    }

    /// Whether the record carries the RENFORT sentinel event type.
    pub fn is_renfort(&self) -> bool {
        self.event_types.iter().any(|t| t.is_renfort())
    }
}
