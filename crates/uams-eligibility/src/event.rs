//! # Support Events and Event Types
//!
//! A support event is a single bounded intervention (a note-taking
//! session, an exam supervision) delivered by an intervenant for a
//! beneficiary. Event types classify interventions and carry the pay
//! rate timelines; the `RENFORT` code is the sentinel type marking
//! reinforcement staff rather than per-event interventions.

use serde::{Deserialize, Serialize};

use uams_core::{EventTypeId, Timestamp};

use crate::beneficiary::BeneficiaryPeriod;

/// The sentinel event-type code identifying reinforcement staff.
pub const RENFORT_CODE: &str = "RENFORT";

/// A support-event type (note taking, exam supervision, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    /// Stable identifier.
    pub id: EventTypeId,
    /// Short uppercase code (e.g. `PRISE_DE_NOTES`, `RENFORT`).
    pub code: String,
}

impl EventType {
    /// Whether this is the sentinel reinforcement type.
    pub fn is_renfort(&self) -> bool {
        self.code == RENFORT_CODE
    }
}

/// A single bounded support intervention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportEvent {
    /// The intervention's type.
    pub event_type: EventTypeId,
    /// Start instant.
    pub start: Timestamp,
    /// End instant. Events are always bounded.
    pub end: Timestamp,
}

impl SupportEvent {
    /// Whether this event may be attributed to `period`.
    ///
    /// The beneficiary period must fully cover the event: it may not start
    /// after the event starts, and when the period has an end it may not
    /// close before the event ends.
    pub fn is_compatible_with(&self, period: &BeneficiaryPeriod) -> bool {
        if period.window.start() > self.start {
            return false;
        }
        match period.window.end() {
            Some(e) if e < self.end => false,
            _ => true,
        }
    }
}
