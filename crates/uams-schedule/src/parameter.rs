//! # System Parameter Values
//!
//! Administrative parameters (notification addresses, hour ceilings,
//! display texts) are stored as time-sliced values under a parameter key.
//!
//! ## Start bound is exclusive
//!
//! A parameter value takes effect strictly *after* its start instant —
//! `start < date < end` — unlike rate entries, whose start is inclusive.
//! The two rules are kept on their own types and pinned by their own
//! boundary tests.

use serde::{Deserialize, Serialize};

use uams_core::{DateWindow, Timestamp};

/// One time-sliced parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    /// The value, stored as text whatever the parameter's semantics.
    pub value: String,
    /// Validity window.
    pub window: DateWindow,
}

impl ParameterValue {
    /// Whether this value is current for `date` (both bounds exclusive).
    pub fn is_current(&self, date: Timestamp) -> bool {
        self.window.start() < date && self.window.end().map_or(true, |e| date < e)
    }
}

/// A parameter key and its value timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// The parameter's key (e.g. `"plafond_heures"`).
    pub key: String,
    /// Value entries, assumed non-overlapping.
    pub values: Vec<ParameterValue>,
}

impl Parameter {
    /// The value current for `date`, if any. Linear scan, first match.
    pub fn current_at(&self, date: Timestamp) -> Option<&ParameterValue> {
        self.values.iter().find(|v| v.is_current(date))
    }

    /// All values current for `date`.
    ///
    /// Parameters are the one owner kind that supports several
    /// simultaneous values (e.g. multiple notification recipients).
    pub fn all_current_at(&self, date: Timestamp) -> Vec<&ParameterValue> {
        self.values.iter().filter(|v| v.is_current(date)).collect()
    }
}
