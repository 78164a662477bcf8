//! # Accommodation Grants
//!
//! An accommodation grant is a specific measure (exam time extension,
//! note-taking assistance, adapted seating...) attributed over a date
//! window and attached to one or more beneficiary periods.
//!
//! ## End bound is inclusive
//!
//! Unlike beneficiary periods, a grant is still active on its end date:
//! an extension granted "through June 30" covers the exams of June 30.
//! The attachment guard and the reporting-window match each use their own
//! literal comparisons below; none of the three rules share a predicate.

use serde::{Deserialize, Serialize};

use uams_core::{BoundedWindow, DateWindow, GrantId, Timestamp};

use crate::beneficiary::BeneficiaryPeriod;

/// Which follow-up track a grant is under, when any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpKind {
    /// Followed by the student health service.
    Ese,
    /// Followed by the accommodation service itself.
    Service,
}

/// An academic semester, for grants that apply to only part of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    /// September through January.
    First,
    /// February through June.
    Second,
}

/// A time-bounded accommodation measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationGrant {
    /// Stable identifier of this grant.
    pub id: GrantId,
    /// The measure's type label (e.g. "tiers-temps", "preteur de notes").
    pub kind: String,
    /// Validity window. An absent end means the grant is open-ended.
    pub window: DateWindow,
    /// Whether the grant applies during the first semester.
    pub applies_semester1: bool,
    /// Whether the grant applies during the second semester.
    pub applies_semester2: bool,
    /// Free-form staff comment.
    pub comment: Option<String>,
    /// Follow-up track, when the grant is monitored.
    pub follow_up: Option<FollowUpKind>,
}

impl AccommodationGrant {
    /// Whether the grant is active at `at`.
    ///
    /// Both bounds inclusive: the grant still applies on its end date.
    pub fn is_active(&self, at: Timestamp) -> bool {
        self.window.start() <= at && self.window.end().map_or(true, |e| at <= e)
    }

    /// Whether this grant may be attached to `period` at instant `now`.
    ///
    /// Attachment is refused only when the beneficiary period already
    /// ended strictly before `now` — closed files are not edited
    /// retroactively. The grant's own dates play no part.
    pub fn can_attach_to(&self, period: &BeneficiaryPeriod, now: Timestamp) -> bool {
        !period.window.ended_before(now)
    }

    /// Whether the grant belongs in a report over `query`.
    ///
    /// Either the grant starts on or before the query and is still open
    /// at the query start, or the query starts first and the grant starts
    /// strictly before the query's end.
    pub fn matches_query(&self, query: &BoundedWindow) -> bool {
        (self.window.start() <= query.start()
            && self.window.end().map_or(true, |e| e > query.start()))
            || (query.start() <= self.window.start() && query.end() > self.window.start())
    }

    /// Whether the grant applies during the given semester.
    pub fn applies_in_semester(&self, semester: Semester) -> bool {
        match semester {
            Semester::First => self.applies_semester1,
            Semester::Second => self.applies_semester2,
        }
    }
}
