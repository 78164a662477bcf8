//! # Beneficiary Periods
//!
//! A beneficiary period records a student's enrollment in a support
//! profile: who the student is, which profile they hold, which staff
//! member manages the file, and over which window the enrollment runs.
//!
//! Periods are created when a profile is attributed — often as the
//! terminal effect of a request reaching an approved state — and closed by
//! setting the window's end when support ceases. They are never
//! hard-deleted while historical accommodations reference them.

use serde::{Deserialize, Serialize};

use uams_core::{BoundedWindow, DateWindow, GrantId, PeriodId, ProfileId, TagId, Timestamp, UserId};

/// A student's enrollment in a support profile over a date window.
///
/// Links to accommodation grants are held on the period side only, as a
/// list of grant identifiers; resolvers receive the grant records
/// themselves as arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeneficiaryPeriod {
    /// Stable identifier of this period.
    pub id: PeriodId,
    /// The support profile attributed to the student.
    pub profile: ProfileId,
    /// The student holding the profile.
    pub student: UserId,
    /// The staff member managing this file, if assigned.
    pub manager: Option<UserId>,
    /// Enrollment window. An absent end means support is ongoing.
    pub window: DateWindow,
    /// Whether the enrollment includes active support (as opposed to a
    /// record kept for accommodation history only).
    pub with_support: bool,
    /// Classification tags.
    pub tags: Vec<TagId>,
    /// Accommodation grants attached to this period.
    pub grants: Vec<GrantId>,
}

impl BeneficiaryPeriod {
    /// Whether the enrollment is active at `at`.
    ///
    /// End-exclusive: a period ending on June 30 is no longer active at
    /// the June 30 midnight instant.
    pub fn is_active(&self, at: Timestamp) -> bool {
        self.window.contains(at)
    }

    /// Whether the enrollment overlaps the reporting window.
    pub fn overlaps(&self, query: &BoundedWindow) -> bool {
        self.window.overlaps(query)
    }
}
