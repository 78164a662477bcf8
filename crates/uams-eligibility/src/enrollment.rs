//! # University Enrollments
//!
//! A bare enrollment fact ("inscription"): the student is registered at
//! the university until some date. The role rules use it as one of the
//! two gates on the applicant role.

use serde::{Deserialize, Serialize};

use uams_core::{Timestamp, UserId};

/// A student's registration at the university.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// The registered student.
    pub user: UserId,
    /// Registration end. Absent means the registration is open.
    pub end: Option<Timestamp>,
}

impl Enrollment {
    /// Whether the registration is live at `now` (`end > now`; an open
    /// registration is always live).
    pub fn is_live(&self, now: Timestamp) -> bool {
        self.end.map_or(true, |e| e > now)
    }
}
