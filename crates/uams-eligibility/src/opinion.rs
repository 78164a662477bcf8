//! # Health Service Opinions
//!
//! An opinion issued by the student health service ("avis ESE") attesting
//! a student's accommodation needs over a validity window. Opinions are in
//! force through their end date inclusive — a certificate valid "until
//! June 30" still backs an accommodation evaluated for June 30.

use serde::{Deserialize, Serialize};

use uams_core::{DateWindow, Timestamp, UserId};

/// A student health service opinion with its validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthOpinion {
    /// The student the opinion concerns.
    pub student: UserId,
    /// Validity window. An absent end means no expiry was set.
    pub window: DateWindow,
    /// Free-form medical-office comment.
    pub comment: Option<String>,
}

impl HealthOpinion {
    /// Whether the opinion is in force for the evaluation date.
    ///
    /// End-inclusive, unlike the half-open default.
    pub fn in_force(&self, for_date: Timestamp) -> bool {
        for_date >= self.window.start() && self.window.end().map_or(true, |e| for_date <= e)
    }
}
