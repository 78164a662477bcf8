//! # User Records and Fact Snapshots
//!
//! The user record carries the stored flags and memberships; the temporal
//! facts arrive separately as borrowed collections, assembled by the
//! repository layer. The kernel never walks a relation back — everything
//! the role computer consults is in these two shapes.

use serde::{Deserialize, Serialize};

use uams_core::{CommissionId, ComposanteId, Role, ServiceId, StudentNumber, UserId};
use uams_eligibility::{BeneficiaryPeriod, Enrollment, Intervenant};
use uams_workflow::Request;

/// A user account's stored flags and memberships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable identifier.
    pub id: UserId,
    /// Registry student number, for students.
    pub student_number: Option<StudentNumber>,
    /// Explicit role override. When non-empty, computed roles are
    /// ignored entirely.
    pub stored_roles: Vec<Role>,
    /// Administrator flag.
    pub is_admin: bool,
    /// Receives technical notifications (with the admin flag, grants the
    /// technical-administrator role).
    pub is_technical_recipient: bool,
    /// Gestionnaire flag, effective through service membership.
    pub is_gestionnaire: bool,
    /// Administrative services the user belongs to.
    pub services: Vec<ServiceId>,
    /// Commissions the user sits on.
    pub commissions: Vec<CommissionId>,
    /// Composantes the user is disability referent for.
    pub referent_composantes: Vec<ComposanteId>,
}

/// Borrowed snapshot of one user's temporal facts.
///
/// All collections are the *user's own* records, already filtered by the
/// repository layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFacts<'a> {
    /// The user's requests across all campaigns.
    pub requests: &'a [Request],
    /// The user's university registrations.
    pub enrollments: &'a [Enrollment],
    /// The user's beneficiary periods.
    pub beneficiary_periods: &'a [BeneficiaryPeriod],
    /// The user's intervenant record, when they have one.
    pub intervenant: Option<&'a Intervenant>,
}

impl UserRecord {
    /// A bare account with no flags, memberships, or override.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            student_number: None,
            stored_roles: Vec::new(),
            is_admin: false,
            is_technical_recipient: false,
            is_gestionnaire: false,
            services: Vec::new(),
            commissions: Vec::new(),
            referent_composantes: Vec::new(),
        }
    }
}
