//! # The Role Computer
//!
//! Derives a user's effective role set. Two branches, no mixing: a
//! non-empty stored override is returned verbatim; otherwise the set is
//! the union of the computed checks, in a fixed order.

use serde::{Deserialize, Serialize};

use uams_core::{Role, Timestamp};

use crate::user::{UserFacts, UserRecord};

/// An insertion-ordered, deduplicated set of roles.
///
/// Order is insignificant to authorization checks but stable for test
/// reproducibility: iteration yields roles in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a role; duplicates are ignored.
    pub fn insert(&mut self, role: Role) {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
    }

    /// Whether the set holds `role`.
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Roles in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    /// Roles in first-insertion order, as a slice.
    pub fn as_slice(&self) -> &[Role] {
        &self.roles
    }

    /// Number of distinct roles held.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = Self::new();
        for role in iter {
            set.insert(role);
        }
        set
    }
}

/// Compute the user's effective roles at `now`.
///
/// A non-empty stored override wins outright. Otherwise the checks run
/// in a fixed order and their union is returned; the order is the
/// set's iteration order.
pub fn compute_roles(user: &UserRecord, facts: &UserFacts<'_>, now: Timestamp) -> RoleSet {
    if !user.stored_roles.is_empty() {
        return user.stored_roles.iter().copied().collect();
    }

    let mut roles = RoleSet::new();
    roles.insert(Role::User);

    // A student with a pending request, or still registered, may apply.
    let has_pending_request = facts.requests.iter().any(|r| r.state.is_applicant_pending());
    let has_live_enrollment = facts.enrollments.iter().any(|e| e.is_live(now));
    if user.student_number.is_some() && (has_pending_request || has_live_enrollment) {
        roles.insert(Role::Demandeur);
    }

    if !user.commissions.is_empty() {
        roles.insert(Role::MembreCommission);
    }

    if !user.referent_composantes.is_empty() {
        roles.insert(Role::ReferentComposante);
    }

    // Existence, not temporal activity: past beneficiaries keep access
    // to their accommodation history.
    if !facts.beneficiary_periods.is_empty() {
        roles.insert(Role::Beneficiaire);
    }

    if let Some(intervenant) = facts.intervenant {
        if !intervenant.is_archived(now) && intervenant.has_non_renfort_event_type() {
            roles.insert(Role::Intervenant);
        }
    }

    if user.is_admin {
        roles.insert(Role::Admin);
        roles.insert(Role::Gestionnaire);
        roles.insert(Role::Planificateur);
        if user.is_technical_recipient {
            roles.insert(Role::AdminTechnique);
        }
    }

    if !user.services.is_empty() {
        let is_renfort = facts
            .intervenant
            .map_or(false, |i| !i.is_archived(now) && i.is_renfort());
        if is_renfort {
            roles.insert(Role::Renfort);
            roles.insert(Role::Planificateur);
        }
        if user.is_gestionnaire {
            roles.insert(Role::Gestionnaire);
            roles.insert(Role::Planificateur);
        }
    }

    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use uams_core::{
        CommissionId, ComposanteId, DateWindow, EventTypeId, PeriodId, ProfileId, ServiceId,
        StudentNumber, UserId,
    };
    use uams_eligibility::{
        BeneficiaryPeriod, Enrollment, EventType, Intervenant, RENFORT_CODE,
    };
    use uams_workflow::Request;

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn student(number: &str) -> UserRecord {
        let mut u = UserRecord::new(UserId::new());
        u.student_number = Some(StudentNumber::new(number));
        u
    }

    fn period_for(user: UserId, window: DateWindow) -> BeneficiaryPeriod {
        BeneficiaryPeriod {
            id: PeriodId::new(),
            profile: ProfileId::new(),
            student: user,
            manager: None,
            window,
            with_support: true,
            tags: Vec::new(),
            grants: Vec::new(),
        }
    }

    fn event_type(code: &str) -> EventType {
        EventType {
            id: EventTypeId::new(),
            code: code.to_string(),
        }
    }

    #[test]
    fn test_user_role_always_present() {
        let u = UserRecord::new(UserId::new());
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert_eq!(roles.as_slice(), &[Role::User]);
    }

    #[test]
    fn test_stored_override_wins_over_contradictory_facts() {
        // Admin flag set, but the override says plain user: the computed
        // branch must be entirely unreachable.
        let mut u = UserRecord::new(UserId::new());
        u.is_admin = true;
        u.stored_roles = vec![Role::User];
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert_eq!(roles.as_slice(), &[Role::User]);
        assert!(!roles.contains(Role::Admin));
    }

    #[test]
    fn test_stored_override_returned_verbatim() {
        let mut u = UserRecord::new(UserId::new());
        u.stored_roles = vec![Role::Gestionnaire, Role::Planificateur];
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert_eq!(roles.as_slice(), &[Role::Gestionnaire, Role::Planificateur]);
    }

    #[test]
    fn test_demandeur_via_pending_request() {
        let u = student("22104987");
        let requests = vec![Request::new(uams_core::CampaignId::new(), u.id)];
        let facts = UserFacts {
            requests: &requests,
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(roles.contains(Role::Demandeur));
    }

    #[test]
    fn test_demandeur_via_live_enrollment() {
        let u = student("22104987");
        let enrollments = vec![Enrollment {
            user: u.id,
            end: Some(ts(2025, 6, 30)),
        }];
        let facts = UserFacts {
            enrollments: &enrollments,
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(roles.contains(Role::Demandeur));
    }

    #[test]
    fn test_no_demandeur_without_student_number() {
        let u = UserRecord::new(UserId::new());
        let enrollments = vec![Enrollment { user: u.id, end: None }];
        let facts = UserFacts {
            enrollments: &enrollments,
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(!roles.contains(Role::Demandeur));
    }

    #[test]
    fn test_no_demandeur_when_request_past_pending() {
        let u = student("22104987");
        let mut request = Request::new(uams_core::CampaignId::new(), u.id);
        request.apply_transition(
            uams_workflow::RequestState::Validee,
            UserId::new(),
            None,
            None,
            ts(2024, 3, 1),
        );
        let requests = vec![request];
        let facts = UserFacts {
            requests: &requests,
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(!roles.contains(Role::Demandeur));
    }

    #[test]
    fn test_beneficiaire_is_existence_not_activity() {
        let u = student("22104987");
        // Period long over; the role is still granted.
        let periods = vec![period_for(
            u.id,
            DateWindow::closed(ts(2020, 9, 1), ts(2021, 6, 30)).unwrap(),
        )];
        let facts = UserFacts {
            beneficiary_periods: &periods,
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(roles.contains(Role::Beneficiaire));
    }

    #[test]
    fn test_intervenant_requires_non_renfort_event_type() {
        let u = UserRecord::new(UserId::new());
        let renfort_only = Intervenant {
            user: u.id,
            end: None,
            event_types: vec![event_type(RENFORT_CODE)],
        };
        let facts = UserFacts {
            intervenant: Some(&renfort_only),
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(!roles.contains(Role::Intervenant));

        let regular = Intervenant {
            user: u.id,
            end: None,
            event_types: vec![event_type("TUTORAT")],
        };
        let facts = UserFacts {
            intervenant: Some(&regular),
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(roles.contains(Role::Intervenant));
    }

    #[test]
    fn test_archived_intervenant_loses_role() {
        let u = UserRecord::new(UserId::new());
        let archived = Intervenant {
            user: u.id,
            end: Some(ts(2024, 1, 1)),
            event_types: vec![event_type("TUTORAT")],
        };
        let facts = UserFacts {
            intervenant: Some(&archived),
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(!roles.contains(Role::Intervenant));
    }

    #[test]
    fn test_admin_grants_management_roles() {
        let mut u = UserRecord::new(UserId::new());
        u.is_admin = true;
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert!(roles.contains(Role::Admin));
        assert!(roles.contains(Role::Gestionnaire));
        assert!(roles.contains(Role::Planificateur));
        assert!(!roles.contains(Role::AdminTechnique));
    }

    #[test]
    fn test_technical_recipient_needs_admin_flag() {
        let mut u = UserRecord::new(UserId::new());
        u.is_technical_recipient = true;
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert!(!roles.contains(Role::AdminTechnique));

        u.is_admin = true;
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert!(roles.contains(Role::AdminTechnique));
    }

    #[test]
    fn test_service_member_renfort() {
        let mut u = UserRecord::new(UserId::new());
        u.services = vec![ServiceId::new()];
        let renfort = Intervenant {
            user: u.id,
            end: None,
            event_types: vec![event_type(RENFORT_CODE)],
        };
        let facts = UserFacts {
            intervenant: Some(&renfort),
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(roles.contains(Role::Renfort));
        assert!(roles.contains(Role::Planificateur));
        assert!(!roles.contains(Role::Intervenant));
    }

    #[test]
    fn test_renfort_outside_service_grants_nothing() {
        let u = UserRecord::new(UserId::new());
        let renfort = Intervenant {
            user: u.id,
            end: None,
            event_types: vec![event_type(RENFORT_CODE)],
        };
        let facts = UserFacts {
            intervenant: Some(&renfort),
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert!(!roles.contains(Role::Renfort));
        assert!(!roles.contains(Role::Planificateur));
    }

    #[test]
    fn test_service_gestionnaire_flag() {
        let mut u = UserRecord::new(UserId::new());
        u.services = vec![ServiceId::new()];
        u.is_gestionnaire = true;
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert!(roles.contains(Role::Gestionnaire));
        assert!(roles.contains(Role::Planificateur));
    }

    #[test]
    fn test_gestionnaire_flag_without_service_is_inert() {
        let mut u = UserRecord::new(UserId::new());
        u.is_gestionnaire = true;
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert!(!roles.contains(Role::Gestionnaire));
    }

    #[test]
    fn test_membership_roles() {
        let mut u = UserRecord::new(UserId::new());
        u.commissions = vec![CommissionId::new()];
        u.referent_composantes = vec![ComposanteId::new()];
        let roles = compute_roles(&u, &UserFacts::default(), ts(2024, 6, 1));
        assert!(roles.contains(Role::MembreCommission));
        assert!(roles.contains(Role::ReferentComposante));
    }

    #[test]
    fn test_computation_is_idempotent() {
        let mut u = student("22104987");
        u.is_admin = true;
        u.commissions = vec![CommissionId::new()];
        let enrollments = vec![Enrollment { user: u.id, end: None }];
        let facts = UserFacts {
            enrollments: &enrollments,
            ..UserFacts::default()
        };
        let now = ts(2024, 6, 1);
        let first = compute_roles(&u, &facts, now);
        let second = compute_roles(&u, &facts, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut u = student("22104987");
        u.is_admin = true;
        let enrollments = vec![Enrollment { user: u.id, end: None }];
        let facts = UserFacts {
            enrollments: &enrollments,
            ..UserFacts::default()
        };
        let roles = compute_roles(&u, &facts, ts(2024, 6, 1));
        assert_eq!(
            roles.as_slice(),
            &[
                Role::User,
                Role::Demandeur,
                Role::Admin,
                Role::Gestionnaire,
                Role::Planificateur,
            ]
        );
    }

    #[test]
    fn test_role_set_dedups() {
        let mut set = RoleSet::new();
        set.insert(Role::User);
        set.insert(Role::User);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_role_set_serde_roundtrip() {
        let set: RoleSet = [Role::User, Role::Admin].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["user","admin"]"#);
        let parsed: RoleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
