//! # Requests and the Transition Recorder
//!
//! A request is one student's application within one campaign. Its
//! workflow history is an append-only list of [`StateChange`] records —
//! the kernel's single persisted side effect. The recorder captures every
//! transition exactly once and never judges whether the transition was
//! sensible; legality is the calling staff action's concern.

use serde::{Deserialize, Serialize};

use uams_core::{CampaignId, ProfileId, RequestId, Timestamp, UserId};

use crate::state::RequestState;

/// Immutable audit record of one state transition.
///
/// Created exactly once per transition; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateChange {
    /// The state the request entered.
    pub new_state: RequestState,
    /// The state the request left. Absent only on records imported from
    /// before previous-state capture existed; the recorder always fills
    /// it.
    pub previous_state: Option<RequestState>,
    /// The staff member or student who acted.
    pub actor: UserId,
    /// Free-form comment attached to the action.
    pub comment: Option<String>,
    /// Profile assigned by this action, when the action assigned one.
    pub assigned_profile: Option<ProfileId>,
    /// When the transition was recorded.
    pub at: Timestamp,
}

/// One student's application within one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Stable identifier of this request.
    pub id: RequestId,
    /// The campaign applied to.
    pub campaign: CampaignId,
    /// The applying student.
    pub requester: UserId,
    /// When the student submitted, once they have.
    pub submitted_at: Option<Timestamp>,
    /// Current workflow state.
    pub state: RequestState,
    /// Profile assigned through the workflow, once one has been.
    pub assigned_profile: Option<ProfileId>,
    /// Free-form staff comment.
    pub comment: Option<String>,
    /// Append-only transition history, oldest first.
    pub history: Vec<StateChange>,
}

impl Request {
    /// Create a fresh request in the initial `EnCours` state, with no
    /// history and no submission timestamp.
    pub fn new(campaign: CampaignId, requester: UserId) -> Self {
        Self {
            id: RequestId::new(),
            campaign,
            requester,
            submitted_at: None,
            state: RequestState::EnCours,
            assigned_profile: None,
            comment: None,
            history: Vec::new(),
        }
    }

    /// Record a state transition.
    ///
    /// Captures the state being left, moves the request to `new_state`,
    /// sets the assigned profile when the action assigned one, and appends
    /// exactly one [`StateChange`]. Returns a reference to the appended
    /// record.
    ///
    /// This never fails: the recorder does not validate transition
    /// legality (see the crate docs).
    pub fn apply_transition(
        &mut self,
        new_state: RequestState,
        actor: UserId,
        comment: Option<String>,
        assigned_profile: Option<ProfileId>,
        at: Timestamp,
    ) -> &StateChange {
        let previous = self.state;
        self.state = new_state;
        if let Some(profile) = assigned_profile {
            self.assigned_profile = Some(profile);
        }

        tracing::debug!(
            request = %self.id,
            from = previous.as_str(),
            to = new_state.as_str(),
            actor = %actor,
            "request transition recorded"
        );

        let index = self.history.len();
        self.history.push(StateChange {
            new_state,
            previous_state: Some(previous),
            actor,
            comment,
            assigned_profile,
            at,
        });
        &self.history[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn make_request() -> Request {
        Request::new(CampaignId::new(), UserId::new())
    }

    #[test]
    fn test_new_request_initial_state() {
        let r = make_request();
        assert_eq!(r.state, RequestState::EnCours);
        assert!(r.history.is_empty());
        assert!(r.submitted_at.is_none());
        assert!(r.assigned_profile.is_none());
    }

    #[test]
    fn test_transition_captures_previous_state() {
        let mut r = make_request();
        let staff = UserId::new();

        let change = r.apply_transition(
            RequestState::Receptionnee,
            staff,
            None,
            None,
            ts(2024, 1, 10),
        );
        assert_eq!(change.previous_state, Some(RequestState::EnCours));
        assert_eq!(change.new_state, RequestState::Receptionnee);
        assert_eq!(r.state, RequestState::Receptionnee);
    }

    #[test]
    fn test_each_transition_appends_exactly_one_record() {
        let mut r = make_request();
        let staff = UserId::new();

        r.apply_transition(RequestState::Receptionnee, staff, None, None, ts(2024, 1, 10));
        r.apply_transition(RequestState::Conforme, staff, None, None, ts(2024, 1, 12));
        r.apply_transition(RequestState::AttenteCommission, staff, None, None, ts(2024, 1, 15));

        assert_eq!(r.history.len(), 3);
        assert_eq!(r.history[1].previous_state, Some(RequestState::Receptionnee));
        assert_eq!(r.history[2].previous_state, Some(RequestState::Conforme));
    }

    #[test]
    fn test_nonsensical_transition_still_recorded() {
        // The recorder does not judge: a jump straight to ProfilValide is
        // captured like any other.
        let mut r = make_request();
        let change = r.apply_transition(
            RequestState::ProfilValide,
            UserId::new(),
            None,
            None,
            ts(2024, 1, 10),
        );
        assert_eq!(change.previous_state, Some(RequestState::EnCours));
        assert_eq!(r.state, RequestState::ProfilValide);
        assert_eq!(r.history.len(), 1);
    }

    #[test]
    fn test_profile_assignment_stamps_request() {
        let mut r = make_request();
        let profile = ProfileId::new();

        r.apply_transition(
            RequestState::ProfilValide,
            UserId::new(),
            Some("profil attribué".to_string()),
            Some(profile),
            ts(2024, 2, 1),
        );
        assert_eq!(r.assigned_profile, Some(profile));
        assert_eq!(r.history[0].assigned_profile, Some(profile));
    }

    #[test]
    fn test_transition_without_profile_keeps_existing_assignment() {
        let mut r = make_request();
        let profile = ProfileId::new();

        r.apply_transition(
            RequestState::ProfilValide,
            UserId::new(),
            None,
            Some(profile),
            ts(2024, 2, 1),
        );
        r.apply_transition(RequestState::Validee, UserId::new(), None, None, ts(2024, 2, 5));

        assert_eq!(r.assigned_profile, Some(profile));
        assert_eq!(r.history[1].assigned_profile, None);
    }

    #[test]
    fn test_transition_to_same_state_recorded() {
        let mut r = make_request();
        r.apply_transition(RequestState::EnCours, UserId::new(), None, None, ts(2024, 1, 10));
        assert_eq!(r.history.len(), 1);
        assert_eq!(r.history[0].previous_state, Some(RequestState::EnCours));
        assert_eq!(r.history[0].new_state, RequestState::EnCours);
    }

    #[test]
    fn test_returned_record_is_the_appended_one() {
        let mut r = make_request();
        let at = ts(2024, 1, 10);
        let change = r.apply_transition(RequestState::Receptionnee, UserId::new(), None, None, at);
        assert_eq!(change.at, at);
        let last = r.history.last().unwrap();
        assert_eq!(last.at, at);
        assert_eq!(last.new_state, RequestState::Receptionnee);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut r = make_request();
        r.apply_transition(RequestState::Receptionnee, UserId::new(), None, None, ts(2024, 1, 10));
        let json = serde_json::to_string(&r).unwrap();
        let parsed: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.state, r.state);
        assert_eq!(parsed.history.len(), 1);
    }
}
