//! # Request Campaigns
//!
//! A campaign is the time-boxed window during which students may apply
//! for a given request type. A student submits at most one request per
//! campaign — enforced by lookup, not by constraint.
//!
//! ## Open through the closing instant
//!
//! A campaign is open for exactly `[start, end]`, both bounds inclusive —
//! deliberately asymmetric with the half-open record windows. Campaigns
//! publish a closing *date*; a student applying at any instant of that
//! day must still get through.

use serde::{Deserialize, Serialize};

use uams_core::{CampaignId, CommissionId, Timestamp, UserId};

use crate::request::Request;

/// A time-boxed application window for one request type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCampaign {
    /// Stable identifier of this campaign.
    pub id: CampaignId,
    /// The request type collected (e.g. "amenagement_examens").
    pub request_type: String,
    /// First instant at which requests are accepted.
    pub start: Timestamp,
    /// Last instant at which requests are accepted (inclusive).
    pub end: Timestamp,
    /// The commission examining this campaign's requests, when one sits.
    pub committee: Option<CommissionId>,
    /// When the commission sits.
    pub committee_date: Option<Timestamp>,
    /// When the campaign's requests are archived.
    pub archive_date: Option<Timestamp>,
}

impl RequestCampaign {
    /// Whether the campaign accepts requests at `now` (both bounds
    /// inclusive).
    pub fn is_open(&self, now: Timestamp) -> bool {
        self.start <= now && now <= self.end
    }

    /// Whether the campaign's requests are archived at `at`.
    ///
    /// Never archived while no archive date is set.
    pub fn is_archived(&self, at: Timestamp) -> bool {
        self.archive_date.map_or(false, |d| at >= d)
    }

    /// Whether the committee sitting is still ahead.
    ///
    /// False when no sitting is scheduled; the sitting day itself still
    /// counts as upcoming.
    pub fn is_committee_upcoming(&self, now: Timestamp) -> bool {
        self.committee_date.map_or(false, |d| now <= d)
    }

    /// The requester's existing request in this campaign, if any.
    ///
    /// Linear scan by requester identity; requests for other campaigns in
    /// the slice are ignored.
    pub fn current_request_for<'a>(
        &self,
        requests: &'a [Request],
        requester: UserId,
    ) -> Option<&'a Request> {
        requests
            .iter()
            .find(|r| r.campaign == self.id && r.requester == requester)
    }

    /// Whether `requester` may submit to this campaign at `now`: the
    /// campaign is open and they have no request in it yet.
    pub fn is_open_for_requester(
        &self,
        requests: &[Request],
        requester: UserId,
        now: Timestamp,
    ) -> bool {
        self.is_open(now) && self.current_request_for(requests, requester).is_none()
    }
}
