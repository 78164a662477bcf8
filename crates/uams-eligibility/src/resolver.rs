//! # Selection Functions
//!
//! Filters over record collections for reporting: which beneficiary
//! periods and which accommodation grants belong in a report over a
//! bounded window. Collections arrive as arguments — this module holds no
//! state and reads no clock.

use uams_core::BoundedWindow;

use crate::accommodation::AccommodationGrant;
use crate::beneficiary::BeneficiaryPeriod;

/// Select the beneficiary periods overlapping `query`.
///
/// With `require_support`, periods kept for accommodation history only
/// (`with_support == false`) are excluded. Input order is preserved.
pub fn beneficiary_periods_in_window<'a>(
    periods: &'a [BeneficiaryPeriod],
    query: &BoundedWindow,
    require_support: bool,
) -> Vec<&'a BeneficiaryPeriod> {
    periods
        .iter()
        .filter(|p| (!require_support || p.with_support) && p.overlaps(query))
        .collect()
}

/// Select the accommodation grants matching `query`, lazily.
///
/// The returned iterator is restartable: it is `Clone`, and calling this
/// function again with the same arguments yields the same sequence.
pub fn accommodations_in_window<'a>(
    grants: &'a [AccommodationGrant],
    query: BoundedWindow,
) -> GrantsInWindow<'a> {
    GrantsInWindow {
        grants: grants.iter(),
        query,
    }
}

/// Lazy iterator over the grants matching a query window.
///
/// See [`accommodations_in_window`].
#[derive(Debug, Clone)]
pub struct GrantsInWindow<'a> {
    grants: std::slice::Iter<'a, AccommodationGrant>,
    query: BoundedWindow,
}

impl<'a> Iterator for GrantsInWindow<'a> {
    type Item = &'a AccommodationGrant;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.grants.by_ref().find(|g| g.matches_query(&query))
    }
}
