//! # Forfait Periods
//!
//! A forfait period credits an intervenant a flat number of hours over a
//! window, instead of per-event pay. Whether a forfait may serve a given
//! beneficiary is a two-sided containment test, evaluated as an explicit
//! OR of two asymmetric checks.

use serde::{Deserialize, Serialize};

use uams_core::{DateWindow, UserId};

use crate::beneficiary::BeneficiaryPeriod;

/// A flat-hours allocation window for an intervenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForfaitPeriod {
    /// The intervenant credited.
    pub intervenant: UserId,
    /// Allocation window.
    pub window: DateWindow,
    /// Hours credited over the window.
    pub hours: u32,
}

impl ForfaitPeriod {
    /// Whether this forfait may serve `period`.
    ///
    /// True when the beneficiary's start falls inside the forfait window,
    /// or when the forfait's start falls inside the beneficiary window.
    /// The two half-open containment checks are kept separate; neither
    /// alone is sufficient, and the pair is not equivalent to a single
    /// symmetric overlap formula at the boundaries.
    pub fn can_serve(&self, period: &BeneficiaryPeriod) -> bool {
        self.window.contains(period.window.start()) || period.window.contains(self.window.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uams_core::{PeriodId, ProfileId, Timestamp};

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn forfait(window: DateWindow) -> ForfaitPeriod {
        ForfaitPeriod {
            intervenant: UserId::new(),
            window,
            hours: 40,
        }
    }

    fn period(window: DateWindow) -> BeneficiaryPeriod {
        BeneficiaryPeriod {
            id: PeriodId::new(),
            profile: ProfileId::new(),
            student: UserId::new(),
            manager: None,
            window,
            with_support: true,
            tags: Vec::new(),
            grants: Vec::new(),
        }
    }

    #[test]
    fn test_beneficiary_starts_inside_forfait() {
        let f = forfait(DateWindow::closed(ts(2024, 9, 1), ts(2025, 6, 30)).unwrap());
        let p = period(DateWindow::open_ended(ts(2025, 1, 1)));
        assert!(f.can_serve(&p));
    }

    #[test]
    fn test_forfait_starts_inside_beneficiary() {
        let f = forfait(DateWindow::open_ended(ts(2025, 1, 1)));
        let p = period(DateWindow::closed(ts(2024, 9, 1), ts(2025, 6, 30)).unwrap());
        assert!(f.can_serve(&p));
    }

    #[test]
    fn test_disjoint_windows() {
        let f = forfait(DateWindow::closed(ts(2023, 9, 1), ts(2024, 6, 30)).unwrap());
        let p = period(DateWindow::open_ended(ts(2024, 9, 1)));
        assert!(!f.can_serve(&p));
    }

    #[test]
    fn test_beneficiary_starting_at_forfait_end_not_served() {
        // Containment is half-open: the forfait's end instant is outside it.
        let f = forfait(DateWindow::closed(ts(2024, 9, 1), ts(2025, 1, 1)).unwrap());
        let p = period(DateWindow::closed(ts(2025, 1, 1), ts(2025, 6, 30)).unwrap());
        assert!(!f.can_serve(&p));
    }

    #[test]
    fn test_open_ended_beneficiary_contains_forfait_start() {
        let f = forfait(DateWindow::open_ended(ts(2026, 1, 1)));
        let p = period(DateWindow::open_ended(ts(2024, 9, 1)));
        assert!(f.can_serve(&p));
    }
}
