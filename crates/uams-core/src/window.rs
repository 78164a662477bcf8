//! # Date Windows — Record Validity and Query Intervals
//!
//! Two interval types with deliberately distinct shapes:
//!
//! - [`DateWindow`] — the validity window carried by a record (beneficiary
//!   period, accommodation grant, rate entry...). `end` is optional:
//!   `None` means "unbounded future", the convention used throughout the
//!   domain for records that are open until someone closes them.
//! - [`BoundedWindow`] — a `[start, end)` reporting interval supplied by a
//!   caller ("all periods overlapping the first semester"). Both bounds
//!   are always present.
//!
//! Keeping the two as separate types means a record's own window cannot be
//! passed where a query window is expected, the same way the identifier
//! newtypes keep a `UserId` out of a `CampaignId` slot.
//!
//! ## Boundary conventions
//!
//! [`DateWindow::contains`] implements the default half-open rule
//! (`start` inclusive, `end` exclusive). Several entities deviate from
//! this default — a campaign is open through its closing instant, a health
//! opinion is in force through its end date — and those rules live as
//! methods on the owning entity types, not here. This module only provides
//! the two primitives that are shared verbatim: half-open containment and
//! the symmetric overlap test used by period selection.

use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::temporal::Timestamp;

/// A record validity window: `[start, end)` with an optional end.
///
/// `end == None` represents "unbounded future". Invariant: when present,
/// `end >= start` — enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    start: Timestamp,
    end: Option<Timestamp>,
}

impl DateWindow {
    /// Create a window, validating that `end` (when present) does not
    /// precede `start`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidInterval`] when `end < start`. The
    /// domain rules never define semantics for inverted intervals, so
    /// construction refuses them instead of interpreting.
    pub fn new(start: Timestamp, end: Option<Timestamp>) -> Result<Self, KernelError> {
        if let Some(e) = end {
            if e < start {
                return Err(KernelError::InvalidInterval { start, end: e });
            }
        }
        Ok(Self { start, end })
    }

    /// A window with no end — open until the record is closed.
    pub fn open_ended(start: Timestamp) -> Self {
        Self { start, end: None }
    }

    /// A window with both bounds present.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidInterval`] when `end < start`.
    pub fn closed(start: Timestamp, end: Timestamp) -> Result<Self, KernelError> {
        Self::new(start, Some(end))
    }

    /// The window's start instant.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// The window's end instant, `None` when unbounded.
    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Half-open containment: `at >= start && (end absent || at < end)`.
    ///
    /// This is the default convention (beneficiary periods, rate entries).
    /// Entities with inclusive-end rules implement them on their own type.
    pub fn contains(&self, at: Timestamp) -> bool {
        at >= self.start && self.end.map_or(true, |e| at < e)
    }

    /// Whether this window closed strictly before `at`.
    ///
    /// An open-ended window never has ended.
    pub fn ended_before(&self, at: Timestamp) -> bool {
        self.end.map_or(false, |e| e < at)
    }

    /// Symmetric overlap with a bounded query window.
    ///
    /// Either this window starts first and is still open at the query
    /// start, or the query starts first and its start falls before this
    /// window's end. The second branch compares the query *start* to this
    /// window's end — the query's end bound is not consulted, and an
    /// open-ended window starting after the query start never matches.
    pub fn overlaps(&self, query: &BoundedWindow) -> bool {
        (self.start <= query.start() && self.end.map_or(true, |e| e > query.start()))
            || (query.start() <= self.start && self.end.map_or(false, |e| query.start() < e))
    }
}

/// A bounded `[start, end)` query interval.
///
/// Invariant: `end >= start`, enforced at construction. An empty window
/// (`end == start`) is permitted; it contains no instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundedWindow {
    start: Timestamp,
    end: Timestamp,
}

impl BoundedWindow {
    /// Create a query window.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidInterval`] when `end < start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, KernelError> {
        if end < start {
            return Err(KernelError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// The query window's start instant.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// The query window's end instant.
    pub fn end(&self) -> Timestamp {
        self.end
    }
}
