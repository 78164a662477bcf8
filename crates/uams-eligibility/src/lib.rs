//! # uams-eligibility — Temporal Eligibility Records and Resolver
//!
//! Defines the interval-bearing records of the accommodation domain and
//! the resolver answering "is this record active at instant T" and "does
//! this record overlap interval [A, B)".
//!
//! ## Records
//!
//! - **BeneficiaryPeriod** (`beneficiary.rs`): a student's enrollment in a
//!   support profile. Active with an *exclusive* end bound.
//! - **AccommodationGrant** (`accommodation.rs`): a time-bounded
//!   accommodation attached to beneficiary periods. Active with an
//!   *inclusive* end bound.
//! - **SupportEvent** / **EventType** (`event.rs`): a bounded support
//!   intervention and its type, including the sentinel RENFORT type.
//! - **ForfaitPeriod** (`forfait.rs`): a flat-hours allocation window for
//!   an intervenant.
//! - **HealthOpinion** (`opinion.rs`): a student health service opinion,
//!   in force through an *inclusive* end date.
//! - **Intervenant** (`intervenant.rs`) / **Enrollment**
//!   (`enrollment.rs`): the temporal facts the role computer consumes.
//!
//! ## Boundary conventions are per-record
//!
//! The activity rules deliberately disagree about their end bounds: a
//! grant is still active on its end date, a beneficiary period is not.
//! Each rule lives as an inherent method on its record and is pinned by
//! its own boundary tests — there is no shared "is active" predicate to
//! accidentally unify them behind.
//!
//! ## Resolver
//!
//! `resolver.rs` holds the selection functions over record collections.
//! Every function takes its reference instant or query window as an
//! explicit parameter and reads no clock; given the same snapshot and
//! instants, results are deterministic.

pub mod accommodation;
pub mod beneficiary;
pub mod enrollment;
pub mod event;
pub mod forfait;
pub mod intervenant;
pub mod opinion;
pub mod resolver;

// ─── Record re-exports ──────────────────────────────────────────────

pub use accommodation::{AccommodationGrant, FollowUpKind, Semester};
pub use beneficiary::BeneficiaryPeriod;
pub use enrollment::Enrollment;
pub use event::{EventType, SupportEvent, RENFORT_CODE};
pub use forfait::ForfaitPeriod;
pub use intervenant::Intervenant;
pub use opinion::HealthOpinion;

// ─── Resolver re-exports ────────────────────────────────────────────

pub use resolver::{accommodations_in_window, beneficiary_periods_in_window, GrantsInWindow};
