//! # uams-schedule — Time-Sliced Configuration Timelines
//!
//! Hourly pay rates and system parameters change over time without
//! rewriting history: each owner (an event type, a parameter key) carries
//! a list of value entries, each valid over its own date window, and
//! "the current value" is resolved against an explicit date.
//!
//! Timelines are *assumed* non-overlapping per owner; the kernel does not
//! enforce it. Resolution is a single linear scan returning the first
//! matching entry, so an ill-formed overlapping timeline yields the
//! earliest-listed match — pinned by test rather than rejected.
//!
//! The two owners use different boundary rules (a rate entry's start is
//! inclusive, a parameter value's start is exclusive); each rule lives on
//! its own entry type.

pub mod parameter;
pub mod rate;

pub use parameter::{Parameter, ParameterValue};
pub use rate::{RateEntry, RateSchedule};
