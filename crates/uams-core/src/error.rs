//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the UAMS kernel. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! The kernel is a family of total functions: ineligibility, closed
//! campaigns, and missing rate entries are ordinary return values
//! (`false`, `None`, empty), never errors. The error channel exists only
//! for caller mistakes the kernel refuses to interpret — an interval whose
//! end precedes its start, a malformed timestamp, an unknown role name.

use thiserror::Error;

use crate::temporal::Timestamp;

/// Top-level error type for the UAMS kernel.
#[derive(Error, Debug)]
pub enum KernelError {
    /// An interval was constructed with `end` strictly before `start`.
    ///
    /// The source rules never define semantics for inverted intervals, so
    /// construction fails fast rather than guessing.
    #[error("invalid interval: end {end} precedes start {start}")]
    InvalidInterval {
        /// The interval's start instant.
        start: Timestamp,
        /// The offending end instant.
        end: Timestamp,
    },

    /// A timestamp string could not be parsed or violated the UTC policy.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A calendar date was out of range (e.g. month 13).
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),

    /// An unknown role identifier was parsed.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
}
