//! # uams-roles — Effective Role Derivation
//!
//! Materializes a user's effective permission-role set once per
//! authenticated request, from two sources with a strict precedence:
//!
//! 1. **Stored override.** When the user record carries explicit roles,
//!    they are returned verbatim and nothing is computed — stored roles
//!    always win, even over an admin flag.
//! 2. **Computed facts.** Otherwise the set is derived from the user's
//!    flags and memberships plus the temporal facts (requests,
//!    enrollments, beneficiary periods, intervenant record) passed in as
//!    a [`UserFacts`] snapshot.
//!
//! The computation is a pure function of `(user, facts, now)`: same
//! snapshot and instant, same set. The resulting [`RoleSet`] preserves
//! the insertion order of the checks, so test snapshots reproduce without
//! sorting.

pub mod computer;
pub mod user;

pub use computer::{compute_roles, RoleSet};
pub use user::{UserFacts, UserRecord};
