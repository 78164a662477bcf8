//! # uams-core — Foundational Types for the UAMS Kernel
//!
//! This crate is the bedrock of the UAMS kernel. It defines the type-system
//! primitives every other crate in the workspace builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `UserId`, `ProfileId`,
//!    `CampaignId`, `StudentNumber` — all newtypes. No bare strings or
//!    bare UUIDs for identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision, so that boundary comparisons ("is this record
//!    active at midnight on the campaign's closing day?") are deterministic
//!    and audit records order stably.
//!
//! 3. **Two interval types.** `DateWindow` is the open-ended validity
//!    window carried by records (`end` absent means "unbounded future");
//!    `BoundedWindow` is the `[start, end)` reporting interval supplied by
//!    callers. Keeping them distinct types prevents a record window from
//!    being passed where a query window is expected.
//!
//! 4. **Single `Role` enum.** One definition, 11 variants, exhaustive
//!    `match` everywhere. Adding a role forces every consumer to handle it.
//!
//! 5. **Explicit instants.** Nothing in this workspace reads a global
//!    clock inside resolution logic — every temporal query takes its
//!    reference instant as a parameter. `Timestamp::now()` exists for
//!    callers at the boundary, not for resolvers.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `uams-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod role;
pub mod temporal;
pub mod window;

// Re-export primary types for ergonomic imports.
pub use error::KernelError;
pub use identity::{
    CampaignId, CommissionId, ComposanteId, EventTypeId, GrantId, PeriodId, ProfileId, RequestId,
    ServiceId, StudentNumber, TagId, UserId,
};
pub use role::{Role, ROLE_COUNT};
pub use temporal::Timestamp;
pub use window::{BoundedWindow, DateWindow};
