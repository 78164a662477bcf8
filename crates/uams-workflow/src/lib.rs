//! # uams-workflow — Request Approval Workflow
//!
//! Implements the accommodation-request workflow: a fixed set of ten
//! request states, the transition-recording contract, and the campaign
//! opening rules.
//!
//! ## The recorder contract
//!
//! [`Request::apply_transition`] is a *recorder*, not a validator. Staff
//! actions elsewhere in the system decide which transitions make sense;
//! the kernel's job is that every transition, sensible or not, is captured
//! exactly once in an immutable [`StateChange`] with the previous state it
//! replaced. Centralizing a legality table here would invent policy the
//! surrounding system does not have.
//!
//! ## Modules
//!
//! - **state.rs** — `RequestState`, the closed ten-state enum.
//! - **request.rs** — `Request`, `StateChange`, and the recorder.
//! - **campaign.rs** — `RequestCampaign`: the time-boxed application
//!   window (open through its closing instant, both bounds inclusive) and
//!   the one-request-per-requester lookup.

pub mod campaign;
pub mod request;
pub mod state;

pub use campaign::RequestCampaign;
pub use request::{Request, StateChange};
pub use state::{RequestState, WorkflowError, REQUEST_STATE_COUNT};
