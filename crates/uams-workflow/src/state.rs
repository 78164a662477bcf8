//! # Request States
//!
//! The fixed set of workflow states an accommodation request moves
//! through, from submission (`EnCours`) through committee examination to
//! profile validation or refusal. The set is closed — there is no dynamic
//! extension, and every `match` on `RequestState` is exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The workflow state of an accommodation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    /// Submitted by the student, not yet examined.
    EnCours,
    /// Receipt acknowledged by staff.
    Receptionnee,
    /// Checked complete and compliant.
    Conforme,
    /// Approved.
    Validee,
    /// Refused.
    Refusee,
    /// A support profile has been validated for the requester.
    ProfilValide,
    /// Awaiting committee examination.
    AttenteCommission,
    /// Returned to the student as incomplete or non-compliant.
    NonConforme,
    /// Awaiting the student's signature of the support charter.
    AttenteValidationCharte,
    /// Awaiting validation of the support plan.
    AttenteValidationAccompagnement,
}

/// Total number of request states. Used for compile-time assertions.
pub const REQUEST_STATE_COUNT: usize = 10;

/// Errors of the workflow crate.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// An unknown request-state identifier was parsed.
    #[error("unknown request state: {0:?}")]
    UnknownState(String),
}

impl RequestState {
    /// Returns all ten states in canonical order.
    pub fn all_states() -> &'static [RequestState] {
        &[
            Self::EnCours,
            Self::Receptionnee,
            Self::Conforme,
            Self::Validee,
            Self::Refusee,
            Self::ProfilValide,
            Self::AttenteCommission,
            Self::NonConforme,
            Self::AttenteValidationCharte,
            Self::AttenteValidationAccompagnement,
        ]
    }

    /// Returns the snake_case string identifier for this state.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnCours => "en_cours",
            Self::Receptionnee => "receptionnee",
            Self::Conforme => "conforme",
            Self::Validee => "validee",
            Self::Refusee => "refusee",
            Self::ProfilValide => "profil_valide",
            Self::AttenteCommission => "attente_commission",
            Self::NonConforme => "non_conforme",
            Self::AttenteValidationCharte => "attente_validation_charte",
            Self::AttenteValidationAccompagnement => "attente_validation_accompagnement",
        }
    }

    /// Whether a request in this state still counts as the requester's
    /// pending application (it keeps the applicant role alive).
    pub fn is_applicant_pending(&self) -> bool {
        matches!(self, Self::EnCours | Self::NonConforme)
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestState {
    type Err = WorkflowError;

    /// Parse a state from its snake_case string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_cours" => Ok(Self::EnCours),
            "receptionnee" => Ok(Self::Receptionnee),
            "conforme" => Ok(Self::Conforme),
            "validee" => Ok(Self::Validee),
            "refusee" => Ok(Self::Refusee),
            "profil_valide" => Ok(Self::ProfilValide),
            "attente_commission" => Ok(Self::AttenteCommission),
            "non_conforme" => Ok(Self::NonConforme),
            "attente_validation_charte" => Ok(Self::AttenteValidationCharte),
            "attente_validation_accompagnement" => Ok(Self::AttenteValidationAccompagnement),
            other => Err(WorkflowError::UnknownState(other.to_string())),
        }
    }
}
