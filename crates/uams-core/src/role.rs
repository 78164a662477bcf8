//! # Permission Roles — Single Source of Truth
//!
//! Defines the `Role` enum with all 11 permission roles. This is the ONE
//! definition used across the entire kernel. Every `match` on `Role` must
//! be exhaustive — adding a role forces every consumer to handle it at
//! compile time.
//!
//! Roles come from two places and only two places: a user's stored role
//! override (which wins outright when non-empty), or the role computer's
//! derivation from temporal facts. There are no string-typed role names
//! anywhere in the kernel — authorization middleware receives this enum
//! and intersects it with its required-permission checks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::KernelError;

/// All permission roles in the UAMS kernel.
///
/// # Roles
///
/// | # | Role | Granted when |
/// |---|------|--------------|
/// |  1 | User | always |
/// |  2 | Demandeur | student number + a pending request or live enrollment |
/// |  3 | MembreCommission | at least one commission membership |
/// |  4 | ReferentComposante | referent on at least one composante |
/// |  5 | Beneficiaire | at least one beneficiary period exists |
/// |  6 | Intervenant | non-archived intervenant record, non-renfort event type |
/// |  7 | Renfort | service member + renfort intervenant record |
/// |  8 | Gestionnaire | admin flag, or service member with gestionnaire flag |
/// |  9 | Planificateur | admin flag, or qualifying service membership |
/// | 10 | Admin | admin flag |
/// | 11 | AdminTechnique | admin flag + technical-recipient flag |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Baseline role held by every authenticated user.
    User,
    /// A student currently entitled to submit or follow a request.
    Demandeur,
    /// Member of an accommodation commission.
    MembreCommission,
    /// Disability referent of a university composante.
    ReferentComposante,
    /// A student with a beneficiary period on record.
    Beneficiaire,
    /// Paid support staff delivering per-event interventions.
    Intervenant,
    /// Reinforcement staff (the sentinel RENFORT event type).
    Renfort,
    /// Staff managing beneficiaries and accommodations.
    Gestionnaire,
    /// Staff planning support events.
    Planificateur,
    /// Service administrator.
    Admin,
    /// Administrator who also receives technical notifications.
    AdminTechnique,
}

/// Total number of permission roles. Used for compile-time assertions.
pub const ROLE_COUNT: usize = 11;

impl Role {
    /// Returns all 11 roles in canonical order.
    pub fn all_roles() -> &'static [Role] {
        &[
            Self::User,
            Self::Demandeur,
            Self::MembreCommission,
            Self::ReferentComposante,
            Self::Beneficiaire,
            Self::Intervenant,
            Self::Renfort,
            Self::Gestionnaire,
            Self::Planificateur,
            Self::Admin,
            Self::AdminTechnique,
        ]
    }

    /// Returns the snake_case string identifier for this role.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Demandeur => "demandeur",
            Self::MembreCommission => "membre_commission",
            Self::ReferentComposante => "referent_composante",
            Self::Beneficiaire => "beneficiaire",
            Self::Intervenant => "intervenant",
            Self::Renfort => "renfort",
            Self::Gestionnaire => "gestionnaire",
            Self::Planificateur => "planificateur",
            Self::Admin => "admin",
            Self::AdminTechnique => "admin_technique",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = KernelError;

    /// Parse a role from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`Role::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "demandeur" => Ok(Self::Demandeur),
            "membre_commission" => Ok(Self::MembreCommission),
            "referent_composante" => Ok(Self::ReferentComposante),
            "beneficiaire" => Ok(Self::Beneficiaire),
            "intervenant" => Ok(Self::Intervenant),
            "renfort" => Ok(Self::Renfort),
            "gestionnaire" => Ok(Self::Gestionnaire),
            "planificateur" => Ok(Self::Planificateur),
            "admin" => Ok(Self::Admin),
            "admin_technique" => Ok(Self::AdminTechnique),
            other => Err(KernelError::UnknownRole(other.to_string())),
        }
    }
}
