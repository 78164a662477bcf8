//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the UAMS kernel. These
//! prevent accidental identifier confusion — you cannot pass a `UserId`
//! where a `CampaignId` is expected, and a request can never be looked up
//! by a profile's identifier.
//!
//! The uuid-backed identifiers are opaque; [`StudentNumber`] is the one
//! externally-assigned identifier (the university registry's student
//! number) and is kept as a first-class string type rather than a bare
//! `String` field.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user account (student, staff, intervenant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// Unique identifier for a support profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

/// Unique identifier for a request campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub Uuid);

/// Unique identifier for an accommodation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

/// Unique identifier for an accommodation grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantId(pub Uuid);

/// Unique identifier for a beneficiary period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodId(pub Uuid);

/// Unique identifier for a support-event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventTypeId(pub Uuid);

/// Unique identifier for an administrative service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub Uuid);

/// Unique identifier for an accommodation commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommissionId(pub Uuid);

/// Unique identifier for a university composante (faculty, school).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComposanteId(pub Uuid);

/// Unique identifier for a beneficiary tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(pub Uuid);

/// University registry student number.
///
/// Externally assigned; format varies by registry (typically an 8-digit
/// numeric string). Stored verbatim — presence, not format, is what the
/// role rules test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentNumber(pub String);

impl UserId {
    /// Generate a new random user identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ProfileId {
    /// Generate a new random profile identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl CampaignId {
    /// Generate a new random campaign identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl RequestId {
    /// Generate a new random request identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl GrantId {
    /// Generate a new random grant identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl PeriodId {
    /// Generate a new random period identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl EventTypeId {
    /// Generate a new random event-type identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ServiceId {
    /// Generate a new random service identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl CommissionId {
    /// Generate a new random commission identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl ComposanteId {
    /// Generate a new random composante identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl TagId {
    /// Generate a new random tag identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl StudentNumber {
    /// Wrap a registry-assigned student number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request:{}", self.0)
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "campaign:{}", self.0)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "profile:{}", self.0)
    }
}

impl std::fmt::Display for StudentNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
