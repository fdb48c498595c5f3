//! Canonical event types emitted by the land registry contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/land_registry/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the land registry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Officer or bank-or-officer membership toggled (`role_set` topic).
    RoleSet,
    /// A parcel was registered (`p_created` topic).
    ParcelCreated,
    /// A parcel's encumbrance flag was written (`encumber` topic).
    EncumbranceSet,
    /// A parcel changed hands (`transfer` topic).
    OwnershipTransferred,
    /// An allocation program was opened (`prog_new` topic).
    ProgramCreated,
    /// A new applicant joined a program (`applied` topic).
    ApplicationSubmitted,
    /// A program was closed and its winners fixed (`allocated` topic).
    AllocationCompleted,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "role_set" => Self::RoleSet,
            "p_created" => Self::ParcelCreated,
            "encumber" => Self::EncumbranceSet,
            "transfer" => Self::OwnershipTransferred,
            "prog_new" => Self::ProgramCreated,
            "applied" => Self::ApplicationSubmitted,
            "allocated" => Self::AllocationCompleted,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoleSet => "role_set",
            Self::ParcelCreated => "parcel_created",
            Self::EncumbranceSet => "encumbrance_set",
            Self::OwnershipTransferred => "ownership_transferred",
            Self::ProgramCreated => "program_created",
            Self::ApplicationSubmitted => "application_submitted",
            Self::AllocationCompleted => "allocation_completed",
            Self::Unknown => "unknown",
        }
    }

    /// What the event's second topic identifies.
    pub fn subject(&self) -> SubjectKind {
        match self {
            Self::ParcelCreated | Self::EncumbranceSet | Self::OwnershipTransferred => {
                SubjectKind::Parcel
            }
            Self::ProgramCreated | Self::ApplicationSubmitted | Self::AllocationCompleted => {
                SubjectKind::Program
            }
            Self::RoleSet | Self::Unknown => SubjectKind::Account,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Parcel,
    Program,
    Account,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parcel => "parcel",
            Self::Program => "program",
            Self::Account => "account",
        }
    }
}

/// A fully decoded registry event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEvent {
    pub event_id: String,
    pub event_type: String,
    pub subject_kind: String,
    pub subject_id: Option<String>,
    pub actor: Option<String>,
    pub detail: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub subject_kind: String,
    pub subject_id: Option<String>,
    pub actor: Option<String>,
    pub detail: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
