//! # Types
//!
//! Shared data structures used across all modules of the land registry.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! Both parcels and allocation programs are stored as two ledger entries:
//!
//! - [`ParcelConfig`] / [`ProgramConfig`]: written once at creation, never mutated.
//! - [`ParcelState`] / [`ProgramState`]: the small mutable remainder.
//!
//! The public API returns the reconstructed [`Parcel`] and
//! [`AllocationProgram`] views.
//!
//! ### Program lifecycle
//!
//! ```text
//! Open ──allocate──► Closed
//! ```
//!
//! `Closed` is terminal: applications and re-allocation are rejected.

use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

/// Immutable parcel attributes, written once by `create_parcel`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParcelConfig {
    pub id: u64,
    pub geo_hash: BytesN<32>,
    pub area: u64,
    pub location_code: String,
    pub land_use: String,
}

/// Mutable parcel state. The encumbrance flag is the only field that
/// changes after creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParcelState {
    pub active_encumbrance: bool,
}

/// Full parcel view returned by `get_parcel` and `create_parcel`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parcel {
    /// Unique, positive parcel number.
    pub id: u64,
    /// Content hash of the parcel's geometry document (e.g. GeoJSON digest).
    pub geo_hash: BytesN<32>,
    /// Surface in square meters.
    pub area: u64,
    /// Registry location classifier, e.g. `PUNE-001`.
    pub location_code: String,
    /// Land-use classifier, e.g. `AGRI` or `RES`.
    pub land_use: String,
    /// While `true` the parcel backs a loan and cannot change hands.
    pub active_encumbrance: bool,
}

impl Parcel {
    pub(crate) fn from_parts(config: ParcelConfig, state: ParcelState) -> Self {
        Parcel {
            id: config.id,
            geo_hash: config.geo_hash,
            area: config.area,
            location_code: config.location_code,
            land_use: config.land_use,
            active_encumbrance: state.active_encumbrance,
        }
    }
}

/// Ownership record, one per parcel.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ownership {
    /// Current holder.
    pub owner: Address,
    /// Holder before the most recent transfer; `None` until the first transfer.
    pub prev_owner: Option<Address>,
    /// Ledger sequence at which the current ownership began.
    pub start_block: u32,
}

/// Immutable allocation program configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgramConfig {
    pub id: u64,
    /// Parcels offered by the program; its length is the winner capacity.
    pub parcel_ids: Vec<u64>,
    /// Ledger sequence at which the program was created.
    pub created_at: u32,
}

/// Mutable allocation program state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgramState {
    pub closed: bool,
    pub applicant_count: u32,
}

/// Full program view returned by `get_program`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationProgram {
    pub id: u64,
    pub parcel_ids: Vec<u64>,
    /// Applicants in submission order.
    pub applicants: Vec<Address>,
    /// Empty until `allocate` runs; ascending address order afterwards.
    pub winners: Vec<Address>,
    pub closed: bool,
}

/// Role toggled by the administrator.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// May create parcels, transfer ownership and manage allocation programs.
    Officer,
    /// May set or clear the encumbrance flag.
    BankOrOfficer,
}
