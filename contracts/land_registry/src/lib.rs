//! # Land Registry Contract
//!
//! Single Soroban contract `LandRegistry` tracking parcel ownership, guarding
//! transfers behind an encumbrance flag, and running deterministic allocation
//! programs.
//!
//! | Phase        | Entry Point(s)                                             |
//! |--------------|------------------------------------------------------------|
//! | Bootstrap    | [`LandRegistry::init`]                                     |
//! | Role admin   | `set_officer`, `set_bank_or_officer`                       |
//! | Parcels      | `create_parcel`, `set_encumbrance`, `transfer_ownership`   |
//! | Allocation   | `create_allocation`, `apply_for_allocation`, `allocate`    |
//! | Queries      | `admin`, `is_officer`, `is_bank_or_officer`, `get_parcel`, `parcel_exists`, `get_program`, `get_applications`, `get_winners` |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`access`], storage to [`storage`], and
//! winner selection to [`allocation`]. Every command checks all of its
//! preconditions before its first write and returns `Err` on failure, which
//! makes the host discard the whole invocation.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String, Vec};

pub mod access;
pub mod allocation;
pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_allocation;

use access::Capability;
pub use types::{AllocationProgram, Ownership, Parcel, Role};
use types::{ParcelConfig, ParcelState, ProgramConfig, ProgramState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    ParcelNotFound = 2,
    ProgramNotFound = 3,
    DuplicateParcel = 4,
    DuplicateProgram = 5,
    EncumbranceActive = 6,
    ProgramClosed = 7,
    ProgramAlreadyClosed = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
    InvalidArea = 11,
    InvalidId = 12,
    EmptyParcelList = 13,
    ParcelAlreadyEnrolled = 14,
}

#[contract]
pub struct LandRegistry;

#[contractimpl]
impl LandRegistry {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Fix the administrator. Must be called exactly once after deployment.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        access::init_admin(&env, &admin)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        access::admin(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant or revoke the officer role. Admin only.
    pub fn set_officer(env: Env, caller: Address, target: Address, enabled: bool) -> Result<(), Error> {
        access::set_role(&env, &caller, &target, Role::Officer, enabled)
    }

    /// Grant or revoke the bank-or-officer role. Admin only.
    pub fn set_bank_or_officer(
        env: Env,
        caller: Address,
        target: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        access::set_role(&env, &caller, &target, Role::BankOrOfficer, enabled)
    }

    pub fn is_officer(env: Env, identity: Address) -> bool {
        access::has_role(&env, &identity, Role::Officer)
    }

    pub fn is_bank_or_officer(env: Env, identity: Address) -> bool {
        access::has_role(&env, &identity, Role::BankOrOfficer)
    }

    // ─────────────────────────────────────────────────────────
    // Parcels
    // ─────────────────────────────────────────────────────────

    /// Register a parcel owned by `initial_owner`.
    ///
    /// `caller` must be an officer. The ownership clock starts at the current
    /// ledger sequence.
    #[allow(clippy::too_many_arguments)]
    pub fn create_parcel(
        env: Env,
        caller: Address,
        id: u64,
        geo_hash: BytesN<32>,
        area: u64,
        location_code: String,
        land_use: String,
        initial_owner: Address,
    ) -> Result<Parcel, Error> {
        caller.require_auth();
        access::require(&env, &caller, Capability::Officer)?;

        if id == 0 {
            return Err(Error::InvalidId);
        }
        if storage::parcel_exists(&env, id) {
            return Err(Error::DuplicateParcel);
        }
        if area == 0 {
            return Err(Error::InvalidArea);
        }

        let config = ParcelConfig {
            id,
            geo_hash,
            area,
            location_code,
            land_use,
        };
        let state = ParcelState {
            active_encumbrance: false,
        };
        let ownership = Ownership {
            owner: initial_owner.clone(),
            prev_owner: None,
            start_block: env.ledger().sequence(),
        };
        storage::save_new_parcel(&env, &config, &state, &ownership);

        events::emit_parcel_created(
            &env,
            id,
            initial_owner,
            area,
            config.location_code.clone(),
            config.land_use.clone(),
        );
        Ok(Parcel::from_parts(config, state))
    }

    /// Set or clear the encumbrance flag. Idempotent.
    ///
    /// `caller` must hold the bank-or-officer role.
    pub fn set_encumbrance(env: Env, caller: Address, id: u64, value: bool) -> Result<(), Error> {
        caller.require_auth();
        access::require(&env, &caller, Capability::BankOrOfficer)?;

        let mut state = storage::load_parcel_state(&env, id).ok_or(Error::ParcelNotFound)?;
        state.active_encumbrance = value;
        storage::save_parcel_state(&env, id, &state);

        events::emit_encumbrance_set(&env, id, caller, value);
        Ok(())
    }

    /// Move parcel `id` to `new_owner`.
    ///
    /// `caller` must be an officer and the parcel must not be encumbered.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        id: u64,
        new_owner: Address,
    ) -> Result<Ownership, Error> {
        caller.require_auth();
        access::require(&env, &caller, Capability::Officer)?;

        let state = storage::load_parcel_state(&env, id).ok_or(Error::ParcelNotFound)?;
        if state.active_encumbrance {
            return Err(Error::EncumbranceActive);
        }
        let current = storage::load_ownership(&env, id).ok_or(Error::ParcelNotFound)?;

        let start_block = env.ledger().sequence();
        let next = Ownership {
            owner: new_owner.clone(),
            prev_owner: Some(current.owner.clone()),
            start_block,
        };
        storage::save_ownership(&env, id, &next);

        events::emit_ownership_transferred(&env, id, current.owner, new_owner, start_block);
        Ok(next)
    }

    /// Return the parcel and its ownership record.
    pub fn get_parcel(env: Env, id: u64) -> Result<(Parcel, Ownership), Error> {
        let config = storage::load_parcel_config(&env, id).ok_or(Error::ParcelNotFound)?;
        let state = storage::load_parcel_state(&env, id).ok_or(Error::ParcelNotFound)?;
        let ownership = storage::load_ownership(&env, id).ok_or(Error::ParcelNotFound)?;
        Ok((Parcel::from_parts(config, state), ownership))
    }

    pub fn parcel_exists(env: Env, id: u64) -> bool {
        storage::parcel_exists(&env, id)
    }

    // ─────────────────────────────────────────────────────────
    // Allocation programs
    // ─────────────────────────────────────────────────────────

    /// Open allocation program `program_id` offering `parcel_ids`.
    ///
    /// `caller` must be an officer. Every parcel must exist, appear once, and
    /// not be offered by another open program.
    pub fn create_allocation(
        env: Env,
        caller: Address,
        program_id: u64,
        parcel_ids: Vec<u64>,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require(&env, &caller, Capability::Officer)?;

        if program_id == 0 {
            return Err(Error::InvalidId);
        }
        if storage::program_exists(&env, program_id) {
            return Err(Error::DuplicateProgram);
        }
        if parcel_ids.is_empty() {
            return Err(Error::EmptyParcelList);
        }
        for (i, parcel_id) in parcel_ids.iter().enumerate() {
            if !storage::parcel_exists(&env, parcel_id) {
                return Err(Error::ParcelNotFound);
            }
            if storage::enrolled_in(&env, parcel_id).is_some() {
                return Err(Error::ParcelAlreadyEnrolled);
            }
            let repeated = parcel_ids
                .iter()
                .skip(i + 1)
                .any(|other| other == parcel_id);
            if repeated {
                return Err(Error::ParcelAlreadyEnrolled);
            }
        }

        let config = ProgramConfig {
            id: program_id,
            parcel_ids: parcel_ids.clone(),
            created_at: env.ledger().sequence(),
        };
        let state = ProgramState {
            closed: false,
            applicant_count: 0,
        };
        storage::save_new_program(&env, &config, &state);
        for parcel_id in parcel_ids.iter() {
            storage::enroll(&env, parcel_id, program_id);
        }

        events::emit_program_created(&env, program_id, parcel_ids);
        Ok(())
    }

    /// Apply to an open program. A repeat application is a no-op.
    pub fn apply_for_allocation(env: Env, caller: Address, program_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut state =
            storage::load_program_state(&env, program_id).ok_or(Error::ProgramNotFound)?;
        if state.closed {
            return Err(Error::ProgramClosed);
        }
        if storage::has_applied(&env, program_id, &caller) {
            return Ok(());
        }

        storage::push_applicant(&env, program_id, &caller);
        state.applicant_count += 1;
        storage::save_program_state(&env, program_id, &state);

        events::emit_application_submitted(&env, program_id, caller);
        Ok(())
    }

    /// Close the program and fix its winners.
    ///
    /// `caller` must be an officer. Winners are the `min(parcels, applicants)`
    /// smallest applicant addresses; see [`allocation::select_winners`].
    pub fn allocate(env: Env, caller: Address, program_id: u64) -> Result<Vec<Address>, Error> {
        caller.require_auth();
        access::require(&env, &caller, Capability::Officer)?;

        let config =
            storage::load_program_config(&env, program_id).ok_or(Error::ProgramNotFound)?;
        let mut state =
            storage::load_program_state(&env, program_id).ok_or(Error::ProgramNotFound)?;
        if state.closed {
            return Err(Error::ProgramAlreadyClosed);
        }

        let applicants = storage::load_applicants(&env, program_id);
        let winners = allocation::select_winners(&env, &applicants, config.parcel_ids.len());

        storage::save_winners(&env, program_id, &winners);
        state.closed = true;
        storage::save_program_state(&env, program_id, &state);
        for parcel_id in config.parcel_ids.iter() {
            storage::release_enrollment(&env, parcel_id);
        }

        events::emit_allocation_completed(&env, program_id, winners.clone());
        Ok(winners)
    }

    pub fn get_program(env: Env, program_id: u64) -> Result<AllocationProgram, Error> {
        let config =
            storage::load_program_config(&env, program_id).ok_or(Error::ProgramNotFound)?;
        let state =
            storage::load_program_state(&env, program_id).ok_or(Error::ProgramNotFound)?;
        Ok(AllocationProgram {
            id: config.id,
            parcel_ids: config.parcel_ids,
            applicants: storage::load_applicants(&env, program_id),
            winners: storage::load_winners(&env, program_id),
            closed: state.closed,
        })
    }

    /// Applicants in submission order.
    pub fn get_applications(env: Env, program_id: u64) -> Result<Vec<Address>, Error> {
        if !storage::program_exists(&env, program_id) {
            return Err(Error::ProgramNotFound);
        }
        Ok(storage::load_applicants(&env, program_id))
    }

    /// Winners in ascending address order; empty while the program is open.
    pub fn get_winners(env: Env, program_id: u64) -> Result<Vec<Address>, Error> {
        if !storage::program_exists(&env, program_id) {
            return Err(Error::ProgramNotFound);
        }
        Ok(storage::load_winners(&env, program_id))
    }
}
