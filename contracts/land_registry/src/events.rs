//! # Events
//!
//! Every successful command publishes exactly one event; failed commands
//! publish nothing because the host discards the invocation's effects.
//!
//! | Topics                          | Data                     |
//! |---------------------------------|--------------------------|
//! | `("role_set", target)`          | [`RoleChanged`]          |
//! | `("p_created", parcel_id)`      | [`ParcelCreated`]        |
//! | `("encumber", parcel_id)`       | [`EncumbranceSet`]       |
//! | `("transfer", parcel_id)`       | [`OwnershipTransferred`] |
//! | `("prog_new", program_id)`      | [`ProgramCreated`]       |
//! | `("applied", program_id)`       | [`ApplicationSubmitted`] |
//! | `("allocated", program_id)`     | [`AllocationCompleted`]  |
//!
//! The off-chain indexer keys on the first topic; keep these symbols stable.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Vec};

use crate::types::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChanged {
    pub target: Address,
    pub role: Role,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParcelCreated {
    pub parcel_id: u64,
    pub owner: Address,
    pub area: u64,
    pub location_code: String,
    pub land_use: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncumbranceSet {
    pub parcel_id: u64,
    pub by: Address,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub parcel_id: u64,
    pub from: Address,
    pub to: Address,
    pub start_block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgramCreated {
    pub program_id: u64,
    pub parcel_ids: Vec<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApplicationSubmitted {
    pub program_id: u64,
    pub applicant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationCompleted {
    pub program_id: u64,
    pub winners: Vec<Address>,
}

pub fn emit_role_set(env: &Env, target: Address, role: Role, enabled: bool) {
    let topics = (symbol_short!("role_set"), target.clone());
    env.events()
        .publish(topics, RoleChanged { target, role, enabled });
}

pub fn emit_parcel_created(
    env: &Env,
    parcel_id: u64,
    owner: Address,
    area: u64,
    location_code: String,
    land_use: String,
) {
    let topics = (symbol_short!("p_created"), parcel_id);
    let data = ParcelCreated {
        parcel_id,
        owner,
        area,
        location_code,
        land_use,
    };
    env.events().publish(topics, data);
}

pub fn emit_encumbrance_set(env: &Env, parcel_id: u64, by: Address, active: bool) {
    let topics = (symbol_short!("encumber"), parcel_id);
    env.events()
        .publish(topics, EncumbranceSet { parcel_id, by, active });
}

pub fn emit_ownership_transferred(
    env: &Env,
    parcel_id: u64,
    from: Address,
    to: Address,
    start_block: u32,
) {
    let topics = (symbol_short!("transfer"), parcel_id);
    let data = OwnershipTransferred {
        parcel_id,
        from,
        to,
        start_block,
    };
    env.events().publish(topics, data);
}

pub fn emit_program_created(env: &Env, program_id: u64, parcel_ids: Vec<u64>) {
    let topics = (symbol_short!("prog_new"), program_id);
    env.events().publish(
        topics,
        ProgramCreated {
            program_id,
            parcel_ids,
        },
    );
}

pub fn emit_application_submitted(env: &Env, program_id: u64, applicant: Address) {
    let topics = (symbol_short!("applied"), program_id);
    env.events().publish(
        topics,
        ApplicationSubmitted {
            program_id,
            applicant,
        },
    );
}

pub fn emit_allocation_completed(env: &Env, program_id: u64, winners: Vec<Address>) {
    let topics = (symbol_short!("allocated"), program_id);
    env.events().publish(
        topics,
        AllocationCompleted {
            program_id,
            winners,
        },
    );
}
