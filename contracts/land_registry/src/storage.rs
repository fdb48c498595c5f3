//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type      | Description                     |
//! |----------|-----------|---------------------------------|
//! | `Admin`  | `Address` | Administrator fixed by `init`   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type            | Description                           |
//! |------------------------|-----------------|---------------------------------------|
//! | `Officer(addr)`        | `bool`          | Officer membership                    |
//! | `BankOrOfficer(addr)`  | `bool`          | Bank-or-officer membership            |
//! | `ParcelCfg(id)`        | `ParcelConfig`  | Immutable parcel attributes           |
//! | `ParcelSt(id)`         | `ParcelState`   | Encumbrance flag                      |
//! | `Owner(id)`            | `Ownership`     | Current ownership record              |
//! | `ProgCfg(id)`          | `ProgramConfig` | Immutable program configuration       |
//! | `ProgSt(id)`           | `ProgramState`  | Open/closed flag and applicant count  |
//! | `Applicants(id)`       | `Vec<Address>`  | Applicants in submission order        |
//! | `Applied(id, addr)`    | `bool`          | Applicant membership index            |
//! | `Winners(id)`          | `Vec<Address>`  | Allocation result                     |
//! | `Enrolled(parcel_id)`  | `u64`           | Open program currently offering parcel|
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Loaders return `Option` so that entry points decide which error a missing
//! key maps to.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Ownership, ParcelConfig, ParcelState, ProgramConfig, ProgramState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrator address (Instance).
    Admin,
    Officer(Address),
    BankOrOfficer(Address),
    ParcelCfg(u64),
    ParcelSt(u64),
    Owner(u64),
    ProgCfg(u64),
    ProgSt(u64),
    Applicants(u64),
    Applied(u64, Address),
    Winners(u64),
    Enrolled(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Read a persistent entry, extending its TTL only when it exists.
fn read<T>(env: &Env, key: &DataKey) -> Option<T>
where
    T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value: Option<T> = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write<T>(env: &Env, key: &DataKey, value: &T)
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ── Roles ────────────────────────────────────────────────────────────

/// Membership flags are stored only while `true`; clearing removes the entry.
pub fn set_flag(env: &Env, key: &DataKey, enabled: bool) {
    if enabled {
        write(env, key, &true);
    } else {
        env.storage().persistent().remove(key);
    }
}

pub fn get_flag(env: &Env, key: &DataKey) -> bool {
    read(env, key).unwrap_or(false)
}

// ── Parcels ──────────────────────────────────────────────────────────

pub fn parcel_exists(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::ParcelCfg(id))
}

/// Write all three entries of a freshly created parcel.
pub fn save_new_parcel(env: &Env, config: &ParcelConfig, state: &ParcelState, ownership: &Ownership) {
    write(env, &DataKey::ParcelCfg(config.id), config);
    write(env, &DataKey::ParcelSt(config.id), state);
    write(env, &DataKey::Owner(config.id), ownership);
}

pub fn load_parcel_config(env: &Env, id: u64) -> Option<ParcelConfig> {
    read(env, &DataKey::ParcelCfg(id))
}

pub fn load_parcel_state(env: &Env, id: u64) -> Option<ParcelState> {
    read(env, &DataKey::ParcelSt(id))
}

pub fn save_parcel_state(env: &Env, id: u64, state: &ParcelState) {
    write(env, &DataKey::ParcelSt(id), state);
}

pub fn load_ownership(env: &Env, id: u64) -> Option<Ownership> {
    read(env, &DataKey::Owner(id))
}

pub fn save_ownership(env: &Env, id: u64, ownership: &Ownership) {
    write(env, &DataKey::Owner(id), ownership);
}

// ── Allocation programs ──────────────────────────────────────────────

pub fn program_exists(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::ProgCfg(id))
}

pub fn save_new_program(env: &Env, config: &ProgramConfig, state: &ProgramState) {
    write(env, &DataKey::ProgCfg(config.id), config);
    write(env, &DataKey::ProgSt(config.id), state);
    write(env, &DataKey::Applicants(config.id), &Vec::<Address>::new(env));
}

pub fn load_program_config(env: &Env, id: u64) -> Option<ProgramConfig> {
    read(env, &DataKey::ProgCfg(id))
}

pub fn load_program_state(env: &Env, id: u64) -> Option<ProgramState> {
    read(env, &DataKey::ProgSt(id))
}

pub fn save_program_state(env: &Env, id: u64, state: &ProgramState) {
    write(env, &DataKey::ProgSt(id), state);
}

pub fn load_applicants(env: &Env, id: u64) -> Vec<Address> {
    read(env, &DataKey::Applicants(id)).unwrap_or_else(|| Vec::new(env))
}

pub fn has_applied(env: &Env, id: u64, applicant: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Applied(id, applicant.clone()))
}

/// Append `applicant` to the program's list and record it in the
/// membership index. Callers must check [`has_applied`] first.
pub fn push_applicant(env: &Env, id: u64, applicant: &Address) {
    let mut applicants = load_applicants(env, id);
    applicants.push_back(applicant.clone());
    write(env, &DataKey::Applicants(id), &applicants);
    write(env, &DataKey::Applied(id, applicant.clone()), &true);
}

pub fn load_winners(env: &Env, id: u64) -> Vec<Address> {
    read(env, &DataKey::Winners(id)).unwrap_or_else(|| Vec::new(env))
}

pub fn save_winners(env: &Env, id: u64, winners: &Vec<Address>) {
    write(env, &DataKey::Winners(id), winners);
}

/// Open program currently offering `parcel_id`, if any.
pub fn enrolled_in(env: &Env, parcel_id: u64) -> Option<u64> {
    read(env, &DataKey::Enrolled(parcel_id))
}

pub fn enroll(env: &Env, parcel_id: u64, program_id: u64) {
    write(env, &DataKey::Enrolled(parcel_id), &program_id);
}

pub fn release_enrollment(env: &Env, parcel_id: u64) {
    env.storage().persistent().remove(&DataKey::Enrolled(parcel_id));
}
