//! # Access control
//!
//! One administrator, fixed by `init`, toggles two independent role sets:
//!
//! | Role            | Grants                                                     |
//! |-----------------|------------------------------------------------------------|
//! | `Officer`       | create parcels, transfer ownership, create/allocate programs |
//! | `BankOrOfficer` | set or clear the encumbrance flag                          |
//!
//! Roles do not imply each other and the administrator holds neither unless
//! granted. Every entry point funnels through [`require`] so the policy lives
//! in one place.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage::{self, DataKey};
use crate::types::Role;
use crate::Error;

/// Capability a command needs from its caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    Admin,
    Officer,
    BankOrOfficer,
}

fn role_key(role: Role, who: &Address) -> DataKey {
    match role {
        Role::Officer => DataKey::Officer(who.clone()),
        Role::BankOrOfficer => DataKey::BankOrOfficer(who.clone()),
    }
}

/// Store the administrator. Fails if one is already set.
pub fn init_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    if storage::has_admin(env) {
        return Err(Error::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
    Ok(())
}

pub fn admin(env: &Env) -> Result<Address, Error> {
    storage::get_admin(env).ok_or(Error::NotInitialized)
}

pub fn is_admin(env: &Env, who: &Address) -> bool {
    storage::get_admin(env).is_some_and(|admin| admin == *who)
}

pub fn has_role(env: &Env, who: &Address, role: Role) -> bool {
    storage::get_flag(env, &role_key(role, who))
}

/// Return `Ok(())` if `caller` holds `capability`, `Unauthorized` otherwise.
pub fn require(env: &Env, caller: &Address, capability: Capability) -> Result<(), Error> {
    let allowed = match capability {
        Capability::Admin => is_admin(env, caller),
        Capability::Officer => has_role(env, caller, Role::Officer),
        Capability::BankOrOfficer => has_role(env, caller, Role::BankOrOfficer),
    };
    if allowed {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

/// Grant or revoke `role` for `target`. Admin only.
pub fn set_role(
    env: &Env,
    caller: &Address,
    target: &Address,
    role: Role,
    enabled: bool,
) -> Result<(), Error> {
    caller.require_auth();
    require(env, caller, Capability::Admin)?;

    storage::set_flag(env, &role_key(role, target), enabled);
    events::emit_role_set(env, target.clone(), role, enabled);
    Ok(())
}
