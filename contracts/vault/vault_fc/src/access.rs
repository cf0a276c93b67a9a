//! Caller permissions and the one-way lock latch.
//!
//! Both live in the vault instance's own storage. Once the vault is locked
//! no permission or configuration change is accepted, so `Locked` is checked
//! ahead of the caller's permission.

use soroban_sdk::{log, Address, Env};
use vault_fc_interface::VaultError;

use crate::{events, storage};

pub fn require_live(env: &Env) -> Result<(), VaultError> {
    if storage::is_locked(env) {
        return Err(VaultError::Locked);
    }
    Ok(())
}

pub fn require_authorized(env: &Env, caller: &Address) -> Result<(), VaultError> {
    caller.require_auth();
    if !storage::is_authorized(env, caller) {
        return Err(VaultError::Unauthorized);
    }
    Ok(())
}

/// Checks applied to every configuration change.
pub fn require_guarded(env: &Env, caller: &Address) -> Result<(), VaultError> {
    require_live(env)?;
    require_authorized(env, caller)
}

pub fn allow_caller(env: &Env, caller: &Address, who: &Address) -> Result<(), VaultError> {
    require_guarded(env, caller)?;
    storage::set_authorized(env, who, true);
    events::AllowCaller { who: who.clone() }.publish(env);
    Ok(())
}

pub fn block_caller(env: &Env, caller: &Address, who: &Address) -> Result<(), VaultError> {
    require_guarded(env, caller)?;
    storage::set_authorized(env, who, false);
    events::BlockCaller { who: who.clone() }.publish(env);
    Ok(())
}

pub fn lock(env: &Env, caller: &Address) -> Result<(), VaultError> {
    if storage::is_locked(env) {
        return Err(VaultError::AlreadyLocked);
    }
    require_authorized(env, caller)?;
    storage::set_locked(env);
    log!(env, "vault locked", caller.clone());
    events::Lock {
        caller: caller.clone(),
    }
    .publish(env);
    Ok(())
}
