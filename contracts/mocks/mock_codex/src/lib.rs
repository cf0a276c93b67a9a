#![no_std]
use codex_interface::CodexTrait;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, I256, U256};

/// Mock Codex Contract
///
/// Minimal protocol ledger: keeps signed wad balances per (vault, token id, user)
/// and refuses deltas that would push a balance below zero.
#[contract]
pub struct MockCodex;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Balance(Address, U256, Address),
}

#[contractimpl]
impl CodexTrait for MockCodex {
    fn modify_balance(e: Env, vault: Address, token_id: U256, user: Address, amount: I256) {
        vault.require_auth();

        let key = DataKey::Balance(vault.clone(), token_id.clone(), user.clone());
        let balance = Self::balances(e.clone(), vault, token_id, user);
        let updated = balance.add(&amount);
        if updated < I256::from_i32(&e, 0) {
            panic!("insufficient balance");
        }
        e.storage().persistent().set(&key, &updated);
    }

    fn balances(e: Env, vault: Address, token_id: U256, user: Address) -> I256 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(vault, token_id, user))
            .unwrap_or_else(|| I256::from_i32(&e, 0))
    }
}
