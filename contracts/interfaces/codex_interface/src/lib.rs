#![no_std]

use soroban_sdk::{contractclient, Address, Env, I256, U256};

/// Interface of the protocol ledger that records signed, wad-scaled balances
/// per (vault, token id, user).
#[contractclient(name = "CodexClient")]
pub trait CodexTrait {
    /// Adds `amount` (may be negative) to the balance of `user`.
    /// Must only accept calls authorized by `vault`.
    fn modify_balance(env: Env, vault: Address, token_id: U256, user: Address, amount: I256);

    fn balances(env: Env, vault: Address, token_id: U256, user: Address) -> I256;
}
