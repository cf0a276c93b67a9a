#![no_std]

pub mod token_id;

use soroban_sdk::{contractclient, contracterror, Address, Env, Symbol, U256};

pub use token_id::TokenId;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    Unauthorized = 1,
    Locked = 2,
    WrongCurrency = 3,
    Overflow = 4,
    UnrecognizedParam = 5,
    AlreadyLocked = 6,
    ZeroEpochLength = 7,
}

/// Trait defining the interface for the fixed-income ERC-1155 vault.
/// This trait is used to generate the VaultFCClient for type-safe cross-contract calls.
#[contractclient(name = "VaultFCClient")]
pub trait VaultFCTrait {
    fn __constructor(
        env: Env,
        admin: Address,
        codex: Address,
        collybus: Address,
        custodian: Address,
        underlier: Address,
        epoch_length: u64,
        currency_id: u32,
    );

    // Access control
    fn allow_caller(env: Env, caller: Address, who: Address) -> Result<(), VaultError>;
    fn block_caller(env: Env, caller: Address, who: Address) -> Result<(), VaultError>;
    fn can_call(env: Env, who: Address) -> bool;
    fn lock(env: Env, caller: Address) -> Result<(), VaultError>;
    fn is_locked(env: Env) -> bool;
    fn live(env: Env) -> bool;

    // Configuration
    fn set_param(env: Env, caller: Address, param: Symbol, data: Address) -> Result<(), VaultError>;
    fn codex(env: Env) -> Address;
    fn collybus(env: Env) -> Address;
    fn token(env: Env) -> Address;
    fn token_scale(env: Env) -> U256;
    fn underlier_token(env: Env) -> Address;
    fn underlier_scale(env: Env) -> U256;
    fn currency_id(env: Env) -> u32;
    fn epoch_length(env: Env) -> u64;
    fn vault_type(env: Env) -> Symbol;

    // Positions
    fn enter(
        env: Env,
        caller: Address,
        position_id: U256,
        beneficiary: Address,
        amount: U256,
    ) -> Result<(), VaultError>;
    fn exit(
        env: Env,
        caller: Address,
        position_id: U256,
        beneficiary: Address,
        amount: U256,
    ) -> Result<(), VaultError>;
    fn maturity(env: Env, position_id: U256) -> u64;
    fn fair_price(env: Env, position_id: U256, net: bool, face: bool) -> Result<U256, VaultError>;
    fn balance_of(env: Env, position_id: U256, account: Address) -> Result<U256, VaultError>;
}
