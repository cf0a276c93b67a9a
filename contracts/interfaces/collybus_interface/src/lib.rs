#![no_std]

use soroban_sdk::{contractclient, Env, U256};

/// Trait defining the interface for the Collybus price oracle.
/// Prices are wad-scaled (1e18) and keyed by maturity.
#[contractclient(name = "CollybusClient")]
pub trait CollybusTrait {
    fn price(env: Env, maturity: u64, net: bool, face: bool) -> U256;
}
