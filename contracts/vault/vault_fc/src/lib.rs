#![no_std]

#[cfg(feature = "contract")]
mod access;
#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod events;
pub mod math;
#[cfg(feature = "contract")]
mod storage;

#[cfg(all(test, feature = "contract"))]
mod tests;

#[cfg(feature = "contract")]
pub use contract::{VaultFC, VaultFCClient};

pub use vault_fc_interface::{token_id, VaultError, VaultFCTrait};

use soroban_sdk::contractmeta;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "ERC-1155 fixed-income collateral vault"
);
