//! Packed fCash token ids.
//!
//! Layout of the low 80 bits of the 256-bit id (higher bits are ignored):
//!
//! | bits     | field       |
//! |----------|-------------|
//! | [64, 80) | currency id |
//! | [8, 48)  | maturity    |
//! | [0, 8)   | asset type  |

use soroban_sdk::{Env, U256};

pub const MATURITY_BITS: u32 = 40;
const MATURITY_MASK: u64 = (1 << MATURITY_BITS) - 1;

/// Plain fixed-income token.
pub const ASSET_TYPE_FCASH: u8 = 1;
/// First liquidity token asset type; one per market index from here on.
pub const ASSET_TYPE_LIQUIDITY_TOKEN: u8 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenId {
    pub currency_id: u16,
    pub maturity: u64,
    pub asset_type: u8,
}

/// Decodes the fields of `id`. Never fails.
pub fn decode(id: &U256) -> TokenId {
    let mut buf = [0u8; 32];
    id.to_be_bytes().copy_into_slice(&mut buf);
    let mut low = [0u8; 16];
    low.copy_from_slice(&buf[16..]);
    decode_word(u128::from_be_bytes(low))
}

/// Decodes the fields from the low 128 bits of a token id.
pub fn decode_word(word: u128) -> TokenId {
    TokenId {
        currency_id: (word >> 64) as u16,
        maturity: (word >> 8) as u64 & MATURITY_MASK,
        asset_type: word as u8,
    }
}

pub fn encode_word(currency_id: u16, maturity: u64, asset_type: u8) -> u128 {
    (u128::from(currency_id) << 64)
        | (u128::from(maturity & MATURITY_MASK) << 8)
        | u128::from(asset_type)
}

/// Packs the fields into a token id. Maturity is truncated to 40 bits.
pub fn encode(env: &Env, currency_id: u16, maturity: u64, asset_type: u8) -> U256 {
    U256::from_u128(env, encode_word(currency_id, maturity, asset_type))
}
