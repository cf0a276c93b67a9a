#![no_std]

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, Vec, U256};

/// `on_erc1155_received` selector a receiver returns to accept a single transfer.
pub const ERC1155_RECEIVED: [u8; 4] = [0xf2, 0x3a, 0x6e, 0x61];

/// `on_erc1155_batch_received` selector a receiver returns to accept a batch transfer.
pub const ERC1155_BATCH_RECEIVED: [u8; 4] = [0xbc, 0x19, 0x7c, 0x81];

/// Trait defining the interface of the ERC-1155 style multi-token contract
/// holding the fixed-income positions.
#[contractclient(name = "CustodianClient")]
pub trait CustodianTrait {
    fn balance_of(env: Env, account: Address, id: U256) -> U256;
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool);

    /// Moves `amount` of `id` from `from` to `to`. `operator` must be `from`
    /// or an approved operator of `from`.
    fn safe_transfer_from(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        id: U256,
        amount: U256,
        data: Bytes,
    );

    fn safe_batch_transfer_from(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
        data: Bytes,
    );
}

/// Acceptance callbacks a contract exposes to receive custodian transfers.
#[contractclient(name = "Erc1155ReceiverClient")]
pub trait Erc1155ReceiverTrait {
    fn on_erc1155_received(
        env: Env,
        operator: Address,
        from: Address,
        id: U256,
        value: U256,
        data: Bytes,
    ) -> BytesN<4>;

    fn on_erc1155_batch_received(
        env: Env,
        operator: Address,
        from: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: Bytes,
    ) -> BytesN<4>;
}
