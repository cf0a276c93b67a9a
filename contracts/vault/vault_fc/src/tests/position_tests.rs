use super::{VaultFCTest, CURRENCY_ID, FCASH_SCALE};
use crate::{token_id, VaultError};
use custodian_interface::{ERC1155_BATCH_RECEIVED, ERC1155_RECEIVED};
use soroban_sdk::{vec, Bytes, BytesN, Symbol, U256};

#[test]
fn test_maturity_round_trips_through_id() {
    let test = VaultFCTest::setup();

    for maturity in [0u64, 1, test.maturity, 1_719_792_000, (1 << 40) - 1] {
        for asset_type in [token_id::ASSET_TYPE_FCASH, token_id::ASSET_TYPE_LIQUIDITY_TOKEN] {
            let id = token_id::encode(&test.env, CURRENCY_ID, maturity, asset_type);
            assert_eq!(test.vault.maturity(&id), maturity);
        }
    }
}

#[test]
fn test_maturity_ignores_currency() {
    let test = VaultFCTest::setup();
    assert_eq!(test.vault.maturity(&test.foreign_position()), test.maturity);
}

#[test]
fn test_fair_price_delegates_to_collybus() {
    let test = VaultFCTest::setup();
    let net = U256::from_u128(&test.env, 970_000_000_000_000_000);
    let face = U256::from_u128(&test.env, 1_000_000_000_000_000_000);
    test.collybus.set_price(&test.maturity, &true, &false, &net);
    test.collybus.set_price(&test.maturity, &false, &true, &face);

    assert_eq!(test.vault.fair_price(&test.position_id, &true, &false), net);
    assert_eq!(test.vault.fair_price(&test.position_id, &false, &true), face);
}

#[test]
fn test_fair_price_wrong_currency() {
    let test = VaultFCTest::setup();
    test.collybus
        .set_price(&test.maturity, &true, &false, &test.zero());

    assert_eq!(
        test.vault
            .try_fair_price(&test.foreign_position(), &true, &false),
        Err(Ok(VaultError::WrongCurrency))
    );
}

#[test]
fn test_configuration_getters() {
    let test = VaultFCTest::setup();

    assert_eq!(test.vault.codex(), test.codex.address);
    assert_eq!(test.vault.collybus(), test.collybus.address);
    assert_eq!(test.vault.token(), test.custodian.address);
    assert_eq!(test.vault.underlier_token(), test.underlier);
    assert_eq!(test.vault.currency_id(), u32::from(CURRENCY_ID));
    assert_eq!(
        test.vault.token_scale(),
        U256::from_u128(&test.env, FCASH_SCALE)
    );
    assert_eq!(
        test.vault.underlier_scale(),
        U256::from_u128(&test.env, 10_000_000)
    );
    assert_eq!(
        test.vault.vault_type(),
        Symbol::new(&test.env, "ERC1155_FC")
    );
}

#[test]
fn test_receiver_callbacks_return_selectors() {
    let test = VaultFCTest::setup();
    let data = Bytes::new(&test.env);

    assert_eq!(
        test.vault.on_erc1155_received(
            &test.user1,
            &test.user1,
            &test.position_id,
            &test.fcash(1),
            &data
        ),
        BytesN::from_array(&test.env, &ERC1155_RECEIVED)
    );
    assert_eq!(
        test.vault.on_erc1155_batch_received(
            &test.user1,
            &test.user1,
            &vec![&test.env, test.position_id.clone()],
            &vec![&test.env, test.fcash(1)],
            &data
        ),
        BytesN::from_array(&test.env, &ERC1155_BATCH_RECEIVED)
    );
}

#[test]
fn test_vault_accepts_direct_transfers() {
    let test = VaultFCTest::setup();
    let second = token_id::encode(
        &test.env,
        CURRENCY_ID,
        test.maturity + super::EPOCH_LENGTH,
        token_id::ASSET_TYPE_FCASH,
    );
    test.custodian
        .mint(&test.user1, &test.position_id, &test.fcash(3));
    test.custodian.mint(&test.user1, &second, &test.fcash(4));

    test.custodian.safe_transfer_from(
        &test.user1,
        &test.user1,
        &test.vault.address,
        &test.position_id,
        &test.fcash(1),
        &Bytes::new(&test.env),
    );
    test.custodian.safe_batch_transfer_from(
        &test.user1,
        &test.user1,
        &test.vault.address,
        &vec![&test.env, test.position_id.clone(), second.clone()],
        &vec![&test.env, test.fcash(2), test.fcash(4)],
        &Bytes::new(&test.env),
    );

    assert_eq!(test.custody(&test.vault.address), test.fcash(3));
    assert_eq!(
        test.custodian.balance_of(&test.vault.address, &second),
        test.fcash(4)
    );
    // direct transfers do not touch the ledger
    assert_eq!(test.ledger_balance(&test.user1), test.wad(0));
}
