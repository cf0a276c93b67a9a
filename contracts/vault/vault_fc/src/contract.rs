use codex_interface::CodexClient;
use collybus_interface::CollybusClient;
use custodian_interface::{
    CustodianClient, Erc1155ReceiverTrait, ERC1155_BATCH_RECEIVED, ERC1155_RECEIVED,
};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, token, Address, Bytes, BytesN,
    Env, Symbol, Vec, I256, U256,
};
use vault_fc_interface::{token_id, TokenId, VaultError, VaultFCTrait};

use crate::{access, events, math, storage};

/// fCash balances are denominated with 8 decimals regardless of the underlier.
pub const FCASH_DECIMALS: u32 = 8;

#[contract]
pub struct VaultFC;

impl VaultFC {
    /// Decodes `position_id` and rejects ids of another currency market.
    fn position(env: &Env, position_id: &U256) -> Result<TokenId, VaultError> {
        let id = token_id::decode(position_id);
        if u32::from(id.currency_id) != storage::get_currency_id(env) {
            return Err(VaultError::WrongCurrency);
        }
        Ok(id)
    }

    /// Shared validation of `enter` and `exit`; returns the wad delta magnitude.
    fn check_position_amount(
        env: &Env,
        position_id: &U256,
        amount: &U256,
    ) -> Result<I256, VaultError> {
        access::require_live(env)?;
        Self::position(env, position_id)?;
        math::to_internal(env, amount, &storage::get_token_scale(env))
    }
}

#[contractimpl]
impl VaultFCTrait for VaultFC {
    fn __constructor(
        env: Env,
        admin: Address,
        codex: Address,
        collybus: Address,
        custodian: Address,
        underlier: Address,
        epoch_length: u64,
        currency_id: u32,
    ) {
        if epoch_length == 0 {
            panic_with_error!(&env, VaultError::ZeroEpochLength);
        }
        if currency_id > u32::from(u16::MAX) {
            panic_with_error!(&env, VaultError::WrongCurrency);
        }

        let underlier_decimals = token::Client::new(&env, &underlier).decimals();

        storage::set_codex(&env, &codex);
        storage::set_collybus(&env, &collybus);
        storage::set_custodian(&env, &custodian);
        storage::set_underlier(&env, &underlier, &math::pow10(&env, underlier_decimals));
        storage::set_token_scale(&env, &math::pow10(&env, FCASH_DECIMALS));
        storage::set_epoch_length(&env, epoch_length);
        storage::set_currency_id(&env, currency_id);
        storage::set_authorized(&env, &admin, true);
    }

    fn allow_caller(env: Env, caller: Address, who: Address) -> Result<(), VaultError> {
        storage::extend_instance(&env);
        access::allow_caller(&env, &caller, &who)
    }

    fn block_caller(env: Env, caller: Address, who: Address) -> Result<(), VaultError> {
        storage::extend_instance(&env);
        access::block_caller(&env, &caller, &who)
    }

    fn can_call(env: Env, who: Address) -> bool {
        storage::is_authorized(&env, &who)
    }

    fn lock(env: Env, caller: Address) -> Result<(), VaultError> {
        storage::extend_instance(&env);
        access::lock(&env, &caller)
    }

    fn is_locked(env: Env) -> bool {
        storage::is_locked(&env)
    }

    fn live(env: Env) -> bool {
        !storage::is_locked(&env)
    }

    fn set_param(env: Env, caller: Address, param: Symbol, data: Address) -> Result<(), VaultError> {
        let setter: fn(&Env, &Address) = if param == symbol_short!("codex") {
            storage::set_codex
        } else if param == symbol_short!("collybus") {
            storage::set_collybus
        } else {
            return Err(VaultError::UnrecognizedParam);
        };
        access::require_guarded(&env, &caller)?;

        storage::extend_instance(&env);
        setter(&env, &data);
        log!(&env, "param updated", param.clone(), data.clone());
        events::SetParam { param, data }.publish(&env);
        Ok(())
    }

    fn codex(env: Env) -> Address {
        storage::get_codex(&env)
    }

    fn collybus(env: Env) -> Address {
        storage::get_collybus(&env)
    }

    fn token(env: Env) -> Address {
        storage::get_custodian(&env)
    }

    fn token_scale(env: Env) -> U256 {
        storage::get_token_scale(&env)
    }

    fn underlier_token(env: Env) -> Address {
        storage::get_underlier(&env)
    }

    fn underlier_scale(env: Env) -> U256 {
        storage::get_underlier_scale(&env)
    }

    fn currency_id(env: Env) -> u32 {
        storage::get_currency_id(&env)
    }

    fn epoch_length(env: Env) -> u64 {
        storage::get_epoch_length(&env)
    }

    fn vault_type(env: Env) -> Symbol {
        Symbol::new(&env, "ERC1155_FC")
    }

    fn enter(
        env: Env,
        caller: Address,
        position_id: U256,
        beneficiary: Address,
        amount: U256,
    ) -> Result<(), VaultError> {
        caller.require_auth();
        let wad = Self::check_position_amount(&env, &position_id, &amount)?;
        storage::extend_instance(&env);

        let vault = env.current_contract_address();

        // Pull the position into custody, then credit the beneficiary
        CustodianClient::new(&env, &storage::get_custodian(&env)).safe_transfer_from(
            &vault,
            &caller,
            &vault,
            &position_id,
            &amount,
            &Bytes::new(&env),
        );
        CodexClient::new(&env, &storage::get_codex(&env)).modify_balance(
            &vault,
            &position_id,
            &beneficiary,
            &wad,
        );

        events::Enter {
            position_id,
            user: beneficiary,
            amount,
        }
        .publish(&env);
        Ok(())
    }

    fn exit(
        env: Env,
        caller: Address,
        position_id: U256,
        beneficiary: Address,
        amount: U256,
    ) -> Result<(), VaultError> {
        caller.require_auth();
        let wad = Self::check_position_amount(&env, &position_id, &amount)?;
        storage::extend_instance(&env);

        let vault = env.current_contract_address();

        // Debit the caller (not the beneficiary), then release custody
        CodexClient::new(&env, &storage::get_codex(&env)).modify_balance(
            &vault,
            &position_id,
            &caller,
            &math::negate(&env, &wad),
        );
        CustodianClient::new(&env, &storage::get_custodian(&env)).safe_transfer_from(
            &vault,
            &vault,
            &beneficiary,
            &position_id,
            &amount,
            &Bytes::new(&env),
        );

        events::Exit {
            position_id,
            user: caller,
            amount,
        }
        .publish(&env);
        Ok(())
    }

    fn maturity(_env: Env, position_id: U256) -> u64 {
        token_id::decode(&position_id).maturity
    }

    fn fair_price(env: Env, position_id: U256, net: bool, face: bool) -> Result<U256, VaultError> {
        let id = Self::position(&env, &position_id)?;
        Ok(CollybusClient::new(&env, &storage::get_collybus(&env)).price(&id.maturity, &net, &face))
    }

    fn balance_of(env: Env, position_id: U256, account: Address) -> Result<U256, VaultError> {
        Self::position(&env, &position_id)?;
        let wad = CodexClient::new(&env, &storage::get_codex(&env)).balances(
            &env.current_contract_address(),
            &position_id,
            &account,
        );
        math::to_external(&env, &wad, &storage::get_token_scale(&env))
    }
}

#[contractimpl]
impl Erc1155ReceiverTrait for VaultFC {
    fn on_erc1155_received(
        env: Env,
        _operator: Address,
        _from: Address,
        _id: U256,
        _value: U256,
        _data: Bytes,
    ) -> BytesN<4> {
        BytesN::from_array(&env, &ERC1155_RECEIVED)
    }

    fn on_erc1155_batch_received(
        env: Env,
        _operator: Address,
        _from: Address,
        _ids: Vec<U256>,
        _values: Vec<U256>,
        _data: Bytes,
    ) -> BytesN<4> {
        BytesN::from_array(&env, &ERC1155_BATCH_RECEIVED)
    }
}
