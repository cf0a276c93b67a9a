#![no_std]
use custodian_interface::{
    CustodianTrait, Erc1155ReceiverClient, ERC1155_BATCH_RECEIVED, ERC1155_RECEIVED,
};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, Vec, U256};

/// Mock Custodian Contract
///
/// ERC-1155 style multi-token holding fCash positions keyed by their packed id.
/// Soroban cannot tell account and contract addresses apart, so contracts that
/// want the acceptance callbacks opt in through `register_receiver`.
#[contract]
pub struct MockCustodian;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Balance(Address, U256),
    Approval(Address, Address),
    Receiver(Address),
}

#[contractimpl]
impl MockCustodian {
    pub fn mint(e: Env, to: Address, id: U256, amount: U256) {
        let balance = Self::balance_of(e.clone(), to.clone(), id.clone());
        Self::set_balance(&e, &to, &id, &balance.add(&amount));
    }

    pub fn register_receiver(e: Env, receiver: Address) {
        e.storage()
            .instance()
            .set(&DataKey::Receiver(receiver), &true);
    }

    // ========== Internal Helper Functions ==========

    fn set_balance(e: &Env, account: &Address, id: &U256, amount: &U256) {
        e.storage()
            .persistent()
            .set(&DataKey::Balance(account.clone(), id.clone()), amount);
    }

    fn is_receiver(e: &Env, account: &Address) -> bool {
        e.storage()
            .instance()
            .get(&DataKey::Receiver(account.clone()))
            .unwrap_or(false)
    }

    fn check_operator(e: &Env, operator: &Address, from: &Address) {
        operator.require_auth();
        if operator != from && !Self::is_approved_for_all(e.clone(), from.clone(), operator.clone()) {
            panic!("caller is not owner nor approved");
        }
    }

    fn move_balance(e: &Env, from: &Address, to: &Address, id: &U256, amount: &U256) {
        let from_balance = Self::balance_of(e.clone(), from.clone(), id.clone());
        if from_balance < *amount {
            panic!("insufficient balance for transfer");
        }
        Self::set_balance(e, from, id, &from_balance.sub(amount));
        let to_balance = Self::balance_of(e.clone(), to.clone(), id.clone());
        Self::set_balance(e, to, id, &to_balance.add(amount));
    }

    /// A receiver driving the transfer itself is already on the call stack and
    /// cannot be re-entered, so only third-party deliveries are acknowledged.
    fn needs_acceptance(e: &Env, operator: &Address, to: &Address) -> bool {
        operator != to && Self::is_receiver(e, to)
    }
}

#[contractimpl]
impl CustodianTrait for MockCustodian {
    fn balance_of(e: Env, account: Address, id: U256) -> U256 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(account, id))
            .unwrap_or_else(|| U256::from_u32(&e, 0))
    }

    fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Approval(owner, operator))
            .unwrap_or(false)
    }

    fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        e.storage()
            .persistent()
            .set(&DataKey::Approval(owner, operator), &approved);
    }

    fn safe_transfer_from(
        e: Env,
        operator: Address,
        from: Address,
        to: Address,
        id: U256,
        amount: U256,
        data: Bytes,
    ) {
        Self::check_operator(&e, &operator, &from);
        Self::move_balance(&e, &from, &to, &id, &amount);

        if Self::needs_acceptance(&e, &operator, &to) {
            let selector = Erc1155ReceiverClient::new(&e, &to)
                .on_erc1155_received(&operator, &from, &id, &amount, &data);
            if selector != BytesN::from_array(&e, &ERC1155_RECEIVED) {
                panic!("receiver rejected tokens");
            }
        }
    }

    fn safe_batch_transfer_from(
        e: Env,
        operator: Address,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
        data: Bytes,
    ) {
        if ids.len() != amounts.len() {
            panic!("ids and amounts length mismatch");
        }
        Self::check_operator(&e, &operator, &from);
        for (id, amount) in ids.iter().zip(amounts.iter()) {
            Self::move_balance(&e, &from, &to, &id, &amount);
        }

        if Self::needs_acceptance(&e, &operator, &to) {
            let selector = Erc1155ReceiverClient::new(&e, &to)
                .on_erc1155_batch_received(&operator, &from, &ids, &amounts, &data);
            if selector != BytesN::from_array(&e, &ERC1155_BATCH_RECEIVED) {
                panic!("receiver rejected tokens");
            }
        }
    }
}
