#![no_std]
use collybus_interface::CollybusTrait;
use soroban_sdk::{contract, contractimpl, contracttype, Env, U256};

/// Mock Collybus Contract
///
/// Returns whatever price was last set for a (maturity, net, face) triple.
#[contract]
pub struct MockCollybus;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Price(u64, bool, bool),
}

#[contractimpl]
impl MockCollybus {
    pub fn set_price(e: Env, maturity: u64, net: bool, face: bool, price: U256) {
        e.storage()
            .instance()
            .set(&DataKey::Price(maturity, net, face), &price);
    }
}

#[contractimpl]
impl CollybusTrait for MockCollybus {
    fn price(e: Env, maturity: u64, net: bool, face: bool) -> U256 {
        e.storage()
            .instance()
            .get(&DataKey::Price(maturity, net, face))
            .expect("price not set")
    }
}
