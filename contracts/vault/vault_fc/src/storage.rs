use soroban_sdk::{contracttype, Address, Env, U256};

// Storage TTL constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERMISSION_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERMISSION_LIFETIME_THRESHOLD: u32 = PERMISSION_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Codex,
    Collybus,
    Custodian,
    Underlier,
    UnderlierScale,
    TokenScale,
    EpochLength,
    CurrencyId,
    Locked,
    Authorized(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Collaborators (codex and collybus can be replaced through set_param)
pub fn set_codex(env: &Env, codex: &Address) {
    env.storage().instance().set(&DataKey::Codex, codex);
}

pub fn get_codex(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Codex)
        .expect("Codex not set")
}

pub fn set_collybus(env: &Env, collybus: &Address) {
    env.storage().instance().set(&DataKey::Collybus, collybus);
}

pub fn get_collybus(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Collybus)
        .expect("Collybus not set")
}

pub fn set_custodian(env: &Env, custodian: &Address) {
    env.storage().instance().set(&DataKey::Custodian, custodian);
}

pub fn get_custodian(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Custodian)
        .expect("Custodian not set")
}

// Immutable after construction
pub fn set_underlier(env: &Env, underlier: &Address, scale: &U256) {
    env.storage().instance().set(&DataKey::Underlier, underlier);
    env.storage().instance().set(&DataKey::UnderlierScale, scale);
}

pub fn get_underlier(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Underlier)
        .expect("Underlier not set")
}

pub fn get_underlier_scale(env: &Env) -> U256 {
    env.storage()
        .instance()
        .get(&DataKey::UnderlierScale)
        .expect("Underlier scale not set")
}

pub fn set_token_scale(env: &Env, scale: &U256) {
    env.storage().instance().set(&DataKey::TokenScale, scale);
}

pub fn get_token_scale(env: &Env) -> U256 {
    env.storage()
        .instance()
        .get(&DataKey::TokenScale)
        .expect("Token scale not set")
}

pub fn set_epoch_length(env: &Env, epoch_length: u64) {
    env.storage().instance().set(&DataKey::EpochLength, &epoch_length);
}

pub fn get_epoch_length(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::EpochLength)
        .expect("Epoch length not set")
}

pub fn set_currency_id(env: &Env, currency_id: u32) {
    env.storage().instance().set(&DataKey::CurrencyId, &currency_id);
}

pub fn get_currency_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CurrencyId)
        .expect("Currency id not set")
}

// Lock latch (never cleared once set)
pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &true);
}

// Permissions
pub fn is_authorized(env: &Env, who: &Address) -> bool {
    let key = DataKey::Authorized(who.clone());
    if let Some(allowed) = env.storage().persistent().get::<DataKey, bool>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERMISSION_LIFETIME_THRESHOLD,
            PERMISSION_BUMP_AMOUNT,
        );
        allowed
    } else {
        false
    }
}

pub fn set_authorized(env: &Env, who: &Address, allowed: bool) {
    let key = DataKey::Authorized(who.clone());
    env.storage().persistent().set(&key, &allowed);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERMISSION_LIFETIME_THRESHOLD, PERMISSION_BUMP_AMOUNT);
}
