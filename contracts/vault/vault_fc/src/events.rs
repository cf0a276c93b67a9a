use soroban_sdk::{contractevent, Address, Symbol, U256};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enter {
    #[topic]
    pub position_id: U256,
    #[topic]
    pub user: Address,
    pub amount: U256,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Exit {
    #[topic]
    pub position_id: U256,
    #[topic]
    pub user: Address,
    pub amount: U256,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetParam {
    #[topic]
    pub param: Symbol,
    pub data: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowCaller {
    #[topic]
    pub who: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockCaller {
    #[topic]
    pub who: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lock {
    pub caller: Address,
}
