use cosmwasm_schema::cw_serde;

pub use common::state_sender::{
    CounterResponse, IsSenderResponse, StateSenderExecuteMsg as ExecuteMsg,
    StateSenderQueryMsg as QueryMsg,
};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Senders registered up front (normally the root manager)
    pub senders: Vec<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
