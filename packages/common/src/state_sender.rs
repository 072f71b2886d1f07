//! State sender interface and the deposit payload it carries to the child chain.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::token_type::TokenType;

#[cw_serde]
pub enum StateSenderExecuteMsg {
    /// Publish `data` for the relayer.
    ///
    /// Authorization: Registered senders only
    SyncState { data: Binary },

    /// Authorization: Admin only
    RegisterSender { sender: String },

    /// Authorization: Admin only
    RemoveSender { sender: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum StateSenderQueryMsg {
    /// Id assigned to the most recent sync (0 before the first)
    #[returns(CounterResponse)]
    Counter {},
    #[returns(IsSenderResponse)]
    IsSender { address: String },
}

#[cw_serde]
pub struct CounterResponse {
    pub counter: u64,
}

#[cw_serde]
pub struct IsSenderResponse {
    pub is_sender: bool,
}

/// Payload the root manager syncs for every deposit (JSON encoded).
#[cw_serde]
pub struct DepositPayload {
    /// Account whose funds were locked
    pub depositor: Addr,
    /// Root chain beneficiary of the deposit
    pub user: Addr,
    /// Recipient identity on the child chain
    pub child_recipient: String,
    pub root_token: String,
    pub token_type: TokenType,
    pub child_index: u64,
    pub child_sub_index: u64,
    pub amount: Uint128,
    pub data: Option<Binary>,
}
