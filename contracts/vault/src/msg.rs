//! Message types for the vault contract.
//!
//! Execute and query messages are the shared vault interface from `common`, so
//! the root manager and the vault cannot drift apart.

use common::vault::VaultKind;
use cosmwasm_schema::cw_serde;

pub use common::vault::{
    IsManagerResponse, LockedBalanceResponse, TokenTypeResponse, VaultConfigResponse,
    VaultExecuteMsg as ExecuteMsg, VaultQueryMsg as QueryMsg,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin allowed to grant and revoke the manager capability
    pub admin: String,
    pub kind: VaultKind,
    /// Initial managers (normally the root manager)
    pub managers: Vec<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
