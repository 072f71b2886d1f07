//! Vault interface shared by the root manager and the vault contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::token_type::TokenType;

/// Which asset class a vault custodies.
#[cw_serde]
pub enum VaultKind {
    /// Holds a single bank denom
    Native { denom: String },
    /// Holds any CW20 token, pulled in with `TransferFrom`
    Cw20,
}

impl VaultKind {
    pub fn token_type(&self) -> TokenType {
        match self {
            VaultKind::Native { .. } => TokenType::Native,
            VaultKind::Cw20 => TokenType::Cw20,
        }
    }
}

#[cw_serde]
pub enum VaultExecuteMsg {
    /// Take custody of `amount` of `token` from `depositor`.
    ///
    /// Authorization: Manager only
    ///
    /// Native vaults expect exactly `amount` attached; CW20 vaults pull the
    /// tokens with `TransferFrom`, so the depositor must have approved the vault.
    Lock {
        depositor: String,
        /// Opaque recipient identity on the child chain
        recipient_identity: String,
        amount: Uint128,
        token: String,
        aux_data: Option<Binary>,
    },

    /// Release `amount` of `token` to `recipient`.
    ///
    /// Authorization: Manager only
    Unlock {
        recipient: String,
        token: String,
        token_id: Uint128,
        amount: Uint128,
    },

    /// Authorization: Vault admin only
    GrantManager { address: String },

    /// Authorization: Vault admin only
    RevokeManager { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum VaultQueryMsg {
    #[returns(TokenTypeResponse)]
    TokenType {},
    #[returns(VaultConfigResponse)]
    Config {},
    #[returns(IsManagerResponse)]
    IsManager { address: String },
    #[returns(LockedBalanceResponse)]
    LockedBalance { token: String },
}

#[cw_serde]
pub struct TokenTypeResponse {
    pub token_type: TokenType,
}

#[cw_serde]
pub struct VaultConfigResponse {
    pub admin: Addr,
    pub kind: VaultKind,
}

#[cw_serde]
pub struct IsManagerResponse {
    pub is_manager: bool,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub token: String,
    pub amount: Uint128,
}
