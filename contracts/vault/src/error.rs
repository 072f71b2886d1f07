//! Error types for the vault contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the vault admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not a vault manager")]
    NotManager,

    // ========================================================================
    // Input Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Wrong token: vault holds {expected}, got {got}")]
    WrongToken { expected: String, got: String },

    #[error("Invalid token id {token_id}: fungible vaults only accept token id 0")]
    InvalidTokenId { token_id: Uint128 },

    // ========================================================================
    // Custody Errors
    // ========================================================================

    #[error("Insufficient vault balance for {token}: available {available}, requested {requested}")]
    InsufficientVaultBalance {
        token: String,
        available: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Migration Errors
    // ========================================================================

    #[error("Invalid migration: {reason}")]
    InvalidMigration { reason: String },
}
