use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: missing role {role}")]
    MissingRole { role: String },

    #[error("Admin cannot revoke its own admin role")]
    CannotRevokeOwnAdmin,

    // ========================================================================
    // Input Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid user")]
    InvalidUser,

    #[error("Invalid child recipient")]
    InvalidChildRecipient,

    #[error("Invalid treasurer")]
    InvalidTreasurer,

    #[error("Invalid root token: native deposits must use DepositNativeFor")]
    InvalidRootToken,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid token id {token_id}: fungible tokens only accept token id 0")]
    InvalidTokenId { token_id: Uint128 },

    #[error("Invalid claim: {reason}")]
    InvalidClaim { reason: String },

    #[error("Direct deposits are not accepted, use a deposit entry point")]
    NoDirectDeposits,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Token not mapped: {token}")]
    TokenNotMapped { token: String },

    #[error("Already mapped: {reason}")]
    AlreadyMapped { reason: String },

    #[error("Unsupported token type {token_type}: no vault registered")]
    UnsupportedTokenType { token_type: String },

    #[error("Invalid token type {token_type}: vault not set")]
    InvalidTokenType { token_type: String },

    #[error("Vault type mismatch: expected {expected}, vault reports {got}")]
    VaultTypeMismatch { expected: String, got: String },

    #[error("Native denom mismatch: expected {expected}, got {got}")]
    NativeDenomMismatch { expected: String, got: String },

    // ========================================================================
    // State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("State sender not set")]
    StateSenderNotSet,

    // ========================================================================
    // Proof Verification Errors
    // ========================================================================

    #[error("Invalid Merkle root: {reason}")]
    InvalidMerkleRoot { reason: String },

    #[error("Invalid proof: {reason}")]
    InvalidProof { reason: String },

    #[error("Transaction not live: proof does not match a known root")]
    TransactionNotLive,

    #[error("Exit already processed: {leaf}")]
    ExitAlreadyProcessed { leaf: String },

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Insufficient fee: required {required}, provided {provided}")]
    InsufficientFee { required: Uint128, provided: Uint128 },

    #[error("Treasurer not set: configure a treasurer before enabling fees")]
    TreasurerNotSet,
}
