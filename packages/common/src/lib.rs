//! Common - Shared Types and Utilities for the Root Bridge Contracts
//!
//! This package holds everything more than one contract (or the off-chain
//! relayer) has to agree on byte for byte: token type tags, the withdrawal
//! claim encoding, sorted-pair Merkle proofs and the vault / state-sender
//! message interfaces.

pub mod asset;
pub mod claim;
pub mod hash;
pub mod merkle;
pub mod state_sender;
pub mod token_type;
pub mod vault;

pub use asset::{Asset, AssetInfo};
pub use claim::WithdrawalClaim;
pub use hash::{bytes32_to_hex, keccak256};
pub use token_type::TokenType;
