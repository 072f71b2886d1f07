//! Root Manager - Token Registry and Withdrawal Authorization
//!
//! The root manager is the root-chain half of a lock/unlock bridge:
//!
//! - **Deposits** lock user assets in the vault registered for the token's
//!   type and publish a payload through the state sender for the relayer.
//! - **Withdrawals** present a claim plus a Merkle proof against a root
//!   published by the relayer; a verified, unseen claim unlocks funds from the
//!   vault exactly once.
//!
//! The implementation is split into:
//! - `registry` - root token <-> child token mapping and vault per type
//! - `fee_manager` - deposit/withdraw fees and treasurer payout
//! - `authorization` - Merkle roots, proof checks and the processed-exit set
//! - `roles` - permission bits per address
//! - `execute/` - execute message handlers
//! - `query` - query message handlers

pub mod authorization;
pub mod contract;
pub mod error;
pub mod execute;
pub mod fee_manager;
pub mod msg;
pub mod query;
pub mod registry;
pub mod roles;
pub mod state;

pub use crate::error::ContractError;
