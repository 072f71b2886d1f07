//! State Sender - Deposit Notifications for the Relayer
//!
//! Registered senders (the root manager) push opaque payloads here. Each
//! payload gets the next id from a monotonically increasing counter and is
//! published as a `state_synced` event, which the relayer picks up and
//! replays on the child chain.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
