//! Bridge Vault - Custody for One Token Type
//!
//! A vault holds the assets of exactly one token class on behalf of the root
//! manager. It is a plain custodian: it never checks proofs, it only moves
//! funds when one of its managers tells it to.
//!
//! # Kinds
//! - `Native { denom }` - custody of a bank denom, funds attached to `Lock`
//! - `Cw20` - custody of any CW20 token, pulled in with `TransferFrom`
//!
//! # Accounting
//! Every lock credits and every unlock debits a per-token ledger. The ledger is
//! the authoritative record of custodied balances and is preserved across
//! code migrations (see [`migration`]).

pub mod contract;
pub mod error;
pub mod migration;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
