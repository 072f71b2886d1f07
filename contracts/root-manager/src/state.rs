//! State definitions for the root manager

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:root-manager";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bank denom used for fees and native deposits
pub const DEFAULT_NATIVE_DENOM: &str = "uluna";

#[cw_serde]
pub struct Config {
    /// Bank denom of the chain's native currency
    pub native_denom: String,
    /// Pausing stops deposits only; withdrawals keep working
    pub paused: bool,
    /// Receiver of deposit payloads for the relayer
    pub state_sender: Option<Addr>,
}

#[cw_serde]
pub struct Stats {
    pub total_deposits: u64,
    pub total_withdrawals: u64,
    pub total_fees_collected: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");
