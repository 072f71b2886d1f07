//! State definitions for the vault contract

use common::vault::VaultKind;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-vault";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Layout version of the storage below. Bump together with a step in
/// `migration::upgrade_storage` whenever a key or value shape changes.
pub const STORAGE_SCHEMA_VERSION: u16 = 1;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub kind: VaultKind,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const STORAGE_SCHEMA: Item<u16> = Item::new("storage_schema");

/// Addresses holding the manager capability
pub const MANAGERS: Map<&Addr, bool> = Map::new("managers");

/// Custodied balance per token (denom or CW20 address)
pub const LOCKED: Map<&str, Uint128> = Map::new("locked");
