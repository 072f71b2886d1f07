use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-state-sender";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ADMIN: Item<Addr> = Item::new("admin");

/// Id of the last synced payload
pub const COUNTER: Item<u64> = Item::new("counter");

pub const SENDERS: Map<&Addr, bool> = Map::new("senders");
