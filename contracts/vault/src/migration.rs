//! Versioned code migration.
//!
//! A migration may swap the vault code but must never lose custodied funds.
//! `migrate_vault` checks the stored cw2 identity, refuses downgrades, upgrades
//! the storage layout step by step and compares a snapshot of the locked ledger
//! taken before and after. Any difference aborts the migration.

use cosmwasm_std::{DepsMut, Order, Response, StdResult, Storage, Uint128};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, LOCKED, STORAGE_SCHEMA, STORAGE_SCHEMA_VERSION,
};

/// Parse a `major.minor.patch` version string.
pub fn parse_version(version: &str) -> Result<(u64, u64, u64), ContractError> {
    let invalid = || ContractError::InvalidMigration {
        reason: format!("unparsable version {}", version),
    };
    let mut parts = version.split('.').map(|p| p.parse::<u64>());
    let major = parts.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
    let minor = parts.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
    let patch = parts.next().ok_or_else(invalid)?.map_err(|_| invalid())?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((major, minor, patch))
}

/// Every (token, amount) entry of the custody ledger, in key order.
pub fn ledger_snapshot(storage: &dyn Storage) -> StdResult<Vec<(String, Uint128)>> {
    LOCKED
        .range(storage, None, None, Order::Ascending)
        .collect()
}

/// Bring the storage layout from `from` up to the current schema.
pub fn upgrade_storage(storage: &mut dyn Storage, from: u16) -> Result<u16, ContractError> {
    if from > STORAGE_SCHEMA_VERSION {
        return Err(ContractError::InvalidMigration {
            reason: format!(
                "storage schema {} is newer than supported {}",
                from, STORAGE_SCHEMA_VERSION
            ),
        });
    }
    // Schema 1 is the first layout; later layouts add their steps here.
    STORAGE_SCHEMA.save(storage, &STORAGE_SCHEMA_VERSION)?;
    Ok(STORAGE_SCHEMA_VERSION)
}

pub fn migrate_vault(deps: DepsMut) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            reason: format!("cannot migrate {} into {}", stored.contract, CONTRACT_NAME),
        });
    }
    if parse_version(&stored.version)? > parse_version(CONTRACT_VERSION)? {
        return Err(ContractError::InvalidMigration {
            reason: format!(
                "cannot downgrade from {} to {}",
                stored.version, CONTRACT_VERSION
            ),
        });
    }

    let before = ledger_snapshot(deps.storage)?;
    let from_schema = STORAGE_SCHEMA.may_load(deps.storage)?.unwrap_or(1);
    let to_schema = upgrade_storage(deps.storage, from_schema)?;
    let after = ledger_snapshot(deps.storage)?;
    if before != after {
        return Err(ContractError::InvalidMigration {
            reason: "custodied balances changed during migration".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION)
        .add_attribute("from_schema", from_schema.to_string())
        .add_attribute("to_schema", to_schema.to_string())
        .add_attribute("tokens_in_custody", after.len().to_string()))
}
