//! Token registry.
//!
//! Keeps the bidirectional root token <-> child token mapping, the token type
//! of every mapped root token and the single vault registered per type.
//!
//! The reverse direction is keyed by
//! `keccak256(uint256(child_index) ‖ uint256(child_sub_index))` so the relayer
//! can derive keys without reading contract state.
//!
//! `map_token` keeps the mapping one-to-one. `remap_token` overwrites without
//! conflict checks and leaves the previous inverse entries in place, which is
//! what an emergency re-point needs. `clean_map_token` removes both directions.

use common::hash::compute_child_key;
use common::TokenType;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// Child chain identity of a mapped token.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct ChildToken {
    pub index: u64,
    pub sub_index: u64,
}

impl ChildToken {
    pub fn new(index: u64, sub_index: u64) -> Self {
        Self { index, sub_index }
    }

    pub fn key(&self) -> [u8; 32] {
        compute_child_key(self.index, self.sub_index)
    }
}

/// A fully resolved mapping, ready for vault dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedToken {
    pub root_token: String,
    pub child: ChildToken,
    pub token_type: TokenType,
    pub vault: Addr,
}

// ============================================================================
// Storage
// ============================================================================

pub const ROOT_TO_CHILD: Map<&str, ChildToken> = Map::new("root_to_child");

/// child key -> root token
pub const CHILD_TO_ROOT: Map<&[u8], String> = Map::new("child_to_root");

pub const TOKEN_TO_TYPE: Map<&str, TokenType> = Map::new("token_to_type");

/// token type key (`TokenType::as_str`) -> vault
pub const TYPE_TO_VAULT: Map<&str, Addr> = Map::new("type_to_vault");

// ============================================================================
// Vaults
// ============================================================================

/// Install `vault` for `token_type`, replacing any previous vault.
pub fn register_vault(
    storage: &mut dyn Storage,
    token_type: TokenType,
    vault: &Addr,
) -> StdResult<Option<Addr>> {
    let previous = TYPE_TO_VAULT.may_load(storage, token_type.as_str())?;
    TYPE_TO_VAULT.save(storage, token_type.as_str(), vault)?;
    Ok(previous)
}

pub fn vault_for(storage: &dyn Storage, token_type: TokenType) -> StdResult<Option<Addr>> {
    TYPE_TO_VAULT.may_load(storage, token_type.as_str())
}

fn ensure_supported(storage: &dyn Storage, token_type: TokenType) -> Result<(), ContractError> {
    match vault_for(storage, token_type)? {
        Some(_) => Ok(()),
        None => Err(ContractError::UnsupportedTokenType {
            token_type: token_type.to_string(),
        }),
    }
}

// ============================================================================
// Mapping
// ============================================================================

fn write_mapping(
    storage: &mut dyn Storage,
    root_token: &str,
    child: ChildToken,
    token_type: TokenType,
) -> StdResult<()> {
    ROOT_TO_CHILD.save(storage, root_token, &child)?;
    CHILD_TO_ROOT.save(storage, &child.key(), &root_token.to_string())?;
    TOKEN_TO_TYPE.save(storage, root_token, &token_type)
}

/// Map `root_token` to `child`. Fails if either side is already mapped to a
/// different counterpart; re-mapping the identical pair is accepted.
pub fn map_token(
    storage: &mut dyn Storage,
    root_token: &str,
    child: ChildToken,
    token_type: TokenType,
) -> Result<(), ContractError> {
    ensure_supported(storage, token_type)?;

    if let Some(existing) = ROOT_TO_CHILD.may_load(storage, root_token)? {
        if existing != child {
            return Err(ContractError::AlreadyMapped {
                reason: format!(
                    "{} is mapped to child {}/{}",
                    root_token, existing.index, existing.sub_index
                ),
            });
        }
    }
    if let Some(existing) = CHILD_TO_ROOT.may_load(storage, &child.key())? {
        if existing != root_token {
            return Err(ContractError::AlreadyMapped {
                reason: format!(
                    "child {}/{} is mapped to {}",
                    child.index, child.sub_index, existing
                ),
            });
        }
    }

    write_mapping(storage, root_token, child, token_type)?;
    Ok(())
}

/// Map without conflict checks. Stale inverse entries stay in place.
pub fn remap_token(
    storage: &mut dyn Storage,
    root_token: &str,
    child: ChildToken,
    token_type: TokenType,
) -> Result<(), ContractError> {
    ensure_supported(storage, token_type)?;
    write_mapping(storage, root_token, child, token_type)?;
    Ok(())
}

/// Remove both directions and the type. Idempotent.
pub fn clean_map_token(storage: &mut dyn Storage, root_token: &str, child: ChildToken) {
    ROOT_TO_CHILD.remove(storage, root_token);
    CHILD_TO_ROOT.remove(storage, &child.key());
    TOKEN_TO_TYPE.remove(storage, root_token);
}

// ============================================================================
// Lookups
// ============================================================================

pub fn child_of(storage: &dyn Storage, root_token: &str) -> StdResult<Option<ChildToken>> {
    ROOT_TO_CHILD.may_load(storage, root_token)
}

pub fn root_of(storage: &dyn Storage, child: ChildToken) -> StdResult<Option<String>> {
    CHILD_TO_ROOT.may_load(storage, &child.key())
}

pub fn type_of(storage: &dyn Storage, root_token: &str) -> StdResult<Option<TokenType>> {
    TOKEN_TO_TYPE.may_load(storage, root_token)
}

/// Resolve a root token for a deposit.
pub fn resolve_root(storage: &dyn Storage, root_token: &str) -> Result<ResolvedToken, ContractError> {
    let not_mapped = || ContractError::TokenNotMapped {
        token: root_token.to_string(),
    };
    let child = child_of(storage, root_token)?.ok_or_else(not_mapped)?;
    let token_type = type_of(storage, root_token)?.ok_or_else(not_mapped)?;
    let vault = vault_for(storage, token_type)?.ok_or_else(|| ContractError::InvalidTokenType {
        token_type: token_type.to_string(),
    })?;

    Ok(ResolvedToken {
        root_token: root_token.to_string(),
        child,
        token_type,
        vault,
    })
}

/// Resolve the root side of a child token for a withdrawal.
pub fn resolve_child(storage: &dyn Storage, child: ChildToken) -> Result<ResolvedToken, ContractError> {
    let root_token = root_of(storage, child)?.ok_or_else(|| ContractError::TokenNotMapped {
        token: format!("child {}/{}", child.index, child.sub_index),
    })?;
    let token_type =
        type_of(storage, &root_token)?.ok_or_else(|| ContractError::TokenNotMapped {
            token: root_token.clone(),
        })?;
    let vault = vault_for(storage, token_type)?.ok_or_else(|| ContractError::InvalidTokenType {
        token_type: token_type.to_string(),
    })?;

    Ok(ResolvedToken {
        root_token,
        child,
        token_type,
        vault,
    })
}
