//! Query handlers for the root manager.
//!
//! Registry lookups never fail on absent entries; they answer `None`.

use common::hash::compute_child_key;
use common::{bytes32_to_hex, TokenType, WithdrawalClaim};
use cosmwasm_std::{Binary, Deps, StdResult};

use crate::authorization::{MERKLE_ROOTS, PROCESSED_EXITS};
use crate::fee_manager::FEE_CONFIG;
use crate::msg::{
    ChildKeyResponse, ChildToRootTokenResponse, ConfigResponse, FeeConfigResponse,
    IsExitProcessedResponse, LeafHashResponse, MerkleRootResponse, MerkleRootsResponse,
    RolesResponse, RootToChildTokenResponse, StatsResponse, TokenToTypeResponse,
    TypeToVaultResponse,
};
use crate::registry::{self, ChildToken};
use crate::roles::roles_of;
use crate::state::{CONFIG, STATS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        native_denom: config.native_denom,
        paused: config.paused,
        state_sender: config.state_sender,
    })
}

pub fn query_roles(deps: Deps, address: String) -> StdResult<RolesResponse> {
    let address = deps.api.addr_validate(&address)?;
    let roles = roles_of(deps.storage, &address)?;
    Ok(RolesResponse { address, roles })
}

pub fn query_fee_config(deps: Deps) -> StdResult<FeeConfigResponse> {
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(FeeConfigResponse {
        deposit_fee: fee_config.deposit_fee,
        withdraw_fee: fee_config.withdraw_fee,
        treasurer: fee_config.treasurer,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_deposits: stats.total_deposits,
        total_withdrawals: stats.total_withdrawals,
        total_fees_collected: stats.total_fees_collected,
    })
}

// ============================================================================
// Registry
// ============================================================================

pub fn query_root_to_child_token(
    deps: Deps,
    root_token: String,
) -> StdResult<RootToChildTokenResponse> {
    Ok(RootToChildTokenResponse {
        child: registry::child_of(deps.storage, &root_token)?,
    })
}

pub fn query_child_to_root_token(
    deps: Deps,
    child_index: u64,
    child_sub_index: u64,
) -> StdResult<ChildToRootTokenResponse> {
    Ok(ChildToRootTokenResponse {
        root_token: registry::root_of(
            deps.storage,
            ChildToken::new(child_index, child_sub_index),
        )?,
    })
}

pub fn query_token_to_type(deps: Deps, root_token: String) -> StdResult<TokenToTypeResponse> {
    Ok(TokenToTypeResponse {
        token_type: registry::type_of(deps.storage, &root_token)?,
    })
}

pub fn query_type_to_vault(deps: Deps, token_type: TokenType) -> StdResult<TypeToVaultResponse> {
    Ok(TypeToVaultResponse {
        vault: registry::vault_for(deps.storage, token_type)?,
    })
}

pub fn query_compute_child_key(child_index: u64, child_sub_index: u64) -> ChildKeyResponse {
    let key = compute_child_key(child_index, child_sub_index);
    ChildKeyResponse {
        child_key: Binary::from(key.to_vec()),
        child_key_hex: bytes32_to_hex(&key),
    }
}

// ============================================================================
// Withdrawal Authorization
// ============================================================================

pub fn query_merkle_root(deps: Deps) -> StdResult<MerkleRootResponse> {
    let roots = MERKLE_ROOTS.may_load(deps.storage)?.unwrap_or_default();
    Ok(MerkleRootResponse {
        root: Binary::from(roots.current.to_vec()),
    })
}

pub fn query_merkle_roots(deps: Deps) -> StdResult<MerkleRootsResponse> {
    let roots = MERKLE_ROOTS.may_load(deps.storage)?.unwrap_or_default();
    Ok(MerkleRootsResponse {
        current: Binary::from(roots.current.to_vec()),
        previous: Binary::from(roots.previous.to_vec()),
    })
}

pub fn query_is_exit_processed(deps: Deps, leaf: Binary) -> StdResult<IsExitProcessedResponse> {
    let processed_at = PROCESSED_EXITS.may_load(deps.storage, leaf.as_slice())?;
    Ok(IsExitProcessedResponse {
        processed: processed_at.is_some(),
        processed_at,
    })
}

pub fn query_compute_leaf_hash(deps: Deps, claim: WithdrawalClaim) -> StdResult<LeafHashResponse> {
    let leaf = claim.leaf_hash(deps.api)?;
    Ok(LeafHashResponse {
        leaf: Binary::from(leaf.to_vec()),
        leaf_hex: bytes32_to_hex(&leaf),
    })
}
