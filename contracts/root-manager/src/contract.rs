//! Root Manager - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_clean_map_token, execute_deposit_for, execute_deposit_native_for, execute_grant_role,
    execute_map_token, execute_register_vault, execute_revoke_role, execute_set_fee,
    execute_set_merkle_root, execute_set_paused, execute_set_state_sender, execute_set_treasurer,
    execute_withdraw,
};
use crate::fee_manager::{FeeConfig, FeeKind, FEE_CONFIG};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_child_to_root_token, query_compute_child_key, query_compute_leaf_hash, query_config,
    query_fee_config, query_is_exit_processed, query_merkle_root, query_merkle_roots,
    query_roles, query_root_to_child_token, query_stats, query_token_to_type,
    query_type_to_vault,
};
use crate::roles::{grant_role, Role};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_NATIVE_DENOM, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    for role in Role::ALL {
        grant_role(deps.storage, &admin, role)?;
    }

    let native_denom = msg
        .native_denom
        .unwrap_or_else(|| DEFAULT_NATIVE_DENOM.to_string());
    if native_denom.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "native denom must not be empty".to_string(),
        });
    }

    let state_sender = msg
        .state_sender
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let treasurer = msg
        .treasurer
        .map(|addr| {
            deps.api
                .addr_validate(&addr)
                .map_err(|_| ContractError::InvalidTreasurer)
        })
        .transpose()?;

    CONFIG.save(
        deps.storage,
        &Config {
            native_denom: native_denom.clone(),
            paused: false,
            state_sender,
        },
    )?;

    let fee_config = FeeConfig {
        deposit_fee: msg.deposit_fee,
        withdraw_fee: msg.withdraw_fee,
        treasurer,
    };
    fee_config.validate()?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    STATS.save(
        deps.storage,
        &Stats {
            total_deposits: 0,
            total_withdrawals: 0,
            total_fees_collected: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("native_denom", native_denom)
        .add_attribute("deposit_fee", msg.deposit_fee.to_string())
        .add_attribute("withdraw_fee", msg.withdraw_fee.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if !msg.is_payable() && !info.funds.is_empty() {
        return Err(ContractError::NoDirectDeposits);
    }

    match msg {
        // Deposits and withdrawals
        ExecuteMsg::DepositFor {
            user,
            child_recipient,
            root_token,
            amount,
            data,
        } => execute_deposit_for(deps, info, user, child_recipient, root_token, amount, data),
        ExecuteMsg::DepositNativeFor {
            user,
            child_recipient,
        } => execute_deposit_native_for(deps, info, user, child_recipient),
        ExecuteMsg::Withdraw { claim, proof } => execute_withdraw(deps, env, info, claim, proof),

        // Registry
        ExecuteMsg::RegisterVault { token_type, vault } => {
            execute_register_vault(deps, info, token_type, vault)
        }
        ExecuteMsg::MapToken {
            root_token,
            child_index,
            child_sub_index,
            token_type,
        } => execute_map_token(
            deps,
            info,
            root_token,
            child_index,
            child_sub_index,
            token_type,
            false,
        ),
        ExecuteMsg::RemapToken {
            root_token,
            child_index,
            child_sub_index,
            token_type,
        } => execute_map_token(
            deps,
            info,
            root_token,
            child_index,
            child_sub_index,
            token_type,
            true,
        ),
        ExecuteMsg::CleanMapToken {
            root_token,
            child_index,
            child_sub_index,
        } => execute_clean_map_token(deps, info, root_token, child_index, child_sub_index),

        // Merkle roots
        ExecuteMsg::SetMerkleRoot { root } => execute_set_merkle_root(deps, info, root),

        // Admin
        ExecuteMsg::SetStateSender { state_sender } => {
            execute_set_state_sender(deps, info, state_sender)
        }
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
        ExecuteMsg::SetDepositFee { amount } => {
            execute_set_fee(deps, info, FeeKind::Deposit, amount)
        }
        ExecuteMsg::SetWithdrawFee { amount } => {
            execute_set_fee(deps, info, FeeKind::Withdraw, amount)
        }
        ExecuteMsg::SetTreasurer { treasurer } => execute_set_treasurer(deps, info, treasurer),
        ExecuteMsg::GrantRole { address, role } => execute_grant_role(deps, info, address, role),
        ExecuteMsg::RevokeRole { address, role } => {
            execute_revoke_role(deps, info, address, role)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Roles { address } => to_json_binary(&query_roles(deps, address)?),
        QueryMsg::FeeConfig {} => to_json_binary(&query_fee_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        QueryMsg::RootToChildToken { root_token } => {
            to_json_binary(&query_root_to_child_token(deps, root_token)?)
        }
        QueryMsg::ChildToRootToken {
            child_index,
            child_sub_index,
        } => to_json_binary(&query_child_to_root_token(
            deps,
            child_index,
            child_sub_index,
        )?),
        QueryMsg::TokenToType { root_token } => {
            to_json_binary(&query_token_to_type(deps, root_token)?)
        }
        QueryMsg::TypeToVault { token_type } => {
            to_json_binary(&query_type_to_vault(deps, token_type)?)
        }
        QueryMsg::ComputeChildKey {
            child_index,
            child_sub_index,
        } => to_json_binary(&query_compute_child_key(child_index, child_sub_index)),

        QueryMsg::MerkleRoot {} => to_json_binary(&query_merkle_root(deps)?),
        QueryMsg::MerkleRoots {} => to_json_binary(&query_merkle_roots(deps)?),
        QueryMsg::IsExitProcessed { leaf } => {
            to_json_binary(&query_is_exit_processed(deps, leaf)?)
        }
        QueryMsg::ComputeLeafHash { claim } => {
            to_json_binary(&query_compute_leaf_hash(deps, claim)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
