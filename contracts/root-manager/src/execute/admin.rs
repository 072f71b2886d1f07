//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause of deposits
//! - State sender wiring
//! - Fee amounts and the treasurer
//! - Role grants and revocations

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::fee_manager::{FeeKind, FEE_CONFIG};
use crate::roles::{ensure_role, grant_role, revoke_role, Role};
use crate::state::CONFIG;

// ============================================================================
// Pause / State Sender
// ============================================================================

/// Pausing stops deposits; withdrawals stay open.
pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", if paused { "pause" } else { "unpause" })
        .add_attribute("paused", paused.to_string()))
}

pub fn execute_set_state_sender(
    deps: DepsMut,
    info: MessageInfo,
    state_sender: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let state_sender =
        deps.api
            .addr_validate(&state_sender)
            .map_err(|e| ContractError::InvalidAddress {
                reason: format!("state sender: {}", e),
            })?;
    let mut config = CONFIG.load(deps.storage)?;
    config.state_sender = Some(state_sender.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_state_sender")
        .add_attribute("state_sender", state_sender))
}

// ============================================================================
// Fees
// ============================================================================

pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    kind: FeeKind,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let mut fee_config = FEE_CONFIG.load(deps.storage)?;
    match kind {
        FeeKind::Deposit => fee_config.deposit_fee = amount,
        FeeKind::Withdraw => fee_config.withdraw_fee = amount,
    }
    fee_config.validate()?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("action", format!("set_{}_fee", kind.as_str()))
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_set_treasurer(
    deps: DepsMut,
    info: MessageInfo,
    treasurer: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let treasurer = deps
        .api
        .addr_validate(&treasurer)
        .map_err(|_| ContractError::InvalidTreasurer)?;
    FEE_CONFIG.update(deps.storage, |mut fee_config| -> Result<_, ContractError> {
        fee_config.treasurer = Some(treasurer.clone());
        Ok(fee_config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_treasurer")
        .add_attribute("treasurer", treasurer))
}

// ============================================================================
// Roles
// ============================================================================

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    role: Role,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let addr = deps.api.addr_validate(&address)?;
    grant_role(deps.storage, &addr, role)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("address", addr)
        .add_attribute("role", role.as_str()))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    role: Role,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let addr = deps.api.addr_validate(&address)?;
    if addr == info.sender && role == Role::Admin {
        return Err(ContractError::CannotRevokeOwnAdmin);
    }
    revoke_role(deps.storage, &addr, role)?;

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("address", addr)
        .add_attribute("role", role.as_str()))
}
