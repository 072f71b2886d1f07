//! Deposit handlers.
//!
//! Both entry points resolve the root token through the registry, charge the
//! deposit fee, lock the asset in the vault for its type and publish a
//! [`DepositPayload`] through the state sender.

use common::state_sender::{DepositPayload, StateSenderExecuteMsg};
use common::vault::VaultExecuteMsg;
use common::TokenType;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Api, Binary, Coin, DepsMut, Event, MessageInfo, Response,
    Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::fee_manager::{attached_amount, charge_fee, FeeCharge, FeeKind, FEE_CONFIG};
use crate::registry::{resolve_root, ResolvedToken};
use crate::state::{Config, CONFIG, STATS};

fn validate_user(api: &dyn Api, user: &str) -> Result<Addr, ContractError> {
    api.addr_validate(user).map_err(|_| ContractError::InvalidUser)
}

/// Checks shared by every deposit: pause, beneficiary, child recipient and a
/// configured state sender.
fn precheck(
    config: &Config,
    api: &dyn Api,
    user: &str,
    child_recipient: &str,
) -> Result<(Addr, Addr), ContractError> {
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    let user = validate_user(api, user)?;
    if child_recipient.trim().is_empty() {
        return Err(ContractError::InvalidChildRecipient);
    }
    let state_sender = config
        .state_sender
        .clone()
        .ok_or(ContractError::StateSenderNotSet)?;
    Ok((user, state_sender))
}

/// Deposit a CW20 token. The vault pulls it with the depositor's allowance.
pub fn execute_deposit_for(
    deps: DepsMut,
    info: MessageInfo,
    user: String,
    child_recipient: String,
    root_token: String,
    amount: Uint128,
    data: Option<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (user, state_sender) = precheck(&config, deps.api, &user, &child_recipient)?;

    if root_token == config.native_denom {
        return Err(ContractError::InvalidRootToken);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let token = resolve_root(deps.storage, &root_token)?;
    let native = config.native_denom.as_str();

    // How the asset travels to the vault
    let (paid, lock_funds) = match token.token_type {
        // Only the native denom is mapped as native; it has its own entry point
        TokenType::Native => return Err(ContractError::InvalidRootToken),
        // Pulled by the vault with TransferFrom
        TokenType::Cw20 => (attached_amount(&info.funds, native, &[native])?, vec![]),
    };

    let fee_config = FEE_CONFIG.load(deps.storage)?;
    let charge = charge_fee(&fee_config, FeeKind::Deposit, paid, native)?;

    lock_and_sync(
        deps,
        info.sender,
        user,
        child_recipient,
        token,
        amount,
        data,
        lock_funds,
        charge.clone(),
        charge.excess,
        state_sender,
    )
}

/// Deposit native currency: everything attached beyond the fee is locked.
pub fn execute_deposit_native_for(
    deps: DepsMut,
    info: MessageInfo,
    user: String,
    child_recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (user, state_sender) = precheck(&config, deps.api, &user, &child_recipient)?;
    let native = config.native_denom.as_str();

    let paid = attached_amount(&info.funds, native, &[native])?;
    let token = resolve_root(deps.storage, native)?;
    if token.token_type != TokenType::Native {
        return Err(ContractError::InvalidTokenType {
            token_type: token.token_type.to_string(),
        });
    }

    let fee_config = FEE_CONFIG.load(deps.storage)?;
    let charge = charge_fee(&fee_config, FeeKind::Deposit, paid, native)?;
    let amount = charge.excess;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "nothing attached beyond the deposit fee".to_string(),
        });
    }

    lock_and_sync(
        deps,
        info.sender,
        user,
        child_recipient,
        token,
        amount,
        None,
        coins(amount.u128(), native),
        charge,
        Uint128::zero(),
        state_sender,
    )
}

#[allow(clippy::too_many_arguments)]
fn lock_and_sync(
    deps: DepsMut,
    depositor: Addr,
    user: Addr,
    child_recipient: String,
    token: ResolvedToken,
    amount: Uint128,
    data: Option<Binary>,
    lock_funds: Vec<Coin>,
    charge: FeeCharge,
    retained: Uint128,
    state_sender: Addr,
) -> Result<Response, ContractError> {
    let lock = WasmMsg::Execute {
        contract_addr: token.vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Lock {
            depositor: depositor.to_string(),
            recipient_identity: child_recipient.clone(),
            amount,
            token: token.root_token.clone(),
            aux_data: data.clone(),
        })?,
        funds: lock_funds,
    };

    let payload = DepositPayload {
        depositor: depositor.clone(),
        user: user.clone(),
        child_recipient: child_recipient.clone(),
        root_token: token.root_token.clone(),
        token_type: token.token_type,
        child_index: token.child.index,
        child_sub_index: token.child.sub_index,
        amount,
        data,
    };
    let sync = WasmMsg::Execute {
        contract_addr: state_sender.to_string(),
        msg: to_json_binary(&StateSenderExecuteMsg::SyncState {
            data: to_json_binary(&payload)?,
        })?,
        funds: vec![],
    };

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_deposits += 1;
        stats.total_fees_collected += charge.fee;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_messages(charge.payout)
        .add_message(lock)
        .add_message(sync)
        .add_event(
            Event::new("deposit")
                .add_attribute("depositor", depositor.to_string())
                .add_attribute("user", user.to_string())
                .add_attribute("child_recipient", child_recipient)
                .add_attribute("root_token", token.root_token.clone())
                .add_attribute("token_type", token.token_type.as_str())
                .add_attribute("child_index", token.child.index.to_string())
                .add_attribute("child_sub_index", token.child.sub_index.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("fee", charge.fee.to_string()),
        )
        .add_attribute("action", "deposit")
        .add_attribute("vault", token.vault)
        .add_attribute("retained", retained.to_string()))
}
