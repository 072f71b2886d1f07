//! Bridge Vault - Entry Points

use common::vault::VaultKind;
use common::{AssetInfo, TokenType};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::migration::migrate_vault;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, IsManagerResponse, LockedBalanceResponse, MigrateMsg, QueryMsg,
    TokenTypeResponse, VaultConfigResponse,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LOCKED, MANAGERS, STORAGE_SCHEMA,
    STORAGE_SCHEMA_VERSION,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    STORAGE_SCHEMA.save(deps.storage, &STORAGE_SCHEMA_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    if let VaultKind::Native { denom } = &msg.kind {
        if denom.is_empty() {
            return Err(ContractError::InvalidFunds {
                reason: "native vault needs a denom".to_string(),
            });
        }
    }

    for manager in &msg.managers {
        let manager = deps.api.addr_validate(manager)?;
        MANAGERS.save(deps.storage, &manager, &true)?;
    }

    let token_type = msg.kind.token_type();
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
            kind: msg.kind,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token_type", token_type.as_str())
        .add_attribute("manager_count", msg.managers.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Lock {
            depositor,
            recipient_identity,
            amount,
            token,
            aux_data,
        } => execute_lock(
            deps,
            env,
            info,
            depositor,
            recipient_identity,
            amount,
            token,
            aux_data,
        ),
        ExecuteMsg::Unlock {
            recipient,
            token,
            token_id,
            amount,
        } => execute_unlock(deps, info, recipient, token, token_id, amount),
        ExecuteMsg::GrantManager { address } => execute_set_manager(deps, info, address, true),
        ExecuteMsg::RevokeManager { address } => execute_set_manager(deps, info, address, false),
    }
}

fn ensure_manager(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if MANAGERS.may_load(deps.storage, sender)?.unwrap_or(false) {
        Ok(())
    } else {
        Err(ContractError::NotManager)
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    depositor: String,
    recipient_identity: String,
    amount: Uint128,
    token: String,
    aux_data: Option<Binary>,
) -> Result<Response, ContractError> {
    ensure_manager(deps.as_ref(), &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    let depositor = deps.api.addr_validate(&depositor)?;
    let config = CONFIG.load(deps.storage)?;

    let messages: Vec<CosmosMsg> = match &config.kind {
        VaultKind::Native { denom } => {
            if &token != denom {
                return Err(ContractError::WrongToken {
                    expected: denom.clone(),
                    got: token,
                });
            }
            match info.funds.as_slice() {
                [coin] if &coin.denom == denom && coin.amount == amount => {}
                _ => {
                    return Err(ContractError::InvalidFunds {
                        reason: format!("expected exactly {}{} attached", amount, denom),
                    })
                }
            }
            vec![]
        }
        VaultKind::Cw20 => {
            if !info.funds.is_empty() {
                return Err(ContractError::InvalidFunds {
                    reason: "CW20 vault does not accept native funds".to_string(),
                });
            }
            let token_addr = deps.api.addr_validate(&token)?;
            vec![CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: token_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: depositor.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount,
                })?,
                funds: vec![],
            })]
        }
    };

    let locked = LOCKED
        .may_load(deps.storage, &token)?
        .unwrap_or_default()
        .checked_add(amount)
        .map_err(StdError::from)?;
    LOCKED.save(deps.storage, &token, &locked)?;

    let mut event = Event::new("lock")
        .add_attribute("depositor", depositor.to_string())
        .add_attribute("recipient_identity", recipient_identity)
        .add_attribute("amount", amount.to_string())
        .add_attribute("root_token", token.clone())
        .add_attribute("token_type", config.kind.token_type().as_str());
    if let Some(aux) = aux_data {
        event = event.add_attribute("aux_data", aux.to_base64());
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "lock")
        .add_attribute("token", token)
        .add_attribute("locked_total", locked.to_string()))
}

fn execute_unlock(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    token: String,
    token_id: Uint128,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_manager(deps.as_ref(), &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    let config = CONFIG.load(deps.storage)?;
    if config.kind.token_type().is_fungible() && !token_id.is_zero() {
        return Err(ContractError::InvalidTokenId { token_id });
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let asset = match &config.kind {
        VaultKind::Native { denom } => {
            if &token != denom {
                return Err(ContractError::WrongToken {
                    expected: denom.clone(),
                    got: token,
                });
            }
            AssetInfo::Native {
                denom: denom.clone(),
            }
        }
        VaultKind::Cw20 => AssetInfo::Cw20 {
            contract_addr: deps.api.addr_validate(&token)?,
        },
    };

    let available = LOCKED.may_load(deps.storage, &token)?.unwrap_or_default();
    if available < amount {
        return Err(ContractError::InsufficientVaultBalance {
            token,
            available,
            requested: amount,
        });
    }
    LOCKED.save(deps.storage, &token, &(available - amount))?;

    Ok(Response::new()
        .add_message(asset.transfer_msg(&recipient, amount)?)
        .add_event(
            Event::new("unlock")
                .add_attribute("recipient", recipient.to_string())
                .add_attribute("root_token", token.clone())
                .add_attribute("amount", amount.to_string()),
        )
        .add_attribute("action", "unlock")
        .add_attribute("token", token)
        .add_attribute("locked_total", (available - amount).to_string()))
}

fn execute_set_manager(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    grant: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let manager = deps.api.addr_validate(&address)?;
    if grant {
        MANAGERS.save(deps.storage, &manager, &true)?;
    } else {
        MANAGERS.remove(deps.storage, &manager);
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if grant { "grant_manager" } else { "revoke_manager" },
        )
        .add_attribute("manager", manager))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenType {} => to_json_binary(&query_token_type(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsManager { address } => to_json_binary(&query_is_manager(deps, address)?),
        QueryMsg::LockedBalance { token } => to_json_binary(&query_locked_balance(deps, token)?),
    }
}

fn query_token_type(deps: Deps) -> StdResult<TokenTypeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token_type: TokenType = config.kind.token_type();
    Ok(TokenTypeResponse { token_type })
}

fn query_config(deps: Deps) -> StdResult<VaultConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(VaultConfigResponse {
        admin: config.admin,
        kind: config.kind,
    })
}

fn query_is_manager(deps: Deps, address: String) -> StdResult<IsManagerResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let is_manager = MANAGERS.may_load(deps.storage, &addr)?.unwrap_or(false);
    Ok(IsManagerResponse { is_manager })
}

fn query_locked_balance(deps: Deps, token: String) -> StdResult<LockedBalanceResponse> {
    let amount = LOCKED.may_load(deps.storage, &token)?.unwrap_or_default();
    Ok(LockedBalanceResponse { token, amount })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_vault(deps)
}
