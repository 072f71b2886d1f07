//! Registry handlers: vault registration and token mapping.
//!
//! All handlers require the mapper role.

use common::vault::{TokenTypeResponse, VaultConfigResponse, VaultKind, VaultQueryMsg};
use common::TokenType;
use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::registry::{self, ChildToken};
use crate::roles::{ensure_role, Role};
use crate::state::CONFIG;

/// The bank denom a native vault custodies.
fn vault_denom(deps: Deps, vault: &Addr) -> Result<String, ContractError> {
    let config: VaultConfigResponse = deps
        .querier
        .query_wasm_smart(vault.to_string(), &VaultQueryMsg::Config {})?;
    match config.kind {
        VaultKind::Native { denom } => Ok(denom),
        VaultKind::Cw20 => Err(ContractError::VaultTypeMismatch {
            expected: TokenType::Native.to_string(),
            got: TokenType::Cw20.to_string(),
        }),
    }
}

/// Root tokens are CW20 addresses, or the denom held by the native vault.
fn validate_root_token(
    deps: Deps,
    root_token: &str,
    token_type: TokenType,
) -> Result<(), ContractError> {
    match token_type {
        TokenType::Native => {
            if root_token.trim().is_empty() {
                return Err(ContractError::InvalidAddress {
                    reason: "empty root denom".to_string(),
                });
            }
            // Without a vault the registry reports the unsupported type
            if let Some(vault) = registry::vault_for(deps.storage, token_type)? {
                let held = vault_denom(deps, &vault)?;
                if held != root_token {
                    return Err(ContractError::NativeDenomMismatch {
                        expected: held,
                        got: root_token.to_string(),
                    });
                }
            }
        }
        TokenType::Cw20 => {
            deps.api
                .addr_validate(root_token)
                .map_err(|e| ContractError::InvalidAddress {
                    reason: format!("root token {}: {}", root_token, e),
                })?;
        }
    }
    Ok(())
}

pub fn execute_register_vault(
    deps: DepsMut,
    info: MessageInfo,
    token_type: TokenType,
    vault: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Mapper)?;

    let vault = deps
        .api
        .addr_validate(&vault)
        .map_err(|e| ContractError::InvalidAddress {
            reason: format!("vault: {}", e),
        })?;

    // The vault must declare the type it is registered for
    let reported: TokenTypeResponse = deps
        .querier
        .query_wasm_smart(vault.to_string(), &VaultQueryMsg::TokenType {})
        .map_err(|_| ContractError::VaultTypeMismatch {
            expected: token_type.to_string(),
            got: "no token type".to_string(),
        })?;
    if reported.token_type != token_type {
        return Err(ContractError::VaultTypeMismatch {
            expected: token_type.to_string(),
            got: reported.token_type.to_string(),
        });
    }

    // Native deposits and withdrawals move the configured native denom
    if token_type == TokenType::Native {
        let native_denom = CONFIG.load(deps.storage)?.native_denom;
        let held = vault_denom(deps.as_ref(), &vault)?;
        if held != native_denom {
            return Err(ContractError::NativeDenomMismatch {
                expected: native_denom,
                got: held,
            });
        }
    }

    let previous = registry::register_vault(deps.storage, token_type, &vault)?;

    Ok(Response::new()
        .add_attribute("action", "register_vault")
        .add_attribute("token_type", token_type.as_str())
        .add_attribute("token_type_tag", common::bytes32_to_hex(&token_type.tag()))
        .add_attribute("vault", vault)
        .add_attribute(
            "replaced",
            previous.map_or_else(|| "none".to_string(), |addr| addr.to_string()),
        ))
}

pub fn execute_map_token(
    deps: DepsMut,
    info: MessageInfo,
    root_token: String,
    child_index: u64,
    child_sub_index: u64,
    token_type: TokenType,
    remap: bool,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Mapper)?;
    validate_root_token(deps.as_ref(), &root_token, token_type)?;

    let child = ChildToken::new(child_index, child_sub_index);
    if remap {
        registry::remap_token(deps.storage, &root_token, child, token_type)?;
    } else {
        registry::map_token(deps.storage, &root_token, child, token_type)?;
    }

    Ok(Response::new()
        .add_attribute("action", if remap { "remap_token" } else { "map_token" })
        .add_attribute("root_token", root_token)
        .add_attribute("child_index", child_index.to_string())
        .add_attribute("child_sub_index", child_sub_index.to_string())
        .add_attribute("child_key", common::bytes32_to_hex(&child.key()))
        .add_attribute("token_type", token_type.as_str()))
}

pub fn execute_clean_map_token(
    deps: DepsMut,
    info: MessageInfo,
    root_token: String,
    child_index: u64,
    child_sub_index: u64,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Mapper)?;

    registry::clean_map_token(
        deps.storage,
        &root_token,
        ChildToken::new(child_index, child_sub_index),
    );

    Ok(Response::new()
        .add_attribute("action", "clean_map_token")
        .add_attribute("root_token", root_token)
        .add_attribute("child_index", child_index.to_string())
        .add_attribute("child_sub_index", child_sub_index.to_string()))
}
