//! Withdrawal handlers: Merkle root publication and proven withdrawals.

use common::vault::VaultExecuteMsg;
use common::{bytes32_to_hex, WithdrawalClaim};
use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, Event, MessageInfo, Response, WasmMsg};

use crate::authorization::{mark_processed, parse_root, verify_claim, MERKLE_ROOTS};
use crate::error::ContractError;
use crate::fee_manager::{attached_amount, charge_fee, FeeKind, FEE_CONFIG};
use crate::registry::{resolve_child, ChildToken};
use crate::roles::{ensure_role, Role};
use crate::state::{CONFIG, STATS};

// ============================================================================
// Merkle Roots
// ============================================================================

/// Publish a new root; the current one stays valid as `previous`.
pub fn execute_set_merkle_root(
    deps: DepsMut,
    info: MessageInfo,
    root: Binary,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::MerkleUpdater)?;
    let root = parse_root(&root)?;

    let mut roots = MERKLE_ROOTS.may_load(deps.storage)?.unwrap_or_default();
    roots.rotate(root);
    MERKLE_ROOTS.save(deps.storage, &roots)?;

    Ok(Response::new()
        .add_event(
            Event::new("merkle_root_updated")
                .add_attribute("root", bytes32_to_hex(&roots.current))
                .add_attribute("previous", bytes32_to_hex(&roots.previous)),
        )
        .add_attribute("action", "set_merkle_root"))
}

// ============================================================================
// Withdraw
// ============================================================================

/// Redeem `claim` if `proof` ties it to a live root and it was never redeemed.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    claim: WithdrawalClaim,
    proof: Vec<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let leaf = verify_claim(deps.storage, deps.api, &claim, &proof)?;

    let token = resolve_child(
        deps.storage,
        ChildToken::new(claim.child_index, claim.child_sub_index),
    )?;
    if token.token_type.is_fungible() && !claim.token_id.is_zero() {
        return Err(ContractError::InvalidTokenId {
            token_id: claim.token_id,
        });
    }
    if claim.amount.is_zero() {
        return Err(ContractError::InvalidClaim {
            reason: "zero amount".to_string(),
        });
    }

    let native = config.native_denom.as_str();
    let paid = attached_amount(&info.funds, native, &[native])?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    let charge = charge_fee(&fee_config, FeeKind::Withdraw, paid, native)?;

    // Recorded before the unlock is dispatched
    mark_processed(deps.storage, &leaf, env.block.height)?;

    let recipient = deps.api.addr_validate(&claim.user_wallet)?;
    let unlock = WasmMsg::Execute {
        contract_addr: token.vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Unlock {
            recipient: recipient.to_string(),
            token: token.root_token.clone(),
            token_id: claim.token_id,
            amount: claim.amount,
        })?,
        funds: vec![],
    };

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_withdrawals += 1;
        stats.total_fees_collected += charge.fee;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_messages(charge.payout)
        .add_message(unlock)
        .add_event(
            Event::new("withdraw")
                .add_attribute("leaf", bytes32_to_hex(&leaf))
                .add_attribute("user", recipient.to_string())
                .add_attribute("root_token", token.root_token)
                .add_attribute("token_type", token.token_type.as_str())
                .add_attribute("child_index", claim.child_index.to_string())
                .add_attribute("child_sub_index", claim.child_sub_index.to_string())
                .add_attribute("amount", claim.amount.to_string())
                .add_attribute("token_id", claim.token_id.to_string())
                .add_attribute(
                    "child_tx_hash",
                    format!("0x{}", hex::encode(&claim.child_tx_hash)),
                )
                .add_attribute("child_event_index", claim.child_event_index.to_string()),
        )
        .add_attribute("action", "withdraw")
        .add_attribute("fee", charge.fee.to_string())
        .add_attribute("retained", charge.excess.to_string()))
}
