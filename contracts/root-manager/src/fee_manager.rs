//! Fee Manager Module
//!
//! Flat deposit and withdraw fees, denominated in the chain's native denom
//! regardless of the token being bridged.
//!
//! ## Collection
//!
//! | Paid vs fee | Outcome                                             |
//! |-------------|-----------------------------------------------------|
//! | paid < fee  | `InsufficientFee`, whole transaction reverts        |
//! | paid = fee  | fee forwarded to the treasurer                      |
//! | paid > fee  | fee forwarded, the excess stays in the root manager |
//!
//! The payout is a `BankMsg::Send` in the same transaction, so a failing
//! payout reverts the deposit or withdrawal with it.

use common::{Asset, AssetInfo};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, CosmosMsg, Uint128};
use cw_storage_plus::Item;

use crate::error::ContractError;

// ============================================================================
// Data Structures
// ============================================================================

#[cw_serde]
pub struct FeeConfig {
    /// Fee charged on every deposit
    pub deposit_fee: Uint128,
    /// Fee charged on every withdrawal
    pub withdraw_fee: Uint128,
    /// Receiver of collected fees
    pub treasurer: Option<Addr>,
}

impl FeeConfig {
    /// A non-zero fee needs somewhere to go.
    pub fn validate(&self) -> Result<(), ContractError> {
        let charges = !self.deposit_fee.is_zero() || !self.withdraw_fee.is_zero();
        if charges && self.treasurer.is_none() {
            return Err(ContractError::TreasurerNotSet);
        }
        Ok(())
    }

    pub fn fee_for(&self, kind: FeeKind) -> Uint128 {
        match kind {
            FeeKind::Deposit => self.deposit_fee,
            FeeKind::Withdraw => self.withdraw_fee,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeKind {
    Deposit,
    Withdraw,
}

impl FeeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeKind::Deposit => "deposit",
            FeeKind::Withdraw => "withdraw",
        }
    }
}

/// Outcome of charging a fee against an attached payment.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeCharge {
    pub fee: Uint128,
    /// Attached value beyond the fee
    pub excess: Uint128,
    /// Treasurer payout, absent when the fee is zero
    pub payout: Option<CosmosMsg>,
}

// ============================================================================
// Storage
// ============================================================================

pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

// ============================================================================
// Helpers
// ============================================================================

/// Sum of attached `denom` coins. Any coin in a denom outside `allowed` is rejected.
pub fn attached_amount(
    funds: &[Coin],
    denom: &str,
    allowed: &[&str],
) -> Result<Uint128, ContractError> {
    let mut total = Uint128::zero();
    for coin in funds {
        if !allowed.contains(&coin.denom.as_str()) {
            return Err(ContractError::InvalidFunds {
                reason: format!("unexpected denom {}", coin.denom),
            });
        }
        if coin.denom == denom {
            total = total
                .checked_add(coin.amount)
                .map_err(cosmwasm_std::StdError::from)?;
        }
    }
    Ok(total)
}

/// Charge the `kind` fee against `paid` native units.
pub fn charge_fee(
    config: &FeeConfig,
    kind: FeeKind,
    paid: Uint128,
    native_denom: &str,
) -> Result<FeeCharge, ContractError> {
    let fee = config.fee_for(kind);
    if paid < fee {
        return Err(ContractError::InsufficientFee {
            required: fee,
            provided: paid,
        });
    }

    let payout = if fee.is_zero() {
        None
    } else {
        let treasurer = config
            .treasurer
            .as_ref()
            .ok_or(ContractError::TreasurerNotSet)?;
        let asset = Asset {
            info: AssetInfo::Native {
                denom: native_denom.to_string(),
            },
            amount: fee,
        };
        Some(asset.transfer_msg(treasurer)?)
    };

    Ok(FeeCharge {
        fee,
        excess: paid - fee,
        payout,
    })
}
