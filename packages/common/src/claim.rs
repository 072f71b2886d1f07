//! Withdrawal claims: the leaf payload the relayer commits to in its Merkle tree.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Api, Binary, StdResult, Uint128};

use crate::hash::{compute_child_key, compute_claim_leaf, encode_address, to_bytes32};

/// A single withdrawal intent observed on the child chain.
#[cw_serde]
pub struct WithdrawalClaim {
    /// Child token index
    pub child_index: u64,
    /// Child token sub-index
    pub child_sub_index: u64,
    /// Amount to release on the root chain
    pub amount: Uint128,
    /// Root chain recipient
    pub user_wallet: String,
    /// Child chain transaction hash (32 bytes)
    pub child_tx_hash: Binary,
    /// Position of the withdrawal event inside the child transaction
    pub child_event_index: u64,
    /// Token id; zero for fungible assets
    pub token_id: Uint128,
}

impl WithdrawalClaim {
    /// Leaf hash as built by the relayer. Fails if `child_tx_hash` is not 32
    /// bytes or `user_wallet` is not a valid address.
    pub fn leaf_hash(&self, api: &dyn Api) -> StdResult<[u8; 32]> {
        let user_wallet = encode_address(api, &self.user_wallet)?;
        let child_tx_hash = to_bytes32(self.child_tx_hash.as_slice())?;
        Ok(compute_claim_leaf(
            self.child_index,
            self.child_sub_index,
            self.amount.u128(),
            &user_wallet,
            &child_tx_hash,
            self.child_event_index,
            self.token_id.u128(),
        ))
    }

    /// Reverse-mapping key of the claimed child token.
    pub fn child_key(&self) -> [u8; 32] {
        compute_child_key(self.child_index, self.child_sub_index)
    }
}
