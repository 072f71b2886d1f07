//! Withdrawal authorization.
//!
//! A claim moves `Unseen -> Verified -> Processed`. Verification recomputes the
//! leaf hash, folds the proof with sorted pairs and accepts the result if it
//! equals the current or the previous root. Processed leaves are remembered
//! forever together with the block height that redeemed them.

use common::bytes32_to_hex;
use common::hash::to_bytes32;
use common::merkle::process_proof;
use common::WithdrawalClaim;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Api, Binary, Storage};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

/// Deepest proof accepted (trees of up to 2^64 leaves)
pub const MAX_PROOF_DEPTH: usize = 64;

const UNSET_ROOT: [u8; 32] = [0u8; 32];

/// Two-slot ring of published roots.
#[cw_serde]
#[derive(Default)]
pub struct MerkleRoots {
    pub current: [u8; 32],
    pub previous: [u8; 32],
}

impl MerkleRoots {
    /// Shift current into previous and adopt `root`.
    pub fn rotate(&mut self, root: [u8; 32]) {
        self.previous = self.current;
        self.current = root;
    }

    pub fn accepts(&self, root: &[u8; 32]) -> bool {
        *root != UNSET_ROOT && (*root == self.current || *root == self.previous)
    }
}

pub const MERKLE_ROOTS: Item<MerkleRoots> = Item::new("merkle_roots");

/// leaf hash -> block height of redemption
pub const PROCESSED_EXITS: Map<&[u8], u64> = Map::new("processed_exits");

pub fn parse_root(root: &Binary) -> Result<[u8; 32], ContractError> {
    let root = to_bytes32(root.as_slice()).map_err(|_| ContractError::InvalidMerkleRoot {
        reason: format!("expected 32 bytes, got {}", root.len()),
    })?;
    if root == UNSET_ROOT {
        return Err(ContractError::InvalidMerkleRoot {
            reason: "zero root".to_string(),
        });
    }
    Ok(root)
}

pub fn parse_proof(proof: &[Binary]) -> Result<Vec<[u8; 32]>, ContractError> {
    if proof.len() > MAX_PROOF_DEPTH {
        return Err(ContractError::InvalidProof {
            reason: format!("depth {} exceeds {}", proof.len(), MAX_PROOF_DEPTH),
        });
    }
    proof
        .iter()
        .enumerate()
        .map(|(i, node)| {
            to_bytes32(node.as_slice()).map_err(|_| ContractError::InvalidProof {
                reason: format!("node {} is {} bytes", i, node.len()),
            })
        })
        .collect()
}

/// Leaf hash of `claim`, mapping encoding failures to contract errors.
pub fn claim_leaf(api: &dyn Api, claim: &WithdrawalClaim) -> Result<[u8; 32], ContractError> {
    api.addr_validate(&claim.user_wallet)
        .map_err(|_| ContractError::InvalidUser)?;
    if claim.child_tx_hash.len() != 32 {
        return Err(ContractError::InvalidClaim {
            reason: format!("child_tx_hash is {} bytes", claim.child_tx_hash.len()),
        });
    }
    Ok(claim.leaf_hash(api)?)
}

pub fn is_processed(storage: &dyn Storage, leaf: &[u8; 32]) -> Result<bool, ContractError> {
    Ok(PROCESSED_EXITS.has(storage, leaf))
}

/// Verify `claim` against the published roots and the processed set.
/// Returns the leaf hash on success.
pub fn verify_claim(
    storage: &dyn Storage,
    api: &dyn Api,
    claim: &WithdrawalClaim,
    proof: &[Binary],
) -> Result<[u8; 32], ContractError> {
    let leaf = claim_leaf(api, claim)?;
    let proof = parse_proof(proof)?;

    let roots = MERKLE_ROOTS.may_load(storage)?.unwrap_or_default();
    if !roots.accepts(&process_proof(&leaf, &proof)) {
        return Err(ContractError::TransactionNotLive);
    }

    if is_processed(storage, &leaf)? {
        return Err(ContractError::ExitAlreadyProcessed {
            leaf: bytes32_to_hex(&leaf),
        });
    }
    Ok(leaf)
}

pub fn mark_processed(
    storage: &mut dyn Storage,
    leaf: &[u8; 32],
    height: u64,
) -> Result<(), ContractError> {
    if is_processed(storage, leaf)? {
        return Err(ContractError::ExitAlreadyProcessed {
            leaf: bytes32_to_hex(leaf),
        });
    }
    PROCESSED_EXITS.save(storage, leaf, &height)?;
    Ok(())
}
