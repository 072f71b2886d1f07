//! Sorted-pair Merkle proofs over keccak256.
//!
//! Siblings are ordered by value, not by position: every internal node is
//! `keccak256(min(a, b) ‖ max(a, b))`. A proof is therefore just the list of
//! sibling hashes from the leaf upwards, with no direction bits.
//!
//! [`MerkleTree`] builds trees with the same convention. An odd node at the end
//! of a level is carried up unchanged. The contracts only ever verify; the tree
//! exists so that relayers and tests produce byte-identical roots.

use crate::hash::keccak256;

/// Hash two nodes in sorted order.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 64];
    if a <= b {
        data[..32].copy_from_slice(a);
        data[32..].copy_from_slice(b);
    } else {
        data[..32].copy_from_slice(b);
        data[32..].copy_from_slice(a);
    }
    keccak256(&data)
}

/// Root reconstructed from `leaf` and its sibling path.
pub fn process_proof(leaf: &[u8; 32], proof: &[[u8; 32]]) -> [u8; 32] {
    proof
        .iter()
        .fold(*leaf, |computed, sibling| hash_pair(&computed, sibling))
}

pub fn verify_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: &[u8; 32]) -> bool {
    process_proof(leaf, proof) == *root
}

/// In-memory tree, all levels kept so proofs can be served for any leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    /// layers[0] are the leaves, the last layer holds the root
    layers: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    pub fn from_leaves(leaves: Vec<[u8; 32]>) -> Self {
        let mut layers = vec![leaves];
        while layers.last().map_or(false, |level| level.len() > 1) {
            let level = &layers[layers.len() - 1];
            let next = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    carried => carried[0],
                })
                .collect();
            layers.push(next);
        }
        Self { layers }
    }

    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Tree root; all zeros for an empty tree.
    pub fn root(&self) -> [u8; 32] {
        self.layers
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or([0u8; 32])
    }

    pub fn leaf(&self, index: usize) -> Option<[u8; 32]> {
        self.layers[0].get(index).copied()
    }

    /// Sibling path for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Option<Vec<[u8; 32]>> {
        if index >= self.len() {
            return None;
        }

        let mut proof = Vec::with_capacity(self.layers.len());
        let mut position = index;
        for level in &self.layers[..self.layers.len() - 1] {
            let sibling = position ^ 1;
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            position /= 2;
        }
        Some(proof)
    }
}
