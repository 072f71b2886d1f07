//! Hash computation shared by the root manager and the off-chain relayer.
//!
//! All encodings follow Solidity `abi.encode` for static types: every field is a
//! 32-byte word, integers big-endian and left-padded, addresses left-padded.
//!
//! # Withdrawal leaf (224 bytes)
//! - Bytes 0-31:    childIndex (uint256)
//! - Bytes 32-63:   childSubIndex (uint256)
//! - Bytes 64-95:   amount (uint256)
//! - Bytes 96-127:  userWallet (address, see [`encode_address`])
//! - Bytes 128-159: childTxHash (bytes32)
//! - Bytes 160-191: childEventIndex (uint256)
//! - Bytes 192-223: tokenId (uint256)
//!
//! # Child key (64 bytes)
//! - Bytes 0-31:  childIndex (uint256)
//! - Bytes 32-63: childSubIndex (uint256)

use cosmwasm_std::{Api, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// uint256 word holding a u64 (bytes 24-31)
pub fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// uint256 word holding a u128 (bytes 16-31)
pub fn u128_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Reverse-lookup key of a child token: `keccak256(abi.encode(index, subIndex))`
pub fn compute_child_key(child_index: u64, child_sub_index: u64) -> [u8; 32] {
    let mut data = [0u8; 64];
    data[0..32].copy_from_slice(&u64_word(child_index));
    data[32..64].copy_from_slice(&u64_word(child_sub_index));
    keccak256(&data)
}

/// Withdrawal leaf hash. Field order and widths are fixed; the relayer builds
/// its tree from exactly this encoding.
pub fn compute_claim_leaf(
    child_index: u64,
    child_sub_index: u64,
    amount: u128,
    user_wallet: &[u8; 32],
    child_tx_hash: &[u8; 32],
    child_event_index: u64,
    token_id: u128,
) -> [u8; 32] {
    let mut data = [0u8; 224];
    data[0..32].copy_from_slice(&u64_word(child_index));
    data[32..64].copy_from_slice(&u64_word(child_sub_index));
    data[64..96].copy_from_slice(&u128_word(amount));
    data[96..128].copy_from_slice(user_wallet);
    data[128..160].copy_from_slice(child_tx_hash);
    data[160..192].copy_from_slice(&u64_word(child_event_index));
    data[192..224].copy_from_slice(&u128_word(token_id));
    keccak256(&data)
}

/// Encode an address as a 32-byte word.
///
/// Canonical addresses of up to 32 bytes (20-byte accounts, 32-byte contracts)
/// are left-padded. Longer canonical forms are hashed with keccak256.
pub fn encode_address(api: &dyn Api, addr: &str) -> StdResult<[u8; 32]> {
    let canonical = api.addr_canonicalize(addr)?;
    let bytes = canonical.as_slice();
    if bytes.len() > 32 {
        return Ok(keccak256(bytes));
    }

    let mut result = [0u8; 32];
    let start = 32 - bytes.len();
    result[start..].copy_from_slice(bytes);
    Ok(result)
}

/// Interpret raw bytes as a bytes32 value.
pub fn to_bytes32(bytes: &[u8]) -> StdResult<[u8; 32]> {
    bytes
        .try_into()
        .map_err(|_| StdError::invalid_data_size(32, bytes.len()))
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
