//! Token classes handled by the bridge. Each class is served by exactly one vault.

use std::fmt;

use cosmwasm_schema::cw_serde;

use crate::hash::keccak256;

#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// The chain's native currency (a bank denom)
    Native,
    /// CW20 fungible tokens
    Cw20,
}

impl TokenType {
    /// Storage key for per-type maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Native => "native",
            TokenType::Cw20 => "cw20",
        }
    }

    /// Opaque 32-byte tag published in events, `keccak256("NATIVE")` / `keccak256("CW20")`.
    pub fn tag(&self) -> [u8; 32] {
        match self {
            TokenType::Native => keccak256(b"NATIVE"),
            TokenType::Cw20 => keccak256(b"CW20"),
        }
    }

    /// Whether assets of this class carry a non-fungible token id.
    pub fn is_fungible(&self) -> bool {
        match self {
            TokenType::Native | TokenType::Cw20 => true,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
