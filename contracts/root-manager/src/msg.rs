//! Message types for the root manager.

use common::{TokenType, WithdrawalClaim};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

pub use crate::registry::ChildToken;
pub use crate::roles::Role;

// ============================================================================
// Instantiate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Receives every role
    pub admin: String,
    /// Native bank denom; defaults to `uluna`
    pub native_denom: Option<String>,
    pub state_sender: Option<String>,
    pub treasurer: Option<String>,
    pub deposit_fee: Uint128,
    pub withdraw_fee: Uint128,
}

// ============================================================================
// Execute
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposits and Withdrawals
    // ========================================================================
    /// Lock `amount` of `root_token` for `user`, to be credited to
    /// `child_recipient` on the child chain.
    ///
    /// Attach the deposit fee in the native denom. CW20 tokens are pulled by
    /// the vault, so approve the CW20 vault for `amount` first. Non-native bank
    /// denoms are attached alongside the fee.
    DepositFor {
        user: String,
        child_recipient: String,
        root_token: String,
        amount: Uint128,
        data: Option<Binary>,
    },

    /// Deposit native currency. Everything attached beyond the deposit fee is
    /// the deposit amount.
    DepositNativeFor {
        user: String,
        child_recipient: String,
    },

    /// Redeem a withdrawal proven against a published root. Attach the
    /// withdraw fee when one is configured.
    Withdraw {
        claim: WithdrawalClaim,
        /// Sibling hashes, leaf to root, 32 bytes each
        proof: Vec<Binary>,
    },

    // ========================================================================
    // Registry (Mapper)
    // ========================================================================
    /// Register the vault for `token_type`, replacing the previous one.
    RegisterVault { token_type: TokenType, vault: String },

    MapToken {
        root_token: String,
        child_index: u64,
        child_sub_index: u64,
        token_type: TokenType,
    },

    /// Overwrite a mapping without conflict checks.
    RemapToken {
        root_token: String,
        child_index: u64,
        child_sub_index: u64,
        token_type: TokenType,
    },

    CleanMapToken {
        root_token: String,
        child_index: u64,
        child_sub_index: u64,
    },

    // ========================================================================
    // Merkle Roots (MerkleUpdater)
    // ========================================================================
    SetMerkleRoot { root: Binary },

    // ========================================================================
    // Admin
    // ========================================================================
    SetStateSender { state_sender: String },
    SetPaused { paused: bool },
    SetDepositFee { amount: Uint128 },
    SetWithdrawFee { amount: Uint128 },
    SetTreasurer { treasurer: String },
    GrantRole { address: String, role: Role },
    RevokeRole { address: String, role: Role },
}

impl ExecuteMsg {
    /// Whether the message may carry funds.
    pub fn is_payable(&self) -> bool {
        matches!(
            self,
            ExecuteMsg::DepositFor { .. }
                | ExecuteMsg::DepositNativeFor { .. }
                | ExecuteMsg::Withdraw { .. }
        )
    }
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Query
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(RolesResponse)]
    Roles { address: String },

    #[returns(FeeConfigResponse)]
    FeeConfig {},

    #[returns(StatsResponse)]
    Stats {},

    // Registry
    #[returns(RootToChildTokenResponse)]
    RootToChildToken { root_token: String },

    #[returns(ChildToRootTokenResponse)]
    ChildToRootToken {
        child_index: u64,
        child_sub_index: u64,
    },

    #[returns(TokenToTypeResponse)]
    TokenToType { root_token: String },

    #[returns(TypeToVaultResponse)]
    TypeToVault { token_type: TokenType },

    /// Reverse-mapping key of a child token
    #[returns(ChildKeyResponse)]
    ComputeChildKey {
        child_index: u64,
        child_sub_index: u64,
    },

    // Withdrawal authorization
    /// Current root
    #[returns(MerkleRootResponse)]
    MerkleRoot {},

    #[returns(MerkleRootsResponse)]
    MerkleRoots {},

    #[returns(IsExitProcessedResponse)]
    IsExitProcessed { leaf: Binary },

    /// Leaf hash the relayer must commit to for `claim`
    #[returns(LeafHashResponse)]
    ComputeLeafHash { claim: WithdrawalClaim },
}

#[cw_serde]
pub struct ConfigResponse {
    pub native_denom: String,
    pub paused: bool,
    pub state_sender: Option<Addr>,
}

#[cw_serde]
pub struct RolesResponse {
    pub address: Addr,
    pub roles: Vec<Role>,
}

#[cw_serde]
pub struct FeeConfigResponse {
    pub deposit_fee: Uint128,
    pub withdraw_fee: Uint128,
    pub treasurer: Option<Addr>,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_deposits: u64,
    pub total_withdrawals: u64,
    pub total_fees_collected: Uint128,
}

#[cw_serde]
pub struct RootToChildTokenResponse {
    pub child: Option<ChildToken>,
}

#[cw_serde]
pub struct ChildToRootTokenResponse {
    pub root_token: Option<String>,
}

#[cw_serde]
pub struct TokenToTypeResponse {
    pub token_type: Option<TokenType>,
}

#[cw_serde]
pub struct TypeToVaultResponse {
    pub vault: Option<Addr>,
}

#[cw_serde]
pub struct ChildKeyResponse {
    pub child_key: Binary,
    /// `0x`-prefixed hex of `child_key`
    pub child_key_hex: String,
}

#[cw_serde]
pub struct MerkleRootResponse {
    pub root: Binary,
}

#[cw_serde]
pub struct MerkleRootsResponse {
    pub current: Binary,
    pub previous: Binary,
}

#[cw_serde]
pub struct IsExitProcessedResponse {
    pub processed: bool,
    /// Block height of the redemption
    pub processed_at: Option<u64>,
}

#[cw_serde]
pub struct LeafHashResponse {
    pub leaf: Binary,
    pub leaf_hex: String,
}
