//! Shared multi-test harness: a root manager wired to a native vault, a CW20
//! vault, a state sender and a cw20-base token.

#![allow(dead_code)]

use common::merkle::MerkleTree;
use common::vault::VaultKind;
use common::{TokenType, WithdrawalClaim};
use cosmwasm_std::{coins, Addr, Binary, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use root_manager::msg::{ExecuteMsg, InstantiateMsg};

pub const DENOM: &str = "uluna";
pub const TOKEN_CHILD_INDEX: u64 = 45;
pub const NATIVE_CHILD_INDEX: u64 = 1;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_root_manager() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        root_manager::contract::execute,
        root_manager::contract::instantiate,
        root_manager::contract::query,
    )
    .with_migrate(root_manager::contract::migrate);
    Box::new(contract)
}

pub fn contract_vault() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        vault::contract::execute,
        vault::contract::instantiate,
        vault::contract::query,
    );
    Box::new(contract)
}

pub fn contract_state_sender() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        state_sender::contract::execute,
        state_sender::contract::instantiate,
        state_sender::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub admin: Addr,
    pub user: Addr,
    pub treasurer: Addr,
    pub manager: Addr,
    pub state_sender: Addr,
    pub native_vault: Addr,
    pub cw20_vault: Addr,
    pub token: Addr,
}

pub fn setup() -> Suite {
    setup_with_fees(0, 0)
}

pub fn setup_with_fees(deposit_fee: u128, withdraw_fee: u128) -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let treasurer = Addr::unchecked("terra1treasurer");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &admin, coins(10_000_000, DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000, DENOM))
            .unwrap();
    });

    let manager_code = app.store_code(contract_root_manager());
    let vault_code = app.store_code(contract_vault());
    let sender_code = app.store_code(contract_state_sender());
    let cw20_code = app.store_code(contract_cw20());

    let manager = app
        .instantiate_contract(
            manager_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                native_denom: None,
                state_sender: None,
                treasurer: Some(treasurer.to_string()),
                deposit_fee: Uint128::from(deposit_fee),
                withdraw_fee: Uint128::from(withdraw_fee),
            },
            &[],
            "root-manager",
            Some(admin.to_string()),
        )
        .unwrap();

    let state_sender = app
        .instantiate_contract(
            sender_code,
            admin.clone(),
            &state_sender::msg::InstantiateMsg {
                admin: admin.to_string(),
                senders: vec![manager.to_string()],
            },
            &[],
            "state-sender",
            None,
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        manager.clone(),
        &ExecuteMsg::SetStateSender {
            state_sender: state_sender.to_string(),
        },
        &[],
    )
    .unwrap();

    let instantiate_vault = |app: &mut App, kind: VaultKind, label: &str| {
        app.instantiate_contract(
            vault_code,
            admin.clone(),
            &vault::msg::InstantiateMsg {
                admin: admin.to_string(),
                kind,
                managers: vec![manager.to_string()],
            },
            &[],
            label,
            None,
        )
        .unwrap()
    };
    let native_vault = instantiate_vault(
        &mut app,
        VaultKind::Native {
            denom: DENOM.to_string(),
        },
        "native-vault",
    );
    let cw20_vault = instantiate_vault(&mut app, VaultKind::Cw20, "cw20-vault");

    for (token_type, vault) in [
        (TokenType::Native, &native_vault),
        (TokenType::Cw20, &cw20_vault),
    ] {
        app.execute_contract(
            admin.clone(),
            manager.clone(),
            &ExecuteMsg::RegisterVault {
                token_type,
                vault: vault.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    let token = app
        .instantiate_contract(
            cw20_code,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Root Token".to_string(),
                symbol: "ROOT".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::from(1_000_000u128),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "root-token",
            None,
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        manager.clone(),
        &ExecuteMsg::MapToken {
            root_token: token.to_string(),
            child_index: TOKEN_CHILD_INDEX,
            child_sub_index: 0,
            token_type: TokenType::Cw20,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        manager.clone(),
        &ExecuteMsg::MapToken {
            root_token: DENOM.to_string(),
            child_index: NATIVE_CHILD_INDEX,
            child_sub_index: 0,
            token_type: TokenType::Native,
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        admin,
        user,
        treasurer,
        manager,
        state_sender,
        native_vault,
        cw20_vault,
        token,
    }
}

impl Suite {
    pub fn execute(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.manager.clone(), msg, funds)
    }

    pub fn approve_vault(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.cw20_vault.to_string(),
                    amount: Uint128::from(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Approve the CW20 vault and deposit `amount` tokens for the user.
    pub fn deposit_token(&mut self, amount: u128, fee: u128) -> anyhow::Result<AppResponse> {
        self.approve_vault(amount);
        let user = self.user.clone();
        let funds = if fee == 0 { vec![] } else { coins(fee, DENOM) };
        self.execute(
            &user,
            &ExecuteMsg::DepositFor {
                user: user.to_string(),
                child_recipient: "child1user".to_string(),
                root_token: self.token.to_string(),
                amount: Uint128::from(amount),
                data: None,
            },
            &funds,
        )
    }

    pub fn token_balance(&self, owner: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: owner.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn native_balance(&self, owner: &Addr) -> Uint128 {
        self.app.wrap().query_balance(owner, DENOM).unwrap().amount
    }

    pub fn claim(&self, amount: u128, event_index: u64) -> WithdrawalClaim {
        WithdrawalClaim {
            child_index: TOKEN_CHILD_INDEX,
            child_sub_index: 0,
            amount: Uint128::from(amount),
            user_wallet: self.user.to_string(),
            child_tx_hash: Binary::from(vec![0x11; 32]),
            child_event_index: event_index,
            token_id: Uint128::zero(),
        }
    }

    /// Tree over `claims` built the way the relayer builds it.
    pub fn tree(&self, claims: &[WithdrawalClaim]) -> MerkleTree {
        let api = self.app.api();
        MerkleTree::from_leaves(
            claims
                .iter()
                .map(|claim| claim.leaf_hash(api).unwrap())
                .collect(),
        )
    }

    pub fn publish_root(&mut self, root: [u8; 32]) {
        let admin = self.admin.clone();
        self.execute(
            &admin,
            &ExecuteMsg::SetMerkleRoot {
                root: Binary::from(root.to_vec()),
            },
            &[],
        )
        .unwrap();
    }
}

pub fn proof_of(tree: &MerkleTree, index: usize) -> Vec<Binary> {
    tree.proof(index)
        .unwrap()
        .into_iter()
        .map(|node| Binary::from(node.to_vec()))
        .collect()
}

pub fn event_attr(res: &AppResponse, event: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == event)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
