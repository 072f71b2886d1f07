//! Integration tests for Merkle-proven withdrawals: the end-to-end bridge
//! round trip, replay protection, root rotation and fee handling.

mod suite;

use common::bytes32_to_hex;
use cosmwasm_std::{coins, Binary, Uint128};

use root_manager::msg::{
    ExecuteMsg, IsExitProcessedResponse, LeafHashResponse, MerkleRootsResponse, QueryMsg,
};
use suite::{event_attr, proof_of, setup, setup_with_fees, Suite, DENOM, NATIVE_CHILD_INDEX};

fn withdraw(suite: &mut Suite, msg: &ExecuteMsg, fee: u128) -> anyhow::Result<()> {
    let user = suite.user.clone();
    let funds = if fee == 0 { vec![] } else { coins(fee, DENOM) };
    suite.execute(&user, msg, &funds).map(|_| ())
}

// ============================================================================
// End-to-End
// ============================================================================

#[test]
fn test_deposit_then_withdraw_45_0() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();
    assert_eq!(suite.token_balance(&suite.user), Uint128::from(999_900u128));

    // Relayer publishes a tree containing {45, 0, 100, user, txHash, 1, 0}
    let claims = vec![suite.claim(100, 1), suite.claim(7, 2), suite.claim(9, 3)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());

    let msg = ExecuteMsg::Withdraw {
        claim: claims[0].clone(),
        proof: proof_of(&tree, 0),
    };
    let user = suite.user.clone();
    let res = suite.execute(&user, &msg, &[]).unwrap();

    assert_eq!(suite.token_balance(&suite.cw20_vault), Uint128::zero());
    assert_eq!(suite.token_balance(&suite.user), Uint128::from(1_000_000u128));
    assert_eq!(
        event_attr(&res, "wasm-withdraw", "leaf"),
        Some(bytes32_to_hex(&tree.leaf(0).unwrap()))
    );

    let err = suite.execute(&user, &msg, &[]).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Exit already processed"));

    let processed: IsExitProcessedResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.manager,
            &QueryMsg::IsExitProcessed {
                leaf: Binary::from(tree.leaf(0).unwrap().to_vec()),
            },
        )
        .unwrap();
    assert!(processed.processed);
    assert!(processed.processed_at.is_some());
}

#[test]
fn test_native_deposit_then_withdraw() {
    let mut suite = setup();
    let user = suite.user.clone();

    suite
        .execute(
            &user,
            &ExecuteMsg::DepositNativeFor {
                user: user.to_string(),
                child_recipient: "child1user".to_string(),
            },
            &coins(500, DENOM),
        )
        .unwrap();
    assert_eq!(suite.native_balance(&suite.native_vault), Uint128::from(500u128));
    let user_before = suite.native_balance(&user);

    let mut claim = suite.claim(500, 4);
    claim.child_index = NATIVE_CHILD_INDEX;
    let tree = suite.tree(&[claim.clone(), suite.claim(3, 5)]);
    suite.publish_root(tree.root());

    let msg = ExecuteMsg::Withdraw {
        claim,
        proof: proof_of(&tree, 0),
    };
    let res = suite.execute(&user, &msg, &[]).unwrap();

    assert_eq!(suite.native_balance(&suite.native_vault), Uint128::zero());
    assert_eq!(
        suite.native_balance(&user) - user_before,
        Uint128::from(500u128)
    );
    assert_eq!(
        event_attr(&res, "wasm-withdraw", "token_type").as_deref(),
        Some("native")
    );

    let err = suite.execute(&user, &msg, &[]).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Exit already processed"));
    assert_eq!(
        suite.native_balance(&user) - user_before,
        Uint128::from(500u128)
    );
}

#[test]
fn test_leaf_hash_query_matches_tree() {
    let suite = setup();
    let claim = suite.claim(100, 1);
    let tree = suite.tree(&[claim.clone()]);

    let res: LeafHashResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.manager, &QueryMsg::ComputeLeafHash { claim })
        .unwrap();
    assert_eq!(res.leaf.as_slice(), &tree.leaf(0).unwrap());
    assert_eq!(res.leaf_hex, bytes32_to_hex(&tree.leaf(0).unwrap()));
}

// ============================================================================
// Root Rotation
// ============================================================================

#[test]
fn test_previous_root_still_accepted() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();

    let claims = vec![suite.claim(60, 1), suite.claim(40, 2)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());

    // A newer root covering other exits
    let newer = suite.tree(&[suite.claim(1, 99)]);
    suite.publish_root(newer.root());

    let roots: MerkleRootsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.manager, &QueryMsg::MerkleRoots {})
        .unwrap();
    assert_eq!(roots.previous.as_slice(), &tree.root());
    assert_eq!(roots.current.as_slice(), &newer.root());

    withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim: claims[0].clone(),
            proof: proof_of(&tree, 0),
        },
        0,
    )
    .unwrap();
}

#[test]
fn test_root_expires_after_two_rotations() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();

    let claims = vec![suite.claim(60, 1), suite.claim(40, 2)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());
    suite.publish_root(suite.tree(&[suite.claim(1, 98)]).root());
    suite.publish_root(suite.tree(&[suite.claim(1, 99)]).root());

    let err = withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim: claims[1].clone(),
            proof: proof_of(&tree, 1),
        },
        0,
    )
    .unwrap_err();
    assert!(err.root_cause().to_string().contains("Transaction not live"));
}

#[test]
fn test_no_root_published() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();
    let claim = suite.claim(100, 1);

    let err = withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim,
            proof: vec![],
        },
        0,
    )
    .unwrap_err();
    assert!(err.root_cause().to_string().contains("Transaction not live"));
}

#[test]
fn test_tampered_claim_rejected() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();

    let claims = vec![suite.claim(50, 1), suite.claim(50, 2)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());

    let mut inflated = claims[0].clone();
    inflated.amount = Uint128::from(100u128);
    let err = withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim: inflated,
            proof: proof_of(&tree, 0),
        },
        0,
    )
    .unwrap_err();
    assert!(err.root_cause().to_string().contains("Transaction not live"));
}

#[test]
fn test_only_merkle_updater_publishes() {
    let mut suite = setup();
    let user = suite.user.clone();

    let err = suite
        .execute(
            &user,
            &ExecuteMsg::SetMerkleRoot {
                root: Binary::from(vec![1u8; 32]),
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("missing role merkle_updater"));

    let admin = suite.admin.clone();
    let err = suite
        .execute(
            &admin,
            &ExecuteMsg::SetMerkleRoot {
                root: Binary::from(vec![0u8; 32]),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid Merkle root"));
}

// ============================================================================
// Pause, Fees and Token Checks
// ============================================================================

#[test]
fn test_withdraw_works_while_paused() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();

    let claims = vec![suite.claim(100, 1)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());

    let admin = suite.admin.clone();
    suite
        .execute(&admin, &ExecuteMsg::SetPaused { paused: true }, &[])
        .unwrap();

    withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim: claims[0].clone(),
            proof: proof_of(&tree, 0),
        },
        0,
    )
    .unwrap();
    assert_eq!(suite.token_balance(&suite.user), Uint128::from(1_000_000u128));
}

#[test]
fn test_withdraw_fee_forwarded() {
    let mut suite = setup_with_fees(0, 300);
    suite.deposit_token(100, 0).unwrap();

    let claims = vec![suite.claim(100, 1)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());
    let msg = ExecuteMsg::Withdraw {
        claim: claims[0].clone(),
        proof: proof_of(&tree, 0),
    };

    let err = withdraw(&mut suite, &msg, 299).unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient fee"));

    // A failed attempt leaves the claim redeemable
    withdraw(&mut suite, &msg, 300).unwrap();
    assert_eq!(suite.native_balance(&suite.treasurer), Uint128::from(300u128));
    assert_eq!(suite.token_balance(&suite.user), Uint128::from(1_000_000u128));
}

#[test]
fn test_fungible_claim_with_token_id_rejected() {
    let mut suite = setup();
    suite.deposit_token(100, 0).unwrap();

    let mut claim = suite.claim(100, 1);
    claim.token_id = Uint128::from(5u128);
    let tree = suite.tree(&[claim.clone()]);
    suite.publish_root(tree.root());

    let err = withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim,
            proof: proof_of(&tree, 0),
        },
        0,
    )
    .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid token id"));
}

#[test]
fn test_unmapped_child_rejected() {
    let mut suite = setup();

    let mut claim = suite.claim(100, 1);
    claim.child_index = 77;
    let tree = suite.tree(&[claim.clone()]);
    suite.publish_root(tree.root());

    let err = withdraw(
        &mut suite,
        &ExecuteMsg::Withdraw {
            claim,
            proof: proof_of(&tree, 0),
        },
        0,
    )
    .unwrap_err();
    assert!(err.root_cause().to_string().contains("Token not mapped"));
}

#[test]
fn test_vault_shortfall_reverts_and_keeps_claim_open() {
    let mut suite = setup();
    suite.deposit_token(50, 0).unwrap();

    let claims = vec![suite.claim(100, 1)];
    let tree = suite.tree(&claims);
    suite.publish_root(tree.root());
    let msg = ExecuteMsg::Withdraw {
        claim: claims[0].clone(),
        proof: proof_of(&tree, 0),
    };

    let err = withdraw(&mut suite, &msg, 0).unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Insufficient vault balance"));

    // Top the vault up; the same claim now goes through
    suite.deposit_token(50, 0).unwrap();
    withdraw(&mut suite, &msg, 0).unwrap();
}
