//! Ledger consistency across random deposit / withdraw sequences.
//!
//! Invariants checked after every step:
//! - `total_staked` equals the sum of every staker's `amount_staked`
//! - `amount_staked` equals the number of active positions
//! - `position_owner(id)` is the staker iff the position is active under it
//! - custody holds exactly the staked positions
//! - rejected operations leave all of the above unchanged

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Ledger as _;

use crate::common::{position_id, setup, TestContext};

const STAKERS: usize = 3;
const POSITIONS_EACH: u32 = 3;

#[derive(Arbitrary, Clone, Debug)]
enum Action {
    Deposit {
        #[proptest(strategy = "0usize..STAKERS")]
        staker: usize,
        #[proptest(strategy = "0usize..STAKERS")]
        owner: usize,
        #[proptest(strategy = "0u32..POSITIONS_EACH")]
        k: u32,
    },
    Withdraw {
        #[proptest(strategy = "0usize..STAKERS")]
        staker: usize,
        #[proptest(strategy = "0usize..STAKERS")]
        owner: usize,
        #[proptest(strategy = "0u32..POSITIONS_EACH")]
        k: u32,
    },
    Wait {
        #[proptest(strategy = "1u64..7_200")]
        seconds: u64,
    },
}

fn check_invariants(ctx: &TestContext) -> Result<(), TestCaseError> {
    let contract = ctx.client.address.clone();
    let mut sum = 0u64;

    for (i, staker) in ctx.stakers.iter().enumerate() {
        let amount = ctx.client.get_amount_staked(staker);
        let active = ctx.client.active_positions(staker);
        prop_assert_eq!(amount, active.len() as u64);
        sum += amount;

        for position in active.iter() {
            prop_assert_eq!(
                ctx.client.position_owner(&position.position_id),
                Some(staker.clone())
            );
        }

        for k in 0..POSITIONS_EACH {
            let id = position_id(i, k);
            let held = active.iter().any(|p| p.position_id == id);
            let custody_owner = ctx.positions.owner_of(&id);
            match ctx.client.position_owner(&id) {
                Some(_) => {
                    prop_assert!(held);
                    prop_assert_eq!(custody_owner, contract.clone());
                }
                None => {
                    prop_assert!(!held);
                    prop_assert_eq!(&custody_owner, staker);
                }
            }
        }
    }

    prop_assert_eq!(ctx.client.get_total_staked(), sum);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_ledger_stays_consistent(actions in prop::collection::vec(any::<Action>(), 1..24)) {
        let ctx = setup(STAKERS, POSITIONS_EACH);
        let mut now = 0u64;

        for action in actions {
            match action {
                Action::Deposit { staker, owner, k } => {
                    let caller = &ctx.stakers[staker];
                    let id = position_id(owner, k);
                    let before = ctx.client.get_total_staked();
                    let result = ctx.client.try_deposit(caller, &id);
                    if result.is_err() {
                        prop_assert_eq!(ctx.client.get_total_staked(), before);
                    } else {
                        prop_assert_eq!(staker, owner);
                        prop_assert_eq!(ctx.client.get_total_staked(), before + 1);
                    }
                }
                Action::Withdraw { staker, owner, k } => {
                    let caller = &ctx.stakers[staker];
                    let id = position_id(owner, k);
                    let before = ctx.client.get_total_staked();
                    let result = ctx.client.try_withdraw(caller, &id);
                    if result.is_err() {
                        prop_assert_eq!(ctx.client.get_total_staked(), before);
                    } else {
                        prop_assert_eq!(staker, owner);
                        prop_assert_eq!(ctx.client.get_total_staked(), before - 1);
                    }
                }
                Action::Wait { seconds } => {
                    now += seconds;
                    ctx.env.ledger().set_timestamp(now);
                }
            }
            check_invariants(&ctx)?;
        }
    }
}
