//! Properties of the available-rewards view.
//!
//! - Monotonically non-decreasing in time while staked and not claiming
//! - Idempotent: two reads with no mutation in between agree
//! - A claim pays exactly the pre-claim available amount and leaves zero

use proptest::prelude::*;
use soroban_sdk::{testutils::Ledger as _, token::Client as TokenClient};

use crate::common::{available, position_id, setup, SECONDS_PER_YEAR, TREASURY};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_available_is_monotonic_in_time(
        steps in prop::collection::vec(0u64..10_000, 1..12),
        others in 0usize..3,
    ) {
        let ctx = setup(1 + others, 1);
        let staker = ctx.stakers[0].clone();
        ctx.client.deposit(&staker, &position_id(0, 0));
        for i in 1..=others {
            ctx.client.deposit(&ctx.stakers[i], &position_id(i, 0));
        }

        let mut now = 0u64;
        let mut last = available(&ctx, &staker);
        for step in steps {
            now += step;
            ctx.env.ledger().set_timestamp(now);
            let current = available(&ctx, &staker);
            prop_assert!(current >= last, "available fell from {} to {}", last, current);
            last = current;
        }
    }

    #[test]
    fn prop_available_is_idempotent(elapsed in 0u64..1_000_000) {
        let ctx = setup(2, 1);
        ctx.client.deposit(&ctx.stakers[0], &position_id(0, 0));
        ctx.client.deposit(&ctx.stakers[1], &position_id(1, 0));
        ctx.env.ledger().set_timestamp(elapsed);

        let first = ctx.client.available_rewards(&ctx.stakers[0]);
        let second = ctx.client.available_rewards(&ctx.stakers[0]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sole_staker_accrues_formula(elapsed in 1u64..100_000) {
        let ctx = setup(1, 1);
        ctx.client.deposit(&ctx.stakers[0], &position_id(0, 0));
        ctx.env.ledger().set_timestamp(elapsed);

        let expected = (elapsed as i128) * TREASURY / SECONDS_PER_YEAR;
        prop_assert_eq!(available(&ctx, &ctx.stakers[0]), expected);
    }

    #[test]
    fn prop_claim_pays_available_exactly(elapsed in 1u64..100_000) {
        let ctx = setup(1, 1);
        let staker = ctx.stakers[0].clone();
        ctx.client.deposit(&staker, &position_id(0, 0));
        ctx.env.ledger().set_timestamp(elapsed);

        let before = available(&ctx, &staker);
        ctx.client.claim(&staker);

        let token = TokenClient::new(&ctx.env, &ctx.reward_token);
        prop_assert_eq!(token.balance(&staker), before);
        prop_assert_eq!(available(&ctx, &staker), 0);
    }
}
