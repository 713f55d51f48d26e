//! Lazy reward accrual and settlement.
//!
//! Nothing accrues in the background. Every read or write of a staker's
//! rewards first computes what accrued since `last_accrual_time`, using the
//! payout token balances the ledger holds right now and the global total
//! staked right now.

use soroban_sdk::{token, Address, Env, Map};

use crate::ledger::{RewardDescriptor, StakerAccount};
use crate::rewards;
use crate::ContractError;

/// Seconds since `last`. A clock that moved backwards is an error.
pub fn elapsed_since(last: u64, now: u64) -> Result<u64, ContractError> {
    now.checked_sub(last).ok_or(ContractError::ClockRegression)
}

/// Balance of `payout_token` held by this contract. A token that cannot
/// report one fails as `PayoutFailure` instead of trapping.
pub fn treasury_balance(env: &Env, payout_token: &Address) -> Result<i128, ContractError> {
    match token::Client::new(env, payout_token).try_balance(&env.current_contract_address()) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(ContractError::PayoutFailure),
    }
}

/// Rewards accrued since the staker's last update, one entry per tracked
/// token, with `unclaimed` holding only the new amount.
///
/// A staker with nothing staked accrues nothing and no balance is queried.
pub fn compute_accrued(
    env: &Env,
    account: &StakerAccount,
    total_staked: u64,
    now: u64,
) -> Result<Map<Address, RewardDescriptor>, ContractError> {
    let mut accrued = Map::new(env);

    if account.amount_staked == 0 {
        for (token, recorded) in account.rewards.iter() {
            accrued.set(
                token,
                RewardDescriptor {
                    unclaimed: 0,
                    ..recorded
                },
            );
        }
        return Ok(accrued);
    }

    let elapsed = elapsed_since(account.last_accrual_time, now)?;

    for (token, recorded) in account.rewards.iter() {
        let amount = if elapsed == 0 {
            0
        } else {
            let pool = rewards::implied_annual_pool(
                treasury_balance(env, &token)?,
                recorded.rate_divisor,
            )
            .ok_or(ContractError::InvalidConfig)?;
            rewards::accrued_amount(env, pool, elapsed, account.amount_staked, total_staked)
                .ok_or(ContractError::ArithmeticOverflow)?
        };
        accrued.set(
            token,
            RewardDescriptor {
                unclaimed: amount,
                ..recorded
            },
        );
    }

    Ok(accrued)
}

/// Recorded unclaimed plus freshly accrued, per token. Reads only.
pub fn merge_accrued(
    env: &Env,
    account: &StakerAccount,
    total_staked: u64,
    now: u64,
) -> Result<Map<Address, RewardDescriptor>, ContractError> {
    let accrued = compute_accrued(env, account, total_staked, now)?;
    let mut merged = account.rewards.clone();

    for (token, fresh) in accrued.iter() {
        let current = match merged.get(token.clone()) {
            Some(recorded) => recorded,
            None => RewardDescriptor {
                unclaimed: 0,
                ..fresh.clone()
            },
        };
        let unclaimed = current
            .unclaimed
            .checked_add(fresh.unclaimed)
            .ok_or(ContractError::ArithmeticOverflow)?;
        merged.set(
            token,
            RewardDescriptor {
                unclaimed,
                ..current
            },
        );
    }

    Ok(merged)
}

/// Send `amount` of `payout_token` from the ledger to `to`.
pub fn pay_out(
    env: &Env,
    payout_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token::Client::new(env, payout_token).try_transfer(
        &env.current_contract_address(),
        to,
        &amount,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::PayoutFailure),
    }
}
