//! Integer accrual math.
//!
//! Every division truncates toward zero; all operands are non-negative so
//! this is floor division.

use soroban_sdk::{Env, I256};

/// 365 days in seconds.
pub const SECONDS_PER_YEAR: i128 = 365 * 24 * 60 * 60;

/// Maximum yearly payout a single reward token could fund.
///
/// ```text
/// implied_annual_pool = treasury_balance / rate_divisor
/// ```
///
/// Returns `None` for a non-positive divisor. A negative balance is treated
/// as an empty treasury.
pub fn implied_annual_pool(treasury_balance: i128, rate_divisor: i128) -> Option<i128> {
    if rate_divisor <= 0 {
        return None;
    }
    Some(treasury_balance.max(0) / rate_divisor)
}

/// Reward owed to one staker for `elapsed` seconds at its current share.
///
/// ```text
/// weighted = elapsed × amount_staked
/// accrued  = weighted × implied_annual_pool / total_staked / SECONDS_PER_YEAR
/// ```
///
/// The share is taken against `total_staked` as it is *now*, not averaged
/// over the elapsed window. With nothing staked globally or by this staker
/// there is no share to pay, so the result is zero.
///
/// The product is formed in 256 bits: `u64 × u64 × i128` stays below
/// `2^255`, so only a final amount that does not fit `i128` returns `None`.
pub fn accrued_amount(
    env: &Env,
    implied_annual_pool: i128,
    elapsed: u64,
    amount_staked: u64,
    total_staked: u64,
) -> Option<i128> {
    if total_staked == 0 || amount_staked == 0 || elapsed == 0 {
        return Some(0);
    }

    let scaled = I256::from_i128(env, elapsed as i128)
        .mul(&I256::from_i128(env, amount_staked as i128))
        .mul(&I256::from_i128(env, implied_annual_pool.max(0)));

    scaled
        .div(&I256::from_i128(env, total_staked as i128))
        .div(&I256::from_i128(env, SECONDS_PER_YEAR))
        .to_i128()
}

// ── Unit tests ──────────────────────────────────────────────────────────────
