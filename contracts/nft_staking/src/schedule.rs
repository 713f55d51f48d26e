//! Reward schedule validation.

use soroban_sdk::{token, Env, Map, Vec};

use crate::ledger::RewardDescriptor;
use crate::ContractError;

/// Check a proposed schedule and return the copy that gets stored.
///
/// Every divisor must be positive, each payout token may appear once, and
/// each token must answer a balance query for this contract.
/// The stored copy carries zero `unclaimed`, whatever the caller passed.
pub fn validate(
    env: &Env,
    proposed: &Vec<RewardDescriptor>,
) -> Result<Vec<RewardDescriptor>, ContractError> {
    let mut seen = Map::new(env);
    let mut normalized = Vec::new(env);

    for entry in proposed.iter() {
        if entry.rate_divisor <= 0 {
            return Err(ContractError::InvalidConfig);
        }
        if seen.contains_key(entry.payout_token.clone()) {
            return Err(ContractError::InvalidConfig);
        }
        if !matches!(
            token::Client::new(env, &entry.payout_token)
                .try_balance(&env.current_contract_address()),
            Ok(Ok(_))
        ) {
            return Err(ContractError::InvalidConfig);
        }
        seen.set(entry.payout_token.clone(), true);
        normalized.push_back(RewardDescriptor {
            unclaimed: 0,
            ..entry
        });
    }

    Ok(normalized)
}
