//! Custody of staked positions.
//!
//! The position contract is an external collaborator; only the two calls
//! below are used. Failures it reports are mapped onto `ContractError`.

use soroban_sdk::{contractclient, Address, Env};

use crate::ContractError;

#[contractclient(name = "PositionClient")]
pub trait PositionCustody {
    fn owner_of(env: Env, position_id: u32) -> Address;
    fn transfer(env: Env, from: Address, to: Address, position_id: u32);
}

/// Succeeds only if the custody contract reports `expected` as the owner.
pub fn verify_owner(
    env: &Env,
    custody: &Address,
    position_id: u32,
    expected: &Address,
) -> Result<(), ContractError> {
    match PositionClient::new(env, custody).try_owner_of(&position_id) {
        Ok(Ok(owner)) if owner == *expected => Ok(()),
        _ => Err(ContractError::NotOwner),
    }
}

/// Pull `position_id` from `from` into the ledger.
pub fn take(
    env: &Env,
    custody: &Address,
    from: &Address,
    position_id: u32,
) -> Result<(), ContractError> {
    move_position(env, custody, from, &env.current_contract_address(), position_id)
}

/// Return `position_id` from the ledger to `to`.
pub fn release(
    env: &Env,
    custody: &Address,
    to: &Address,
    position_id: u32,
) -> Result<(), ContractError> {
    move_position(env, custody, &env.current_contract_address(), to, position_id)
}

fn move_position(
    env: &Env,
    custody: &Address,
    from: &Address,
    to: &Address,
    position_id: u32,
) -> Result<(), ContractError> {
    match PositionClient::new(env, custody).try_transfer(from, to, &position_id) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::CustodyFailure),
    }
}
