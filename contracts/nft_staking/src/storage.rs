//! Typed access to contract storage.
//!
//! Global configuration and counters live in instance storage; per-staker
//! records and the position ownership index live in persistent storage under
//! `(prefix, key)` tuples.

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::ledger::{RewardDescriptor, StakerAccount};
use crate::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const ADMIN: Symbol = symbol_short!("ADMIN");
const POSITION_CONTRACT: Symbol = symbol_short!("POS_CTR");
const SCHEDULE: Symbol = symbol_short!("SCHEDULE");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

const STAKER: Symbol = symbol_short!("STAKER");
const POSITION_OWNER: Symbol = symbol_short!("POS_OWN");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Configuration ────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn initialize(env: &Env, admin: &Address, position_contract: &Address) {
    env.storage().instance().set(&INITIALIZED, &true);
    env.storage().instance().set(&ADMIN, admin);
    env.storage()
        .instance()
        .set(&POSITION_CONTRACT, position_contract);
    env.storage().instance().set(&TOTAL_STAKED, &0u64);
    extend_instance(env);
}

pub fn admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)
}

pub fn position_contract(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&POSITION_CONTRACT)
        .ok_or(ContractError::NotInitialized)
}

pub fn schedule(env: &Env) -> Vec<RewardDescriptor> {
    env.storage()
        .instance()
        .get(&SCHEDULE)
        .unwrap_or(Vec::new(env))
}

pub fn set_schedule(env: &Env, schedule: &Vec<RewardDescriptor>) {
    env.storage().instance().set(&SCHEDULE, schedule);
    extend_instance(env);
}

// ── Global counters ──────────────────────────────────────────────────────────

pub fn total_staked(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

pub fn set_total_staked(env: &Env, total: u64) {
    env.storage().instance().set(&TOTAL_STAKED, &total);
    extend_instance(env);
}

// ── Staker records ───────────────────────────────────────────────────────────

pub fn load_staker(env: &Env, staker: &Address) -> Option<StakerAccount> {
    env.storage().persistent().get(&(STAKER, staker.clone()))
}

pub fn save_staker(env: &Env, staker: &Address, account: &StakerAccount) {
    let key = (STAKER, staker.clone());
    env.storage().persistent().set(&key, account);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Position ownership index ─────────────────────────────────────────────────

pub fn position_owner(env: &Env, position_id: u32) -> Option<Address> {
    env.storage().persistent().get(&(POSITION_OWNER, position_id))
}

pub fn set_position_owner(env: &Env, position_id: u32, owner: &Address) {
    let key = (POSITION_OWNER, position_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn clear_position_owner(env: &Env, position_id: u32) {
    env.storage()
        .persistent()
        .remove(&(POSITION_OWNER, position_id));
}
