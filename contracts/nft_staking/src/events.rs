#![allow(deprecated)] // events().publish migration tracked separately

use common::Role;
use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub position_contract: Address,
    pub schedule_len: u32,
    pub timestamp: u64,
}

/// Fired when a staker deposits a position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionDepositedEvent {
    pub staker: Address,
    pub position_id: u32,
    pub amount_staked: u64,
    pub total_staked: u64,
    pub timestamp: u64,
}

/// Fired when a staker withdraws a position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionWithdrawnEvent {
    pub staker: Address,
    pub position_id: u32,
    pub amount_staked: u64,
    pub total_staked: u64,
    pub timestamp: u64,
}

/// Fired once per payout token on a successful claim.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub payout_token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleSetEvent {
    pub caller: Address,
    pub schedule_len: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEvent {
    pub caller: Address,
    pub target: Address,
    pub role: Role,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEvent {
    pub caller: Address,
    pub target: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    position_contract: Address,
    schedule_len: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            position_contract,
            schedule_len,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    staker: Address,
    position_id: u32,
    amount_staked: u64,
    total_staked: u64,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        PositionDepositedEvent {
            staker,
            position_id,
            amount_staked,
            total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    staker: Address,
    position_id: u32,
    amount_staked: u64,
    total_staked: u64,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone()),
        PositionWithdrawnEvent {
            staker,
            position_id,
            amount_staked,
            total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, payout_token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("PAID"), staker.clone()),
        RewardPaidEvent {
            staker,
            payout_token,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_schedule_set(env: &Env, caller: Address, schedule_len: u32) {
    env.events().publish(
        (symbol_short!("SCHED"),),
        ScheduleSetEvent {
            caller,
            schedule_len,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_granted(env: &Env, caller: Address, target: Address, role: Role) {
    env.events().publish(
        (symbol_short!("ROLE_SET"), target.clone()),
        RoleGrantedEvent {
            caller,
            target,
            role,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_revoked(env: &Env, caller: Address, target: Address) {
    env.events().publish(
        (symbol_short!("ROLE_DEL"), target.clone()),
        RoleRevokedEvent {
            caller,
            target,
            timestamp: env.ledger().timestamp(),
        },
    );
}
