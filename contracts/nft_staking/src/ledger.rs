//! Staker records and position slots.

use soroban_sdk::{contracttype, Address, Env, Map, Vec};

/// One reward token as configured in the schedule or as carried by a staker.
///
/// In the schedule `unclaimed` is always zero. In a staker's record it is the
/// amount accrued and recorded but not yet paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardDescriptor {
    pub payout_token: Address,
    /// `treasury_balance / rate_divisor` is the token's implied annual pool.
    pub rate_divisor: i128,
    pub unclaimed: i128,
}

/// A deposited position. Withdrawn positions stay in their slot with
/// `active == false` until a later deposit reuses the slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub owner: Address,
    pub position_id: u32,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerAccount {
    /// Number of slots in `positions` with `active == true`.
    pub amount_staked: u64,
    pub positions: Vec<StakePosition>,
    pub last_accrual_time: u64,
    /// Keyed by payout token. Entries are added, never removed.
    pub rewards: Map<Address, RewardDescriptor>,
}

impl StakerAccount {
    pub fn new(env: &Env) -> Self {
        Self {
            amount_staked: 0,
            positions: Vec::new(env),
            last_accrual_time: 0,
            rewards: Map::new(env),
        }
    }

    /// Place `position` into the first inactive slot, or append a new one.
    /// Returns the slot index.
    pub fn occupy_slot(&mut self, position: StakePosition) -> u32 {
        for index in 0..self.positions.len() {
            if let Some(slot) = self.positions.get(index) {
                if !slot.active {
                    self.positions.set(index, position);
                    return index;
                }
            }
        }
        self.positions.push_back(position);
        self.positions.len() - 1
    }

    /// Deactivate the first active slot holding `position_id`.
    ///
    /// Returns `false` when no active slot matches.
    pub fn release_slot(&mut self, position_id: u32) -> bool {
        for index in 0..self.positions.len() {
            if let Some(mut slot) = self.positions.get(index) {
                if slot.active && slot.position_id == position_id {
                    slot.active = false;
                    self.positions.set(index, slot);
                    return true;
                }
            }
        }
        false
    }

    /// Active positions in slot order.
    pub fn active_positions(&self, env: &Env) -> Vec<StakePosition> {
        let mut active = Vec::new(env);
        for slot in self.positions.iter() {
            if slot.active {
                active.push_back(slot);
            }
        }
        active
    }

    /// Mirror every schedule entry into this record.
    ///
    /// Missing tokens are added with zero unclaimed. Existing entries take the
    /// schedule's current divisor and keep their unclaimed balance. Tokens
    /// absent from the schedule are left alone.
    pub fn sync_schedule(&mut self, schedule: &Vec<RewardDescriptor>) {
        for entry in schedule.iter() {
            let synced = match self.rewards.get(entry.payout_token.clone()) {
                Some(existing) => RewardDescriptor {
                    rate_divisor: entry.rate_divisor,
                    ..existing
                },
                None => RewardDescriptor {
                    unclaimed: 0,
                    ..entry.clone()
                },
            };
            self.rewards.set(entry.payout_token, synced);
        }
    }

    pub fn has_unclaimed(&self) -> bool {
        self.rewards.values().iter().any(|r| r.unclaimed > 0)
    }
}
