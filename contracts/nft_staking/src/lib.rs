#![no_std]

pub mod accrual;
pub mod custody;
pub mod events;
pub mod ledger;
pub mod rewards;
pub mod schedule;
pub mod storage;

use common::{reentrancy, roles, Role};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

pub use ledger::{RewardDescriptor, StakePosition, StakerAccount};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotOwner = 4,
    NoStake = 5,
    NoRewards = 6,
    InvalidConfig = 7,
    ClockRegression = 8,
    PayoutFailure = 9,
    Reentrant = 10,
    ArithmeticOverflow = 11,
    CustodyFailure = 12,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Summary of a staker returned by `get_staker_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub amount_staked: u64,
    pub last_accrual_time: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct NftStakingContract;

#[contractimpl]
impl NftStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `admin`             – receives the `Admin` role.
    /// * `position_contract` – custody contract for the staked positions.
    /// * `schedule`          – initial reward schedule, validated like
    ///                         `set_schedule`.
    pub fn initialize(
        env: Env,
        admin: Address,
        position_contract: Address,
        schedule: Vec<RewardDescriptor>,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        let schedule = schedule::validate(&env, &schedule)?;

        storage::initialize(&env, &admin, &position_contract);
        storage::set_schedule(&env, &schedule);
        roles::set_role(&env, &admin, Role::Admin);

        events::publish_initialized(&env, admin, position_contract, schedule.len());

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit position `position_id` owned by `staker`.
    ///
    /// Rewards accrued on the staker's existing positions are recorded
    /// first, so the new position never earns for time before it arrived.
    pub fn deposit(env: Env, staker: Address, position_id: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        Self::enter(&env)?;
        let result = Self::deposit_locked(&env, &staker, position_id);
        reentrancy::exit(&env);
        result
    }

    /// Withdraw position `position_id` back to `staker`.
    ///
    /// The staker's rewards are brought fully up to date and recorded before
    /// the position leaves, so nothing accrued on it is lost.
    pub fn withdraw(env: Env, staker: Address, position_id: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        Self::enter(&env)?;
        let result = Self::withdraw_locked(&env, &staker, position_id);
        reentrancy::exit(&env);
        result
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `staker` has accrued, in every token.
    ///
    /// Returns one descriptor per token paid, carrying the amount sent.
    /// Fails with `NoRewards` when every token's available balance is zero.
    pub fn claim(env: Env, staker: Address) -> Result<Vec<RewardDescriptor>, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        Self::enter(&env)?;
        let result = Self::claim_locked(&env, &staker);
        reentrancy::exit(&env);
        result
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Recorded unclaimed plus accrued-since-last-update, per token, sorted
    /// by payout token. Empty for an address that never staked.
    pub fn available_rewards(
        env: Env,
        staker: Address,
    ) -> Result<Vec<RewardDescriptor>, ContractError> {
        let Some(account) = storage::load_staker(&env, &staker) else {
            return Ok(Vec::new(&env));
        };
        let merged = accrual::merge_accrued(
            &env,
            &account,
            storage::total_staked(&env),
            env.ledger().timestamp(),
        )?;
        Ok(merged.values())
    }

    /// Active positions held for `staker`, in slot order.
    pub fn active_positions(env: Env, staker: Address) -> Vec<StakePosition> {
        match storage::load_staker(&env, &staker) {
            Some(account) => account.active_positions(&env),
            None => Vec::new(&env),
        }
    }

    pub fn get_amount_staked(env: Env, staker: Address) -> u64 {
        storage::load_staker(&env, &staker)
            .map(|account| account.amount_staked)
            .unwrap_or(0)
    }

    pub fn get_staker_info(env: Env, staker: Address) -> StakerInfo {
        match storage::load_staker(&env, &staker) {
            Some(account) => StakerInfo {
                amount_staked: account.amount_staked,
                last_accrual_time: account.last_accrual_time,
            },
            None => StakerInfo {
                amount_staked: 0,
                last_accrual_time: 0,
            },
        }
    }

    /// Return the number of positions currently staked across all stakers.
    pub fn get_total_staked(env: Env) -> u64 {
        storage::total_staked(&env)
    }

    pub fn get_schedule(env: Env) -> Vec<RewardDescriptor> {
        storage::schedule(&env)
    }

    /// The staker currently holding `position_id` in the ledger, if any.
    pub fn position_owner(env: Env, position_id: u32) -> Option<Address> {
        storage::position_owner(&env, position_id)
    }

    pub fn get_position_contract(env: Env) -> Result<Address, ContractError> {
        storage::position_contract(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::admin(&env)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Replace the reward schedule wholesale.
    ///
    /// Staker records are not touched here; each staker picks up the new
    /// divisors on its next deposit. Requires at least `ScheduleManager`.
    pub fn set_schedule(
        env: Env,
        caller: Address,
        schedule: Vec<RewardDescriptor>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_role(&env, &caller, &Role::ScheduleManager)?;

        Self::enter(&env)?;
        let result = schedule::validate(&env, &schedule).map(|validated| {
            storage::set_schedule(&env, &validated);
            events::publish_schedule_set(&env, caller, validated.len());
        });
        reentrancy::exit(&env);
        result
    }

    // ── Role management ──────────────────────────────────────────────────────

    /// Grant `role` to `target`. Only an `Admin` may call this.
    pub fn grant_role(
        env: Env,
        caller: Address,
        target: Address,
        role: Role,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !roles::grant_role(&env, &caller, &target, role.clone()) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_role_granted(&env, caller, target, role);
        Ok(())
    }

    /// Remove any role held by `target`. Only an `Admin` may call this.
    pub fn revoke_role(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !roles::revoke_role(&env, &caller, &target) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_role_revoked(&env, caller, target);
        Ok(())
    }

    pub fn get_role(env: Env, holder: Address) -> Option<Role> {
        roles::get_role(&env, &holder)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_role(env: &Env, caller: &Address, min_role: &Role) -> Result<(), ContractError> {
        if !roles::require_role(env, caller, min_role) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn enter(env: &Env) -> Result<(), ContractError> {
        if !reentrancy::try_enter(env) {
            return Err(ContractError::Reentrant);
        }
        Ok(())
    }

    fn deposit_locked(env: &Env, staker: &Address, position_id: u32) -> Result<(), ContractError> {
        let custody_contract = storage::position_contract(env)?;

        // A position already held by the ledger belongs to no caller.
        if storage::position_owner(env, position_id).is_some() {
            return Err(ContractError::NotOwner);
        }
        custody::verify_owner(env, &custody_contract, position_id, staker)?;

        let now = env.ledger().timestamp();
        let total_staked = storage::total_staked(env);
        let mut account =
            storage::load_staker(env, staker).unwrap_or_else(|| StakerAccount::new(env));

        // 1. Record what the existing positions earned up to now.
        if account.amount_staked > 0 {
            account.rewards = accrual::merge_accrued(env, &account, total_staked, now)?;
        }

        // 2. Pull the position into the ledger.
        custody::take(env, &custody_contract, staker, position_id)?;

        // 3. Record the position and mirror the current schedule.
        account.occupy_slot(StakePosition {
            owner: staker.clone(),
            position_id,
            active: true,
        });
        account.sync_schedule(&storage::schedule(env));

        // 4. Counters, ownership index, timestamp.
        account.amount_staked = account
            .amount_staked
            .checked_add(1)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let new_total = total_staked
            .checked_add(1)
            .ok_or(ContractError::ArithmeticOverflow)?;
        account.last_accrual_time = now;

        storage::save_staker(env, staker, &account);
        storage::set_total_staked(env, new_total);
        storage::set_position_owner(env, position_id, staker);

        events::publish_deposited(
            env,
            staker.clone(),
            position_id,
            account.amount_staked,
            new_total,
        );

        Ok(())
    }

    fn withdraw_locked(env: &Env, staker: &Address, position_id: u32) -> Result<(), ContractError> {
        let mut account = storage::load_staker(env, staker).ok_or(ContractError::NoStake)?;
        if account.amount_staked == 0 {
            return Err(ContractError::NoStake);
        }
        if storage::position_owner(env, position_id).as_ref() != Some(staker) {
            return Err(ContractError::NotOwner);
        }

        let custody_contract = storage::position_contract(env)?;
        let now = env.ledger().timestamp();
        let total_staked = storage::total_staked(env);

        // 1. Bring rewards fully up to date at the current share.
        account.rewards = accrual::merge_accrued(env, &account, total_staked, now)?;

        // 2. Free the slot and update counters.
        if !account.release_slot(position_id) {
            return Err(ContractError::NotOwner);
        }
        account.amount_staked = account
            .amount_staked
            .checked_sub(1)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let new_total = total_staked
            .checked_sub(1)
            .ok_or(ContractError::ArithmeticOverflow)?;
        account.last_accrual_time = now;

        storage::save_staker(env, staker, &account);
        storage::set_total_staked(env, new_total);
        storage::clear_position_owner(env, position_id);

        // 3. Hand the position back once the books are settled.
        custody::release(env, &custody_contract, staker, position_id)?;

        events::publish_withdrawn(
            env,
            staker.clone(),
            position_id,
            account.amount_staked,
            new_total,
        );

        Ok(())
    }

    fn claim_locked(env: &Env, staker: &Address) -> Result<Vec<RewardDescriptor>, ContractError> {
        let mut account = storage::load_staker(env, staker).ok_or(ContractError::NoStake)?;
        if account.amount_staked == 0 && !account.has_unclaimed() {
            return Err(ContractError::NoStake);
        }

        let now = env.ledger().timestamp();
        let merged = accrual::merge_accrued(env, &account, storage::total_staked(env), now)?;

        if !merged.values().iter().any(|r| r.unclaimed > 0) {
            return Err(ContractError::NoRewards);
        }

        // A failed transfer rolls back the whole claim.
        account.rewards = merged.clone();
        let mut paid = Vec::new(env);
        for (token, entry) in merged.iter() {
            if entry.unclaimed <= 0 {
                continue;
            }

            accrual::pay_out(env, &token, staker, entry.unclaimed)?;

            account.rewards.set(
                token.clone(),
                RewardDescriptor {
                    unclaimed: 0,
                    ..entry.clone()
                },
            );
            events::publish_reward_paid(env, staker.clone(), token, entry.unclaimed);
            paid.push_back(entry);
        }

        account.last_accrual_time = now;
        storage::save_staker(env, staker, &account);

        Ok(paid)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
