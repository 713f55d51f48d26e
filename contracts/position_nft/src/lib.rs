#![no_std]

//! Minimal non-fungible position registry.
//!
//! Each position id has exactly one owner. Only the minter may create
//! positions; only the current owner may transfer one. This is the custody
//! contract the staking ledger takes positions into and returns them from.

use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, Address, Env, Symbol};

const MINTER: Symbol = symbol_short!("MINTER");
const OWNER: Symbol = symbol_short!("OWNER");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PositionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    UnknownPosition = 3,
    AlreadyMinted = 4,
    NotOwner = 5,
}

#[contract]
pub struct PositionNft;

#[contractimpl]
impl PositionNft {
    pub fn initialize(env: Env, minter: Address) -> Result<(), PositionError> {
        if env.storage().instance().has(&MINTER) {
            return Err(PositionError::AlreadyInitialized);
        }
        env.storage().instance().set(&MINTER, &minter);
        Ok(())
    }

    /// Create position `position_id` owned by `to`.
    pub fn mint(env: Env, to: Address, position_id: u32) -> Result<(), PositionError> {
        let minter: Address = env
            .storage()
            .instance()
            .get(&MINTER)
            .ok_or(PositionError::NotInitialized)?;
        minter.require_auth();

        let key = (OWNER, position_id);
        if env.storage().persistent().has(&key) {
            return Err(PositionError::AlreadyMinted);
        }
        Self::store_owner(&env, position_id, &to);
        env.events().publish((symbol_short!("MINT"), to), position_id);
        Ok(())
    }

    pub fn owner_of(env: Env, position_id: u32) -> Result<Address, PositionError> {
        env.storage()
            .persistent()
            .get(&(OWNER, position_id))
            .ok_or(PositionError::UnknownPosition)
    }

    /// Move `position_id` from `from` to `to`. `from` must authorize and
    /// must be the current owner.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        position_id: u32,
    ) -> Result<(), PositionError> {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), position_id)?;
        if owner != from {
            return Err(PositionError::NotOwner);
        }
        Self::store_owner(&env, position_id, &to);
        env.events()
            .publish((symbol_short!("XFER"), from, to), position_id);
        Ok(())
    }

    fn store_owner(env: &Env, position_id: u32, owner: &Address) {
        let key = (OWNER, position_id);
        env.storage().persistent().set(&key, owner);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
