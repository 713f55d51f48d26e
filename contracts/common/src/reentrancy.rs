//! Contract-wide re-entrancy lock.
//!
//! A mutating entry point calls [`try_enter`] before reading any ledger state
//! and [`exit`] on every return path. While the flag is set, any other
//! mutating entry point (including one reached from a token callback) is
//! refused. The flag lives in instance storage, so a failed invocation that
//! the host rolls back also rolls back the flag.

use soroban_sdk::{symbol_short, Env, Symbol};

const LOCK: Symbol = symbol_short!("LOCK");

/// Takes the lock. Returns `false` if it is already held.
pub fn try_enter(env: &Env) -> bool {
    if is_locked(env) {
        return false;
    }
    env.storage().instance().set(&LOCK, &true);
    true
}

/// Releases the lock. Releasing a free lock is a no-op.
pub fn exit(env: &Env) {
    env.storage().instance().remove(&LOCK);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCK).unwrap_or(false)
}
