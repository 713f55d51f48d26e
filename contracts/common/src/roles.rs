use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLE");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Ranked roles gating configuration entry points.
///
/// - `ScheduleManager` – May replace the reward schedule.
/// - `Admin`           – Everything a `ScheduleManager` can do, plus
///                       granting and revoking roles.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    ScheduleManager = 1,
    Admin = 2,
}

impl Role {
    pub fn rank(&self) -> u32 {
        match self {
            Role::ScheduleManager => 1,
            Role::Admin => 2,
        }
    }

    /// Returns true if this role is at least as high as `min_role`.
    pub fn has_at_least(&self, min_role: &Role) -> bool {
        self.rank() >= min_role.rank()
    }
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(holder: &Address) -> (Symbol, Address) {
    (ROLE_PREFIX, holder.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Assigns `role` to `holder`, replacing any role it held before.
/// Callers must verify authorization beforehand.
pub fn set_role(env: &Env, holder: &Address, role: Role) {
    let key = role_key(holder);
    env.storage().persistent().set(&key, &role);
    extend_ttl(env, &key);
}

pub fn get_role(env: &Env, holder: &Address) -> Option<Role> {
    let key = role_key(holder);
    let role: Option<Role> = env.storage().persistent().get(&key);
    if role.is_some() {
        extend_ttl(env, &key);
    }
    role
}

pub fn remove_role(env: &Env, holder: &Address) {
    env.storage().persistent().remove(&role_key(holder));
}

/// Returns `true` only if `caller` holds at least `min_role`.
///
/// Fails closed: an address with no stored role is never authorized.
pub fn require_role(env: &Env, caller: &Address, min_role: &Role) -> bool {
    match get_role(env, caller) {
        Some(role) => role.has_at_least(min_role),
        None => false,
    }
}

// ── Grant / Revoke ───────────────────────────────────────────────────────────

/// Grants `role` to `target` on behalf of `caller`.
///
/// Only an `Admin` may grant roles. The caller must already have been
/// authenticated via `require_auth()`.
pub fn grant_role(env: &Env, caller: &Address, target: &Address, role: Role) -> bool {
    if !require_role(env, caller, &Role::Admin) {
        return false;
    }
    set_role(env, target, role);
    true
}

/// Removes any role held by `target`. Only an `Admin` may revoke.
pub fn revoke_role(env: &Env, caller: &Address, target: &Address) -> bool {
    if !require_role(env, caller, &Role::Admin) {
        return false;
    }
    remove_role(env, target);
    true
}
