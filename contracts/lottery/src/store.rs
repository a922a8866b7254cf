//! Request store: monotonic entry ids and single-use resolution.

use soroban_sdk::{Address, Env};

use crate::config::{extend_instance, extend_persistent};
use crate::errors::LotteryError;
use crate::types::{BoostSnapshot, DataKey, EntryStatus, PendingEntry};

pub fn next_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextEntryId)
        .unwrap_or(0)
}

/// Allocates the next id and records the entry as awaiting randomness.
pub fn create(
    env: &Env,
    owner: Address,
    swap_amount: i128,
    boost: BoostSnapshot,
    probability: i128,
) -> Result<PendingEntry, LotteryError> {
    let id = next_id(env);
    let following = id.checked_add(1).ok_or(LotteryError::Overflow)?;

    let entry = PendingEntry {
        id,
        owner,
        swap_amount,
        boost,
        probability,
        status: EntryStatus::AwaitingRandomness,
        created_ledger: env.ledger().sequence(),
    };

    let key = DataKey::Entry(id);
    env.storage().persistent().set(&key, &entry);
    extend_persistent(env, &key);
    env.storage().instance().set(&DataKey::NextEntryId, &following);
    extend_instance(env);

    Ok(entry)
}

pub fn get(env: &Env, id: u64) -> Option<PendingEntry> {
    env.storage().persistent().get(&DataKey::Entry(id))
}

/// Marks the entry resolved and hands back its snapshot, exactly once.
///
/// Unknown and already-resolved ids return `None`; duplicate deliveries land
/// here and must not disturb state.
pub fn resolve(env: &Env, id: u64) -> Option<PendingEntry> {
    let key = DataKey::Entry(id);
    let mut entry: PendingEntry = env.storage().persistent().get(&key)?;
    if entry.status != EntryStatus::AwaitingRandomness {
        return None;
    }

    entry.status = EntryStatus::Resolved;
    env.storage().persistent().set(&key, &entry);
    extend_persistent(env, &key);
    Some(entry)
}
