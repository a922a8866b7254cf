//! Jackpot bookkeeping and the single payout path.
//!
//! The balance only moves in [`credit`] and [`distribute`]; both the
//! randomness pipeline and the admin entrypoint pay out through `distribute`.
//! Every unit credited ends up in exactly one place: the pool, a winner's
//! pending winnings or the fee router's pending winnings.

use soroban_sdk::{xdr::ToXdr, Address, Env};

use crate::config::{extend_instance, extend_persistent, LotteryConfig, SCALE, TOKEN_UNIT};
use crate::errors::LotteryError;
use crate::events::{JackpotWon, RewardsAllocated};
use crate::types::{DataKey, JackpotState, Payout, SplitResult};

/// XDR discriminant of `SC_ADDRESS_TYPE_CONTRACT` inside an encoded `ScVal::Address`.
const SC_ADDRESS_TYPE_CONTRACT: u8 = 1;
const ADDRESS_TYPE_OFFSET: u32 = 7;

pub fn state(env: &Env) -> JackpotState {
    env.storage()
        .instance()
        .get(&DataKey::Jackpot)
        .unwrap_or(JackpotState {
            balance: 0,
            total_winners: 0,
            total_payouts: 0,
            total_routed: 0,
            forfeited_wins: 0,
            round_entries: 0,
        })
}

fn set_state(env: &Env, state: &JackpotState) {
    env.storage().instance().set(&DataKey::Jackpot, state);
    extend_instance(env);
}

pub fn credit(env: &Env, amount: i128) -> Result<JackpotState, LotteryError> {
    if amount <= 0 {
        return Err(LotteryError::InvalidAmount);
    }
    let mut jackpot = state(env);
    jackpot.balance = jackpot
        .balance
        .checked_add(amount)
        .ok_or(LotteryError::Overflow)?;
    set_state(env, &jackpot);
    Ok(jackpot)
}

pub fn record_entry(env: &Env) {
    let mut jackpot = state(env);
    jackpot.round_entries = jackpot.round_entries.saturating_add(1);
    set_state(env, &jackpot);
}

pub fn record_forfeit(env: &Env) {
    let mut jackpot = state(env);
    jackpot.forfeited_wins = jackpot.forfeited_wins.saturating_add(1);
    set_state(env, &jackpot);
}

/// Whether `address` is a contract rather than a plain account.
pub fn is_contract(env: &Env, address: &Address) -> bool {
    address.clone().to_xdr(env).get(ADDRESS_TYPE_OFFSET) == Some(SC_ADDRESS_TYPE_CONTRACT)
}

/// Part of the pool a win is paid from right now.
pub fn distributable(config: &LotteryConfig, jackpot: &JackpotState) -> i128 {
    let balance = jackpot.balance.max(0);
    balance
        .checked_mul(config.distribution_percentage)
        .map(|v| v / SCALE)
        .unwrap_or(balance / SCALE * config.distribution_percentage)
}

/// Split for the current distributable pool and participant count.
pub fn current_split(config: &LotteryConfig, jackpot: &JackpotState) -> SplitResult {
    let whole_tokens = (distributable(config, jackpot) / TOKEN_UNIT) as u128;
    config.split.split_for(whole_tokens, jackpot.round_entries)
}

fn portion(amount: i128, share: i128) -> Result<i128, LotteryError> {
    amount
        .checked_mul(share)
        .map(|v| v / SCALE)
        .ok_or(LotteryError::Overflow)
}

fn add_pending(env: &Env, user: &Address, amount: i128) -> Result<(), LotteryError> {
    let key = DataKey::PendingWinnings(user.clone());
    let pending: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    let pending = pending.checked_add(amount).ok_or(LotteryError::Overflow)?;
    env.storage().persistent().set(&key, &pending);
    extend_persistent(env, &key);
    Ok(())
}

/// Pays out the distributable part of the pool and debits it in the same write.
///
/// The winner is credited the main share; the secondary and participation
/// portions are credited to the fee router. Whatever is not distributable
/// carries over to the next round. Rejects contract recipients and empty
/// pools without touching state.
pub fn distribute(
    env: &Env,
    config: &LotteryConfig,
    winner: &Address,
) -> Result<Payout, LotteryError> {
    if is_contract(env, winner) {
        return Err(LotteryError::ContractRecipientRejected);
    }

    let mut jackpot = state(env);
    if jackpot.balance <= 0 {
        return Err(LotteryError::EmptyJackpot);
    }

    let pool = distributable(config, &jackpot);
    let split = current_split(config, &jackpot);
    let amount = portion(pool, split.main_share)?;
    let secondary_amount = portion(pool, split.secondary_share)?;
    // remainder, so the three portions add up to the pool exactly
    let participation_amount = pool - amount - secondary_amount;
    let routed = secondary_amount + participation_amount;

    jackpot.balance -= pool;
    jackpot.total_winners = jackpot
        .total_winners
        .checked_add(1)
        .ok_or(LotteryError::Overflow)?;
    jackpot.total_payouts = jackpot
        .total_payouts
        .checked_add(amount)
        .ok_or(LotteryError::Overflow)?;
    jackpot.total_routed = jackpot
        .total_routed
        .checked_add(routed)
        .ok_or(LotteryError::Overflow)?;
    jackpot.round_entries = 0;

    add_pending(env, winner, amount)?;
    if routed > 0 {
        add_pending(env, &config.fee_router, routed)?;
    }
    set_state(env, &jackpot);

    JackpotWon {
        owner: winner.clone(),
        amount,
    }
    .publish(env);
    RewardsAllocated {
        recipient: config.fee_router.clone(),
        secondary: secondary_amount,
        participation: participation_amount,
    }
    .publish(env);

    Ok(Payout {
        winner: winner.clone(),
        distributable: pool,
        amount,
        secondary_amount,
        participation_amount,
        split,
    })
}

pub fn pending_winnings(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingWinnings(user.clone()))
        .unwrap_or(0)
}

/// Releases the user's claimable winnings; returns 0 when there are none.
pub fn claim(env: &Env, user: &Address) -> i128 {
    let key = DataKey::PendingWinnings(user.clone());
    let pending: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if pending == 0 {
        return 0;
    }
    env.storage().persistent().remove(&key);
    pending
}
