//! Core contract implementation for the swap lottery.

use soroban_sdk::{
    contract, contractimpl,
    xdr::{FromXdr, ToXdr},
    Address, Bytes, Env,
};

use crate::channel;
use crate::config::{self, LotteryConfig};
use crate::engine;
use crate::errors::LotteryError;
use crate::events::{
    JackpotCredited, MessagingFundsDeposited, RandomnessRequested, RequestExpired, WinningsClaimed,
};
use crate::jackpot;
use crate::probability::entry_probability;
use crate::store;
use crate::types::{
    BoostSnapshot, DataKey, EntryStatus, JackpotState, PendingEntry, RandomnessRequest,
    RandomnessResponse, SplitResult,
};

#[contract]
pub struct LotteryContract;

#[contractimpl]
impl LotteryContract {
    /// Initializes the contract with its admin and configuration (one-time only)
    pub fn initialize(env: Env, admin: Address, config: LotteryConfig) -> Result<(), LotteryError> {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Admin) {
            return Err(LotteryError::AlreadyInitialized);
        }
        config.validate()?;

        env.storage().instance().set(&DataKey::Admin, &admin);
        config::store(&env, &config);

        Ok(())
    }

    /// Replaces the configuration (admin only).
    ///
    /// Entries already submitted keep the probability computed at submission.
    pub fn update_config(env: Env, admin: Address, config: LotteryConfig) -> Result<(), LotteryError> {
        config::require_admin(&env, &admin)?;
        config.validate()?;
        config::store(&env, &config);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn get_config(env: Env) -> Result<LotteryConfig, LotteryError> {
        config::load(&env)
    }

    /// Tops up the fee balance that pays for outbound requests
    pub fn deposit_messaging_funds(env: Env, from: Address, amount: i128) -> Result<i128, LotteryError> {
        from.require_auth();
        let config = config::load(&env)?;
        let total = channel::deposit(&env, &config, &from, amount)?;

        MessagingFundsDeposited { from, amount }.publish(&env);
        Ok(total)
    }

    pub fn get_messaging_funds(env: Env) -> i128 {
        channel::funds(&env)
    }

    /// Credits the jackpot (fee router only)
    pub fn contribute(env: Env, source: Address, amount: i128) -> Result<JackpotState, LotteryError> {
        let config = config::load(&env)?;
        if source != config.fee_router {
            return Err(LotteryError::UnauthorizedCaller);
        }
        source.require_auth();

        let state = jackpot::credit(&env, amount)?;
        JackpotCredited { source, amount }.publish(&env);
        Ok(state)
    }

    /// Records a qualifying swap and sends its randomness request to the relay.
    ///
    /// The boost snapshot and the resulting probability are fixed now and used
    /// unchanged at resolution.
    /// Returns the entry id.
    pub fn submit_entry(
        env: Env,
        source: Address,
        owner: Address,
        swap_amount: i128,
        boost: BoostSnapshot,
    ) -> Result<u64, LotteryError> {
        let config = config::load(&env)?;
        if source != config.swap_source {
            return Err(LotteryError::UnauthorizedCaller);
        }
        source.require_auth();

        if swap_amount < config.curve.min_amount {
            return Err(LotteryError::BelowMinimumEntry);
        }

        let probability = entry_probability(
            &config.curve,
            swap_amount,
            &boost,
            config.max_boost,
            config.global_max_probability,
        );

        let request_id = store::next_id(&env);
        let payload = RandomnessRequest { request_id }.to_xdr(&env);
        let message_id = channel::send_to_peer(&env, &config, &payload)?;

        let entry = store::create(&env, owner, swap_amount, boost, probability)?;
        jackpot::record_entry(&env);

        RandomnessRequested {
            request_id: entry.id,
            owner: entry.owner,
            message_id,
        }
        .publish(&env);

        Ok(entry.id)
    }

    /// Inbound channel message carrying the relay's random words.
    ///
    /// Duplicate and late deliveries succeed without effect.
    pub fn receive_message(
        env: Env,
        endpoint: Address,
        src_chain: u32,
        sender: Address,
        payload: Bytes,
    ) -> Result<(), LotteryError> {
        let config = config::load(&env)?;
        channel::authenticate_inbound(&config, &endpoint, src_chain, &sender)?;

        let response = RandomnessResponse::from_xdr(&env, &payload)
            .map_err(|_| LotteryError::MalformedPayload)?;
        let word = response
            .random_words
            .get(0)
            .ok_or(LotteryError::MalformedPayload)?;

        engine::on_randomness_received(&env, &config, response.request_id, &word)?;
        Ok(())
    }

    /// Resolves an entry whose randomness never arrived (admin only)
    pub fn expire_entry(env: Env, admin: Address, request_id: u64) -> Result<(), LotteryError> {
        config::require_admin(&env, &admin)?;
        let config = config::load(&env)?;

        let entry = store::get(&env, request_id)
            .filter(|entry| entry.status == EntryStatus::AwaitingRandomness)
            .ok_or(LotteryError::UnknownOrResolvedRequest)?;

        let deadline = entry
            .created_ledger
            .saturating_add(config.entry_timeout_ledgers);
        if env.ledger().sequence() < deadline {
            return Err(LotteryError::RequestNotExpired);
        }

        store::resolve(&env, request_id).ok_or(LotteryError::UnknownOrResolvedRequest)?;
        RequestExpired { request_id }.publish(&env);
        Ok(())
    }

    /// Pays the current jackpot to `winner` outside the randomness pipeline (admin only)
    pub fn distribute(env: Env, admin: Address, winner: Address) -> Result<i128, LotteryError> {
        config::require_admin(&env, &admin)?;
        let config = config::load(&env)?;
        let payout = jackpot::distribute(&env, &config, &winner)?;
        Ok(payout.amount)
    }

    /// Releases the caller's winnings; returns the amount claimed
    pub fn claim_winnings(env: Env, user: Address) -> i128 {
        user.require_auth();

        let amount = jackpot::claim(&env, &user);
        if amount > 0 {
            WinningsClaimed {
                user: user.clone(),
                amount,
            }
            .publish(&env);
        }
        amount
    }

    pub fn get_pending_winnings(env: Env, user: Address) -> i128 {
        jackpot::pending_winnings(&env, &user)
    }

    pub fn get_entry(env: Env, request_id: u64) -> Option<PendingEntry> {
        store::get(&env, request_id)
    }

    pub fn next_entry_id(env: Env) -> u64 {
        store::next_id(&env)
    }

    pub fn get_jackpot(env: Env) -> JackpotState {
        jackpot::state(&env)
    }

    /// Combined win probability a swap would be drawn against, scaled by 10^7
    pub fn quote_probability(
        env: Env,
        swap_amount: i128,
        boost: BoostSnapshot,
    ) -> Result<i128, LotteryError> {
        let config = config::load(&env)?;
        Ok(entry_probability(
            &config.curve,
            swap_amount,
            &boost,
            config.max_boost,
            config.global_max_probability,
        ))
    }

    /// Split a win would receive right now
    pub fn preview_split(env: Env) -> Result<SplitResult, LotteryError> {
        let config = config::load(&env)?;
        Ok(jackpot::current_split(&config, &jackpot::state(&env)))
    }
}
