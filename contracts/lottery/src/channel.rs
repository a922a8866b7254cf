//! Cross-chain channel: the endpoint interface, fee funding for outbound
//! messages and peer checks for inbound ones.
//!
//! Delivery is asynchronous, at-least-once and unordered across requests.
//! Nothing here retries; a lost message leaves its entry awaiting randomness.

use soroban_sdk::{contractclient, token, Address, Bytes, Env};

use crate::config::{extend_instance, LotteryConfig};
use crate::errors::LotteryError;
use crate::types::DataKey;

/// Messaging endpoint deployed on the local chain.
#[contractclient(name = "ChannelClient")]
pub trait CrossChainChannel {
    /// Fee, in the endpoint's native asset, for sending `payload` to `dst_chain`.
    fn quote(env: Env, dst_chain: u32, payload: Bytes) -> i128;

    /// Queues `payload` for `receiver` on `dst_chain`; returns a message handle.
    fn send(env: Env, sender: Address, dst_chain: u32, receiver: Address, payload: Bytes) -> u64;
}

pub fn funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MessagingFunds)
        .unwrap_or(0)
}

fn set_funds(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::MessagingFunds, &amount);
    extend_instance(env);
}

/// Moves `amount` of the fee asset from `from` into the contract.
pub fn deposit(
    env: &Env,
    config: &LotteryConfig,
    from: &Address,
    amount: i128,
) -> Result<i128, LotteryError> {
    if amount <= 0 {
        return Err(LotteryError::InvalidAmount);
    }
    token::Client::new(env, &config.fee_token).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
    let total = funds(env)
        .checked_add(amount)
        .ok_or(LotteryError::Overflow)?;
    set_funds(env, total);
    Ok(total)
}

/// Sends `payload` to the configured peer, paying the quoted fee.
///
/// Fails closed with `InsufficientMessagingFunds` before anything is sent.
pub fn send_to_peer(
    env: &Env,
    config: &LotteryConfig,
    payload: &Bytes,
) -> Result<u64, LotteryError> {
    let channel = ChannelClient::new(env, &config.endpoint);
    let fee = channel.quote(&config.peer_chain, payload).max(0);

    let available = funds(env);
    if available < fee {
        return Err(LotteryError::InsufficientMessagingFunds);
    }

    let this = env.current_contract_address();
    if fee > 0 {
        token::Client::new(env, &config.fee_token).transfer(&this, &config.endpoint, &fee);
    }
    set_funds(env, available - fee);

    Ok(channel.send(&this, &config.peer_chain, &config.peer, payload))
}

/// Only the configured endpoint may deliver, and only on behalf of the peer.
pub fn authenticate_inbound(
    config: &LotteryConfig,
    endpoint: &Address,
    src_chain: u32,
    sender: &Address,
) -> Result<(), LotteryError> {
    if *endpoint != config.endpoint {
        return Err(LotteryError::UnauthorizedCaller);
    }
    endpoint.require_auth();
    if src_chain != config.peer_chain || *sender != config.peer {
        return Err(LotteryError::UntrustedPeer);
    }
    Ok(())
}
