//! Messaging endpoint interface, fee funding and inbound peer checks.

use soroban_sdk::{contractclient, token, Address, Bytes, Env};

use crate::errors::RelayError;
use crate::types::{DataKey, RelayConfig};

#[contractclient(name = "ChannelClient")]
pub trait CrossChainChannel {
    fn quote(env: Env, dst_chain: u32, payload: Bytes) -> i128;

    fn send(env: Env, sender: Address, dst_chain: u32, receiver: Address, payload: Bytes) -> u64;
}

pub fn fee_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FeeBalance)
        .unwrap_or(0)
}

pub fn deposit(
    env: &Env,
    config: &RelayConfig,
    from: &Address,
    amount: i128,
) -> Result<i128, RelayError> {
    if amount <= 0 {
        return Err(RelayError::InvalidAmount);
    }
    token::Client::new(env, &config.fee_token).transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
    let total = fee_balance(env)
        .checked_add(amount)
        .ok_or(RelayError::Overflow)?;
    env.storage().instance().set(&DataKey::FeeBalance, &total);
    Ok(total)
}

/// Sends `payload` back to the lottery, failing closed when unfunded.
pub fn send_to_peer(env: &Env, config: &RelayConfig, payload: &Bytes) -> Result<u64, RelayError> {
    let channel = ChannelClient::new(env, &config.endpoint);
    let fee = channel.quote(&config.peer_chain, payload).max(0);

    let available = fee_balance(env);
    if available < fee {
        return Err(RelayError::InsufficientMessagingFunds);
    }

    let this = env.current_contract_address();
    if fee > 0 {
        token::Client::new(env, &config.fee_token).transfer(&this, &config.endpoint, &fee);
    }
    env.storage()
        .instance()
        .set(&DataKey::FeeBalance, &(available - fee));

    Ok(channel.send(&this, &config.peer_chain, &config.peer, payload))
}

pub fn authenticate_inbound(
    config: &RelayConfig,
    endpoint: &Address,
    src_chain: u32,
    sender: &Address,
) -> Result<(), RelayError> {
    if *endpoint != config.endpoint {
        return Err(RelayError::UnauthorizedCaller);
    }
    endpoint.require_auth();
    if src_chain != config.peer_chain || *sender != config.peer {
        return Err(RelayError::UntrustedPeer);
    }
    Ok(())
}
