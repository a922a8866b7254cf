#![no_std]
//! In-process stand-ins for the lottery's external collaborators.
//!
//! - [`MockEndpoint`]: one per chain. Records every `send`; a test delivers a
//!   recorded message by calling `deliver` on the destination chain's
//!   endpoint, as many times and in whatever order it likes.
//! - [`MockCoordinator`]: records randomness requests and calls the consumer
//!   back when the test calls `fulfill`.

use soroban_sdk::{
    contract, contractclient, contractimpl, contracttype, Address, Bytes, BytesN, Env, Vec,
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutboundMessage {
    pub sender: Address,
    pub dst_chain: u32,
    pub receiver: Address,
    pub payload: Bytes,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleRequest {
    pub consumer: Address,
    pub subscription_id: u64,
    pub num_words: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    LocalChain,
    Fee,
    Nonce,
    Message(u64),
    RequestCounter,
    Request(u64),
}

/// Receiving side of a messaging endpoint.
#[contractclient(name = "MessageReceiverClient")]
pub trait MessageReceiver {
    fn receive_message(env: Env, endpoint: Address, src_chain: u32, sender: Address, payload: Bytes);
}

/// Consumer side of a VRF coordinator.
#[contractclient(name = "RandomnessConsumerClient")]
pub trait RandomnessConsumer {
    fn fulfill_random_words(
        env: Env,
        coordinator: Address,
        external_id: u64,
        random_words: Vec<BytesN<32>>,
    );
}

#[contract]
pub struct MockEndpoint;

#[contractimpl]
impl MockEndpoint {
    pub fn __constructor(env: Env, local_chain: u32, fee: i128) {
        env.storage().instance().set(&DataKey::LocalChain, &local_chain);
        env.storage().instance().set(&DataKey::Fee, &fee);
    }

    pub fn local_chain(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::LocalChain)
            .unwrap_or(0)
    }

    pub fn set_fee(env: Env, fee: i128) {
        env.storage().instance().set(&DataKey::Fee, &fee);
    }

    pub fn quote(env: Env, _dst_chain: u32, _payload: Bytes) -> i128 {
        env.storage().instance().get(&DataKey::Fee).unwrap_or(0)
    }

    pub fn send(env: Env, sender: Address, dst_chain: u32, receiver: Address, payload: Bytes) -> u64 {
        sender.require_auth();

        let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
        let message = OutboundMessage {
            sender,
            dst_chain,
            receiver,
            payload,
        };
        env.storage().persistent().set(&DataKey::Message(nonce), &message);
        env.storage().instance().set(&DataKey::Nonce, &(nonce + 1));
        nonce
    }

    /// Number of messages sent through this endpoint
    pub fn sent_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
    }

    pub fn message(env: Env, nonce: u64) -> Option<OutboundMessage> {
        env.storage().persistent().get(&DataKey::Message(nonce))
    }

    /// Delivers message `nonce` recorded by the `source` endpoint to its
    /// receiver on this chain.
    pub fn deliver(env: Env, source: Address, nonce: u64) {
        let source_endpoint = MockEndpointClient::new(&env, &source);
        let message = source_endpoint
            .message(&nonce)
            .expect("no message recorded for nonce");
        let src_chain = source_endpoint.local_chain();

        MessageReceiverClient::new(&env, &message.receiver).receive_message(
            &env.current_contract_address(),
            &src_chain,
            &message.sender,
            &message.payload,
        );
    }
}

#[contract]
pub struct MockCoordinator;

#[contractimpl]
impl MockCoordinator {
    pub fn request_random_words(
        env: Env,
        consumer: Address,
        _key_hash: BytesN<32>,
        subscription_id: u64,
        _confirmations: u32,
        _callback_gas_limit: u32,
        num_words: u32,
    ) -> u64 {
        consumer.require_auth();

        // ids start at 1
        let id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::RequestCounter)
            .unwrap_or(0)
            + 1;
        let request = OracleRequest {
            consumer,
            subscription_id,
            num_words,
        };
        env.storage().persistent().set(&DataKey::Request(id), &request);
        env.storage().instance().set(&DataKey::RequestCounter, &id);
        id
    }

    pub fn request_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RequestCounter)
            .unwrap_or(0)
    }

    pub fn request(env: Env, id: u64) -> Option<OracleRequest> {
        env.storage().persistent().get(&DataKey::Request(id))
    }

    /// Calls the consumer of request `id` back with `random_words`
    pub fn fulfill(env: Env, id: u64, random_words: Vec<BytesN<32>>) {
        let request: OracleRequest = env
            .storage()
            .persistent()
            .get(&DataKey::Request(id))
            .expect("unknown oracle request");

        RandomnessConsumerClient::new(&env, &request.consumer).fulfill_random_words(
            &env.current_contract_address(),
            &id,
            &random_words,
        );
    }
}
