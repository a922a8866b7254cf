//! Oracle network (VRF coordinator) interface.

use soroban_sdk::{contractclient, Address, BytesN, Env};

use crate::types::{OracleParams, RelayConfig};

/// One word is enough for a single draw.
pub const NUM_WORDS: u32 = 1;

#[contractclient(name = "CoordinatorClient")]
pub trait RandomnessCoordinator {
    /// Registers a request; the coordinator later calls
    /// `fulfill_random_words` on `consumer` with the returned id.
    fn request_random_words(
        env: Env,
        consumer: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
        confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}

/// Asks the coordinator for randomness; returns its request id.
pub fn request(env: &Env, config: &RelayConfig) -> u64 {
    let OracleParams {
        key_hash,
        subscription_id,
        confirmations,
        callback_gas_limit,
    } = &config.oracle;

    CoordinatorClient::new(env, &config.coordinator).request_random_words(
        &env.current_contract_address(),
        key_hash,
        subscription_id,
        confirmations,
        callback_gas_limit,
        &NUM_WORDS,
    )
}
