//! Type definitions for the randomness relay.

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::errors::RelayError;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    FeeBalance,
    /// Oracle request id -> lottery request id, until fulfilled
    Outstanding(u64),
    /// Lottery request id -> oracle request id, kept for de-duplication
    Forwarded(u64),
}

/// Oracle subscription settings, passed through untouched
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleParams {
    pub key_hash: BytesN<32>,
    pub subscription_id: u64,
    pub confirmations: u32,
    pub callback_gas_limit: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayConfig {
    pub coordinator: Address,
    /// Local messaging endpoint
    pub endpoint: Address,
    /// Asset messaging fees are paid in
    pub fee_token: Address,
    pub peer_chain: u32,
    /// Lottery contract on the origin chain
    pub peer: Address,
    pub oracle: OracleParams,
}

impl RelayConfig {
    /// The relay can be neither its own coordinator nor its own endpoint.
    pub fn validate(&self, env: &Env) -> Result<(), RelayError> {
        let this = env.current_contract_address();
        if self.coordinator == this || self.endpoint == this || self.peer == this {
            return Err(RelayError::InvalidConfig);
        }
        if self.coordinator == self.endpoint {
            return Err(RelayError::InvalidConfig);
        }
        Ok(())
    }
}

/// Origin -> remote: ask for a random word for `request_id`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessRequest {
    pub request_id: u64,
}

/// Remote -> origin: the oracle's answer for `request_id`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessResponse {
    pub request_id: u64,
    pub random_words: Vec<BytesN<32>>,
}
