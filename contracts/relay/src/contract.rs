//! Core contract implementation for the randomness relay.

use soroban_sdk::{
    contract, contractimpl, log,
    xdr::{FromXdr, ToXdr},
    Address, Bytes, BytesN, Env, Vec,
};

use crate::channel;
use crate::errors::RelayError;
use crate::events::{MessagingFundsDeposited, RandomnessFulfilled, RandomnessRequestForwarded};
use crate::oracle;
use crate::types::{DataKey, OracleParams, RandomnessRequest, RandomnessResponse, RelayConfig};

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

#[contract]
pub struct RandomnessRelay;

#[contractimpl]
impl RandomnessRelay {
    /// Initializes the relay with its admin and configuration (one-time only)
    pub fn initialize(env: Env, admin: Address, config: RelayConfig) -> Result<(), RelayError> {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RelayError::AlreadyInitialized);
        }
        config.validate(&env)?;

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Config, &config);
        Self::extend_instance(&env);

        Ok(())
    }

    /// Replaces the oracle subscription settings (admin only)
    pub fn set_oracle_params(env: Env, admin: Address, params: OracleParams) -> Result<(), RelayError> {
        Self::require_admin(&env, &admin)?;

        let mut config = Self::load_config(&env)?;
        config.oracle = params;
        config.validate(&env)?;
        env.storage().instance().set(&DataKey::Config, &config);
        Self::extend_instance(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<RelayConfig, RelayError> {
        Self::load_config(&env)
    }

    /// Tops up the fee balance that pays for responses
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, RelayError> {
        from.require_auth();
        let config = Self::load_config(&env)?;
        let total = channel::deposit(&env, &config, &from, amount)?;

        MessagingFundsDeposited { from, amount }.publish(&env);
        Ok(total)
    }

    pub fn get_fee_balance(env: Env) -> i128 {
        channel::fee_balance(&env)
    }

    /// Inbound request from the lottery. Each request id reaches the oracle
    /// at most once; redeliveries are ignored.
    pub fn receive_message(
        env: Env,
        endpoint: Address,
        src_chain: u32,
        sender: Address,
        payload: Bytes,
    ) -> Result<(), RelayError> {
        let config = Self::load_config(&env)?;
        channel::authenticate_inbound(&config, &endpoint, src_chain, &sender)?;

        let RandomnessRequest { request_id } = RandomnessRequest::from_xdr(&env, &payload)
            .map_err(|_| RelayError::MalformedPayload)?;

        let forwarded_key = DataKey::Forwarded(request_id);
        if env.storage().persistent().has(&forwarded_key) {
            log!(&env, "ignoring duplicate randomness request", request_id);
            return Ok(());
        }

        let external_id = oracle::request(&env, &config);

        let outstanding_key = DataKey::Outstanding(external_id);
        env.storage().persistent().set(&forwarded_key, &external_id);
        env.storage().persistent().set(&outstanding_key, &request_id);
        Self::extend_persistent(&env, &forwarded_key);
        Self::extend_persistent(&env, &outstanding_key);

        RandomnessRequestForwarded {
            request_id,
            external_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Oracle callback. `coordinator` must be the configured coordinator;
    /// the words are forwarded to the lottery once per oracle request.
    pub fn fulfill_random_words(
        env: Env,
        coordinator: Address,
        external_id: u64,
        random_words: Vec<BytesN<32>>,
    ) -> Result<(), RelayError> {
        let config = Self::load_config(&env)?;
        if coordinator != config.coordinator {
            return Err(RelayError::UnauthorizedCaller);
        }
        coordinator.require_auth();

        let outstanding_key = DataKey::Outstanding(external_id);
        let request_id: u64 = match env.storage().persistent().get(&outstanding_key) {
            Some(id) => id,
            None => {
                log!(&env, "ignoring fulfilment for unknown oracle request", external_id);
                return Ok(());
            }
        };
        if random_words.is_empty() {
            return Err(RelayError::MalformedPayload);
        }

        let payload = RandomnessResponse {
            request_id,
            random_words,
        }
        .to_xdr(&env);
        let message_id = channel::send_to_peer(&env, &config, &payload)?;
        env.storage().persistent().remove(&outstanding_key);

        RandomnessFulfilled {
            request_id,
            external_id,
            message_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Oracle request id a lottery request was forwarded as
    pub fn get_external_id(env: Env, request_id: u64) -> Option<u64> {
        env.storage().persistent().get(&DataKey::Forwarded(request_id))
    }

    /// Lottery request id still waiting on an oracle request
    pub fn get_local_request(env: Env, external_id: u64) -> Option<u64> {
        env.storage().persistent().get(&DataKey::Outstanding(external_id))
    }

    fn load_config(env: &Env) -> Result<RelayConfig, RelayError> {
        let config = env
            .storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(RelayError::NotInitialized)?;
        Self::extend_instance(env);
        Ok(config)
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), RelayError> {
        let stored: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RelayError::NotInitialized)?;
        if stored != *admin {
            return Err(RelayError::UnauthorizedAdmin);
        }
        admin.require_auth();
        Ok(())
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    }

    fn extend_persistent(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
    }
}
