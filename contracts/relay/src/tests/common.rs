//! Relay wired to a remote endpoint, an origin endpoint standing in for the
//! lottery's chain, and a mock coordinator.

use crate::contract::{RandomnessRelay, RandomnessRelayClient};
use crate::types::{OracleParams, RandomnessRequest, RelayConfig};
use lottery_testkit::{MockCoordinator, MockCoordinatorClient, MockEndpoint, MockEndpointClient};
use soroban_sdk::{
    testutils::Address as _, token::StellarAssetClient, vec, xdr::ToXdr, Address, BytesN, Env,
};

pub const ORIGIN_CHAIN: u32 = 198;
pub const REMOTE_CHAIN: u32 = 110;
pub const MESSAGE_FEE: i128 = 1_000;

pub fn oracle_params(env: &Env) -> OracleParams {
    OracleParams {
        key_hash: BytesN::from_array(env, &[7u8; 32]),
        subscription_id: 12345,
        confirmations: 3,
        callback_gas_limit: 200_000,
    }
}

pub fn word(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

pub struct Harness {
    pub env: Env,
    pub relay: RandomnessRelayClient<'static>,
    /// Remote-chain endpoint, trusted by the relay
    pub endpoint: MockEndpointClient<'static>,
    /// Origin-chain endpoint the lottery sends through
    pub origin_endpoint: MockEndpointClient<'static>,
    pub coordinator: MockCoordinatorClient<'static>,
    pub fee_token: Address,
    pub admin: Address,
    /// Stand-in for the lottery contract on the origin chain
    pub lottery: Address,
    pub config: RelayConfig,
}

pub fn setup() -> Harness {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let lottery = Address::generate(&env);

    let fee_token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let endpoint_id = env.register(MockEndpoint, (REMOTE_CHAIN, MESSAGE_FEE));
    let origin_endpoint_id = env.register(MockEndpoint, (ORIGIN_CHAIN, MESSAGE_FEE));
    let coordinator_id = env.register(MockCoordinator, ());
    let relay_id = env.register(RandomnessRelay, ());
    let relay = RandomnessRelayClient::new(&env, &relay_id);

    let config = RelayConfig {
        coordinator: coordinator_id.clone(),
        endpoint: endpoint_id.clone(),
        fee_token: fee_token.clone(),
        peer_chain: ORIGIN_CHAIN,
        peer: lottery.clone(),
        oracle: oracle_params(&env),
    };
    relay.initialize(&admin, &config);

    Harness {
        relay,
        endpoint: MockEndpointClient::new(&env, &endpoint_id),
        origin_endpoint: MockEndpointClient::new(&env, &origin_endpoint_id),
        coordinator: MockCoordinatorClient::new(&env, &coordinator_id),
        fee_token,
        admin,
        lottery,
        config,
        env,
    }
}

impl Harness {
    pub fn fund(&self, messages: i128) {
        let funder = Address::generate(&self.env);
        let amount = MESSAGE_FEE * messages;
        StellarAssetClient::new(&self.env, &self.fee_token).mint(&funder, &amount);
        self.relay.deposit(&funder, &amount);
    }

    /// Has the lottery send a request for `request_id`; returns the origin nonce.
    pub fn request(&self, request_id: u64) -> u64 {
        let payload = RandomnessRequest { request_id }.to_xdr(&self.env);
        self.origin_endpoint
            .send(&self.lottery, &REMOTE_CHAIN, &self.relay.address, &payload)
    }

    pub fn deliver(&self, nonce: u64) {
        self.endpoint.deliver(&self.origin_endpoint.address, &nonce);
    }

    pub fn fulfill(&self, external_id: u64, seed: u8) {
        self.coordinator
            .fulfill(&external_id, &vec![&self.env, word(&self.env, seed)]);
    }
}
