//! Shared wiring: lottery, relay, one mock endpoint per chain, a mock VRF
//! coordinator and the messaging fee asset.

use crate::config::{LotteryConfig, ProbabilityCurve, SplitParams, SCALE};
use crate::contract::{LotteryContract, LotteryContractClient};
use crate::types::{BoostSnapshot, RandomnessResponse};
use lottery_testkit::{MockCoordinator, MockCoordinatorClient, MockEndpoint, MockEndpointClient};
use randomness_relay::{OracleParams, RandomnessRelay, RandomnessRelayClient, RelayConfig};
use soroban_sdk::{
    testutils::Address as _, token::StellarAssetClient, vec, xdr::ToXdr, Address, BytesN, Env,
    String,
};

pub const ORIGIN_CHAIN: u32 = 198;
pub const REMOTE_CHAIN: u32 = 110;
pub const MESSAGE_FEE: i128 = 1_000;
pub const ENTRY_TIMEOUT: u32 = 100;

/// 1 token in base units
pub const TOKEN: i128 = 10_000_000;

/// Plain (non-contract) accounts
const ACCOUNT_KEYS: [&str; 4] = [
    "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    "GAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQDZ7H",
    "GABAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEJXA",
    "GABQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQHGPC",
];

pub fn account(env: &Env, index: usize) -> Address {
    Address::from_string(&String::from_str(env, ACCOUNT_KEYS[index]))
}

/// Random word whose low 8 bytes hold `value`
pub fn word(env: &Env, value: u64) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    BytesN::from_array(env, &bytes)
}

pub const WINNING: u64 = 0;
pub const LOSING: u64 = 9_999_999;

pub fn no_boost() -> BoostSnapshot {
    BoostSnapshot {
        lp_balance: 0,
        voting_power: 0,
    }
}

pub fn reference_config(
    swap_source: &Address,
    fee_router: &Address,
    endpoint: &Address,
    fee_token: &Address,
    peer: &Address,
) -> LotteryConfig {
    LotteryConfig {
        swap_source: swap_source.clone(),
        fee_router: fee_router.clone(),
        endpoint: endpoint.clone(),
        fee_token: fee_token.clone(),
        peer_chain: REMOTE_CHAIN,
        peer: peer.clone(),
        curve: ProbabilityCurve::reference(),
        max_boost: 25_000_000,
        global_max_probability: 1_000_000,
        split: SplitParams::reference(),
        distribution_percentage: SCALE,
        entry_timeout_ledgers: ENTRY_TIMEOUT,
    }
}

pub struct Harness {
    pub env: Env,
    pub lottery: LotteryContractClient<'static>,
    pub relay: RandomnessRelayClient<'static>,
    /// Origin-chain endpoint, trusted by the lottery
    pub endpoint: MockEndpointClient<'static>,
    /// Remote-chain endpoint, trusted by the relay
    pub peer_endpoint: MockEndpointClient<'static>,
    pub coordinator: MockCoordinatorClient<'static>,
    pub fee_token: Address,
    pub admin: Address,
    pub swap_source: Address,
    pub fee_router: Address,
    pub config: LotteryConfig,
}

/// Initialized lottery and relay with no messaging funds and an empty jackpot.
pub fn setup() -> Harness {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let swap_source = Address::generate(&env);
    let fee_router = Address::generate(&env);

    let fee_token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let endpoint_id = env.register(MockEndpoint, (ORIGIN_CHAIN, MESSAGE_FEE));
    let peer_endpoint_id = env.register(MockEndpoint, (REMOTE_CHAIN, MESSAGE_FEE));
    let coordinator_id = env.register(MockCoordinator, ());
    let lottery_id = env.register(LotteryContract, ());
    let relay_id = env.register(RandomnessRelay, ());

    let lottery = LotteryContractClient::new(&env, &lottery_id);
    let relay = RandomnessRelayClient::new(&env, &relay_id);

    let config = reference_config(&swap_source, &fee_router, &endpoint_id, &fee_token, &relay_id);
    lottery.initialize(&admin, &config);

    relay.initialize(
        &admin,
        &RelayConfig {
            coordinator: coordinator_id.clone(),
            endpoint: peer_endpoint_id.clone(),
            fee_token: fee_token.clone(),
            peer_chain: ORIGIN_CHAIN,
            peer: lottery_id.clone(),
            oracle: OracleParams {
                key_hash: BytesN::from_array(&env, &[7u8; 32]),
                subscription_id: 12345,
                confirmations: 3,
                callback_gas_limit: 200_000,
            },
        },
    );

    Harness {
        lottery,
        relay,
        endpoint: MockEndpointClient::new(&env, &endpoint_id),
        peer_endpoint: MockEndpointClient::new(&env, &peer_endpoint_id),
        coordinator: MockCoordinatorClient::new(&env, &coordinator_id),
        fee_token,
        admin,
        swap_source,
        fee_router,
        config,
        env,
    }
}

impl Harness {
    /// Enough messaging funds for `messages` outbound requests on both sides
    pub fn fund_messaging(&self, messages: i128) {
        let funder = Address::generate(&self.env);
        let amount = MESSAGE_FEE * messages;
        StellarAssetClient::new(&self.env, &self.fee_token).mint(&funder, &(amount * 2));
        self.lottery.deposit_messaging_funds(&funder, &amount);
        self.relay.deposit(&funder, &amount);
    }

    pub fn fund_jackpot(&self, amount: i128) {
        self.lottery.contribute(&self.fee_router, &amount);
    }

    pub fn enter(&self, owner: &Address, swap_amount: i128, boost: &BoostSnapshot) -> u64 {
        self.lottery
            .submit_entry(&self.swap_source, owner, &swap_amount, boost)
    }

    /// Records a response on the remote endpoint as if the relay sent it;
    /// returns its nonce without delivering it.
    pub fn respond(&self, request_id: u64, value: u64) -> u64 {
        let payload = RandomnessResponse {
            request_id,
            random_words: vec![&self.env, word(&self.env, value)],
        }
        .to_xdr(&self.env);
        self.peer_endpoint
            .send(&self.relay.address, &ORIGIN_CHAIN, &self.lottery.address, &payload)
    }

    /// Delivers remote nonce `nonce` to the lottery
    pub fn deliver_to_lottery(&self, nonce: u64) {
        self.endpoint.deliver(&self.peer_endpoint.address, &nonce);
    }

    /// Delivers origin nonce `nonce` to the relay
    pub fn deliver_to_relay(&self, nonce: u64) {
        self.peer_endpoint.deliver(&self.endpoint.address, &nonce);
    }

    pub fn fulfill(&self, external_id: u64, value: u64) {
        self.coordinator
            .fulfill(&external_id, &vec![&self.env, word(&self.env, value)]);
    }
}
