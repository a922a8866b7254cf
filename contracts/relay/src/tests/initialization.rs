//! Tests for relay initialization and oracle settings.

use super::common::{oracle_params, setup};
use crate::contract::{RandomnessRelay, RandomnessRelayClient};
use crate::errors::RelayError;
use soroban_sdk::{testutils::Address as _, Address, Env};

#[test]
fn test_initialize() {
    let h = setup();

    assert_eq!(h.relay.get_config(), h.config);
    assert_eq!(h.relay.get_fee_balance(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let h = setup();

    let result = h.relay.try_initialize(&h.admin, &h.config);
    assert_eq!(result, Err(Ok(RelayError::AlreadyInitialized)));
}

#[test]
fn test_get_config_before_initialize() {
    let env = Env::default();
    let contract_id = env.register(RandomnessRelay, ());
    let client = RandomnessRelayClient::new(&env, &contract_id);

    assert_eq!(client.try_get_config(), Err(Ok(RelayError::NotInitialized)));
}

#[test]
fn test_set_oracle_params() {
    let h = setup();
    let mut params = oracle_params(&h.env);
    params.subscription_id = 999;
    params.confirmations = 10;

    let intruder = Address::generate(&h.env);
    let result = h.relay.try_set_oracle_params(&intruder, &params);
    assert_eq!(result, Err(Ok(RelayError::UnauthorizedAdmin)));

    h.relay.set_oracle_params(&h.admin, &params);
    assert_eq!(h.relay.get_config().oracle, params);

    // later requests use the new subscription
    h.fund(1);
    h.deliver(h.request(0));
    assert_eq!(h.coordinator.request(&1).unwrap().subscription_id, 999);
}

#[test]
fn test_deposit_rejects_non_positive() {
    let h = setup();
    let funder = Address::generate(&h.env);

    assert_eq!(
        h.relay.try_deposit(&funder, &0),
        Err(Ok(RelayError::InvalidAmount))
    );
}

#[test]
fn test_initialize_rejects_self_referencing_config() {
    let h = setup();
    let relay_id = h.env.register(RandomnessRelay, ());
    let client = RandomnessRelayClient::new(&h.env, &relay_id);

    let mut config = h.config.clone();
    config.coordinator = relay_id.clone();
    assert_eq!(
        client.try_initialize(&h.admin, &config),
        Err(Ok(RelayError::InvalidConfig))
    );

    let mut config = h.config.clone();
    config.endpoint = relay_id.clone();
    assert_eq!(
        client.try_initialize(&h.admin, &config),
        Err(Ok(RelayError::InvalidConfig))
    );

    let mut config = h.config.clone();
    config.coordinator = config.endpoint.clone();
    assert_eq!(
        client.try_initialize(&h.admin, &config),
        Err(Ok(RelayError::InvalidConfig))
    );

    // nothing was stored by the failed attempts
    assert_eq!(client.try_get_config(), Err(Ok(RelayError::NotInitialized)));
    client.initialize(&h.admin, &h.config);
    assert_eq!(client.get_config(), h.config);
}
