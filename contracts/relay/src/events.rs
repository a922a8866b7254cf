//! Events published for off-chain observers.

use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["randomness_request_forwarded"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessRequestForwarded {
    pub request_id: u64,
    pub external_id: u64,
}

#[contractevent(topics = ["randomness_fulfilled"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessFulfilled {
    pub request_id: u64,
    pub external_id: u64,
    pub message_id: u64,
}

#[contractevent(topics = ["messaging_funds_deposited"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessagingFundsDeposited {
    pub from: Address,
    pub amount: i128,
}
