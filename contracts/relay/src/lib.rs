#![no_std]
//! # Randomness Relay
//!
//! Remote-chain half of the swap lottery. Receives randomness requests from
//! the lottery over the messaging endpoint, obtains a word from the VRF
//! coordinator, and sends the fulfilment back.

mod channel;
mod contract;
mod errors;
mod events;
mod oracle;
mod types;

#[cfg(test)]
mod tests;

pub use channel::{ChannelClient, CrossChainChannel};
pub use contract::{RandomnessRelay, RandomnessRelayClient};
pub use errors::RelayError;
pub use oracle::{CoordinatorClient, RandomnessCoordinator, NUM_WORDS};
pub use types::{DataKey, OracleParams, RandomnessRequest, RandomnessResponse, RelayConfig};
