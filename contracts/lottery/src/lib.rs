#![no_std]
//! # Swap Lottery
//!
//! Soroban contract that turns qualifying swaps into jackpot draws backed by
//! randomness fetched from a relay on another chain.
//!
//! ## Flow
//! - `submit_entry` stores the entry with its boost snapshot and sends a
//!   randomness request through the messaging endpoint
//! - the relay answers through the endpoint; `receive_message` resolves the
//!   entry exactly once, however often the answer is delivered
//! - a winning draw pays the winner's share of the jackpot, sized by the
//!   Hermès split curve
//!
//! All probabilities, multipliers and shares are fixed-point with
//! [`SCALE`] = 10^7 as 1.0.

mod channel;
mod config;
mod contract;
mod engine;
mod errors;
mod events;
mod jackpot;
mod probability;
mod split;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use channel::{ChannelClient, CrossChainChannel};
pub use config::{LotteryConfig, ProbabilityCurve, SplitParams, SCALE, TOKEN_UNIT};
pub use contract::{LotteryContract, LotteryContractClient};
pub use errors::LotteryError;
pub use probability::{boost_multiplier, combined_probability, win_probability, DRAW_RANGE};
pub use split::split;
pub use types::{
    BoostSnapshot, DataKey, EntryStatus, JackpotState, PendingEntry, RandomnessRequest,
    RandomnessResponse, SplitResult,
};
