//! Events published for off-chain observers.

use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["randomness_requested"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub owner: Address,
    pub message_id: u64,
}

#[contractevent(topics = ["entry_resolved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryResolved {
    pub request_id: u64,
    pub owner: Address,
    /// Combined probability the draw was held against, scaled
    pub probability: i128,
    pub won: bool,
}

#[contractevent(topics = ["jackpot_won"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JackpotWon {
    pub owner: Address,
    pub amount: i128,
}

/// Portions credited to the fee router instead of the winner.
#[contractevent(topics = ["rewards_allocated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsAllocated {
    pub recipient: Address,
    pub secondary: i128,
    pub participation: i128,
}

#[contractevent(topics = ["request_expired"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestExpired {
    pub request_id: u64,
}

#[contractevent(topics = ["win_forfeited"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinForfeited {
    pub request_id: u64,
    pub owner: Address,
}

#[contractevent(topics = ["jackpot_credited"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JackpotCredited {
    pub source: Address,
    pub amount: i128,
}

#[contractevent(topics = ["messaging_funds_deposited"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessagingFundsDeposited {
    pub from: Address,
    pub amount: i128,
}

#[contractevent(topics = ["winnings_claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningsClaimed {
    pub user: Address,
    pub amount: i128,
}
