//! Type definitions for the swap lottery.

use soroban_sdk::{contracttype, Address, BytesN, Vec};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    NextEntryId,
    Entry(u64),
    Jackpot,
    MessagingFunds,
    PendingWinnings(Address),
}

/// Liquidity position captured when the entry is created
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoostSnapshot {
    pub lp_balance: i128,
    pub voting_power: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryStatus {
    AwaitingRandomness,
    Resolved,
}

/// A qualifying swap waiting for its random word
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingEntry {
    pub id: u64,
    pub owner: Address,
    pub swap_amount: i128,
    pub boost: BoostSnapshot,
    /// Combined probability fixed at submission, scaled
    pub probability: i128,
    pub status: EntryStatus,
    pub created_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JackpotState {
    pub balance: i128,
    pub total_winners: u32,
    pub total_payouts: i128,
    /// Secondary and participation portions handed to the fee router
    pub total_routed: i128,
    /// Winning draws that could not be paid
    pub forfeited_wins: u32,
    /// Entries created since the last payout
    pub round_entries: u32,
}

/// Jackpot split, scaled by `SCALE`. The three shares always sum to `SCALE`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitResult {
    pub main_share: i128,
    pub secondary_share: i128,
    pub participation_share: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub winner: Address,
    /// Part of the pool the split was applied to
    pub distributable: i128,
    pub amount: i128,
    pub secondary_amount: i128,
    pub participation_amount: i128,
    pub split: SplitResult,
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
