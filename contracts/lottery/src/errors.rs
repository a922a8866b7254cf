//! Contract error types for the swap lottery.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LotteryError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Only admin can perform this action
    UnauthorizedAdmin = 3,
    /// Caller is not the configured swap source, fee router or endpoint
    UnauthorizedCaller = 4,
    /// Inbound message did not come from the configured peer
    UntrustedPeer = 5,
    /// Swap amount is below the qualifying minimum
    BelowMinimumEntry = 6,
    /// Messaging fee balance cannot cover the outbound request
    InsufficientMessagingFunds = 7,
    /// Payout target is a contract, not a plain account
    ContractRecipientRejected = 8,
    /// No entry with this id is awaiting randomness
    UnknownOrResolvedRequest = 9,
    /// Amount must be greater than zero
    InvalidAmount = 10,
    /// Configuration failed validation
    InvalidConfig = 11,
    /// Channel payload could not be decoded
    MalformedPayload = 12,
    /// Entry has not been pending long enough to expire
    RequestNotExpired = 13,
    /// Jackpot has nothing to pay out
    EmptyJackpot = 14,
    /// Arithmetic overflow occurred
    Overflow = 15,
}
