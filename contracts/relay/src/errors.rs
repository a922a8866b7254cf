//! Contract error types for the randomness relay.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RelayError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Only admin can perform this action
    UnauthorizedAdmin = 3,
    /// Caller is not the configured coordinator or endpoint
    UnauthorizedCaller = 4,
    /// Inbound message did not come from the configured peer
    UntrustedPeer = 5,
    /// Messaging fee balance cannot cover the response
    InsufficientMessagingFunds = 6,
    /// Amount must be greater than zero
    InvalidAmount = 7,
    /// Payload or random words could not be used
    MalformedPayload = 8,
    /// Arithmetic overflow occurred
    Overflow = 9,
    /// Configuration failed validation
    InvalidConfig = 10,
}
