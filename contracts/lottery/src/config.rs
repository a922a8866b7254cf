//! Stored configuration and its validation.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::LotteryError;
use crate::types::DataKey;

/// Fixed-point one: probabilities, multipliers and shares are scaled by this.
pub const SCALE: i128 = 10_000_000;

/// Base units per whole token (7 decimals).
pub const TOKEN_UNIT: i128 = 10_000_000;

pub const MAX_BOOST_CAP: i128 = 10 * SCALE;

/// Share of the pool a single win is drawn against; the rest carries over.
pub const DEFAULT_DISTRIBUTION_PERCENTAGE: i128 = 6_900_000;
pub const MAX_CURVE_N: u32 = 64;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Swap size -> base win probability
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProbabilityCurve {
    pub min_amount: i128,
    pub max_amount: i128,
    pub min_probability: i128,
    pub max_probability: i128,
}

/// Parameters of the Hermès split curve
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitParams {
    pub d: u32,
    pub n: u32,
    pub min_main: i128,
    pub max_main: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LotteryConfig {
    /// Swap collaborator allowed to submit entries
    pub swap_source: Address,
    /// Fee collaborator allowed to credit the jackpot
    pub fee_router: Address,
    /// Local messaging endpoint
    pub endpoint: Address,
    /// Asset messaging fees are paid in
    pub fee_token: Address,
    pub peer_chain: u32,
    /// Randomness relay on the remote chain
    pub peer: Address,
    pub curve: ProbabilityCurve,
    pub max_boost: i128,
    pub global_max_probability: i128,
    pub split: SplitParams,
    /// Fraction of the jackpot in play for a win, scaled; `SCALE` pays from the whole pool
    pub distribution_percentage: i128,
    pub entry_timeout_ledgers: u32,
}

impl ProbabilityCurve {
    /// 1 token -> 0.0004%, 10,000 tokens -> 4%
    pub fn reference() -> Self {
        ProbabilityCurve {
            min_amount: TOKEN_UNIT,
            max_amount: 10_000 * TOKEN_UNIT,
            min_probability: 40,
            max_probability: 400_000,
        }
    }
}

impl SplitParams {
    pub fn reference() -> Self {
        SplitParams {
            d: 100,
            n: 10,
            min_main: 7_000_000,
            max_main: 9_500_000,
        }
    }
}

impl LotteryConfig {
    pub fn validate(&self) -> Result<(), LotteryError> {
        let curve = &self.curve;
        let in_unit = |p: i128| (0..=SCALE).contains(&p);

        if curve.min_amount <= 0 || curve.max_amount <= curve.min_amount {
            return Err(LotteryError::InvalidConfig);
        }
        if !in_unit(curve.min_probability)
            || !in_unit(curve.max_probability)
            || curve.min_probability > curve.max_probability
        {
            return Err(LotteryError::InvalidConfig);
        }
        if !in_unit(self.global_max_probability) {
            return Err(LotteryError::InvalidConfig);
        }
        if self.max_boost < SCALE || self.max_boost > MAX_BOOST_CAP {
            return Err(LotteryError::InvalidConfig);
        }

        let split = &self.split;
        if split.d == 0 || split.n == 0 || split.n > MAX_CURVE_N {
            return Err(LotteryError::InvalidConfig);
        }
        if split.min_main < 0 || split.min_main > split.max_main || split.max_main > SCALE {
            return Err(LotteryError::InvalidConfig);
        }
        if self.distribution_percentage <= 0 || self.distribution_percentage > SCALE {
            return Err(LotteryError::InvalidConfig);
        }

        Ok(())
    }
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub(crate) fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub(crate) fn load(env: &Env) -> Result<LotteryConfig, LotteryError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LotteryError::NotInitialized)?;
    extend_instance(env);
    Ok(config)
}

pub(crate) fn store(env: &Env, config: &LotteryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub(crate) fn require_admin(env: &Env, admin: &Address) -> Result<(), LotteryError> {
    let stored: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(LotteryError::NotInitialized)?;
    if stored != *admin {
        return Err(LotteryError::UnauthorizedAdmin);
    }
    admin.require_auth();
    Ok(())
}
