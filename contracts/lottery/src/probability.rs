//! Win probability: the swap-size curve, the liquidity boost and the
//! combined, capped probability used by the draw.
//!
//! All values are fixed-point with [`SCALE`] as 1.0. Out-of-domain inputs are
//! clamped, never rejected.

use soroban_sdk::BytesN;

use crate::config::{ProbabilityCurve, SCALE};
use crate::types::BoostSnapshot;

/// Modulus the random word is reduced by before comparison.
pub const DRAW_RANGE: u64 = 10_000_000;

/// Base win probability for a swap of `amount`.
///
/// Returns `min_prob` at or below `min_amount`, `max_prob` at or above
/// `max_amount`, and interpolates linearly in between. Non-decreasing in
/// `amount`.
pub fn win_probability(
    amount: i128,
    min_amount: i128,
    max_amount: i128,
    min_prob: i128,
    max_prob: i128,
) -> i128 {
    let lo = min_prob.clamp(0, SCALE);
    let hi = max_prob.clamp(0, SCALE);
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    if amount <= min_amount {
        return lo;
    }
    if amount >= max_amount {
        return hi;
    }

    // min_amount < amount < max_amount here, so range > 0
    let offset = amount - min_amount;
    let range = max_amount - min_amount;
    match offset.checked_mul(hi - lo) {
        Some(scaled) => (lo + scaled / range).min(hi),
        None => hi,
    }
}

/// `num / den` as a fixed-point ratio, capped at 1.0.
fn capped_ratio(num: i128, den: i128) -> i128 {
    if den <= 0 || num >= den {
        return SCALE;
    }
    if num <= 0 {
        return 0;
    }
    match num.checked_mul(SCALE) {
        Some(v) => v / den,
        // den > num > i128::MAX / SCALE, so den / SCALE is non-zero
        None => num / (den / SCALE),
    }
}

/// Boost multiplier in `[SCALE, max_boost]`.
///
/// Scales with how much voting power backs the LP position and how much LP
/// backs the swap, so only positions that are large relative to the swap
/// earn the full boost.
pub fn boost_multiplier(
    swap_amount: i128,
    lp_balance: i128,
    voting_power: i128,
    max_boost: i128,
) -> i128 {
    if lp_balance <= 0 || voting_power <= 0 || max_boost <= SCALE {
        return SCALE;
    }

    let vote_ratio = capped_ratio(voting_power, lp_balance);
    let coverage_ratio = capped_ratio(lp_balance, swap_amount);

    let headroom = max_boost - SCALE;
    let extra = headroom
        .checked_mul(vote_ratio)
        .map(|v| v / SCALE)
        .and_then(|v| v.checked_mul(coverage_ratio))
        .map(|v| v / SCALE)
        .unwrap_or(headroom);

    (SCALE + extra).clamp(SCALE, max_boost)
}

/// `min(base * boost, global_max)`.
pub fn combined_probability(base: i128, boost: i128, global_max: i128) -> i128 {
    let cap = global_max.clamp(0, SCALE);
    let boosted = base
        .max(0)
        .checked_mul(boost.max(SCALE))
        .map(|v| v / SCALE)
        .unwrap_or(cap);
    boosted.min(cap)
}

impl ProbabilityCurve {
    pub fn probability_for(&self, amount: i128) -> i128 {
        win_probability(
            amount,
            self.min_amount,
            self.max_amount,
            self.min_probability,
            self.max_probability,
        )
    }
}

/// Combined probability for an entry, from the snapshot taken at submission.
pub fn entry_probability(
    curve: &ProbabilityCurve,
    swap_amount: i128,
    boost: &BoostSnapshot,
    max_boost: i128,
    global_max: i128,
) -> i128 {
    let base = curve.probability_for(swap_amount);
    let multiplier = boost_multiplier(swap_amount, boost.lp_balance, boost.voting_power, max_boost);
    combined_probability(base, multiplier, global_max)
}

/// Reduces a 32-byte big-endian random word modulo [`DRAW_RANGE`].
pub fn draw(word: &BytesN<32>) -> u64 {
    word.to_array()
        .iter()
        .fold(0u64, |acc, byte| (acc * 256 + *byte as u64) % DRAW_RANGE)
}

/// True when `draw` lands inside the winning band for `probability`.
pub fn is_winning_draw(draw: u64, probability: i128) -> bool {
    (draw as i128) * SCALE < probability * DRAW_RANGE as i128
}
