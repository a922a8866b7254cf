//! Jackpot split policy (the "Hermès curve").
//!
//! Decides what fraction of the pool the winner takes and how the rest is
//! divided between secondary and participation rewards. Pure integer math:
//!
//! ```text
//! c = cbrt(x^4 + d^(n+2) / (n^(n+1) * x))
//! H = c - x^2 / (3c)                 H(0) = 0
//! main = min_main + H / (x + H) * (max_main - min_main)
//! main *= 1 - participant_factor     clamped to [min_main, max_main]
//! secondary = (1 - main) * 0.8
//! participation = 1 - main - secondary
//! ```

use crate::config::{SplitParams, MAX_CURVE_N, SCALE};
use crate::types::SplitResult;

/// Largest jackpot (in whole tokens) the curve is evaluated on; `x^4` fits u128.
pub const MAX_CURVE_INPUT: u128 = 4_000_000_000;

const MAX_PARTICIPANT_FACTOR: i128 = 3_000_000;
const PARTICIPANT_FACTOR_PER_ENTRY: i128 = 30_000;
const PARTICIPANT_THRESHOLD: u32 = 10;
const MAX_DECIMAL_SHIFT: u128 = 1_000_000_000_000;

/// Floor of the cube root.
pub fn icbrt(mut v: u128) -> u128 {
    let mut y: u128 = 0;
    let mut shift: i32 = 126;
    while shift >= 0 {
        y <<= 1;
        let b = 3 * y * (y + 1) + 1;
        if (v >> shift) >= b {
            v -= b << shift;
            y += 1;
        }
        shift -= 3;
    }
    y
}

/// `d^(n+2) / n^(n+1)`, saturating.
fn curve_constant(d: u32, n: u32) -> u128 {
    let d = d.max(1) as u128;
    let n = n.clamp(1, MAX_CURVE_N);

    let exact = d
        .checked_pow(n + 2)
        .zip((n as u128).checked_pow(n + 1));
    if let Some((num, den)) = exact {
        return num / den;
    }

    // d * (d / n)^(n + 1), one factor at a time
    let mut k = d;
    for _ in 0..=n {
        k = match k.checked_mul(d) {
            Some(v) => v / n as u128,
            None => (k / n as u128).saturating_mul(d),
        };
    }
    k
}

/// `H / (x + H)` scaled by [`SCALE`], for a jackpot of `x` whole tokens.
pub fn normalized_hermes(x: u128, d: u32, n: u32) -> i128 {
    if x == 0 {
        return 0;
    }
    let x = x.min(MAX_CURVE_INPUT);
    let inner = x.pow(4).saturating_add(curve_constant(d, n) / x);

    // shift by 1000^j so the cube root carries j extra decimals
    let mut shifted = inner;
    let mut unit: u128 = 1;
    while unit < MAX_DECIMAL_SHIFT && shifted <= u128::MAX / 1000 {
        shifted *= 1000;
        unit *= 10;
    }

    let c = icbrt(shifted);
    if c == 0 {
        return 0;
    }
    let correction = x * x * unit * unit / (3 * c);
    let h = c.saturating_sub(correction);
    let x_scaled = x * unit;

    (h * SCALE as u128 / (x_scaled + h)) as i128
}

pub fn participant_factor(participant_count: u32) -> i128 {
    if participant_count <= PARTICIPANT_THRESHOLD {
        return 0;
    }
    (participant_count as i128 * PARTICIPANT_FACTOR_PER_ENTRY).min(MAX_PARTICIPANT_FACTOR)
}

/// Splits a jackpot of `jackpot_size` whole tokens among `participant_count`
/// entries. `main_share` always lies in `[min_main, max_main]`.
pub fn split(
    jackpot_size: u128,
    participant_count: u32,
    d: u32,
    n: u32,
    min_main: i128,
    max_main: i128,
) -> SplitResult {
    let lo = min_main.clamp(0, SCALE);
    let hi = max_main.clamp(0, SCALE);
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    let normalized = normalized_hermes(jackpot_size, d, n);
    let mut main_share = lo + normalized * (hi - lo) / SCALE;
    main_share = main_share * (SCALE - participant_factor(participant_count)) / SCALE;
    let main_share = main_share.clamp(lo, hi);

    let secondary_share = (SCALE - main_share) * 8 / 10;
    let participation_share = SCALE - main_share - secondary_share;

    SplitResult {
        main_share,
        secondary_share,
        participation_share,
    }
}

impl SplitParams {
    pub fn split_for(&self, jackpot_size: u128, participant_count: u32) -> SplitResult {
        split(
            jackpot_size,
            participant_count,
            self.d,
            self.n,
            self.min_main,
            self.max_main,
        )
    }
}
