//! Fixed point bookkeeping of the rewards.
//!
//! The pool keeps a single accumulator: the total reward paid per unit of stake since the
//! pool was created, scaled by [`SCALE`]. A distribution only raises the accumulator, and a
//! participant is owed `stake * (accumulator - settled_at)` on settlement, so neither side
//! ever has to iterate over stakers.
//!
//! Both conversions truncate. The pool may keep a few units of dust per distribution and per
//! settlement, but it never pays out more than it received.
//!
//! The accumulator is a `u128`, so over the lifetime of a pool it can grow by at most
//! `u128::MAX / SCALE` (about 3.4e20) tokens of reward per unit of stake. A distribution that
//! would push it past that bound, e.g. 4e20 tokens over a single staked unit, is rejected with
//! `ContractMathError` and leaves the pool untouched.

use num_integer::div_rem;

/// How many points is a single token of reward per staked token worth in the accumulator.
pub const SCALE: u128 = 1_000_000_000_000_000_000; // 1*10**18

/// Increase of the accumulator caused by distributing `reward_amount` over `total_staked`.
///
/// Computes `floor(reward_amount * SCALE / total_staked)` without overflowing in the
/// intermediate product. Returns `None` for an empty pool or when the result does not fit.
pub fn accumulator_delta(reward_amount: u128, total_staked: u128) -> Option<u128> {
    if total_staked == 0 {
        return None;
    }

    // reward = whole * total + rest, so reward * SCALE / total = whole * SCALE + rest * SCALE / total
    let (whole, rest) = div_rem(reward_amount, total_staked);
    let fraction = rest.checked_mul(SCALE)? / total_staked;
    whole.checked_mul(SCALE)?.checked_add(fraction)
}

/// Reward owed to a position of size `stake` settled at `settled_at`, given the current
/// value of the accumulator.
///
/// Computes `floor(stake * (accumulator - settled_at) / SCALE)`. The accumulator never goes
/// down, so a snapshot in the future of the accumulator yields `None`.
pub fn owed_reward(stake: u128, accumulator: u128, settled_at: u128) -> Option<u128> {
    let growth = accumulator.checked_sub(settled_at)?;
    if stake == 0 || growth == 0 {
        return Some(0);
    }

    let (whole, fraction) = div_rem(growth, SCALE);
    let partial = fraction.checked_mul(stake)? / SCALE;
    whole.checked_mul(stake)?.checked_add(partial)
}
