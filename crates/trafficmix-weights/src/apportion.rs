//! Integer apportionment.
//!
//! Every function here returns shares that sum to exactly the requested
//! target: quotas are floored, then the leftover units go to the largest
//! fractional remainders (earlier entries win ties).

use trafficmix_core::config::EmptyPoolPolicy;
use trafficmix_core::constants::PERCENT_SCALE;

/// Split `target` across `weights` in proportion to each weight.
/// An all-zero pool is split evenly.
pub(crate) fn apportion(weights: &[u64], target: u64) -> Vec<u64> {
    if weights.is_empty() {
        return Vec::new();
    }
    let sum: u128 = weights.iter().map(|&w| u128::from(w)).sum();
    if sum == 0 {
        return equal_split(weights.len(), target);
    }

    let target_wide = u128::from(target);
    let mut shares = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    let mut assigned: u128 = 0;
    for (index, &weight) in weights.iter().enumerate() {
        let numerator = u128::from(weight) * target_wide;
        let share = numerator / sum;
        assigned += share;
        shares.push(share as u64);
        remainders.push((numerator % sum, index));
    }

    // Fewer leftover units than entries with a non-zero remainder, so
    // zero-weight entries never receive one.
    let leftover = (target_wide - assigned) as usize;
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for &(_, index) in remainders.iter().take(leftover) {
        shares[index] += 1;
    }
    shares
}

/// Split `target` into `count` near-equal shares.
pub(crate) fn equal_split(count: usize, target: u64) -> Vec<u64> {
    if count == 0 {
        return Vec::new();
    }
    let base = target / count as u64;
    let extra = (target % count as u64) as usize;
    (0..count)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Hand `freed` weight to a pool whose current weights are `pool`.
pub(crate) fn redistribute(pool: &[u64], freed: u64, policy: EmptyPoolPolicy) -> Vec<u64> {
    if pool.iter().any(|&w| w > 0) {
        return apportion(pool, freed);
    }
    match policy {
        EmptyPoolPolicy::EqualSplit => equal_split(pool.len(), freed),
        EmptyPoolPolicy::TargetAbsorbs => vec![0; pool.len()],
    }
}

/// `percent` of `total`, rounded half away from zero. `percent` must already
/// be clamped to `[0, 100]`.
pub(crate) fn percent_of(percent: f64, total: u64) -> u64 {
    let value = (percent / PERCENT_SCALE * total as f64).round() as u64;
    value.min(total)
}
