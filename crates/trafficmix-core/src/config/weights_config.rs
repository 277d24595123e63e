use serde::{Deserialize, Serialize};

use super::defaults;

/// What a rebalance does with freed weight when the receiving pool is all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPoolPolicy {
    /// Split the freed weight evenly across the pool.
    #[default]
    EqualSplit,
    /// Leave the pool at zero; the edited entry keeps everything.
    TargetAbsorbs,
}

/// Weight hierarchy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    /// Sum all item weights must add up to once a tree is settled.
    pub global_total: u64,
    /// Redistribution policy for zero-weight sibling pools.
    pub empty_pool_policy: EmptyPoolPolicy,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            global_total: defaults::DEFAULT_GLOBAL_TOTAL,
            empty_pool_policy: EmptyPoolPolicy::default(),
        }
    }
}
