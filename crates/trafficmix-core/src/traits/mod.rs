pub mod rate_aggregator;
pub mod rebalancer;

pub use rate_aggregator::IRateAggregator;
pub use rebalancer::IRebalancer;
