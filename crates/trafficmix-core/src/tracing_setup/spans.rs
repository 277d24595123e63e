//! Span definitions per operation: rebalance and ingest.

/// Create a rebalance span. `$level` is `"item"` or `"category"`.
#[macro_export]
macro_rules! rebalance_span {
    ($level:expr, $category:expr, $percent:expr) => {
        $crate::tracing_setup::tracing::debug_span!(
            "trafficmix.rebalance",
            level = $level,
            category = %$category,
            target_percent = $percent
        )
    };
}

/// Create a sample-ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($total_requests:expr) => {
        $crate::tracing_setup::tracing::trace_span!("trafficmix.ingest", total_requests = $total_requests)
    };
}
