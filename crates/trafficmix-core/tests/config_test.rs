use std::io::Write;

use trafficmix_core::config::*;
use trafficmix_core::errors::ConfigError;
use trafficmix_core::TimeRange;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MixerConfig::from_toml("").unwrap();

    // Weights defaults
    assert_eq!(config.weights.global_total, 1000);
    assert_eq!(config.weights.empty_pool_policy, EmptyPoolPolicy::EqualSplit);

    // Rate defaults
    assert_eq!(config.rate.idle_decay_secs, 15.0);
    assert_eq!(config.rate.poll_interval_secs, 5);
    assert_eq!(config.rate.default_range, TimeRange::OneHour);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn partial_sections_keep_defaults_for_missing_fields() {
    let config = MixerConfig::from_toml(
        r#"
        [weights]
        empty_pool_policy = "target_absorbs"

        [rate]
        default_range = "15m"
        "#,
    )
    .unwrap();

    assert_eq!(config.weights.global_total, 1000);
    assert_eq!(config.weights.empty_pool_policy, EmptyPoolPolicy::TargetAbsorbs);
    assert_eq!(config.rate.default_range, TimeRange::FifteenMinutes);
    assert_eq!(config.rate.poll_interval_secs, 5);
}

#[test]
fn zero_global_total_is_rejected() {
    let err = MixerConfig::from_toml("[weights]\nglobal_total = 0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "weights.global_total"
    ));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let err = MixerConfig::from_toml("[rate]\npoll_interval_secs = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn negative_idle_decay_is_rejected() {
    let err = MixerConfig::from_toml("[rate]\nidle_decay_secs = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let err = MixerConfig::from_toml("[weights\nglobal_total = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[weights]\nglobal_total = 10000").unwrap();
    let config = MixerConfig::load(file.path()).unwrap();
    assert_eq!(config.weights.global_total, 10_000);

    let missing = file.path().with_extension("missing");
    let err = MixerConfig::load(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = MixerConfig::default();
    config.rate.default_range = TimeRange::SixHours;
    config.weights.global_total = 500;

    let rendered = config.to_toml().unwrap();
    let parsed = MixerConfig::from_toml(&rendered).unwrap();
    assert_eq!(parsed.rate.default_range, TimeRange::SixHours);
    assert_eq!(parsed.weights.global_total, 500);
}

#[test]
fn max_points_follows_poll_interval() {
    let config = RateConfig::default();
    assert_eq!(config.max_points(TimeRange::FiveMinutes), 60);
    assert_eq!(config.max_points(TimeRange::OneHour), 720);

    let coarse = RateConfig {
        poll_interval_secs: 600,
        ..RateConfig::default()
    };
    assert_eq!(coarse.max_points(TimeRange::FiveMinutes), 1);
}
