/*!
 * Tests for app configuration functionality
 */

use reblocker::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.block_length_minutes, 5);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test minutes-to-milliseconds conversion
#[test]
fn test_target_duration_ms_withMinutes_shouldConvert() {
    let config = Config {
        block_length_minutes: 10,
        ..Config::default()
    };

    assert_eq!(config.target_duration_ms(), 600_000);
}

/// Test validation rejects a zero block length
#[test]
fn test_validate_withZeroBlockLength_shouldFail() {
    let config = Config {
        block_length_minutes: 0,
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

/// Test deserializing a config file with defaults filled in
#[test]
fn test_deserialize_withPartialJson_shouldApplyDefaults() {
    let config: Config = serde_json::from_str(r#"{"block_length_minutes": 15}"#).unwrap();
    assert_eq!(config.block_length_minutes, 15);
    assert_eq!(config.log_level, LogLevel::Info);

    let config: Config = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
    assert_eq!(config.block_length_minutes, 5);
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test config serializes and round-trips through JSON
#[test]
fn test_serialize_withConfig_shouldRoundTrip() {
    let config = Config {
        block_length_minutes: 7,
        log_level: LogLevel::Warn,
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.block_length_minutes, 7);
    assert_eq!(parsed.log_level, LogLevel::Warn);
}
