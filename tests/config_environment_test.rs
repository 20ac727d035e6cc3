// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates defaults, overrides and rejection of malformed environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use yellowpages::config::environment::{DirectoryConfig, Environment};
use yellowpages::intelligence::NavigationProvider;
use yellowpages::logging::LoggingConfig;

const VARS: [&str; 8] = [
    "YP_API_BASE_URL",
    "YP_HTTP_TIMEOUT_SECS",
    "YP_HTTP_CONNECT_TIMEOUT_SECS",
    "YP_DEFAULT_RADIUS_KM",
    "YP_NAVIGATION_PROVIDER",
    "YP_STORAGE_PATH",
    "YP_RECENT_LIMIT",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert!(Environment::from_str_or_default("prod").is_production());
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
#[serial]
fn test_defaults_with_empty_environment() {
    clear_env();
    let config = DirectoryConfig::from_env().unwrap();

    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.api.timeout, Duration::from_secs(30));
    assert_eq!(config.api.connect_timeout, Duration::from_secs(10));
    assert!((config.default_radius_km - 10.0).abs() < f64::EPSILON);
    assert_eq!(config.navigation_provider, NavigationProvider::Google);
    assert_eq!(config.recent_limit, 10);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.storage_path.ends_with("yellowpages/storage.json"));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("YP_API_BASE_URL", "https://directory.example.com/api/");
    env::set_var("YP_HTTP_TIMEOUT_SECS", "5");
    env::set_var("YP_DEFAULT_RADIUS_KM", "2.5");
    env::set_var("YP_NAVIGATION_PROVIDER", "OSM");
    env::set_var("YP_STORAGE_PATH", "/tmp/yp-test/state.json");
    env::set_var("YP_RECENT_LIMIT", "3");
    env::set_var("ENVIRONMENT", "production");

    let config = DirectoryConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api.base_url, "https://directory.example.com/api/");
    assert_eq!(config.api.timeout, Duration::from_secs(5));
    assert!((config.default_radius_km - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.navigation_provider, NavigationProvider::Osm);
    assert_eq!(
        config.storage_path,
        PathBuf::from("/tmp/yp-test/state.json")
    );
    assert_eq!(config.recent_limit, 3);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_malformed_values_name_the_variable() {
    let cases = [
        ("YP_API_BASE_URL", "not a url"),
        ("YP_HTTP_TIMEOUT_SECS", "soon"),
        ("YP_DEFAULT_RADIUS_KM", "-1"),
        ("YP_DEFAULT_RADIUS_KM", "wide"),
        ("YP_NAVIGATION_PROVIDER", "waze"),
        ("YP_RECENT_LIMIT", "-3"),
    ];

    for (var, value) in cases {
        clear_env();
        env::set_var(var, value);
        let err = DirectoryConfig::from_env().unwrap_err();
        assert!(
            format!("{err:#}").contains(var),
            "{var}={value} gave: {err:#}"
        );
    }
    clear_env();
}

#[test]
#[serial]
fn test_logging_and_config_agree_on_environment() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");

    let config = DirectoryConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env();
    clear_env();

    assert_eq!(logging.environment, config.environment);
    assert!(logging.environment.is_production());
    assert!(logging.include_location);
}
