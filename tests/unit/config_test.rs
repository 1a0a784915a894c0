//! Tests for config loading

use std::path::Path;

use pcshop::config::{ConfigError, ShopConfig};
use pcshop::core::models::{Money, RemovalPolicy};
use pcshop::paths::CONFIG_ENV;
use serial_test::serial;

use crate::common::TestDir;

/// Sets `PCSHOP_CONFIG` for the duration of a test
struct EnvGuard;

impl EnvGuard {
    fn set(value: &Path) -> Self {
        // SAFETY: every test touching the environment runs under #[serial]
        unsafe { std::env::set_var(CONFIG_ENV, value) };
        Self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set
        unsafe { std::env::remove_var(CONFIG_ENV) };
    }
}

#[test]
fn test_empty_config_is_default() {
    let config = ShopConfig::from_toml("", Path::new("config.toml")).unwrap();
    assert_eq!(config, ShopConfig::default());
    assert_eq!(config.cart.removal, RemovalPolicy::FailFast);
    assert!(!config.catalog.strict_categories);
}

#[test]
fn test_full_config() {
    let toml = r#"
[customer]
name = "Ada"
budget = 1500.50

[catalog]
strict_categories = true

[cart]
removal = "all-or-nothing"
"#;
    let config = ShopConfig::from_toml(toml, Path::new("config.toml")).unwrap();
    assert_eq!(config.customer.name.as_deref(), Some("Ada"));
    assert_eq!(config.customer.budget, Some(Money::from_cents(150_050)));
    assert!(config.catalog.strict_categories);
    assert_eq!(config.cart.removal, RemovalPolicy::AllOrNothing);
}

#[test]
fn test_removal_policy_accepts_cli_spellings() {
    for (value, expected) in [
        ("fail-fast", RemovalPolicy::FailFast),
        ("failfast", RemovalPolicy::FailFast),
        ("all-or-nothing", RemovalPolicy::AllOrNothing),
        ("All_Or_Nothing", RemovalPolicy::AllOrNothing),
        ("atomic", RemovalPolicy::AllOrNothing),
    ] {
        let toml = format!("[cart]\nremoval = \"{value}\"\n");
        let config = ShopConfig::from_toml(&toml, Path::new("config.toml")).unwrap();
        assert_eq!(config.cart.removal, expected, "{value}");
    }
}

#[test]
fn test_removal_policy_serializes_kebab_case() {
    let config = ShopConfig {
        cart: pcshop::config::CartConfig {
            removal: RemovalPolicy::AllOrNothing,
        },
        ..ShopConfig::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("removal = \"all-or-nothing\""));
}

#[test]
fn test_invalid_removal_policy() {
    let toml = "[cart]\nremoval = \"sometimes\"\n";
    let err = ShopConfig::from_toml(toml, Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_load_explicit_file() {
    let dir = TestDir::new();
    let path = dir.write("shop.toml", "[customer]\nname = \"Grace\"\n");
    let config = ShopConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.customer.name.as_deref(), Some("Grace"));
}

#[test]
fn test_load_missing_explicit_file() {
    let dir = TestDir::new();
    let err = ShopConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
#[serial]
fn test_env_var_names_config() {
    let dir = TestDir::new();
    let path = dir.write("env.toml", "[cart]\nremoval = \"atomic\"\n");
    let _guard = EnvGuard::set(&path);

    let config = ShopConfig::load(None).unwrap();
    assert_eq!(config.cart.removal, RemovalPolicy::AllOrNothing);
}

#[test]
#[serial]
fn test_explicit_path_beats_env_var() {
    let dir = TestDir::new();
    let env_path = dir.write("env.toml", "[customer]\nname = \"Env\"\n");
    let flag_path = dir.write("flag.toml", "[customer]\nname = \"Flag\"\n");
    let _guard = EnvGuard::set(&env_path);

    let config = ShopConfig::load(Some(flag_path.as_path())).unwrap();
    assert_eq!(config.customer.name.as_deref(), Some("Flag"));
}
