//! Integration tests for environment-driven configuration bootstrap.
//!
//! These drive the public API end to end: set the environment, resolve an
//! [`AppConfig`], and check what a consumer would observe. Tests that touch
//! the environment serialize on one lock because the process environment is
//! shared state.

use std::env;
use std::sync::Mutex;

use url::Url;

use tierpay::contracts::{
    ENV_CREATOR_REGISTRY_ADDRESS, ENV_DEMO_CREATOR_ADDRESS, ENV_SUBSCRIPTION_MANAGER_ADDRESS,
};
use tierpay::network::{BASE_SEPOLIA_CHAIN_ID, ENV_CHAIN_ID, ENV_RPC_URL, HARDHAT_CHAIN_ID};
use tierpay::tokens::supported_payment_tokens;
use tierpay::AppConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EnvOverride {
    key: &'static str,
    original: Option<String>,
}

impl EnvOverride {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            original: env::var(key).ok(),
        }
    }

    fn set(&self, value: &str) {
        unsafe { env::set_var(self.key, value) };
    }

    fn clear(&self) {
        unsafe { env::remove_var(self.key) };
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}

/// Capture every configuration key so each test starts from a clean slate.
fn scrubbed_env() -> Vec<EnvOverride> {
    let overrides = vec![
        EnvOverride::new(ENV_CHAIN_ID),
        EnvOverride::new(ENV_RPC_URL),
        EnvOverride::new(ENV_SUBSCRIPTION_MANAGER_ADDRESS),
        EnvOverride::new(ENV_CREATOR_REGISTRY_ADDRESS),
        EnvOverride::new(ENV_DEMO_CREATOR_ADDRESS),
    ];
    for var in &overrides {
        var.clear();
    }
    overrides
}

#[test]
fn local_development_environment_boots_against_hardhat() {
    let _guard = ENV_LOCK.lock().unwrap();
    let env = scrubbed_env();
    env[0].set("31337");

    let config = AppConfig::from_env();
    assert_eq!(config.network.chain_id, HARDHAT_CHAIN_ID);
    assert_eq!(config.network.name, "Hardhat");
    assert_eq!(
        config.network.rpc_urls.primary(),
        Some(&Url::parse("http://127.0.0.1:8545").unwrap())
    );

    // Contracts were never configured: startup still succeeds, degraded.
    assert_eq!(config.contracts.subscription_manager, "");
    assert!(!config.contracts.is_complete());
}

#[test]
fn custom_network_environment_is_honored() {
    let _guard = ENV_LOCK.lock().unwrap();
    let env = scrubbed_env();
    env[0].set("70700");
    env[1].set("https://rpc.tierpay.dev");

    let config = AppConfig::from_env();
    assert_eq!(config.network.chain_id, 70700);
    assert_eq!(config.network.name, "Custom Network 70700");
    let endpoint = Url::parse("https://rpc.tierpay.dev").unwrap();
    assert_eq!(config.network.rpc_urls.default, vec![endpoint.clone()]);
    assert_eq!(config.network.rpc_urls.public, vec![endpoint]);
}

#[test]
fn bare_environment_boots_against_the_default_network() {
    let _guard = ENV_LOCK.lock().unwrap();
    let _env = scrubbed_env();

    let config = AppConfig::from_env();
    assert_eq!(config.network.chain_id, BASE_SEPOLIA_CHAIN_ID);
    assert_eq!(config.network.name, "Base Sepolia");
    assert_eq!(config.network.native_currency.decimals, 18);
}

#[test]
fn unusable_overrides_degrade_to_the_default_network() {
    let _guard = ENV_LOCK.lock().unwrap();
    let env = scrubbed_env();
    env[0].set("mainnet");
    env[1].set("not a url");

    let config = AppConfig::from_env();
    assert_eq!(config.network.chain_id, BASE_SEPOLIA_CHAIN_ID);
}

#[test]
fn contract_addresses_flow_into_the_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    let env = scrubbed_env();
    env[2].set("0x1000000000000000000000000000000000000001");
    env[3].set("0x2000000000000000000000000000000000000002");

    let config = AppConfig::from_env();
    assert_eq!(
        config.contracts.subscription_manager,
        "0x1000000000000000000000000000000000000001"
    );
    assert_eq!(
        config.contracts.creator_registry,
        "0x2000000000000000000000000000000000000002"
    );
    assert_eq!(config.contracts.demo_creator, "");
    assert!(config.contracts.is_complete());
}

#[test]
fn resolved_config_serializes_with_camel_case_keys() {
    let _guard = ENV_LOCK.lock().unwrap();
    let env = scrubbed_env();
    env[0].set("31337");

    let config = AppConfig::from_env();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["network"]["chainId"], 31337);
    assert_eq!(json["network"]["name"], "Hardhat");
    assert_eq!(json["network"]["nativeCurrency"]["symbol"], "ETH");
    assert_eq!(json["network"]["rpcUrls"]["default"][0], "http://127.0.0.1:8545/");
    assert!(json["contracts"]["subscriptionManager"].is_string());
}

#[test]
fn catalog_for_the_resolved_network_is_ready_to_render() {
    let _guard = ENV_LOCK.lock().unwrap();
    let env = scrubbed_env();
    env[0].set("31337");

    let config = AppConfig::from_env();
    let catalog = supported_payment_tokens(config.network.chain_id);
    assert!(catalog.len() >= 2);
    assert_eq!(catalog.native().symbol, "ETH");
}
