//! Deployed contract addresses from environment configuration.
//!
//! Deployments move between environments, so the addresses of the
//! platform's contracts are not baked in: they arrive through environment
//! variables at bootstrap. Missing values are a deployment smell, not a
//! programming error. Startup proceeds with empty strings and a warning
//! per missing required key, and the failure surfaces later in the
//! on-chain layer where the address is actually used.

use std::env;

use serde::Serialize;

/// Environment variable locating the subscription manager contract.
pub const ENV_SUBSCRIPTION_MANAGER_ADDRESS: &str = "SUBSCRIPTION_MANAGER_ADDRESS";
/// Environment variable locating the creator registry contract.
pub const ENV_CREATOR_REGISTRY_ADDRESS: &str = "CREATOR_REGISTRY_ADDRESS";
/// Environment variable naming the showcase creator for demo pages.
pub const ENV_DEMO_CREATOR_ADDRESS: &str = "DEMO_CREATOR_ADDRESS";

/// Addresses of the deployed contracts the purchase flow talks to.
///
/// Values are passed through as raw strings; syntactic validation belongs
/// to the on-chain collaborator that builds calls from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    /// Subscription manager contract. Required.
    pub subscription_manager: String,
    /// Creator registry contract. Required.
    pub creator_registry: String,
    /// Showcase creator for demo pages. Optional, empty when unset.
    pub demo_creator: String,
}

impl ContractAddresses {
    /// Read the contract addresses from process environment.
    ///
    /// Emits one warning per missing required key and never fails. Call
    /// once at bootstrap (see [`crate::config::AppConfig`]).
    pub fn from_env() -> Self {
        Self {
            subscription_manager: required_address(ENV_SUBSCRIPTION_MANAGER_ADDRESS),
            creator_registry: required_address(ENV_CREATOR_REGISTRY_ADDRESS),
            demo_creator: optional_address(ENV_DEMO_CREATOR_ADDRESS),
        }
    }

    /// Whether every required address is configured.
    pub fn is_complete(&self) -> bool {
        !self.subscription_manager.is_empty() && !self.creator_registry.is_empty()
    }
}

/// Read a required key, warning when it is unset or empty.
fn required_address(key: &str) -> String {
    let value = env::var(key).unwrap_or_default();
    if value.is_empty() {
        tracing::warn!(
            "{} is not set; on-chain calls that need it will fail until it is configured",
            key
        );
    }
    value
}

/// Read an optional key, defaulting to empty without a diagnostic.
fn optional_address(key: &str) -> String {
    env::var(key).unwrap_or_default()
}
