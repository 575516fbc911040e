//! Process-wide application configuration.
//!
//! All environment reads funnel through one bootstrap call instead of
//! module-level singletons resolved on first touch. The entrypoint builds
//! a single [`AppConfig`] and hands it down by reference, which pins when
//! configuration is read, keeps exactly one network active per process,
//! and lets tests construct alternative configurations directly.

use serde::Serialize;

use crate::contracts::ContractAddresses;
use crate::network::NetworkDefinition;

/// Configuration resolved once at application bootstrap.
///
/// Nothing here mutates after construction, so shared read access across
/// threads needs no synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// The single active network.
    pub network: NetworkDefinition,
    /// Deployed contract addresses.
    pub contracts: ContractAddresses,
}

impl AppConfig {
    /// Resolve configuration from process environment.
    ///
    /// Reads the network overrides (`CHAIN_ID`, `RPC_URL`) and the contract
    /// address keys. Never fails: every absence degrades per the module
    /// contracts, with warnings where the value was required.
    pub fn from_env() -> Self {
        Self {
            network: NetworkDefinition::from_env(),
            contracts: ContractAddresses::from_env(),
        }
    }
}
