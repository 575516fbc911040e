//! Active network resolution.
//!
//! The application talks to exactly one EVM network per process. Which one
//! is decided here from two environment overrides, with a baked-in default
//! so a bare environment still boots against a working public testnet.
//!
//! Resolution is total: malformed overrides are reported and treated as
//! absent rather than aborting startup.

use std::env;
use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use serde::Serialize;
use url::Url;

/// Environment variable selecting the active chain id.
pub const ENV_CHAIN_ID: &str = "CHAIN_ID";
/// Environment variable overriding the RPC endpoint.
pub const ENV_RPC_URL: &str = "RPC_URL";

/// Chain id of the conventional local Hardhat network.
pub const HARDHAT_CHAIN_ID: u64 = 31337;
/// Chain id of Base Sepolia, the baked-in default network.
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;
/// Chain id of Base mainnet.
pub const BASE_CHAIN_ID: u64 = 8453;

/// Endpoint a local Hardhat node listens on by convention.
const HARDHAT_RPC_URL: &str = "http://127.0.0.1:8545";
/// Public endpoint of the baked-in default network.
const BASE_SEPOLIA_RPC_URL: &str = "https://sepolia.base.org";

/// The chain's intrinsic currency as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    fn ether() -> Self {
        Self {
            name: "Ether".into(),
            symbol: "ETH".into(),
            decimals: 18,
        }
    }
}

/// RPC endpoints of a network, split by role.
///
/// `default` feeds the application's own RPC client; `public` is what gets
/// handed to third-party tooling such as wallets. Environment overrides
/// fill both roles with the same endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEndpoints {
    pub default: Vec<Url>,
    pub public: Vec<Url>,
}

impl RpcEndpoints {
    /// Fill both roles with a single endpoint.
    pub fn single(url: Url) -> Self {
        Self {
            default: vec![url.clone()],
            public: vec![url],
        }
    }

    /// First endpoint of the default role, if any.
    pub fn primary(&self) -> Option<&Url> {
        self.default.first()
    }
}

/// A blockchain network the application can talk to.
///
/// Exactly one definition is active per process. Resolve it once at
/// bootstrap (see [`crate::config::AppConfig`]) and pass it by reference;
/// nothing here mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDefinition {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Human-readable network name.
    pub name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: RpcEndpoints,
}

impl Display for NetworkDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (chain id {})", self.name, self.chain_id)
    }
}

/// Baked-in default network used when no usable override is present.
static DEFAULT_NETWORK: Lazy<NetworkDefinition> = Lazy::new(|| NetworkDefinition {
    chain_id: BASE_SEPOLIA_CHAIN_ID,
    name: "Base Sepolia".into(),
    native_currency: NativeCurrency::ether(),
    rpc_urls: RpcEndpoints::single(
        Url::parse(BASE_SEPOLIA_RPC_URL).expect("default RPC URL is well-formed"),
    ),
});

/// Resolve the active network from the two environment overrides.
///
/// First rule that matches wins:
/// 1. chain id 31337 selects the local Hardhat network, on the RPC
///    override when one is set and usable, else the conventional
///    loopback endpoint;
/// 2. any other chain id together with a usable RPC URL selects a custom
///    network, the override filling both endpoint roles;
/// 3. everything else falls back to the baked-in default network.
///
/// A chain id without an RPC URL (outside 31337) is not enough to describe
/// a reachable network, so it falls through to the default.
pub fn resolve_active_network(chain_id: Option<u64>, rpc_url: Option<&str>) -> NetworkDefinition {
    let rpc_override = rpc_url
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(parse_rpc_url);

    match chain_id {
        Some(HARDHAT_CHAIN_ID) => {
            let endpoint = rpc_override.unwrap_or_else(|| {
                Url::parse(HARDHAT_RPC_URL).expect("loopback RPC URL is well-formed")
            });
            NetworkDefinition {
                chain_id: HARDHAT_CHAIN_ID,
                name: "Hardhat".into(),
                native_currency: NativeCurrency::ether(),
                rpc_urls: RpcEndpoints::single(endpoint),
            }
        }
        Some(id) => match rpc_override {
            Some(endpoint) => NetworkDefinition {
                chain_id: id,
                name: format!("Custom Network {id}"),
                native_currency: NativeCurrency::ether(),
                rpc_urls: RpcEndpoints::single(endpoint),
            },
            None => DEFAULT_NETWORK.clone(),
        },
        None => DEFAULT_NETWORK.clone(),
    }
}

/// Parse an RPC override, reporting unusable values.
fn parse_rpc_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Ignoring malformed {} '{}': {}", ENV_RPC_URL, raw, e);
            None
        }
    }
}

impl NetworkDefinition {
    /// Resolve the active network from process environment.
    ///
    /// Reads [`ENV_CHAIN_ID`] and [`ENV_RPC_URL`]. A chain id that does not
    /// parse as an integer is reported and treated as unset. Never fails.
    pub fn from_env() -> Self {
        let chain_id = env::var(ENV_CHAIN_ID).ok().and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            match raw.parse::<u64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!("Ignoring non-numeric {} '{}'", ENV_CHAIN_ID, raw);
                    None
                }
            }
        });
        let rpc_url = env::var(ENV_RPC_URL).ok();
        resolve_active_network(chain_id, rpc_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn local_chain_id_selects_hardhat_with_loopback() {
        let network = resolve_active_network(Some(31337), None);
        assert_eq!(network.chain_id, HARDHAT_CHAIN_ID);
        assert_eq!(network.name, "Hardhat");
        assert_eq!(network.rpc_urls.primary(), Some(&url("http://127.0.0.1:8545")));
    }

    #[test]
    fn local_chain_id_honors_rpc_override() {
        let network = resolve_active_network(Some(31337), Some("http://10.0.0.7:9545"));
        assert_eq!(network.chain_id, HARDHAT_CHAIN_ID);
        assert_eq!(network.rpc_urls.primary(), Some(&url("http://10.0.0.7:9545")));
    }

    #[test]
    fn empty_rpc_override_counts_as_absent() {
        let network = resolve_active_network(Some(31337), Some(""));
        assert_eq!(network.rpc_urls.primary(), Some(&url("http://127.0.0.1:8545")));

        let network = resolve_active_network(Some(10), Some("   "));
        assert_eq!(network.chain_id, BASE_SEPOLIA_CHAIN_ID);
    }

    #[test]
    fn custom_network_takes_both_overrides() {
        let network = resolve_active_network(Some(70700), Some("https://rpc.example.com"));
        assert_eq!(network.chain_id, 70700);
        assert_eq!(network.name, "Custom Network 70700");
        assert_eq!(network.rpc_urls.default, vec![url("https://rpc.example.com")]);
        assert_eq!(network.rpc_urls.public, vec![url("https://rpc.example.com")]);
    }

    #[test]
    fn chain_id_alone_is_not_a_custom_network() {
        let network = resolve_active_network(Some(10), None);
        assert_eq!(network.chain_id, BASE_SEPOLIA_CHAIN_ID);
        assert_eq!(network.name, "Base Sepolia");
    }

    #[test]
    fn bare_environment_resolves_the_default() {
        let network = resolve_active_network(None, None);
        assert_eq!(network.chain_id, BASE_SEPOLIA_CHAIN_ID);
        assert_eq!(network.name, "Base Sepolia");
        assert_eq!(network.native_currency.symbol, "ETH");
        assert_eq!(network.native_currency.decimals, 18);
        assert_eq!(network.rpc_urls.primary(), Some(&url("https://sepolia.base.org")));
    }

    #[test]
    fn malformed_rpc_override_falls_through() {
        let network = resolve_active_network(Some(70700), Some("not a url"));
        assert_eq!(network.chain_id, BASE_SEPOLIA_CHAIN_ID);

        let network = resolve_active_network(Some(31337), Some("::::"));
        assert_eq!(network.rpc_urls.primary(), Some(&url("http://127.0.0.1:8545")));
    }

    #[test]
    fn rpc_url_alone_is_ignored() {
        let network = resolve_active_network(None, Some("https://rpc.example.com"));
        assert_eq!(network.chain_id, BASE_SEPOLIA_CHAIN_ID);
        assert_eq!(network.rpc_urls.primary(), Some(&url("https://sepolia.base.org")));
    }

    #[test]
    fn display_names_the_network_and_chain() {
        let network = resolve_active_network(None, None);
        assert_eq!(network.to_string(), "Base Sepolia (chain id 84532)");
    }
}
