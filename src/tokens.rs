//! Per-network payment token catalogs.
//!
//! Each supported network carries a fixed, ordered list of tokens the
//! purchase flow accepts. Catalogs are baked in as statics and handed out
//! as [`TokenCatalog`] views, so lookups never allocate and repeated calls
//! for the same network return the same backing slice.
//!
//! The native asset appears in every catalog under the zero-address
//! sentinel, which keeps the rest of the system on a single code path:
//! a network nobody listed still offers at least its intrinsic currency.

use std::ops::Deref;

use alloy::primitives::{address, Address};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::network::{BASE_CHAIN_ID, BASE_SEPOLIA_CHAIN_ID, HARDHAT_CHAIN_ID};

/// A payment token accepted for subscription purchases on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    /// Contract address, or [`Address::ZERO`] for the native asset.
    pub address: Address,
    /// Ticker symbol shown in selection widgets.
    pub symbol: String,
    /// Human-readable display name.
    pub name: String,
    /// Power-of-ten scale between base units and display units.
    pub decimals: u8,
    /// True for the chain's intrinsic currency.
    pub is_native: bool,
}

/// The native asset entry shared by every catalog.
static NATIVE_ETH: Lazy<TokenDescriptor> = Lazy::new(|| TokenDescriptor {
    address: Address::ZERO,
    symbol: "ETH".into(),
    name: "Ether".into(),
    decimals: 18,
    is_native: true,
});

/// Fallback catalog for networks without a dedicated table.
static NATIVE_ONLY: Lazy<Vec<TokenDescriptor>> = Lazy::new(|| vec![NATIVE_ETH.clone()]);

/// Local Hardhat deployments. The USDC address is the first contract a
/// fresh Hardhat node assigns, matching the local deploy scripts.
static HARDHAT_TOKENS: Lazy<Vec<TokenDescriptor>> = Lazy::new(|| {
    vec![
        NATIVE_ETH.clone(),
        TokenDescriptor {
            address: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            symbol: "USDC".into(),
            name: "USD Coin (local)".into(),
            decimals: 6,
            is_native: false,
        },
    ]
});

static BASE_SEPOLIA_TOKENS: Lazy<Vec<TokenDescriptor>> = Lazy::new(|| {
    vec![
        NATIVE_ETH.clone(),
        TokenDescriptor {
            address: address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
            symbol: "USDC".into(),
            name: "USDC".into(),
            decimals: 6,
            is_native: false,
        },
    ]
});

static BASE_TOKENS: Lazy<Vec<TokenDescriptor>> = Lazy::new(|| {
    vec![
        NATIVE_ETH.clone(),
        TokenDescriptor {
            address: address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
            symbol: "USDC".into(),
            name: "USD Coin".into(),
            decimals: 6,
            is_native: false,
        },
    ]
});

/// Ordered, immutable view of one network's payment tokens.
///
/// A cheap copyable handle over a static slice. Catalogs are never empty
/// and carry exactly one native entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TokenCatalog(&'static [TokenDescriptor]);

impl TokenCatalog {
    /// The catalog's native asset entry.
    pub fn native(&self) -> &'static TokenDescriptor {
        self.0
            .iter()
            .find(|token| token.is_native)
            .expect("catalog contains a native entry by construction")
    }

    /// Look up a token by address.
    pub fn by_address(&self, address: Address) -> Option<&'static TokenDescriptor> {
        self.0.iter().find(|token| token.address == address)
    }

    /// Whether `address` identifies a token in this catalog.
    pub fn contains(&self, address: Address) -> bool {
        self.by_address(address).is_some()
    }
}

impl Deref for TokenCatalog {
    type Target = [TokenDescriptor];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Payment tokens accepted on the given network, in display order.
///
/// Unknown chain ids are not an error: they yield the shared native-only
/// fallback catalog, and the same slice every call.
pub fn supported_payment_tokens(chain_id: u64) -> TokenCatalog {
    match chain_id {
        HARDHAT_CHAIN_ID => TokenCatalog(HARDHAT_TOKENS.as_slice()),
        BASE_SEPOLIA_CHAIN_ID => TokenCatalog(BASE_SEPOLIA_TOKENS.as_slice()),
        BASE_CHAIN_ID => TokenCatalog(BASE_TOKENS.as_slice()),
        _ => TokenCatalog(NATIVE_ONLY.as_slice()),
    }
}
