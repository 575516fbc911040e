//! Chain configuration and payment primitives for the TierPay
//! subscription platform.
//!
//! This crate is the chain-facing core of the application. It decides
//! which network the process talks to, which payment tokens are valid
//! there, where the deployed contracts live, and how on-chain integer
//! amounts are rendered for people. It performs no network I/O itself:
//! everything here is configuration resolution and pure data
//! transformation for the RPC, transaction, and rendering layers to
//! consume.
//!
//! Modules:
//! - [`network`]: Resolves the single active network from environment
//!   overrides, with a baked-in default fallback.
//! - [`tokens`]: Static per-network payment-token catalogs with a
//!   guaranteed native-asset fallback.
//! - [`amount`]: Exact conversion between base-unit integers and decimal
//!   display strings.
//! - [`contracts`]: Deployed contract addresses from environment
//!   configuration.
//! - [`selection`]: The controlled payment-token selection contract.
//! - [`tiers`]: Projection of raw subscription tiers into display rows.
//! - [`config`]: The [`AppConfig`] aggregate built once at bootstrap.

pub mod amount;
pub mod config;
pub mod contracts;
pub mod network;
pub mod selection;
pub mod tiers;
pub mod tokens;

pub use amount::{to_base_units, to_display_decimal, MalformedAmount};
pub use config::AppConfig;
pub use contracts::ContractAddresses;
pub use network::{resolve_active_network, NativeCurrency, NetworkDefinition, RpcEndpoints};
pub use selection::{PaymentTokenSelector, SelectionError, TokenOption};
pub use tiers::{project_tiers_for_display, TierDisplayRow, TierRecord};
pub use tokens::{supported_payment_tokens, TokenCatalog, TokenDescriptor};
