//! TierPay configuration doctor.
//!
//! This binary resolves the same chain configuration the application boots
//! with and reports it: the active network, its payment-token catalog, and
//! the deployed contract addresses. Run it when wiring a new deployment
//! environment so missing values surface as warnings here instead of as
//! failed transactions later.
//!
//! The resolved configuration is printed to stdout as JSON; diagnostics go
//! to stderr through tracing. The doctor always exits zero, matching the
//! degrade-with-warnings contract of the configuration itself.
//!
//! Environment:
//! - `.env` values loaded at startup
//! - `CHAIN_ID`, `RPC_URL` select the active network (local, custom, or
//!   the baked-in default)
//! - `SUBSCRIPTION_MANAGER_ADDRESS`, `CREATOR_REGISTRY_ADDRESS`,
//!   `DEMO_CREATOR_ADDRESS` locate the deployed contracts
//! - `RUST_LOG` adjusts diagnostic verbosity

use dotenvy::dotenv;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tierpay::tokens::{supported_payment_tokens, TokenCatalog};
use tierpay::AppConfig;

/// Everything the doctor reports, as one serializable summary.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigReport<'a> {
    #[serde(flatten)]
    config: &'a AppConfig,
    payment_tokens: TokenCatalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    let tokens = supported_payment_tokens(config.network.chain_id);

    tracing::info!("Active network: {}", config.network);
    for token in tokens.iter() {
        tracing::info!(
            "Payment token: {} ({}, {} decimals)",
            token.symbol,
            token.address,
            token.decimals
        );
    }
    if !config.contracts.is_complete() {
        tracing::warn!("Contract address configuration is incomplete; see warnings above");
    }

    let report = ConfigReport {
        config: &config,
        payment_tokens: tokens,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
