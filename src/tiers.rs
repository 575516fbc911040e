//! Display projection of on-chain subscription tiers.
//!
//! Tier records come off the chain with integer prices and second-granular
//! durations. The comparison table wants decimal prices, day-granular
//! durations, and metadata that fits a row. The projection here is pure:
//! rows out, inputs untouched, no formatting decisions left to the
//! rendering layer.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::amount::to_display_decimal;

/// Seconds per display day.
const SECONDS_PER_DAY: u64 = 86_400;
/// Metadata URIs longer than this are shortened for table rows.
const METADATA_DISPLAY_LIMIT: usize = 48;
/// Characters kept ahead of the ellipsis when shortening.
const METADATA_TRUNCATED_LEN: usize = 45;

/// A subscription tier as read from the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRecord {
    /// On-chain tier identifier, passed through unchanged for row keys.
    pub id: u64,
    /// Price in native-asset base units.
    pub price: U256,
    /// Subscription length in seconds.
    pub duration_secs: u64,
    /// Tier metadata URI, possibly empty.
    pub metadata_uri: String,
}

/// A display-ready row of the tier comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDisplayRow {
    pub id: u64,
    /// Exact decimal price in the native asset, e.g. `"1.5"`.
    pub price: String,
    /// Day-granular duration, e.g. `"1 day"` or `"30 days"`.
    pub duration: String,
    /// Metadata URI, shortened to fit a table row.
    pub metadata: String,
}

/// Project raw tiers into comparison-table rows, preserving order.
///
/// Prices are denominated in the native asset (18 decimals). Durations
/// render at day granularity and never below one day, so short promotional
/// tiers still show as `"1 day"`. An empty slice projects to no rows.
pub fn project_tiers_for_display(tiers: &[TierRecord]) -> Vec<TierDisplayRow> {
    tiers
        .iter()
        .map(|tier| TierDisplayRow {
            id: tier.id,
            price: to_display_decimal(tier.price, 18),
            duration: format_duration_days(tier.duration_secs),
            metadata: shorten_metadata(&tier.metadata_uri),
        })
        .collect()
}

fn format_duration_days(duration_secs: u64) -> String {
    let days = (duration_secs / SECONDS_PER_DAY).max(1);
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Shorten long metadata to its first 45 characters plus an ellipsis.
/// Counted in characters, not bytes, so multibyte URIs stay intact.
fn shorten_metadata(uri: &str) -> String {
    if uri.chars().count() <= METADATA_DISPLAY_LIMIT {
        uri.to_string()
    } else {
        let mut shortened: String = uri.chars().take(METADATA_TRUNCATED_LEN).collect();
        shortened.push('…');
        shortened
    }
}
