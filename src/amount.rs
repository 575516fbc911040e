//! Exact conversion between on-chain base units and decimal display strings.
//!
//! Token amounts live on chain as unsigned integers scaled by a per-token
//! power of ten. Rendering them with floating point silently corrupts the
//! low digits, so both directions here are pure decimal string arithmetic
//! over [`U256`]: formatting never loses a digit, and parsing either yields
//! the exact base-unit value or a [`MalformedAmount`].
//!
//! Round-trip law: for any base-unit value `x` and scale `d`,
//! `to_base_units(&to_display_decimal(x, d), d)` returns `x`.

use alloy::primitives::U256;
use thiserror::Error;

/// Rejections produced by [`to_base_units`].
///
/// Accepted inputs are ASCII decimal strings with at most one `.` separator
/// and no more fractional digits than the token's scale. Everything else is
/// rejected rather than rounded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedAmount {
    /// Input is empty, or a bare `.` with no digits on either side.
    #[error("amount is empty")]
    Empty,
    /// Input contains a character outside `0-9` and `.`.
    #[error("amount contains invalid character '{0}'")]
    InvalidCharacter(char),
    /// Input contains more than one `.` separator.
    #[error("amount contains more than one decimal separator")]
    ExtraSeparator,
    /// The fractional part is finer than the token can represent.
    #[error("amount has {digits} fractional digits but the token allows {decimals}")]
    TooManyFractionalDigits { digits: usize, decimals: u8 },
    /// The scaled value does not fit in a [`U256`].
    #[error("amount exceeds the representable range")]
    Overflow,
}

/// Format a base-unit amount as an exact decimal string.
///
/// `decimals` is the token's power-of-ten scale. The result carries no
/// trailing fractional zeros and no trailing separator: one wei renders as
/// `"0.000000000000000001"`, two ether as `"2"`.
pub fn to_display_decimal(base_units: U256, decimals: u8) -> String {
    let digits = base_units.to_string();
    if decimals == 0 {
        return digits;
    }
    // Pad to at least one whole digit ahead of the fractional part, then
    // split at the scale boundary.
    let width = decimals as usize + 1;
    let padded = format!("{digits:0>width$}");
    let (whole, fraction) = padded.split_at(padded.len() - decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Parse a decimal string into exact base units.
///
/// Inverse of [`to_display_decimal`]. The fractional part may be shorter
/// than `decimals` (it is right-padded with zeros) but never longer, even
/// when the excess digits are zeros: `"1.2300000"` with six decimals is
/// rejected, not trimmed.
pub fn to_base_units(input: &str, decimals: u8) -> Result<U256, MalformedAmount> {
    if input.is_empty() {
        return Err(MalformedAmount::Empty);
    }
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.contains('.') {
                return Err(MalformedAmount::ExtraSeparator);
            }
            (whole, fraction)
        }
        None => (input, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(MalformedAmount::Empty);
    }
    if let Some(bad) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(MalformedAmount::InvalidCharacter(bad));
    }
    if fraction.len() > decimals as usize {
        return Err(MalformedAmount::TooManyFractionalDigits {
            digits: fraction.len(),
            decimals,
        });
    }
    let mut scaled = String::with_capacity(whole.len() + decimals as usize);
    scaled.push_str(whole);
    scaled.push_str(fraction);
    for _ in fraction.len()..decimals as usize {
        scaled.push('0');
    }
    U256::from_str_radix(&scaled, 10).map_err(|_| MalformedAmount::Overflow)
}
