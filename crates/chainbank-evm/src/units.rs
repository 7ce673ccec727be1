//! Ether/wei conversion helpers.
//!
//! Both contracts use the fixed 18-decimal convention: amounts cross the
//! wire as base-unit (wei) integers and are shown to users as decimal
//! ether strings.
//!
//! Parsing validates before delegating to alloy: `parse_ether` on its own
//! accepts empty input, silently truncates sub-wei digits, and wraps
//! negative amounts through two's complement into huge `U256` values —
//! none of which may reach the `value` field of a transaction.

use alloy::primitives::utils::{format_ether, parse_ether, UnitsError};
use alloy::primitives::U256;
use thiserror::Error;

/// Errors from parsing a decimal ether amount.
#[derive(Debug, Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("negative amount: {0}")]
    Negative(String),
    #[error("malformed amount: {0}")]
    Malformed(String),
    #[error("more than 18 fractional digits: {0}")]
    ExcessPrecision(String),
    #[error("unit conversion error: {0}")]
    Units(#[from] UnitsError),
}

/// Parse a decimal ether string into base units.
///
/// Accepts plain decimals only: digits, at most one `.`, at most 18
/// fractional digits. Signs are rejected — amounts are magnitudes here.
pub fn to_wei(amount: &str) -> Result<U256, AmountError> {
    let s = amount.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    if s.starts_with('-') {
        return Err(AmountError::Negative(s.to_string()));
    }
    if s == "." {
        return Err(AmountError::Malformed(s.to_string()));
    }

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed(s.to_string()));
    }
    if frac.len() > 18 {
        return Err(AmountError::ExcessPrecision(s.to_string()));
    }

    // Normalize ".5" and "1." before handing off to alloy.
    let whole = if whole.is_empty() { "0" } else { whole };
    let wei = if frac.is_empty() {
        parse_ether(whole)?
    } else {
        parse_ether(&format!("{whole}.{frac}"))?
    };
    Ok(wei)
}

/// Format a base-unit amount as a decimal ether string.
pub fn from_wei(amount: U256) -> String {
    format_ether(amount)
}
