//! Rendering helpers for balances and hashes.

use rust_decimal::Decimal;

/// Largest scale `rust_decimal` supports
const MAX_DECIMAL_SCALE: u32 = 28;

/// Scales a raw balance by the chain's token decimals.
///
/// `12_345_000_000` planck with 10 decimals renders as `1.2345`. Balances or scales
/// too large for a `Decimal` fall back to the raw integer followed by the exponent.
pub fn format_balance(raw: u128, decimals: u32) -> String {
	if decimals > MAX_DECIMAL_SCALE {
		return format!("{}e-{}", raw, decimals);
	}
	i128::try_from(raw)
		.ok()
		.and_then(|raw| Decimal::try_from_i128_with_scale(raw, decimals).ok())
		.map(|amount| amount.normalize().to_string())
		.unwrap_or_else(|| format!("{}e-{}", raw, decimals))
}

/// Renders bytes as a `0x` prefixed lowercase hex string
pub fn format_hash(bytes: impl AsRef<[u8]>) -> String {
	format!("0x{}", hex::encode(bytes))
}
