//! Fixed-point rendering of integer token amounts.
//!
//! Works on the decimal digit string of the raw amount, so any `decimals`
//! value and any 256-bit amount renders exactly. Display only: the output is
//! rounded and must never be fed back into on-chain amounts.

use alloy_primitives::U256;

/// Scale `amount` down by `10^decimals` and render with exactly `precision`
/// fractional digits, rounding half up.
///
/// ```text
/// format_units(1_500_000, 6, 2)  -> "1.50"
/// format_units(1, 18, 6)         -> "0.000000"
/// format_units(999_999_5, 7, 6)  -> "1.000000"
/// ```
pub fn format_units(amount: &U256, decimals: u32, precision: usize) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;

    // Below half a unit of the last displayed digit: rounds to zero.
    if decimals > digits.len() + precision {
        return zero(precision);
    }

    // Left-pad so there is at least one integer digit.
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let split = padded.len() - decimals;
    let (int_part, frac_part) = padded.split_at(split);

    let mut frac: String = frac_part.chars().take(precision).collect();
    while frac.len() < precision {
        frac.push('0');
    }

    let round_up = frac_part
        .as_bytes()
        .get(precision)
        .map(|d| *d >= b'5')
        .unwrap_or(false);

    let mut kept = format!("{}{}", int_part, frac);
    if round_up {
        kept = increment_digits(&kept);
    }

    let split = kept.len() - precision;
    let (int_out, frac_out) = kept.split_at(split);
    if precision == 0 {
        int_out.to_string()
    } else {
        format!("{}.{}", int_out, frac_out)
    }
}

fn zero(precision: usize) -> String {
    if precision == 0 {
        "0".to_string()
    } else {
        format!("0.{}", "0".repeat(precision))
    }
}

/// Add one to an ASCII decimal digit string, growing it on carry-out.
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8(bytes).unwrap_or_default();
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8(bytes).unwrap_or_default());
    out
}
