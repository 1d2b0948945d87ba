//! Exact integer rounding of amounts.
//!
//! Every fund-affecting computation stays in `u64` smallest units. The only
//! floating-free conversion to text lives in [`format_amount`], which is a
//! display helper.

use crate::constants::COIN;

/// Round `amount` up to the next multiple of `granularity`.
///
/// Returns `None` if `granularity` is zero or the result overflows `u64`.
///
/// # Examples
///
/// ```
/// use sigma_core::amount::round_up;
/// assert_eq!(round_up(11, 10), Some(20));
/// assert_eq!(round_up(20, 10), Some(20));
/// assert_eq!(round_up(u64::MAX, 10), None);
/// ```
pub fn round_up(amount: u64, granularity: u64) -> Option<u64> {
    if granularity == 0 {
        return None;
    }
    let rem = amount % granularity;
    if rem == 0 {
        Some(amount)
    } else {
        amount.checked_add(granularity - rem)
    }
}

/// Render an amount as a decimal coin string with trailing zeros trimmed.
///
/// ```
/// use sigma_core::amount::format_amount;
/// use sigma_core::constants::COIN;
/// assert_eq!(format_amount(111 * COIN + 75 * COIN / 100), "111.75");
/// assert_eq!(format_amount(3 * COIN), "3");
/// ```
pub fn format_amount(amount: u64) -> String {
    let whole = amount / COIN;
    let frac = amount % COIN;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:08}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
