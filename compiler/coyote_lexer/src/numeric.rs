//! Numeric literal helpers.
//!
//! Zero-allocation parsing for digit runs with `_` separators, plus the
//! colour byte reordering.

/// Parse an integer in `radix`, skipping underscores.
///
/// Returns `None` on overflow or on a digit outside the radix.
#[inline]
pub(crate) fn parse_int_skip_underscores(s: &str, radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

/// Parse a decimal float such as `1.5`, `.5` or `1.`, skipping underscores.
///
/// Only allocates when underscores are present.
#[inline]
pub(crate) fn parse_float_skip_underscores(s: &str) -> Option<f64> {
    if s.contains('_') {
        s.replace('_', "").parse().ok()
    } else {
        s.parse().ok()
    }
}

/// Number of digits in `s`, not counting `_` separators.
#[inline]
pub(crate) fn count_digits(s: &str) -> usize {
    s.bytes().filter(|&b| b != b'_').count()
}

/// Reorder a `0xRRGGBB` value into the runtime's `0xBBGGRR` packing.
#[inline]
pub(crate) const fn swap_colour(rgb: u64) -> u64 {
    ((rgb >> 16) & 0xFF) | (rgb & 0xFF00) | ((rgb & 0xFF) << 16)
}

#[cfg(test)]
mod tests;
