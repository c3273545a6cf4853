//! Fixed-width base-2 rendering of unsigned integers.
//!
//! The encoder uses this for the 11-bit exponent field and the 52-bit mantissa
//! field, but nothing here is specific to doubles.

/// Renders the low `width` bits of `value`, most significant bit first.
///
/// Bits above position 63 do not exist in a `u64`, so widths larger than 64 are
/// padded with leading zeros. A width of 0 yields the empty string.
///
/// # Examples
///
/// ```
/// use double_bits::bit_utils::format_bits;
///
/// assert_eq!(format_bits(1023, 11), "01111111111");
/// assert_eq!(format_bits(5, 3), "101");
/// // only the low bits are kept
/// assert_eq!(format_bits(0b1_0000_0000_0001, 11), "00000000001");
/// ```
pub fn format_bits(value: u64, width: usize) -> String {
    (0..width)
        .rev()
        .map(|position| {
            let bit = u32::try_from(position)
                .ok()
                .and_then(|shift| value.checked_shr(shift))
                .map_or(0, |shifted| shifted & 1);
            if bit == 1 { '1' } else { '0' }
        })
        .collect()
}
