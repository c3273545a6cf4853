use std::mem;

/// Stein's binary gcd of two unsigned integers.
///
/// Common factors of two are counted once up front and restored at the end;
/// the loop only ever subtracts odd values.
pub(super) fn gcd_pair(lhs: u32, rhs: u32) -> u32 {
    if lhs == 0 {
        return rhs;
    }
    if rhs == 0 {
        return lhs;
    }

    let shift = (lhs | rhs).trailing_zeros();
    let mut odd = lhs >> lhs.trailing_zeros();
    let mut other = rhs;

    loop {
        other >>= other.trailing_zeros();
        if odd > other {
            mem::swap(&mut odd, &mut other);
        }
        other -= odd;
        if other == 0 {
            break;
        }
    }

    odd << shift
}
