/// Euclidean gcd of two unsigned integers.
pub(super) fn gcd_pair(lhs: u32, rhs: u32) -> u32 {
    let mut larger = lhs;
    let mut smaller = rhs;
    while smaller != 0 {
        let remainder = larger % smaller;
        larger = smaller;
        smaller = remainder;
    }
    larger
}
