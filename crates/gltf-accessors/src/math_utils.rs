//! Integer helpers for buffer layout arithmetic

/// Computes the greatest common divisor (GCD) of two integers using the Euclidean algorithm
///
/// # Examples
/// ```
/// use gltf_accessors::math_utils::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(17, 13), 1);
/// assert_eq!(gcd(0, 5), 5);
/// assert_eq!(gcd(5, 0), 5);
/// ```
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Computes the least common multiple (LCM) of two integers
///
/// # Examples
/// ```
/// use gltf_accessors::math_utils::lcm;
/// assert_eq!(lcm(12, 18), 36);
/// assert_eq!(lcm(4, 2), 4);
/// assert_eq!(lcm(0, 5), 0);
/// ```
pub fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }

    (a / gcd(a, b)) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(1, 4), 1);
        assert_eq!(gcd(4, 2), 2);
        assert_eq!(gcd(12, 8), 4);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(1, 1), 1);
        assert_eq!(lcm(1, 4), 4);
        assert_eq!(lcm(2, 4), 4);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(3, 0), 0);
    }

    #[test]
    fn test_lcm_commutative() {
        for a in 1..20 {
            for b in 1..20 {
                assert_eq!(lcm(a, b), lcm(b, a));
            }
        }
    }
}
