/// Integer square root, Babylonian method (rounds down)
///
/// Used for first-deposit share issuance: the geometric mean of the two
/// deposited amounts prices the initial shares independently of the
/// deposit ratio.
pub fn sqrt(y: i128) -> i128 {
    if y < 0 {
        panic!("Negative input");
    }
    if y == 0 {
        return 0;
    }
    if y < 4 {
        return 1;
    }

    let mut z = y;
    let mut x = y / 2 + 1;
    while x < z {
        z = x;
        x = (y / x + x) / 2;
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_small_values() {
        assert_eq!(sqrt(0), 0);
        assert_eq!(sqrt(1), 1);
        assert_eq!(sqrt(2), 1);
        assert_eq!(sqrt(3), 1);
        assert_eq!(sqrt(4), 2);
    }

    #[test]
    fn test_sqrt_perfect_squares() {
        assert_eq!(sqrt(9), 3);
        assert_eq!(sqrt(144), 12);
        assert_eq!(sqrt(1_000_000), 1000);
        // 10^18 * 10^18 is the canonical first-deposit scenario
        assert_eq!(sqrt(1_000_000_000_000_000_000i128.pow(2)), 10i128.pow(18));
    }

    #[test]
    fn test_sqrt_rounds_down() {
        assert_eq!(sqrt(8), 2);
        assert_eq!(sqrt(99), 9);
        assert_eq!(sqrt(10i128.pow(19)), 3_162_277_660);
    }

    #[test]
    fn test_sqrt_large_values() {
        let max = i128::MAX;
        let root = sqrt(max);
        assert!(root * root <= max);
        assert!((root + 1).checked_mul(root + 1).map_or(true, |v| v > max));
    }

    #[test]
    #[should_panic(expected = "Negative input")]
    fn test_sqrt_negative() {
        sqrt(-1);
    }
}
