//! Parity-weighted range summation.

/// Sum `f(i)` for `i` in `0..n`, where even `i` contribute `i` and odd `i`
/// contribute `i * 2`. The range is empty for `n <= 0`, so the total is 0.
///
/// Pure and deterministic; overflow follows the native `i64` semantics.
pub fn accumulate(n: i64) -> i64 {
    let mut total = 0;
    for i in 0..n {
        if i % 2 == 0 {
            total += i;
        } else {
            total += i * 2;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_bounds() {
        assert_eq!(accumulate(0), 0);
        assert_eq!(accumulate(-1), 0);
        assert_eq!(accumulate(-100), 0);
    }

    #[test]
    fn test_small_bounds() {
        // f(0) = 0
        assert_eq!(accumulate(1), 0);
        // f(0) + f(1) = 0 + 2
        assert_eq!(accumulate(2), 2);
        // f(0) + f(1) + f(2) = 0 + 2 + 2
        assert_eq!(accumulate(3), 4);
        // + f(3) = 6
        assert_eq!(accumulate(4), 10);
    }

    #[test]
    fn test_bound_ten() {
        // Even terms 0+2+4+6+8 = 20, odd terms doubled 2+6+10+14+18 = 50.
        assert_eq!(accumulate(10), 70);
    }

    #[test]
    fn test_matches_direct_sum() {
        for n in 1..200 {
            let expected: i64 = (0..n).map(|i| if i % 2 == 0 { i } else { i * 2 }).sum();
            assert_eq!(accumulate(n), expected, "mismatch at n = {}", n);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(accumulate(10), accumulate(10));
    }
}
