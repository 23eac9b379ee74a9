//! Greatest common divisor of `i32` values.
//!
//! Uses the Euclidean algorithm with Rust's truncating `%`, so intermediate
//! remainders carry the sign of the dividend. Results are normalized to be
//! non-negative: `gcd2(x, 0) == |x|` and `gcd2(0, 0) == 0`.
//!
//! `|i32::MIN|` does not fit in an `i32`. The inputs that would produce it
//! (`gcd2(i32::MIN, 0)`, `gcd2(i32::MIN, i32::MIN)`) wrap to `i32::MIN`.

/// Euclidean GCD of two integers.
pub fn gcd2(mut x: i32, mut y: i32) -> i32 {
    while y != 0 {
        // `i32::MIN % -1` overflows, the mathematical remainder is 0
        let remainder = x.wrapping_rem(y);
        x = y;
        y = remainder;
    }

    x.wrapping_abs()
}

/// Three-argument GCD, identical to `gcd(a, b, &[c])`.
pub fn gcd3(first: i32, second: i32, third: i32) -> i32 {
    gcd2(gcd2(first, second), third)
}

/// GCD of two or more integers, folded left to right.
pub fn gcd(first: i32, second: i32, rest: &[i32]) -> i32 {
    let mut result = gcd2(first, second);

    for &val in rest {
        result = gcd2(result, val);
    }

    result
}

/// GCD of an arbitrary slice. `None` if `values` is empty.
pub fn gcd_all(values: &[i32]) -> Option<i32> {
    let (first, rest) = values.split_first()?;

    Some(rest.iter().fold(gcd2(*first, 0), |result, &val| gcd2(result, val)))
}
