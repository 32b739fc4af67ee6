use std::cmp::Ordering;
use super::{Fraction, FractionError, SimplifiedFraction};

/// Euclid's algorithm on unsigned operands.
fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, 0)` is `0`, and `gcd(0, n)` is `|n|`. The result is unsigned because
/// `gcd(i64::MIN, 0)` does not fit in an `i64`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the least common multiple of `|a|` and `|b|`, `|a * b| / gcd(a, b)`. If either
/// operand is zero, the result is zero.
pub fn lcm(a: i64, b: i64) -> Result<u64, FractionError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or(FractionError::Overflow)
}

/// Reduces a wide fraction to lowest terms with a positive denominator, then narrows it back to
/// `i64`.
fn reduce(numerator: i128, denominator: i128) -> Result<Fraction, FractionError> {
    if denominator == 0 {
        return Err(FractionError::ZeroDenominator);
    }

    // nonzero, since the denominator is nonzero
    let divisor = gcd_wide(numerator.unsigned_abs(), denominator.unsigned_abs());
    let divisor = i128::try_from(divisor).map_err(|_| FractionError::Overflow)?;
    let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }

    Ok(Fraction {
        numerator: i64::try_from(numerator).map_err(|_| FractionError::Overflow)?,
        denominator: i64::try_from(denominator).map_err(|_| FractionError::Overflow)?,
    })
}

/// Returns [`FractionError::ZeroDenominator`] if any of the given denominators is zero.
fn check_denominators(denominators: &[i64]) -> Result<(), FractionError> {
    if denominators.contains(&0) {
        Err(FractionError::ZeroDenominator)
    } else {
        Ok(())
    }
}

/// Simplifies `numerator / denominator` to lowest terms, moving the sign to the numerator.
///
/// ```
/// use mathsnip_compute::fraction::simplify;
///
/// let half = simplify(4, -8).unwrap();
/// assert_eq!((half.numerator(), half.denominator()), (-1, 2));
/// ```
pub fn simplify(numerator: i64, denominator: i64) -> Result<Fraction, FractionError> {
    reduce(numerator.into(), denominator.into())
}

/// Simplifies `numerator / denominator` like [`simplify`], and computes its value.
pub fn simplify_with_value(
    numerator: i64,
    denominator: i64,
) -> Result<SimplifiedFraction, FractionError> {
    let fraction = simplify(numerator, denominator)?;
    Ok(SimplifiedFraction { fraction, value: fraction.value() })
}

/// Compares `n1 / d1` with `n2 / d2` exactly.
///
/// Negative denominators are allowed; their sign is moved to the numerator before comparing.
/// Both denominators must be nonzero, otherwise the result is meaningless.
pub fn compare(n1: i64, d1: i64, n2: i64, d2: i64) -> Ordering {
    let normalize = |n: i64, d: i64| {
        let (n, d) = (i128::from(n), i128::from(d));
        if d < 0 { (-n, -d) } else { (n, d) }
    };
    let (n1, d1) = normalize(n1, d1);
    let (n2, d2) = normalize(n2, d2);
    (n1 * d2).cmp(&(n2 * d1))
}

/// Combines `n1 / d1` and `n2 / d2` over the least common multiple of their denominators. The
/// numerators are combined with `op`.
fn combine(
    n1: i64,
    d1: i64,
    n2: i64,
    d2: i64,
    op: fn(i128, i128) -> Option<i128>,
) -> Result<Fraction, FractionError> {
    check_denominators(&[d1, d2])?;
    let common = i128::from(lcm(d1, d2)?);

    let scaled = |n: i64, d: i64| i128::from(n).checked_mul(common / i128::from(d));
    let numerator = scaled(n1, d1)
        .zip(scaled(n2, d2))
        .and_then(|(left, right)| op(left, right))
        .ok_or(FractionError::Overflow)?;
    reduce(numerator, common)
}

/// Returns `n1 / d1 + n2 / d2` in lowest terms.
pub fn add(n1: i64, d1: i64, n2: i64, d2: i64) -> Result<Fraction, FractionError> {
    combine(n1, d1, n2, d2, i128::checked_add)
}

/// Returns `n1 / d1 - n2 / d2` in lowest terms.
pub fn subtract(n1: i64, d1: i64, n2: i64, d2: i64) -> Result<Fraction, FractionError> {
    combine(n1, d1, n2, d2, i128::checked_sub)
}

/// Returns `n1 / d1 * n2 / d2` in lowest terms.
pub fn multiply(n1: i64, d1: i64, n2: i64, d2: i64) -> Result<Fraction, FractionError> {
    check_denominators(&[d1, d2])?;
    reduce(i128::from(n1) * i128::from(n2), i128::from(d1) * i128::from(d2))
}

/// Returns `(n1 / d1) / (n2 / d2)` in lowest terms.
///
/// Returns [`FractionError::DivideByZero`] if `n2` is zero.
pub fn divide(n1: i64, d1: i64, n2: i64, d2: i64) -> Result<Fraction, FractionError> {
    check_denominators(&[d1, d2])?;
    if n2 == 0 {
        return Err(FractionError::DivideByZero);
    }
    reduce(i128::from(n1) * i128::from(d2), i128::from(d1) * i128::from(n2))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    /// Shorthand for a fraction that is known to be valid.
    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn gcd_edge_cases() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, -7), 7);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(i64::MIN, 0), 1 << 63);
    }

    #[test]
    fn lcm_edge_cases() {
        assert_eq!(lcm(4, 6), Ok(12));
        assert_eq!(lcm(-4, 6), Ok(12));
        assert_eq!(lcm(0, 6), Ok(0));
        assert_eq!(lcm(i64::MAX, i64::MAX - 1), Err(FractionError::Overflow));
    }

    #[test]
    fn simplify_examples() {
        assert_eq!(simplify(4, 8), Ok(frac(1, 2)));
        assert_eq!(simplify(3, -9), Ok(frac(-1, 3)));
        assert_eq!(simplify(-5, -10), Ok(frac(1, 2)));
        assert_eq!(simplify(0, -5), Ok(frac(0, 1)));
        assert_eq!(simplify(1, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn simplify_with_value_example() {
        let simplified = simplify_with_value(4, 8).unwrap();
        assert_eq!((simplified.numerator(), simplified.denominator()), (1, 2));
        assert_eq!(simplified.value(), 0.5);
    }

    #[test]
    fn simplify_overflow() {
        // the sign cannot move to the numerator
        assert_eq!(simplify(1, i64::MIN), Err(FractionError::Overflow));
        assert_eq!(simplify(i64::MIN, i64::MIN), Ok(frac(1, 1)));
    }

    #[test]
    fn compare_examples() {
        assert_eq!(compare(1, 2, 2, 4), Ordering::Equal);
        assert_eq!(compare(1, 3, 1, 2), Ordering::Less);
        assert_eq!(compare(1, -2, 1, 3), Ordering::Less);
        assert_eq!(compare(-1, -2, 1, 3), Ordering::Greater);
        assert_eq!(compare(i64::MAX, 1, i64::MAX - 1, 1), Ordering::Greater);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(add(1, 2, 1, 3), Ok(frac(5, 6)));
        assert_eq!(add(1, 4, 1, 4), Ok(frac(1, 2)));
        assert_eq!(add(1, -2, 1, 2), Ok(frac(0, 1)));
        assert_eq!(subtract(1, 2, 1, 3), Ok(frac(1, 6)));
        assert_eq!(subtract(1, 3, 1, 2), Ok(frac(-1, 6)));
        assert_eq!(multiply(2, 3, 3, 4), Ok(frac(1, 2)));
        assert_eq!(multiply(-2, 3, 3, -4), Ok(frac(1, 2)));
        assert_eq!(divide(1, 2, 1, 4), Ok(frac(2, 1)));
        assert_eq!(divide(1, 2, -3, 4), Ok(frac(-2, 3)));
    }

    #[test]
    fn arithmetic_errors() {
        assert_eq!(divide(1, 2, 0, 5), Err(FractionError::DivideByZero));
        assert_eq!(add(1, 0, 1, 2), Err(FractionError::ZeroDenominator));
        assert_eq!(multiply(1, 2, 1, 0), Err(FractionError::ZeroDenominator));
        assert_eq!(multiply(i64::MAX, 1, 2, 1), Err(FractionError::Overflow));
        assert_eq!(add(i64::MAX, 1, 1, 1), Err(FractionError::Overflow));
    }

    proptest! {
        #[test]
        fn simplify_is_lowest_terms(
            numerator in -1_000_000_000_000i64..1_000_000_000_000,
            denominator in (-1_000_000_000_000i64..1_000_000_000_000).prop_filter("nonzero", |d| *d != 0),
        ) {
            let simplified = simplify(numerator, denominator).unwrap();
            prop_assert!(simplified.denominator() > 0);
            prop_assert_eq!(gcd(simplified.numerator(), simplified.denominator()), 1);
            prop_assert_eq!(
                i128::from(simplified.numerator()) * i128::from(denominator),
                i128::from(numerator) * i128::from(simplified.denominator()),
            );
        }

        #[test]
        fn compare_is_antisymmetric_and_agrees_with_floats(
            n1 in -1000i64..1000,
            d1 in (-1000i64..1000).prop_filter("nonzero", |d| *d != 0),
            n2 in -1000i64..1000,
            d2 in (-1000i64..1000).prop_filter("nonzero", |d| *d != 0),
        ) {
            let ordering = compare(n1, d1, n2, d2);
            prop_assert_eq!(ordering, compare(n2, d2, n1, d1).reverse());

            let (left, right) = (n1 as f64 / d1 as f64, n2 as f64 / d2 as f64);
            prop_assert_eq!(Some(ordering), left.partial_cmp(&right));
        }
    }
}
