use super::Fraction;

/// The maximum number of terms of the continued fraction to compute. Convergents of an `f64`
/// stop improving well before this.
const MAX_TERMS: usize = 64;

impl Fraction {
    /// Approximates the given float as a fraction whose denominator is at most `max_denominator`.
    ///
    /// This function computes the convergents of the continued fraction of `value`, stopping at
    /// the last convergent whose denominator fits, or as soon as a convergent equals `value` to
    /// within float precision. The result is in lowest terms.
    ///
    /// Returns [`None`] if `value` is not finite, does not fit in an `i64`, or if
    /// `max_denominator` is less than 1.
    ///
    /// See
    /// [Wikipedia](https://en.wikipedia.org/wiki/Continued_fraction#Calculating_continued_fraction_representations)
    /// for more information.
    pub fn approximate(value: f64, max_denominator: i64) -> Option<Self> {
        if !value.is_finite() || max_denominator < 1 || value.abs() >= i64::MAX as f64 {
            return None;
        }

        // the two previous convergents, h / k
        let (mut h, mut h_prev) = (1i128, 0i128);
        let (mut k, mut k_prev) = (0i128, 1i128);
        let mut remaining = value;

        for _ in 0..MAX_TERMS {
            let term = remaining.floor();
            if term.abs() >= i64::MAX as f64 {
                break;
            }

            let term = term as i128;
            let next = |a: i128, b: i128| term.checked_mul(a)?.checked_add(b);
            let (Some(h_next), Some(k_next)) = (next(h, h_prev), next(k, k_prev)) else {
                break;
            };
            if k_next > i128::from(max_denominator) {
                break;
            }
            (h_prev, h) = (h, h_next);
            (k_prev, k) = (k, k_next);

            let error = (value - h as f64 / k as f64).abs();
            let fractional = remaining - term as f64;
            if fractional == 0.0 || error <= f64::EPSILON * value.abs() {
                break;
            }
            remaining = fractional.recip();
        }

        Some(Self {
            numerator: i64::try_from(h).ok()?,
            denominator: i64::try_from(k).ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;
    use super::*;

    /// Approximates the given value, returning its numerator and denominator.
    fn approx(value: f64, max_denominator: i64) -> Option<(i64, i64)> {
        Fraction::approximate(value, max_denominator)
            .map(|fraction| (fraction.numerator(), fraction.denominator()))
    }

    #[test]
    fn exact_values() {
        assert_eq!(approx(0.75, 100), Some((3, 4)));
        assert_eq!(approx(0.1, 100), Some((1, 10)));
        assert_eq!(approx(1.0 / 3.0, 100), Some((1, 3)));
        assert_eq!(approx(-2.5, 10), Some((-5, 2)));
        assert_eq!(approx(7.0, 1), Some((7, 1)));
        assert_eq!(approx(0.0, 10), Some((0, 1)));
    }

    #[test]
    fn limited_denominator() {
        assert_eq!(approx(PI, 1), Some((3, 1)));
        assert_eq!(approx(PI, 100), Some((22, 7)));
        assert_eq!(approx(PI, 1000), Some((355, 113)));
        assert_eq!(approx(0.333, 10), Some((1, 3)));
    }

    #[test]
    fn invalid_input() {
        assert_eq!(approx(f64::NAN, 10), None);
        assert_eq!(approx(f64::INFINITY, 10), None);
        assert_eq!(approx(1e300, 10), None);
        assert_eq!(approx(0.5, 0), None);
    }
}
