use log::debug;
use mathsnip_parser::latex::full_clean;
use super::{simplify_with_value, Fraction, SimplifiedFraction};

/// Parses a fraction written as `\frac{n}{d}`, `n/d`, or a bare integer `n`, and reduces it to
/// lowest terms.
///
/// Wrapper commands such as `\mathbf{…}` are allowed around or inside the fraction, and a leading
/// `-` negates it. Returns [`None`] if the text is not one of these forms or the denominator is
/// zero.
///
/// ```
/// use mathsnip_compute::fraction::parse_fraction_expression;
///
/// let half = parse_fraction_expression(r"\frac{2}{4}").unwrap();
/// assert_eq!((half.numerator(), half.denominator(), half.value()), (1, 2, 0.5));
/// ```
pub fn parse_fraction_expression(text: &str) -> Option<SimplifiedFraction> {
    let cleaned = full_clean(text).ok()?;
    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let inner = unsigned
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(unsigned);

    let fraction = inner
        .parse::<Fraction>()
        .map_err(|err| debug!("{}", err))
        .ok()?;
    let numerator = if negative {
        fraction.numerator().checked_neg()?
    } else {
        fraction.numerator()
    };
    simplify_with_value(numerator, fraction.denominator()).ok()
}
