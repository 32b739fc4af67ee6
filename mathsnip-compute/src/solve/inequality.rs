//! Solves inequalities with a single blank, such as `\duoblank{} > \frac{3}{4}`.
//!
//! The answer is a fraction over the denominator of the known value: the numerator closest to
//! the known value that still satisfies the inequality. Numerators below 1 are raised to 1.

use log::debug;
use mathsnip_parser::{
    latex::{clean_wrappers, find_command_name, find_fraction, remove_whitespace, replace_command_name},
    parser::error::InvalidNumber,
};
use crate::{fraction::Fraction, numerical::error::DivisionByZero};
use std::{fmt, ops::Range};
use super::{
    error::{BlankPlacement, Error, InvalidDenominatorHint, MissingComparison, NoKnownValue},
    replace_blank_markers,
    split_sides,
};

/// How close `value * denominator` must be to an integer to be treated as that integer.
const SNAP_TOLERANCE: f64 = 1e-9;

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `>`
    Greater,

    /// `>=`
    GreaterEq,

    /// `<`
    Less,

    /// `<=`
    LessEq,
}

impl Comparison {
    /// The order in which operators are looked for. Two-character operators come first, so that
    /// `>=` is not read as `>`.
    const DETECTION_ORDER: [Comparison; 4] = [
        Comparison::GreaterEq,
        Comparison::LessEq,
        Comparison::Greater,
        Comparison::Less,
    ];

    /// The ASCII spelling of the operator.
    pub fn symbol(self) -> &'static str {
        self.spellings()[0]
    }

    /// Every way the operator is written in scraped markup. The first spelling is ASCII.
    ///
    /// Spellings that start with a backslash are LaTeX commands, and only match as a whole
    /// command name.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            Comparison::GreaterEq => &[">=", "&gt;=", "\\geq", "\\ge", "≥", "&ge;"],
            Comparison::LessEq => &["<=", "&lt;=", "\\leq", "\\le", "≤", "&le;"],
            Comparison::Greater => &[">", "\\gt", "&gt;"],
            Comparison::Less => &["<", "\\lt", "&lt;"],
        }
    }

    /// Finds the first operator that appears in `text`, in [`Comparison::DETECTION_ORDER`].
    fn detect(text: &str) -> Option<Self> {
        Self::DETECTION_ORDER.into_iter().find(|comparison| {
            comparison.spellings().iter().any(|spelling| find_spelling(text, spelling).is_some())
        })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Finds `spelling` in `text`, matching LaTeX commands by whole name only.
fn find_spelling(text: &str, spelling: &str) -> Option<usize> {
    if spelling.starts_with('\\') {
        find_command_name(text, spelling)
    } else {
        text.find(spelling)
    }
}

/// Rewrites every spelling of every comparison operator in `text` to ASCII.
fn normalize_comparisons(text: &str) -> String {
    Comparison::DETECTION_ORDER
        .iter()
        .flat_map(|comparison| {
            comparison.spellings()[1..].iter().map(move |spelling| (spelling, comparison.symbol()))
        })
        .fold(text.to_owned(), |text, (spelling, symbol)| {
            if spelling.starts_with('\\') {
                replace_command_name(&text, spelling, symbol)
            } else {
                text.replace(spelling, symbol)
            }
        })
}

/// The side of the comparison operator the blank is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlankSide {
    /// `X > 1`
    Left,

    /// `1 > X`
    Right,
}

/// An inequality with the blank on one side and a known value on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankInequality {
    /// The inequality, with its wrappers cleaned, its blank markers replaced by `X`, and its
    /// comparison operator written in ASCII.
    text: String,

    /// The location of the known side in `text`.
    known: Range<usize>,

    /// The comparison operator.
    pub comparison: Comparison,

    /// The side of the comparison operator the blank is on.
    pub blank_side: BlankSide,
}

impl BlankInequality {
    /// Splits an inequality into its known side, comparison operator, and blank side.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let text = replace_blank_markers(&clean_wrappers(raw)?)?;
        let comparison = Comparison::detect(&text)
            .ok_or_else(|| Error::new(vec![0..text.len()], MissingComparison))?;

        let text = normalize_comparisons(&text);
        let [left, right] = split_sides(&text, comparison.symbol())?;
        let (known, blank_side) = match (left.has_blank(), right.has_blank()) {
            (true, false) => (right, BlankSide::Left),
            (false, true) => (left, BlankSide::Right),
            (on_both, _) => {
                return Err(Error::new(vec![0..text.len()], BlankPlacement { on_both }));
            },
        };

        let known = known.start..known.start + known.text.len();
        Ok(Self { text, known, comparison, blank_side })
    }

    /// The normalized text of the inequality.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text of the side that does not contain the blank.
    pub fn known_side(&self) -> &str {
        &self.text[self.known.clone()]
    }

    /// Returns the value of the known side, and the denominator the answer should use.
    ///
    /// A `\frac{n}{d}` on the known side gives the value `n / d` and the denominator `d`.
    /// Otherwise, the first integer on the known side is the value, and `denominator_hint` (or 1)
    /// is the denominator.
    pub fn known_value(&self, denominator_hint: Option<i64>) -> Result<(f64, i64), Error> {
        let known = self.known_side();
        fraction_value(known)
            .and_then(|fraction| match fraction {
                Some(value) => Ok(value),
                None => first_integer(known)
                    .map(|value| (value as f64, denominator_hint.unwrap_or(1))),
            })
            .map_err(|err| err.offset(self.known.start))
    }

    /// Finds the fraction closest to the known value that satisfies the inequality, over the
    /// denominator given by [`BlankInequality::known_value`].
    pub fn solve(&self, denominator_hint: Option<i64>) -> Result<Fraction, Error> {
        if let Some(hint) = denominator_hint.filter(|&hint| hint <= 0) {
            return Err(Error::new(Vec::new(), InvalidDenominatorHint { hint }));
        }

        let (value, denominator) = self.known_value(denominator_hint)?;
        let numerator = target_numerator(value * denominator as f64, self.comparison, self.blank_side);
        debug!(
            "blank on the {:?} of `{}` {} {}, answer {}/{}",
            self.blank_side, self.known_side(), self.comparison, value, numerator, denominator,
        );

        Fraction::new(numerator, denominator)
            .map_err(|_| Error::new(vec![self.known.clone()], DivisionByZero))
    }
}

/// Reads the value of the first `\frac{n}{d}` in `text`, if it has integer parts. The sign of the
/// value is moved to the numerator.
fn fraction_value(text: &str) -> Result<Option<(f64, i64)>, Error> {
    let Some(fraction) = find_fraction(text)? else {
        return Ok(None);
    };

    let numerator = remove_whitespace(&text[fraction.numerator.clone()]).parse::<i64>();
    let denominator = remove_whitespace(&text[fraction.denominator.clone()]).parse::<i64>();
    let (Ok(numerator), Ok(denominator)) = (numerator, denominator) else {
        return Ok(None);
    };

    if denominator == 0 {
        return Err(Error::new(vec![fraction.denominator], DivisionByZero));
    }
    let (numerator, denominator) = if denominator < 0 {
        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(numerator), Some(denominator)) => (numerator, denominator),
            _ => return Ok(None),
        }
    } else {
        (numerator, denominator)
    };

    Ok(Some((numerator as f64 / denominator as f64, denominator)))
}

/// Reads the first integer in `text`, including a `-` directly in front of it.
fn first_integer(text: &str) -> Result<i64, Error> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| Error::new(vec![0..text.len()], NoKnownValue))?;
    let end = text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |len| start + len);
    let start = if text[..start].ends_with('-') { start - 1 } else { start };

    let lexeme = &text[start..end];
    lexeme.parse().map_err(|_| Error::new(vec![start..end], InvalidNumber {
        lexeme: lexeme.to_owned(),
    }))
}

/// Picks the numerator of the answer, given the known value multiplied by the denominator.
fn target_numerator(scaled: f64, comparison: Comparison, blank_side: BlankSide) -> i64 {
    let scaled = if (scaled - scaled.round()).abs() < SNAP_TOLERANCE {
        scaled.round()
    } else {
        scaled
    };
    let (floor, ceil) = (scaled.floor() as i64, scaled.ceil() as i64);

    let numerator = match (blank_side, comparison) {
        (BlankSide::Left, Comparison::Greater) | (BlankSide::Right, Comparison::Less) => {
            floor.saturating_add(1)
        },
        (BlankSide::Left, Comparison::GreaterEq) | (BlankSide::Right, Comparison::LessEq) => ceil,
        (BlankSide::Left, Comparison::Less) | (BlankSide::Right, Comparison::Greater) => {
            ceil.saturating_sub(1)
        },
        (BlankSide::Left, Comparison::LessEq) | (BlankSide::Right, Comparison::GreaterEq) => floor,
    };
    numerator.max(1)
}

/// Solves an inequality containing a single blank, returning the error if it cannot be solved.
pub fn try_solve_inequality_with_blank(
    raw: &str,
    denominator_hint: Option<i64>,
) -> Result<Fraction, Error> {
    BlankInequality::parse(raw)?.solve(denominator_hint)
}

/// Solves an inequality containing a single blank, returning the answer as `numerator/denominator`.
///
/// Returns [`None`] if the inequality cannot be solved; see [`try_solve_inequality_with_blank`]
/// to find out why.
///
/// ```
/// use mathsnip_compute::solve::solve_inequality_with_blank;
///
/// assert_eq!(solve_inequality_with_blank(r"\duoblank{} > \frac{3}{4}", None).as_deref(), Some("4/4"));
/// assert_eq!(solve_inequality_with_blank(r"X \le 2", Some(3)).as_deref(), Some("6/3"));
/// ```
pub fn solve_inequality_with_blank(raw: &str, denominator_hint: Option<i64>) -> Option<String> {
    try_solve_inequality_with_blank(raw, denominator_hint)
        .map(|fraction| fraction.to_string())
        .map_err(|err| debug!("could not solve {:?}: {}", raw, err))
        .ok()
}

#[cfg(test)]
mod tests {
    use mathsnip_error::ErrorClass;
    use pretty_assertions::assert_eq;
    use crate::solve::error::WrongSideCount;
    use super::*;

    /// Solves the inequality, returning the answer as a string.
    fn solve(raw: &str, denominator_hint: Option<i64>) -> Option<String> {
        solve_inequality_with_blank(raw, denominator_hint)
    }

    #[test]
    fn fraction_known_value() {
        assert_eq!(solve(r"\duoblank{} > \frac{3}{4}", None).as_deref(), Some("4/4"));
        assert_eq!(solve(r"X \le \frac{1}{2}", None).as_deref(), Some("1/2"));
        assert_eq!(solve(r"\frac{1}{3} < X", None).as_deref(), Some("2/3"));
        assert_eq!(solve(r"\frac{7}{3} \geq \duoblank{}", None).as_deref(), Some("7/3"));
    }

    #[test]
    fn fraction_ignores_hint() {
        assert_eq!(solve(r"X \ge \frac{5}{8}", Some(3)).as_deref(), Some("5/8"));
    }

    #[test]
    fn integer_known_value() {
        assert_eq!(solve("X < 5", None).as_deref(), Some("4/1"));
        assert_eq!(solve(r"X \geq 2", Some(3)).as_deref(), Some("6/3"));
        assert_eq!(solve(r"\mathbf{4} > X", Some(2)).as_deref(), Some("7/2"));
        assert_eq!(solve("? &gt; 2", None).as_deref(), Some("3/1"));
        assert_eq!(solve("X ≤ 9", Some(10)).as_deref(), Some("90/10"));
    }

    #[test]
    fn full_table() {
        let cases = [
            (BlankSide::Left, Comparison::Greater, 8),
            (BlankSide::Left, Comparison::GreaterEq, 8),
            (BlankSide::Left, Comparison::Less, 7),
            (BlankSide::Left, Comparison::LessEq, 7),
            (BlankSide::Right, Comparison::Greater, 7),
            (BlankSide::Right, Comparison::GreaterEq, 7),
            (BlankSide::Right, Comparison::Less, 8),
            (BlankSide::Right, Comparison::LessEq, 8),
        ];
        for (blank_side, comparison, expected) in cases {
            assert_eq!(target_numerator(7.5, comparison, blank_side), expected);
        }

        assert_eq!(target_numerator(7.0, Comparison::Greater, BlankSide::Left), 8);
        assert_eq!(target_numerator(7.0, Comparison::GreaterEq, BlankSide::Left), 7);
        assert_eq!(target_numerator(7.0, Comparison::Less, BlankSide::Left), 6);
        assert_eq!(target_numerator(7.0, Comparison::LessEq, BlankSide::Left), 7);
    }

    #[test]
    fn snaps_to_integers() {
        // 0.29 * 100 is 28.999999999999996 in floating point
        assert_eq!(solve(r"X > \frac{29}{100}", None).as_deref(), Some("30/100"));
        assert_eq!(target_numerator(2.9999999999, Comparison::LessEq, BlankSide::Left), 3);
    }

    #[test]
    fn clamps_to_one() {
        assert_eq!(solve("X < 0", None).as_deref(), Some("1/1"));
        assert_eq!(solve("X > -3", None).as_deref(), Some("1/1"));
        assert_eq!(solve(r"X \geq \frac{5}{-2}", None).as_deref(), Some("1/2"));
    }

    #[test]
    fn left_is_not_le() {
        let inequality = BlankInequality::parse(r"\left( X \right) \le 7").unwrap();
        assert_eq!(inequality.comparison, Comparison::LessEq);
        assert_eq!(inequality.blank_side, BlankSide::Left);
        assert_eq!(inequality.known_side(), " 7");
        assert_eq!(inequality.solve(None).unwrap().to_string(), "7/1");
    }

    #[test]
    fn greater_eq_is_not_greater() {
        let inequality = BlankInequality::parse("X >= 2").unwrap();
        assert_eq!(inequality.comparison, Comparison::GreaterEq);
        assert_eq!(inequality.text(), "X >= 2");
    }

    #[test]
    fn escaped_greater_eq_is_not_greater() {
        let inequality = BlankInequality::parse("X &gt;= 2").unwrap();
        assert_eq!(inequality.comparison, Comparison::GreaterEq);
        assert_eq!(inequality.text(), "X >= 2");
        assert_eq!(solve("X &gt;= 2", None).as_deref(), Some("2/1"));

        let inequality = BlankInequality::parse("3 &lt;= ?").unwrap();
        assert_eq!(inequality.comparison, Comparison::LessEq);
        assert_eq!(inequality.blank_side, BlankSide::Right);
        assert_eq!(solve("3 &lt;= ?", None).as_deref(), Some("3/1"));
    }

    #[test]
    fn negative_integer() {
        let inequality = BlankInequality::parse("X > -12").unwrap();
        assert_eq!(inequality.known_value(None).unwrap(), (-12.0, 1));
    }

    #[test]
    fn missing_comparison() {
        let err = try_solve_inequality_with_blank("X = 3", None).unwrap_err();
        assert!(err.is::<MissingComparison>());
        assert_eq!(err.class(), ErrorClass::Unsolvable);
    }

    #[test]
    fn malformed() {
        let err = try_solve_inequality_with_blank("X > 1 > 2", None).unwrap_err();
        assert!(err.is::<WrongSideCount>());
        assert_eq!(err.class(), ErrorClass::MalformedInput);

        let err = try_solve_inequality_with_blank("X > 2", Some(0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidDenominatorHint>(),
            Some(&InvalidDenominatorHint { hint: 0 }),
        );
        assert!(err.spans.is_empty());
        assert_eq!(err.to_string(), "malformed input: invalid denominator hint `0`");
        assert_eq!(solve("X > 2", Some(-4)), None);
    }

    #[test]
    fn blank_placement() {
        assert!(try_solve_inequality_with_blank("1 < 2", None).unwrap_err().is::<BlankPlacement>());
        assert!(try_solve_inequality_with_blank("X < X", None).unwrap_err().is::<BlankPlacement>());
    }

    #[test]
    fn no_known_value() {
        let err = try_solve_inequality_with_blank("X > abc", None).unwrap_err();
        assert!(err.is::<NoKnownValue>());
        assert_eq!(err.spans, vec![3..7]);
    }

    #[test]
    fn zero_denominator() {
        let err = try_solve_inequality_with_blank(r"X > \frac{1}{0}", None).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.class(), ErrorClass::Arithmetic);
        assert_eq!(err.spans, vec![13..14]);
    }
}
