use ariadne::Fmt;
use mathsnip_attrs::ErrorKind;
use mathsnip_error::{ErrorClass, ErrorKind, EXPR};

pub use mathsnip_error::Error;

/// The text did not split into exactly two non-empty sides around `=` or a comparison operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = format!("expected two sides around `{}`, found {}", separator, found),
    labels = ["here"],
    help = format!(
        "write exactly one {} with an expression on each side",
        separator.fg(EXPR),
    ),
)]
pub struct WrongSideCount {
    /// The separator the text was split on.
    pub separator: &'static str,

    /// The number of non-empty sides that were found.
    pub found: usize,
}

/// The denominator hint given to the inequality solver was not positive.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = format!("invalid denominator hint `{}`", hint),
    help = "the denominator hint must be a positive integer",
)]
pub struct InvalidDenominatorHint {
    /// The hint that was given.
    pub hint: i64,
}

/// The blank was on both sides of the equation or inequality, or on neither.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Unsolvable,
    message = if *on_both {
        "the blank appears on both sides"
    } else {
        "there is no blank to solve for"
    },
    labels = ["in this text"],
    help = format!("exactly one side must contain the blank {}", "X".fg(EXPR)),
)]
pub struct BlankPlacement {
    /// True if both sides contain the blank, false if neither does.
    pub on_both: bool,
}

/// No comparison operator was found in an inequality.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Unsolvable,
    message = "missing comparison operator",
    labels = ["in this text"],
    help = format!(
        "an inequality needs one of {}, {}, {} or {}",
        ">".fg(EXPR),
        ">=".fg(EXPR),
        "<".fg(EXPR),
        "<=".fg(EXPR),
    ),
)]
pub struct MissingComparison;

/// The known side of an inequality has neither a fraction nor an integer in it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Unsolvable,
    message = "the known side has no value",
    labels = ["this side"],
    help = format!(
        "write the value as an integer or as {}",
        "\\frac{n}{d}".fg(EXPR),
    ),
)]
pub struct NoKnownValue;

/// The blank is multiplied by something that evaluates to zero, so its value cannot be
/// recovered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Unsolvable,
    message = "the blank is multiplied by zero",
    labels = ["this expression evaluates to zero"],
    help = "every value of the blank gives the same result",
)]
pub struct ZeroCoefficient;

/// No integer in the search range satisfies the equation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Unsolvable,
    message = format!("no integer from {} to {} solves this equation", start, end),
    labels = ["this expression"],
    help = "only integer solutions are found when the blank appears more than once",
)]
pub struct SearchExhausted {
    /// The first integer that was tried.
    pub start: i64,

    /// The last integer that was tried.
    pub end: i64,
}
