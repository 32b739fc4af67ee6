use mathsnip_attrs::ErrorKind;
use mathsnip_error::{ErrorClass, ErrorKind};

/// A brace opened by a LaTeX command was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "unclosed brace",
    labels = ["this brace is not closed"],
    help = "add a closing brace `}` somewhere after this",
)]
pub struct UnclosedBrace;

/// A `\frac` command had a numerator, but no braced denominator after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "missing denominator",
    labels = ["this fraction has no denominator"],
    help = "write fractions as `\\frac{numerator}{denominator}`",
)]
pub struct MissingDenominator;
