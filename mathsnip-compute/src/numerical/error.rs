use ariadne::Fmt;
use mathsnip_attrs::ErrorKind;
use mathsnip_error::{ErrorClass, ErrorKind, EXPR};

pub use mathsnip_error::Error;

/// A character outside the arithmetic allow-list survived normalization.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::UnsafeInput,
    message = format!("the character `{}` is not allowed in an arithmetic expression", found),
    labels = ["this character"],
    help = format!(
        "only digits, `.`, {}, and parentheses are allowed",
        "+ - * /".fg(EXPR),
    ),
)]
pub struct DisallowedCharacter {
    /// The character that was found.
    pub found: char,
}

/// The right-hand side of a division evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Arithmetic,
    message = "division by zero",
    labels = ["this expression evaluates to zero", "division here"],
)]
pub struct DivisionByZero;

/// The result of an operation was infinite or not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Arithmetic,
    message = "the result is not a finite number",
    labels = ["this expression"],
    help = "the value is too large to be represented",
)]
pub struct NonFiniteResult;

/// The blank was evaluated without being bound to a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::Unsolvable,
    message = "the blank has no value",
    labels = ["this blank"],
    help = format!(
        "an expression containing {} can only be solved for, not evaluated",
        "X".fg(EXPR),
    ),
)]
pub struct UnboundBlank;
