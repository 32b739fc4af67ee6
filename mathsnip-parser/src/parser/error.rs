use ariadne::Fmt;
use mathsnip_attrs::ErrorKind;
use mathsnip_error::{ErrorClass, ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

pub use mathsnip_error::Error;

/// An intentionally useless error. This should only be used for errors that are never shown to
/// the user, such as a speculative parse that is expected to fail.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "number".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A number literal could not be converted to a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The lexeme of the number.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    class = ErrorClass::MalformedInput,
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;
