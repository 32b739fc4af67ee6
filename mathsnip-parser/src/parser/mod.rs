pub mod binary;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use error::{Error, ExpectedEof, UnexpectedEof};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// A high-level parser for canonical arithmetic text. This is the type to use to parse a cleaned
/// snippet into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl mathsnip_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next non-whitespace token without moving the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn advance_past_whitespace(&mut self) {
        while let Some(token) = self.current_token() {
            if token.is_whitespace() {
                self.cursor += 1;
            } else {
                break;
            }
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.advance_past_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Parses a value from the given stream of tokens, then rewinds the cursor whether parsing
    /// succeeded or not. This lets the caller look ahead at what comes next.
    pub fn peek<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        let result = T::parse(self);
        self.cursor = start;
        result
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        self.try_parse_with_fn(|input| {
            let value = T::parse(input)?;
            predicate(&value, input)?;
            Ok(value)
        })
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.advance_past_whitespace();
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For unary operations, this means `op op a` is evaluated as `op (op a)` (the operators
    /// appear to the left of the operand).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use error::{EmptyParenthesis, UnclosedParenthesis, UnexpectedToken};
    use expr::Expr;
    use literal::{LitBlank, LitNum, Literal};
    use paren::Paren;
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    /// Parses the given source into an [`Expr`], panicking on failure.
    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    /// Parses the given source into an [`Expr`], expecting a failure.
    fn parse_err(source: &str) -> Error {
        Parser::new(source).try_parse_full::<Expr>().unwrap_err()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16"), Expr::Literal(Literal::Number(LitNum {
            value: 16.0,
            span: 0..2,
        })));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.25"), Expr::Literal(Literal::Number(LitNum {
            value: 3.25,
            span: 0..4,
        })));
        assert_eq!(parse(".5"), Expr::Literal(Literal::Number(LitNum {
            value: 0.5,
            span: 0..2,
        })));
    }

    #[test]
    fn literal_blank() {
        assert_eq!(parse("X"), Expr::Literal(Literal::Blank(LitBlank {
            span: 0..1,
        })));
    }

    #[test]
    fn binary_left_associativity() {
        assert_eq!(parse("3 - 2 - 1"), Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 0..1,
                }))),
                op: BinOp {
                    kind: BinOpKind::Sub,
                    span: 2..3,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 4..5,
                }))),
                span: 0..5,
            })),
            op: BinOp {
                kind: BinOpKind::Sub,
                span: 6..7,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 1.0,
                span: 8..9,
            }))),
            span: 0..9,
        }));
    }

    #[test]
    fn binary_precedence() {
        assert_eq!(parse("1+2*3"), Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 1.0,
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Add,
                span: 1..2,
            },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 2.0,
                    span: 2..3,
                }))),
                op: BinOp {
                    kind: BinOpKind::Mul,
                    span: 3..4,
                },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                    value: 3.0,
                    span: 4..5,
                }))),
                span: 2..5,
            })),
            span: 0..5,
        }));
    }

    #[test]
    fn unary_binds_tighter_than_factor() {
        assert_eq!(parse("-X*2"), Expr::Binary(Binary {
            lhs: Box::new(Expr::Unary(Unary {
                operand: Box::new(Expr::Literal(Literal::Blank(LitBlank {
                    span: 1..2,
                }))),
                op: UnaryOp {
                    kind: UnaryOpKind::Neg,
                    span: 0..1,
                },
                span: 0..2,
            })),
            op: BinOp {
                kind: BinOpKind::Mul,
                span: 2..3,
            },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum {
                value: 2.0,
                span: 3..4,
            }))),
            span: 0..4,
        }));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("(X)"), Expr::Paren(Paren {
            expr: Box::new(Expr::Literal(Literal::Blank(LitBlank {
                span: 1..2,
            }))),
            span: 0..3,
        }));
    }

    #[test]
    fn display_is_canonical() {
        for source in ["((1/2)-1)*4", "3--5", "X*(2+X)/0.5", "-(X)"] {
            assert_eq!(parse(source).to_string(), source);
        }
        assert_eq!(parse("1 + 2 * ( 3 - X )").to_string(), "1+2*(3-X)");
    }

    #[test]
    fn mixed_precedence_shape() {
        assert_eq!(parse("1+2*3-4/2").to_string(), "1+2*3-4/2");
        let expr = parse("1+2*3-4/2");
        let Expr::Binary(Binary { op: BinOp { kind: BinOpKind::Sub, .. }, lhs, .. }) = expr else {
            panic!("expected subtraction at the root");
        };
        assert!(matches!(*lhs, Expr::Binary(Binary { op: BinOp { kind: BinOpKind::Add, .. }, .. })));
    }

    #[test]
    fn trailing_operator() {
        let err = parse_err("1+");
        assert!(err.is::<error::UnexpectedEof>());
        assert_eq!(err.spans, vec![2..2]);
    }

    #[test]
    fn unclosed_paren() {
        let err = parse_err("(1+2");
        assert_eq!(err.downcast_ref::<UnclosedParenthesis>(), Some(&UnclosedParenthesis { opening: true }));
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn stray_close_paren() {
        let err = parse_err(")1");
        assert_eq!(err.downcast_ref::<UnclosedParenthesis>(), Some(&UnclosedParenthesis { opening: false }));
    }

    #[test]
    fn empty_paren() {
        let err = parse_err("()");
        assert!(err.is::<EmptyParenthesis>());
        assert_eq!(err.spans, vec![0..2]);
    }

    #[test]
    fn code_is_rejected() {
        let err = parse_err("alert(1)");
        let kind = err.downcast_ref::<UnexpectedToken>().unwrap();
        assert_eq!(kind.found, crate::tokenizer::TokenKind::Symbol);
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn juxtaposition_is_rejected() {
        let err = parse_err("2(3)");
        assert!(err.is::<error::ExpectedEof>());
        assert_eq!(err.spans, vec![1..2]);
    }
}
