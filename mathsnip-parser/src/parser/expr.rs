use crate::{
    parser::{
        binary::Binary,
        error::{Error, UnclosedParenthesis, UnexpectedEof, UnexpectedToken},
        literal::Literal,
        paren::Paren,
        token::CloseParen,
        unary::Unary,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of arithmetic expression.
///
/// An expression is built from number literals, the blank `X`, parentheses, unary negation and
/// the four binary operators `+`, `-`, `*` and `/`. Every node keeps the span of the canonical
/// text it was parsed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is a [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &*paren.expr;
        }
        inner
    }

    /// Returns the number of times the blank appears in this expression.
    pub fn blank_count(&self) -> usize {
        match self {
            Expr::Literal(Literal::Blank(_)) => 1,
            Expr::Literal(Literal::Number(_)) => 0,
            Expr::Paren(paren) => paren.expr.blank_count(),
            Expr::Unary(unary) => unary.operand.blank_count(),
            Expr::Binary(binary) => binary.lhs.blank_count() + binary.rhs.blank_count(),
        }
    }

    /// Returns true if the blank appears anywhere in this expression.
    pub fn contains_blank(&self) -> bool {
        self.blank_count() > 0
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if input.peek::<CloseParen>().is_ok() {
            return Err(input.error(UnclosedParenthesis { opening: false }));
        }

        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents an atom expression.
///
/// Atom expressions are the simplest kind of expression, and are entirely unambiguous to parse:
/// the first token decides whether it is a literal or a parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Parse for Atom {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some((kind, span)) = input.peek_token().map(|token| (token.kind, token.span.clone()))
        else {
            return Err(input.error(UnexpectedEof));
        };

        match kind {
            TokenKind::Int | TokenKind::Float | TokenKind::Blank => {
                input.try_parse().map(Self::Literal)
            },
            TokenKind::OpenParen => input.try_parse().map(Self::Paren),
            found => Err(Error::new(vec![span], UnexpectedToken {
                expected: &[
                    TokenKind::Int,
                    TokenKind::Float,
                    TokenKind::Blank,
                    TokenKind::OpenParen,
                    TokenKind::Sub,
                ],
                found,
            })),
        }
    }
}

impl From<Atom> for Expr {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Literal(literal) => Self::Literal(literal),
            Atom::Paren(paren) => Self::Paren(paren),
        }
    }
}
