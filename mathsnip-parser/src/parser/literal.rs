use crate::parser::{
    error::{Error, InvalidNumber},
    token::{Blank, Float, Int},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Integers and decimal numbers are both supported and represented here as
/// `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = input
            .try_parse::<Int>()
            .map(|num| (num.lexeme, num.span))
            .or_else(|_| input.try_parse::<Float>().map(|num| (num.lexeme, num.span)))?;
        let value = lexeme
            .parse()
            .map_err(|_| Error::new(vec![span.clone()], InvalidNumber { lexeme }))?;
        Ok(Self { value, span })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The blank, written `X` in canonical text. It stands for the single unknown quantity of an
/// equation or inequality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitBlank {
    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitBlank {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Blank>()?;
        Ok(Self { span: token.span })
    }
}

impl fmt::Display for LitBlank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "X")
    }
}

/// Represents a literal value.
///
/// A literal is any value that is written directly into the source code: a number, or the blank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// The blank.
    Blank(LitBlank),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Blank(blank) => blank.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<LitNum>().map(Literal::Number)
            .or_else(|_| input.try_parse::<LitBlank>().map(Literal::Blank))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Blank(blank) => blank.fmt(f),
        }
    }
}
