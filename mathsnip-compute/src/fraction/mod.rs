//! Exact arithmetic on `(numerator, denominator)` pairs.
//!
//! All intermediate products are computed in `i128`, so no operation wraps. A result that does
//! not fit back into `i64` is reported as [`FractionError::Overflow`].

mod approx;
mod ops;
mod parse;

use std::{error::Error, fmt::{self, Display, Formatter}, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use ops::{add, compare, divide, gcd, lcm, multiply, simplify, simplify_with_value, subtract};
pub use parse::parse_fraction_expression;

/// An exact rational number. The denominator is never zero.
///
/// A fraction is not necessarily in lowest terms; use [`simplify`] or [`Fraction::simplified`]
/// to reduce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates a new fraction. Returns [`FractionError::ZeroDenominator`] if `denominator` is
    /// zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self { numerator, denominator })
    }

    /// The numerator of the fraction.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator of the fraction.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// The value of the fraction as a float.
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns this fraction in lowest terms, with a positive denominator.
    pub fn simplified(self) -> Result<Self, FractionError> {
        simplify(self.numerator, self.denominator)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = InvalidFraction;

    /// Parses `n/d` or a bare integer `n`. Whitespace around either number is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidFraction { text: value.to_owned() };
        let (numerator, denominator) = match value.split_once('/') {
            Some((numerator, denominator)) => (numerator, denominator),
            None => (value, "1"),
        };

        let numerator = numerator.trim().parse().map_err(|_| invalid())?;
        let denominator = denominator.trim().parse().map_err(|_| invalid())?;
        Self::new(numerator, denominator).map_err(|_| invalid())
    }
}

/// A fraction in lowest terms, along with its value as a float.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifiedFraction {
    fraction: Fraction,
    value: f64,
}

impl SimplifiedFraction {
    /// The numerator of the fraction.
    pub fn numerator(&self) -> i64 {
        self.fraction.numerator
    }

    /// The denominator of the fraction. This is always positive.
    pub fn denominator(&self) -> i64 {
        self.fraction.denominator
    }

    /// The value of the fraction, `numerator / denominator`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The fraction itself, without its value.
    pub fn fraction(&self) -> Fraction {
        self.fraction
    }
}

impl From<SimplifiedFraction> for Fraction {
    fn from(simplified: SimplifiedFraction) -> Self {
        simplified.fraction
    }
}

impl Display for SimplifiedFraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fraction.fmt(f)
    }
}

/// Error returned when fraction arithmetic is given an invalid argument.
///
/// These are not "could not solve" conditions: they mean the caller passed something it should
/// not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// A denominator was zero.
    ZeroDenominator,

    /// The divisor of [`divide`] was zero.
    DivideByZero,

    /// The result does not fit in an `i64`.
    Overflow,
}

impl Display for FractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator => write!(f, "the denominator of a fraction cannot be zero"),
            Self::DivideByZero => write!(f, "cannot divide a fraction by zero"),
            Self::Overflow => write!(f, "the result does not fit in a 64-bit integer"),
        }
    }
}

impl Error for FractionError {}

/// Error returned if text cannot be parsed as a [`Fraction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFraction {
    /// The text that could not be parsed.
    text: String,
}

impl Display for InvalidFraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid fraction: `{}`", self.text)
    }
}

impl Error for InvalidFraction {}
