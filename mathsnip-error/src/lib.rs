//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every failure produced while normalizing, evaluating or solving a snippet is an [`Error`]: a
//! set of byte spans pointing into the text that was being processed, plus a boxed
//! [`ErrorKind`]. Kinds are plain structs that derive [`ErrorKind`] through the `mathsnip-attrs`
//! crate, which generates the [`ariadne`] report for them.

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad class an error belongs to.
///
/// Callers of the convenience functions never see these (every failure becomes [`None`]), but
/// they are useful to decide whether a failure was caused by the input or by the engine's limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The text could not be understood: unbalanced braces, unexpected tokens, or the wrong
    /// number of sides around `=` or a comparison operator.
    MalformedInput,

    /// A character outside the arithmetic allow-list survived normalization.
    UnsafeInput,

    /// Division by zero, or a result that is not a finite number.
    Arithmetic,

    /// The input was well-formed, but its shape is not one this engine can solve.
    Unsolvable,
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "malformed input"),
            Self::UnsafeInput => write!(f, "unsafe input"),
            Self::Arithmetic => write!(f, "arithmetic error"),
            Self::Unsolvable => write!(f, "unsolvable"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that callers can check the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The class this error belongs to.
    fn class(&self) -> ErrorClass;

    /// The one-line message of this error, as shown at the top of its report.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// The class of the contained error kind.
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Returns true if the contained error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the contained error kind as `K`, if it is of that type.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Shifts every span of this error forward by `by` bytes.
    ///
    /// Use this when the error was produced from a slice of a larger text, so that the spans
    /// point into the larger text instead.
    pub fn offset(mut self, by: usize) -> Self {
        for span in &mut self.spans {
            *span = span.start + by..span.end + by;
        }
        self
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.class(), self.kind.message())
    }
}

impl std::error::Error for Error {}

// lets the derive macro's generated paths resolve inside this crate's own tests
#[cfg(test)]
extern crate self as mathsnip_error;
