#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression.
///
/// The only thing an arithmetic snippet can refer to is the blank, so the context is the value
/// the blank is bound to, if any. Evaluating a blank in a context where it is not bound is an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The value of the blank.
    blank: Option<f64>,
}

impl Ctxt {
    /// Creates a context in which the blank has the given value.
    pub fn with_blank(value: f64) -> Self {
        Self { blank: Some(value) }
    }

    /// Binds the blank to the given value, replacing any previous value.
    pub fn bind_blank(&mut self, value: f64) {
        self.blank = Some(value);
    }

    /// Returns the value of the blank, or [`None`] if it is not bound.
    pub fn blank(&self) -> Option<f64> {
        self.blank
    }
}
