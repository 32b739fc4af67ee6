//! Solvers for equations and inequalities that contain a single blank.
//!
//! A blank is written in one of several ways in scraped markup: `\duoblank{…}`, `\square`,
//! `\Box`, `\blank`, or `?`. [`replace_blank_markers`] rewrites all of them to the canonical
//! blank, `X`, before anything else happens.

pub mod equation;
pub mod error;
pub mod inequality;

use error::{Error, WrongSideCount};
use mathsnip_parser::{
    latex::{replace_command, replace_command_name},
    parser::expr::Expr,
};
use crate::numerical::parse_canonical;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use equation::{solve_equation_with_blank, solve_for_blank, try_solve_equation_with_blank};
pub use inequality::{solve_inequality_with_blank, try_solve_inequality_with_blank};

/// The canonical spelling of the blank.
pub const BLANK: &str = "X";

/// Blank markers that are commands without arguments.
const BLANK_COMMANDS: [&str; 3] = ["\\square", "\\Box", "\\blank"];

/// Options that control how equations are solved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveOptions {
    /// The integers to try, in order, when the blank appears more than once in an equation.
    ///
    /// The default is `-10000..=10000`.
    pub search_range: RangeInclusive<i64>,

    /// How close the value of the expression must be to the target for a candidate to be
    /// accepted by the search.
    ///
    /// The default is `1e-4`.
    pub tolerance: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            search_range: -10_000..=10_000,
            tolerance: 1e-4,
        }
    }
}

impl SolveOptions {
    /// Wraps the given [`SolveOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SolveOptionsBuilder {
        SolveOptionsBuilder(self)
    }
}

/// A builder for [`SolveOptions`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolveOptionsBuilder(SolveOptions);

impl SolveOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integers to search. See [`SolveOptions::search_range`] for more information.
    pub fn search_range(mut self, search_range: RangeInclusive<i64>) -> Self {
        self.0.search_range = search_range;
        self
    }

    /// Sets the tolerance of the search. See [`SolveOptions::tolerance`] for more information.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Builds the [`SolveOptions`] struct.
    pub fn build(self) -> SolveOptions {
        self.0
    }
}

/// Replaces every blank marker in `text` with [`BLANK`].
pub fn replace_blank_markers(text: &str) -> Result<String, Error> {
    let text = replace_command(text, "\\duoblank", BLANK)?;
    let text = BLANK_COMMANDS
        .iter()
        .fold(text, |text, command| replace_command_name(&text, command, BLANK));
    Ok(text.replace('?', BLANK))
}

/// One side of an equation or inequality, and where it starts in the text it was split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Side<'a> {
    text: &'a str,
    start: usize,
}

impl Side<'_> {
    /// Returns true if this side contains the blank.
    fn has_blank(&self) -> bool {
        self.text.contains(BLANK)
    }

    /// Parses this side as canonical text and passes the expression to `f`. The spans of any
    /// error are shifted to point into the text this side was split from.
    fn with_expr<T>(
        &self,
        allow_blank: bool,
        f: impl FnOnce(Expr) -> Result<T, Error>,
    ) -> Result<T, Error> {
        parse_canonical(self.text, allow_blank)
            .and_then(f)
            .map_err(|err| err.offset(self.start))
    }
}

/// Splits `text` into exactly two non-empty sides around `separator`.
fn split_sides<'a>(text: &'a str, separator: &'static str) -> Result<[Side<'a>; 2], Error> {
    let positions = text.match_indices(separator).map(|(i, _)| i).collect::<Vec<_>>();
    let found = text.split(separator).filter(|side| !side.trim().is_empty()).count();

    match positions[..] {
        [i] if found == 2 => Ok([
            Side { text: &text[..i], start: 0 },
            Side { text: &text[i + separator.len()..], start: i + separator.len() },
        ]),
        [] => Err(Error::new(vec![0..text.len()], WrongSideCount { separator, found })),
        _ => Err(Error::new(
            positions.iter().map(|&i| i..i + separator.len()).collect(),
            WrongSideCount { separator, found },
        )),
    }
}
