//! Evaluation, fraction algebra and single-blank solving for normalized arithmetic snippets.
//!
//! - [`numerical`] evaluates canonical arithmetic text by walking the syntax tree produced by
//!   [`mathsnip_parser`]. Text that contains anything besides digits, `.`, `+`, `-`, `*`, `/` and
//!   parentheses is rejected before it is parsed.
//! - [`fraction`] implements exact arithmetic on `(numerator, denominator)` pairs.
//! - [`solve`] solves equations and inequalities that contain exactly one blank.
//!
//! The convenience functions ([`numerical::evaluate`], [`solve::solve_equation_with_blank`],
//! [`solve::solve_inequality_with_blank`] and [`fraction::parse_fraction_expression`]) return
//! [`None`] whenever the input cannot be handled. Each has a `try_` counterpart that returns the
//! [`mathsnip_error::Error`] instead, which can be rendered with [`ariadne`].
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`fraction::Fraction`],
//!   [`fraction::SimplifiedFraction`] and [`solve::SolveOptions`].

pub mod fraction;
pub mod numerical;
pub mod solve;
