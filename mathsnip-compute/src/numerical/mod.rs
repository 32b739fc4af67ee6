//! Safe numerical evaluation of canonical arithmetic text.
//!
//! Nothing here executes its input. Text is checked against a character allow-list, parsed into
//! an [`Expr`](mathsnip_parser::parser::expr::Expr) tree, and the tree is walked by the [`Eval`]
//! trait.
//!
//! [`Eval`]: eval::Eval

pub mod ctxt;
pub mod error;
pub mod eval;
mod evaluate;

pub use evaluate::{evaluate, is_valid, parse_canonical, try_evaluate};
