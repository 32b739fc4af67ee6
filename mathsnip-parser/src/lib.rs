//! Normalizer, tokenizer and parser for LaTeX-flavored arithmetic snippets.
//!
//! A snippet goes through three stages before it can be evaluated:
//!
//! 1. [`latex::full_clean`] turns markup like `\mathbf{2} \cdot \frac{1}{2}` into canonical
//!    arithmetic text, `2*(1/2)`.
//! 2. [`tokenizer::tokenize_complete`] splits the canonical text into tokens with [`logos`].
//! 3. [`parser::Parser`] builds an [`Expr`](parser::expr::Expr) tree from the tokens.
//!
//! ```
//! use mathsnip_parser::{latex::full_clean, parser::{expr::Expr, Parser}};
//!
//! let cleaned = full_clean(r"\text{3} \times \frac{X}{2}").unwrap();
//! assert_eq!(cleaned, "3*(X/2)");
//!
//! let expr = Parser::new(&cleaned).try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.blank_count(), 1);
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the syntax tree and the token kinds.

pub mod latex;
pub mod parser;
pub mod tokenizer;
