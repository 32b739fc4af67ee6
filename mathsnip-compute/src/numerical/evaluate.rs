use log::debug;
use mathsnip_parser::{
    latex::convert_operators,
    parser::{expr::Expr, Parser},
};
use super::{ctxt::Ctxt, error::{DisallowedCharacter, Error}, eval::Eval};

/// Returns true if `c` may appear in arithmetic text. Whitespace is allowed so that the tokenizer
/// can keep adjacent numbers apart.
fn is_arithmetic(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' | ' ' | '\t' | '\n' | '\r')
}

/// Checks every character of `text` against the arithmetic allow-list. If `allow_blank` is true,
/// the blank `X` is allowed as well.
fn check_allowed(text: &str, allow_blank: bool) -> Result<(), Error> {
    match text
        .char_indices()
        .find(|&(_, c)| !(is_arithmetic(c) || (allow_blank && c == 'X')))
    {
        Some((i, found)) => Err(Error::new(vec![i..i + found.len_utf8()], DisallowedCharacter { found })),
        None => Ok(()),
    }
}

/// Checks `text` against the allow-list, then parses it into an expression tree.
///
/// This is the only way text reaches the parser: anything outside the allow-list is rejected
/// before a single token is produced. `text` must already be normalized; the spans of the
/// returned tree and of any error point into it.
pub fn parse_canonical(text: &str, allow_blank: bool) -> Result<Expr, Error> {
    check_allowed(text, allow_blank)?;
    Parser::new(text).try_parse_full::<Expr>()
}

/// Prepares raw input for evaluation: trims it and converts LaTeX and Unicode operators to ASCII.
///
/// Interior whitespace is kept, so `1 2` is two numbers and fails to parse.
fn prepare(expr: &str) -> String {
    convert_operators(expr.trim()).trim().to_owned()
}

/// Returns true if `expr` consists only of characters that are allowed in arithmetic text, after
/// converting operators. The expression is not parsed or evaluated.
///
/// Input that is empty after trimming is not valid.
pub fn is_valid(expr: &str) -> bool {
    let prepared = prepare(expr);
    !prepared.is_empty() && check_allowed(&prepared, false).is_ok()
}

/// Evaluates an arithmetic expression, returning the error if it cannot be evaluated.
///
/// The spans of the error point into the prepared text: `expr`, trimmed, with its operators
/// converted to ASCII.
pub fn try_evaluate(expr: &str) -> Result<f64, Error> {
    let prepared = prepare(expr);
    parse_canonical(&prepared, false)?.eval(&Ctxt::default())
}

/// Evaluates an arithmetic expression.
///
/// Returns [`None`] if the expression contains anything besides numbers, the operators `+`, `-`,
/// `*`, `/` and parentheses, if it is empty or malformed, if it divides by zero, or if its value
/// is not finite.
///
/// ```
/// use mathsnip_compute::numerical::evaluate;
///
/// assert_eq!(evaluate("2 \\times (3 - 1)"), Some(4.0));
/// assert_eq!(evaluate("alert(1)"), None);
/// ```
pub fn evaluate(expr: &str) -> Option<f64> {
    try_evaluate(expr)
        .map_err(|err| debug!("could not evaluate {:?}: {}", expr, err))
        .ok()
}
