//! Normalization of LaTeX-flavored math snippets into canonical arithmetic text.
//!
//! Snippets scraped from markup look like `\mathbf{3} \cdot \frac{1}{2}`. The functions in this
//! module strip the wrapper commands, convert LaTeX and Unicode operators to their ASCII
//! spellings, and rewrite `\frac{N}{D}` as `(N/D)`, so that [`full_clean`] of the example above is
//! `3*(1/2)`.
//!
//! Every scan over braces uses an explicit depth counter, so arbitrarily nested braces are
//! handled. Braces are ASCII, so byte indices found by the scans are always valid `char`
//! boundaries.

pub mod error;

use error::{MissingDenominator, UnclosedBrace};
use log::trace;
use mathsnip_error::Error;
use std::ops::Range;

/// Commands whose only purpose is styling; their content is kept verbatim.
pub const WRAPPER_COMMANDS: [&str; 4] = ["\\mathbf", "\\textbf", "\\text", "\\mbox"];

/// LaTeX and Unicode operator spellings, and the text they are replaced with.
///
/// `\pm` becomes `±`, which is not arithmetic; the evaluator rejects it.
pub const OPERATORS: [(&str, &str); 13] = [
    ("\\cdot", "*"),
    ("\\times", "*"),
    ("\\div", "/"),
    ("\\pm", "±"),
    ("×", "*"),
    ("÷", "/"),
    ("−", "-"),
    ("⋅", "*"),
    ("\\left(", "("),
    ("\\right)", ")"),
    ("\\,", ""),
    ("\\;", ""),
    ("\\!", ""),
];

/// Spellings of the fraction command. `\dfrac` and `\tfrac` only change the rendered size.
const FRACTION_COMMANDS: [&str; 3] = ["\\frac", "\\dfrac", "\\tfrac"];

/// Given the index of an opening brace, returns the index of the brace that closes it.
pub fn find_closing_brace(text: &str, open: usize) -> Result<usize, Error> {
    let mut depth = 0usize;
    for (i, byte) in text.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(i);
                }
            },
            _ => (),
        }
    }

    Err(Error::new(vec![open..open + 1], UnclosedBrace))
}

/// Finds the first `command{…}` in `text` at or after `from`.
///
/// Returns the span of the whole command (including the closing brace) and the span of its
/// content.
fn find_command(
    text: &str,
    command: &str,
    from: usize,
) -> Result<Option<(Range<usize>, Range<usize>)>, Error> {
    let pattern = format!("{}{{", command);
    let Some(start) = text[from..].find(&pattern).map(|i| i + from) else {
        return Ok(None);
    };

    let open = start + command.len();
    let close = find_closing_brace(text, open)?;
    Ok(Some((start..close + 1, open + 1..close)))
}

/// Replaces the first `command{…}` in `text` with its content, verbatim.
///
/// If `text` does not contain `command` directly followed by an opening brace, it is returned
/// unchanged.
pub fn extract_command_content(text: &str, command: &str) -> Result<String, Error> {
    match find_command(text, command, 0)? {
        Some((whole, content)) => Ok(format!(
            "{}{}{}",
            &text[..whole.start],
            &text[content],
            &text[whole.end..],
        )),
        None => Ok(text.to_owned()),
    }
}

/// Replaces every `command{…}` in `text`, content included, with `replacement`.
pub fn replace_command(text: &str, command: &str, replacement: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some((whole, _)) = find_command(text, command, cursor)? {
        out.push_str(&text[cursor..whole.start]);
        out.push_str(replacement);
        cursor = whole.end;
    }
    out.push_str(&text[cursor..]);
    Ok(out)
}

/// Returns true if `text` contains any of the [`WRAPPER_COMMANDS`] followed by a brace.
fn has_wrapper(text: &str) -> bool {
    WRAPPER_COMMANDS
        .iter()
        .any(|command| text.contains(&format!("{}{{", command)))
}

/// Strips all [`WRAPPER_COMMANDS`] from `text`, keeping their content.
///
/// Stripping is repeated until no wrapper is left, including wrappers nested inside other
/// wrappers, so `clean_wrappers(clean_wrappers(s)) == clean_wrappers(s)`.
pub fn clean_wrappers(text: &str) -> Result<String, Error> {
    let mut text = text.to_owned();
    while has_wrapper(&text) {
        for command in WRAPPER_COMMANDS {
            text = extract_command_content(&text, command)?;
        }
    }
    Ok(text)
}

/// Converts the LaTeX and Unicode operators listed in [`OPERATORS`] to ASCII.
pub fn convert_operators(text: &str) -> String {
    OPERATORS
        .iter()
        .fold(text.to_owned(), |text, (from, to)| text.replace(from, to))
}

/// The location of a `\frac{N}{D}` command in some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionCommand {
    /// The whole command, from the backslash to the brace closing the denominator.
    pub whole: Range<usize>,

    /// The numerator, without its braces.
    pub numerator: Range<usize>,

    /// The denominator, without its braces.
    pub denominator: Range<usize>,
}

/// Finds the first fraction command in `text`, in any of its spellings.
///
/// Whitespace is allowed between the numerator and the denominator.
pub fn find_fraction(text: &str) -> Result<Option<FractionCommand>, Error> {
    let next = FRACTION_COMMANDS
        .iter()
        .filter_map(|command| {
            text.find(&format!("{}{{", command)).map(|start| (start, command.len()))
        })
        .min();
    let Some((start, command_len)) = next else {
        return Ok(None);
    };

    let numerator_open = start + command_len;
    let numerator_close = find_closing_brace(text, numerator_open)?;

    let after_numerator = &text[numerator_close + 1..];
    let denominator_open = numerator_close + 1
        + (after_numerator.len() - after_numerator.trim_start().len());
    if text.as_bytes().get(denominator_open) != Some(&b'{') {
        return Err(Error::new(vec![start..numerator_close + 1], MissingDenominator));
    }
    let denominator_close = find_closing_brace(text, denominator_open)?;

    Ok(Some(FractionCommand {
        whole: start..denominator_close + 1,
        numerator: numerator_open + 1..numerator_close,
        denominator: denominator_open + 1..denominator_close,
    }))
}

/// Rewrites every `\frac{N}{D}` in `text` as `(N/D)`.
///
/// The numerator and denominator are copied as opaque text, so nested fractions are rewritten
/// from the outside in: `\frac{\frac{1}{2}}{3}` becomes `((1/2)/3)`.
pub fn convert_fractions(text: &str) -> Result<String, Error> {
    let mut text = text.to_owned();
    while let Some(fraction) = find_fraction(&text)? {
        text = format!(
            "{}({}/{}){}",
            &text[..fraction.whole.start],
            &text[fraction.numerator],
            &text[fraction.denominator],
            &text[fraction.whole.end..],
        );
    }
    Ok(text)
}

/// Finds the first occurrence of the command `name` (such as `\le`) in `text` that is not the
/// start of a longer command name, so that `\le` does not match `\left`.
pub fn find_command_name(text: &str, name: &str) -> Option<usize> {
    text.match_indices(name)
        .map(|(i, _)| i)
        .find(|&i| {
            !text[i + name.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
        })
}

/// Replaces every occurrence of the command `name` in `text` with `replacement`, leaving longer
/// command names that start with `name` alone.
pub fn replace_command_name(text: &str, name: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(i) = find_command_name(rest, name) {
        out.push_str(&rest[..i]);
        out.push_str(replacement);
        rest = &rest[i + name.len()..];
    }
    out.push_str(rest);
    out
}

/// Removes every whitespace character from `text`.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalizes a LaTeX-flavored snippet into canonical arithmetic text.
///
/// This runs [`clean_wrappers`], [`convert_operators`], [`convert_fractions`], then removes all
/// whitespace. The result is not guaranteed to be valid arithmetic; it still has to pass the
/// evaluator's allow-list.
pub fn full_clean(text: &str) -> Result<String, Error> {
    let unwrapped = clean_wrappers(text)?;
    let converted = convert_fractions(&convert_operators(&unwrapped))?;
    let cleaned = remove_whitespace(&converted);
    trace!("normalized {:?} to {:?}", text, cleaned);
    Ok(cleaned)
}
