//! Solves equations with a single blank, such as `3 + \duoblank{1} = 7`.
//!
//! When the blank appears exactly once, the equation is solved in closed form by walking from the
//! root of the expression down to the blank, undoing one operation at a time:
//!
//! | expression | solution of `expression = t` |
//! |------------|------------------------------|
//! | `a + X`, `X + a` | `X = t - a` |
//! | `X - a` | `X = t + a` |
//! | `a - X` | `X = a - t` |
//! | `a * X`, `X * a` | `X = t / a` |
//! | `X / a` | `X = t * a` |
//! | `a / X` | `X = a / t` |
//! | `-X` | `X = -t` |
//!
//! `X` in the table stands for any subexpression that contains the blank, and parentheses are
//! skipped over. When the blank appears more than once, or when a step of the table is undefined
//! (a zero coefficient, a zero divisor, or a result that is not finite), integers in
//! [`SolveOptions::search_range`] are tried in order instead.

use log::debug;
use mathsnip_parser::{
    latex::full_clean,
    parser::{expr::Expr, literal::Literal, token::op::BinOpKind},
};
use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, NonFiniteResult},
    eval::Eval,
};
use super::{
    error::{BlankPlacement, Error, SearchExhausted, ZeroCoefficient},
    replace_blank_markers,
    split_sides,
    SolveOptions,
};

/// Solves `expr = target` for the blank by undoing each operation around it. `expr` must contain
/// the blank exactly once.
fn isolate(expr: &Expr, target: f64) -> Result<f64, Error> {
    let mut node = expr;
    let mut target = target;

    loop {
        match node {
            Expr::Literal(Literal::Blank(_)) => return Ok(target),
            Expr::Literal(Literal::Number(num)) => {
                return Err(Error::new(vec![num.span.clone()], BlankPlacement { on_both: false }));
            },
            Expr::Paren(paren) => node = &*paren.expr,
            Expr::Unary(unary) => {
                target = -target;
                node = &*unary.operand;
            },
            Expr::Binary(binary) => {
                let blank_on_left = binary.lhs.contains_blank();
                let (with_blank, known) = if blank_on_left {
                    (&*binary.lhs, &*binary.rhs)
                } else {
                    (&*binary.rhs, &*binary.lhs)
                };
                let value = known.eval_default()?;

                target = match (binary.op.kind, blank_on_left) {
                    (BinOpKind::Add, _) => target - value,
                    (BinOpKind::Sub, true) => target + value,
                    (BinOpKind::Sub, false) => value - target,
                    (BinOpKind::Mul, _) if value == 0.0 => {
                        return Err(Error::new(vec![known.span()], ZeroCoefficient));
                    },
                    (BinOpKind::Mul, _) => target / value,
                    (BinOpKind::Div, true) if value == 0.0 => {
                        return Err(Error::new(
                            vec![known.span(), binary.op.span.clone()],
                            DivisionByZero,
                        ));
                    },
                    (BinOpKind::Div, true) => target * value,
                    (BinOpKind::Div, false) => value / target,
                };
                node = with_blank;
            },
        }

        if !target.is_finite() {
            return Err(Error::new(vec![node.span()], NonFiniteResult));
        }
    }
}

/// Tries every integer in the search range, in order, and returns the first one for which the
/// value of `expr` is within the tolerance of `target`.
fn search(expr: &Expr, target: f64, options: &SolveOptions) -> Result<f64, Error> {
    options.search_range
        .clone()
        .find(|&candidate| {
            expr.eval(&Ctxt::with_blank(candidate as f64))
                .is_ok_and(|value| (value - target).abs() < options.tolerance)
        })
        .map(|candidate| candidate as f64)
        .ok_or_else(|| Error::new(vec![expr.span()], SearchExhausted {
            start: *options.search_range.start(),
            end: *options.search_range.end(),
        }))
}

/// Solves `expr = target` for the blank in `expr`.
///
/// If the blank appears exactly once, the solution is computed in closed form. If it appears more
/// than once, or the closed form is undefined, the integers in [`SolveOptions::search_range`] are
/// tried in order, and the first one that makes `expr` equal to `target` (within
/// [`SolveOptions::tolerance`]) is returned.
pub fn solve_for_blank(expr: &Expr, target: f64, options: &SolveOptions) -> Result<f64, Error> {
    match expr.blank_count() {
        0 => Err(Error::new(vec![expr.span()], BlankPlacement { on_both: false })),
        1 => {
            debug!("isolating the blank in `{}` = {}", expr, target);
            isolate(expr, target).or_else(|err| {
                debug!(
                    "no closed form for `{}` = {} ({}), searching {:?}",
                    expr, target, err, options.search_range,
                );
                search(expr, target, options)
            })
        },
        count => {
            debug!(
                "the blank appears {} times in `{}`, searching {:?}",
                count, expr, options.search_range,
            );
            search(expr, target, options)
        },
    }
}

/// Solves an equation containing a single blank, returning the error if it cannot be solved.
///
/// The spans of the error point into the normalized equation: blank markers replaced by `X`, and
/// the result passed through [`full_clean`].
pub fn try_solve_equation_with_blank(raw: &str, options: &SolveOptions) -> Result<f64, Error> {
    let cleaned = full_clean(&replace_blank_markers(raw)?)?;
    let [left, right] = split_sides(&cleaned, "=")?;

    let (with_blank, other) = match (left.has_blank(), right.has_blank()) {
        (true, false) => (left, right),
        (false, true) => (right, left),
        (on_both, _) => {
            return Err(Error::new(vec![0..cleaned.len()], BlankPlacement { on_both }));
        },
    };

    let target = other.with_expr(false, |expr| expr.eval_default())?;
    with_blank.with_expr(true, |expr| match expr.innermost() {
        Expr::Literal(Literal::Blank(_)) => {
            debug!("`{}` is the blank on its own", cleaned);
            Ok(target)
        },
        _ => solve_for_blank(&expr, target, options),
    })
}

/// Solves an equation containing a single blank, such as `3 + \duoblank{1} = 7`.
///
/// Returns [`None`] if the equation cannot be solved; see [`try_solve_equation_with_blank`] to
/// find out why.
///
/// ```
/// use mathsnip_compute::solve::solve_equation_with_blank;
///
/// assert_eq!(solve_equation_with_blank(r"3 + \duoblank{1} = 7"), Some(4.0));
/// assert_eq!(solve_equation_with_blank("X * X = 49"), Some(-7.0));
/// ```
pub fn solve_equation_with_blank(raw: &str) -> Option<f64> {
    try_solve_equation_with_blank(raw, &SolveOptions::default())
        .map_err(|err| debug!("could not solve {:?}: {}", raw, err))
        .ok()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use mathsnip_error::ErrorClass;
    use crate::numerical::{error::DisallowedCharacter, parse_canonical};
    use crate::solve::{error::WrongSideCount, SolveOptionsBuilder};
    use super::*;

    /// Solves with the default options, returning the error on failure.
    fn try_solve(raw: &str) -> Result<f64, Error> {
        try_solve_equation_with_blank(raw, &SolveOptions::default())
    }

    #[test]
    fn duoblank() {
        assert_eq!(solve_equation_with_blank(r"3 + \duoblank{1} = 7"), Some(4.0));
        assert_eq!(solve_equation_with_blank(r"\duoblank{} + 4 = 7"), Some(3.0));
    }

    #[test]
    fn plain_blank() {
        assert_eq!(solve_equation_with_blank("X * 5 = 25"), Some(5.0));
        assert_eq!(solve_equation_with_blank("? - 2 = 10"), Some(12.0));
        assert_eq!(solve_equation_with_blank(r"12 = \square \times 4"), Some(3.0));
    }

    #[test]
    fn blank_alone() {
        assert_eq!(solve_equation_with_blank(r"\Box = 2 \cdot 3 + 1"), Some(7.0));
        assert_eq!(solve_equation_with_blank(r"\frac{3}{4} = \blank"), Some(0.75));
    }

    #[test]
    fn every_single_operation() {
        assert_eq!(solve_equation_with_blank("X+2=5"), Some(3.0));
        assert_eq!(solve_equation_with_blank("2+X=5"), Some(3.0));
        assert_eq!(solve_equation_with_blank("X-2=5"), Some(7.0));
        assert_eq!(solve_equation_with_blank("2-X=5"), Some(-3.0));
        assert_eq!(solve_equation_with_blank("X*2=5"), Some(2.5));
        assert_eq!(solve_equation_with_blank("2*X=5"), Some(2.5));
        assert_eq!(solve_equation_with_blank("X/2=5"), Some(10.0));
        assert_eq!(solve_equation_with_blank("2/X=5"), Some(0.4));
        assert_eq!(solve_equation_with_blank("-X=5"), Some(-5.0));
    }

    #[test]
    fn redundant_parentheses() {
        assert_eq!(solve_equation_with_blank("(X)+3=10"), Some(7.0));
        assert_eq!(solve_equation_with_blank("((X))*4=10"), Some(2.5));
    }

    #[test]
    fn nested_operations() {
        assert_eq!(solve_equation_with_blank("2*(X+3)-4=10"), Some(4.0));
        assert_eq!(solve_equation_with_blank(r"\frac{X}{3}+1=5"), Some(12.0));
        assert_float_relative_eq!(
            solve_equation_with_blank(r"\frac{1}{2} \times (10 - X) = 1.75").unwrap(),
            6.5
        );
    }

    #[test]
    fn non_integer_single_blank() {
        assert_float_relative_eq!(solve_equation_with_blank("3*X=1").unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn repeated_blank_search() {
        assert_eq!(solve_equation_with_blank("X*X=49"), Some(-7.0));
        assert_eq!(solve_equation_with_blank("X+X+X=12"), Some(4.0));
        assert_eq!(solve_equation_with_blank("X*(X-1)=0"), Some(0.0));
    }

    #[test]
    fn repeated_blank_skips_division_by_zero() {
        assert_eq!(solve_equation_with_blank("X/X+X=3"), Some(2.0));
    }

    #[test]
    fn search_only_finds_integers_in_range() {
        let err = try_solve("X*X=2").unwrap_err();
        assert!(err.is::<SearchExhausted>());
        assert_eq!(err.class(), ErrorClass::Unsolvable);

        assert_eq!(solve_equation_with_blank("X+X=40002"), None);
    }

    #[test]
    fn custom_search_range() {
        let options = SolveOptionsBuilder::new().search_range(1..=10).build();
        assert_eq!(try_solve_equation_with_blank("X*X=49", &options).unwrap(), 7.0);

        let options = SolveOptions::default().into_builder().search_range(0..=5).build();
        let err = try_solve_equation_with_blank("X*X=49", &options).unwrap_err();
        assert_eq!(err.downcast_ref::<SearchExhausted>(), Some(&SearchExhausted { start: 0, end: 5 }));
    }

    #[test]
    fn blank_placement() {
        let err = try_solve("X+1=X").unwrap_err();
        assert_eq!(err.downcast_ref::<BlankPlacement>(), Some(&BlankPlacement { on_both: true }));

        let err = try_solve("1+1=2").unwrap_err();
        assert_eq!(err.downcast_ref::<BlankPlacement>(), Some(&BlankPlacement { on_both: false }));
    }

    #[test]
    fn wrong_side_count() {
        assert!(try_solve("X+1").unwrap_err().is::<WrongSideCount>());
        assert!(try_solve("X=1=1").unwrap_err().is::<WrongSideCount>());
        assert!(try_solve("X=").unwrap_err().is::<WrongSideCount>());
        assert_eq!(solve_equation_with_blank(""), None);
    }

    #[test]
    fn parenthesized_blank_alone() {
        assert_eq!(solve_equation_with_blank("((X)) = 3 - 1"), Some(2.0));
    }

    #[test]
    fn zero_coefficient() {
        let expr = parse_canonical("0*X", true).unwrap();
        let err = isolate(&expr, 5.0).unwrap_err();
        assert!(err.is::<ZeroCoefficient>());
        assert_eq!(err.spans, vec![0..1]);

        assert!(try_solve("0*X=5").unwrap_err().is::<SearchExhausted>());
    }

    #[test]
    fn undefined_closed_form_falls_back_to_search() {
        assert_eq!(solve_equation_with_blank("0*X=0"), Some(-10000.0));
        assert_eq!(solve_equation_with_blank("0/X=0"), Some(-10000.0));
        assert_eq!(solve_equation_with_blank("X*0+5=5"), Some(-10000.0));

        let options = SolveOptionsBuilder::new().search_range(1..=3).build();
        assert_eq!(try_solve_equation_with_blank("0*X=0", &options).unwrap(), 1.0);
    }

    #[test]
    fn division_by_zero() {
        let expr = parse_canonical("X/0", true).unwrap();
        let err = isolate(&expr, 5.0).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![2..3, 1..2]);

        let expr = parse_canonical("5/X", true).unwrap();
        assert!(isolate(&expr, 0.0).unwrap_err().is::<NonFiniteResult>());

        assert!(try_solve("X/0=5").unwrap_err().is::<SearchExhausted>());
        assert!(try_solve("5/X=0").unwrap_err().is::<SearchExhausted>());
        assert!(try_solve("X=1/0").unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn errors_point_into_the_normalized_text() {
        let err = try_solve("X+1=2+a").unwrap_err();
        assert!(err.is::<DisallowedCharacter>());
        assert_eq!(err.spans, vec![6..7]);
    }

    #[test]
    fn unsafe_input() {
        assert_eq!(solve_equation_with_blank("X=alert(1)"), None);
        assert_eq!(solve_equation_with_blank("window.X=1"), None);
    }
}
