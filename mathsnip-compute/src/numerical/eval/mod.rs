mod binary;
mod literal;
mod unary;

use mathsnip_parser::parser::{expr::Expr, paren::Paren};
use super::{ctxt::Ctxt, error::Error};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context, in which the blank
    /// is not bound.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

impl Eval for Paren {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.expr.eval(ctxt)
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::numerical::error::{DivisionByZero, NonFiniteResult, UnboundBlank};
    use mathsnip_error::ErrorClass;
    use mathsnip_parser::parser::Parser;
    use super::*;

    /// Parses the given canonical text, panicking on failure.
    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(parse("1+2").eval_default().unwrap(), 3.0);
    }

    #[test]
    fn binary_expr_2() {
        assert_eq!(parse("1+2*3").eval_default().unwrap(), 7.0);
    }

    #[test]
    fn left_associativity() {
        assert_eq!(parse("10-4-3").eval_default().unwrap(), 3.0);
        assert_eq!(parse("64/4/2").eval_default().unwrap(), 8.0);
    }

    #[test]
    fn binary_and_unary() {
        assert_eq!(parse("3*-5/5+6").eval_default().unwrap(), 3.0);
        assert_eq!(parse("--2").eval_default().unwrap(), 2.0);
        assert_eq!(parse("-(2+3)*2").eval_default().unwrap(), -10.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("((1+9)/5)*3").eval_default().unwrap(), 6.0);
    }

    #[test]
    fn decimals() {
        assert_float_relative_eq!(parse("0.1+0.2").eval_default().unwrap(), 0.3);
        assert_float_relative_eq!(parse("(1/3)*3").eval_default().unwrap(), 1.0);
    }

    #[test]
    fn bound_blank() {
        let expr = parse("X*(X+1)");
        assert_eq!(expr.eval(&Ctxt::with_blank(4.0)).unwrap(), 20.0);

        let mut ctxt = Ctxt::default();
        ctxt.bind_blank(-2.0);
        assert_eq!(expr.eval(&ctxt).unwrap(), 2.0);
    }

    #[test]
    fn unbound_blank() {
        let err = parse("1+X").eval_default().unwrap_err();
        assert!(err.is::<UnboundBlank>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn division_by_zero() {
        let err = parse("1/(2-2)").eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.class(), ErrorClass::Arithmetic);
        assert_eq!(err.spans, vec![2..7, 1..2]);
    }

    #[test]
    fn overflow_is_not_finite() {
        let huge = format!("1{}", "0".repeat(300));
        let err = parse(&format!("{0}*{0}", huge)).eval_default().unwrap_err();
        assert!(err.is::<NonFiniteResult>());
    }
}
