use mathsnip_parser::parser::literal::Literal;
use crate::numerical::{
    ctxt::Ctxt,
    error::{Error, NonFiniteResult, UnboundBlank},
    eval::Eval,
};

impl Eval for Literal {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            // a literal with hundreds of digits parses to infinity
            Literal::Number(num) if !num.value.is_finite() => {
                Err(Error::new(vec![num.span.clone()], NonFiniteResult))
            },
            Literal::Number(num) => Ok(num.value),
            Literal::Blank(blank) => ctxt.blank()
                .ok_or_else(|| Error::new(vec![blank.span.clone()], UnboundBlank)),
        }
    }
}
