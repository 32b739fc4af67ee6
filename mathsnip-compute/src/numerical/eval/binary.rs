use mathsnip_parser::parser::{binary::Binary, token::op::BinOpKind};
use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, Error, NonFiniteResult},
    eval::Eval,
};

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        let value = match self.op.kind {
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
            BinOpKind::Mul => left * right,
            BinOpKind::Div => {
                if right == 0.0 {
                    return Err(Error::new(
                        vec![self.rhs.span(), self.op.span.clone()],
                        DivisionByZero,
                    ));
                }
                left / right
            },
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::new(vec![self.span.clone()], NonFiniteResult))
        }
    }
}
