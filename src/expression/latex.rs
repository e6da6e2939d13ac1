use crate::expression::ast::{BinaryOp, Expression};

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division, which needs no parentheses around its operands
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr.as_operation().map(|op| op.op()) {
                Some(BinaryOp::Add | BinaryOp::Sub) => 1,
                Some(BinaryOp::Mul) => 2,
                // \frac is visually self-delimiting
                Some(BinaryOp::Div) | None => 3,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            let Some(op) = expr.as_operation() else {
                return expr.value().to_string();
            };

            let lp = precedence(op.left());
            let rp = precedence(op.right());
            match op.op() {
                BinaryOp::Add => format!("{} + {}", fmt(op.left()), fmt(op.right())),
                BinaryOp::Sub => {
                    let ls = fmt(op.left());
                    let mut rs = fmt(op.right());
                    if rp <= 1 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} - {}", ls, rs)
                }
                BinaryOp::Mul => {
                    let mut ls = fmt(op.left());
                    let mut rs = fmt(op.right());
                    if lp < 2 {
                        ls = wrap_parens(ls);
                    }
                    if rp < 2 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} \\cdot {}", ls, rs)
                }
                BinaryOp::Div => {
                    format!("\\frac{{{}}}{{{}}}", fmt(op.left()), fmt(op.right()))
                }
            }
        }

        fmt(self)
    }
}
