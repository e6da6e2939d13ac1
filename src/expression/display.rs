use std::fmt;

use crate::expression::ast::{BinaryOp, Expression};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Leaf(n) => write!(f, "{}", n),
            Expression::Operation(op) => {
                write!(f, "({} {} {})", op.left(), op.symbol(), op.right())
            }
        }
    }
}

fn precedence(expr: &Expression) -> u8 {
    match expr.as_operation().map(|op| op.op()) {
        Some(BinaryOp::Add | BinaryOp::Sub) => 1,
        Some(BinaryOp::Mul | BinaryOp::Div) => 2,
        None => 3,
    }
}

impl Expression {
    /// Infix form with only the parentheses that change the meaning.
    /// For display only: equal strings do not imply equal trees.
    pub fn to_compact_string(&self) -> String {
        fn write_operand(out: &mut String, expr: &Expression, need_parens: bool) {
            if need_parens {
                out.push('(');
                write_expression(out, expr);
                out.push(')');
            } else {
                write_expression(out, expr);
            }
        }

        fn write_expression(out: &mut String, expr: &Expression) {
            let Some(op) = expr.as_operation() else {
                out.push_str(&expr.value().to_string());
                return;
            };

            let own = precedence(expr);
            let lp = precedence(op.left());
            let rp = precedence(op.right());
            // Right operands of - and / group to the left, so an equal
            // precedence child still needs its parentheses.
            let need_r = match op.op() {
                BinaryOp::Add | BinaryOp::Mul => rp < own,
                BinaryOp::Sub | BinaryOp::Div => rp <= own,
            };

            write_operand(out, op.left(), lp < own);
            out.push(' ');
            out.push(op.symbol());
            out.push(' ');
            write_operand(out, op.right(), need_r);
        }

        let mut out = String::new();
        write_expression(&mut out, self);
        out
    }
}
