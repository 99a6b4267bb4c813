use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::emitter::{COMPARATOR_LOOKUP, OPERATOR_LOOKUP};

/// Emits an expression as inline text, depth-first.
///
/// Number and identifier leaves pass their source text through verbatim;
/// operators are mapped through the constant lookup tables. An operator
/// kind missing from its table is a fatal emission error.
pub fn emit_expression(expression: &Expr) -> Result<String, Error> {
    match expression {
        Expr::Number(value) => Ok(value.clone()),
        Expr::Symbol(name) => Ok(name.clone()),
        Expr::Unary { operator, operand } => {
            let symbol = OPERATOR_LOOKUP.get(operator).ok_or_else(|| {
                Error::new(
                    ErrorImpl::InvalidOperator {
                        operator: *operator,
                    },
                    Position::null(),
                )
            })?;

            Ok(format!("{}{}", symbol, emit_expression(operand)?))
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            let symbol = OPERATOR_LOOKUP.get(operator).ok_or_else(|| {
                Error::new(
                    ErrorImpl::InvalidOperator {
                        operator: *operator,
                    },
                    Position::null(),
                )
            })?;

            Ok(format!(
                "{} {} {}",
                emit_expression(left)?,
                symbol,
                emit_expression(right)?
            ))
        }
        Expr::Comparison {
            left,
            operator,
            right,
        } => {
            let symbol = COMPARATOR_LOOKUP.get(operator).ok_or_else(|| {
                Error::new(
                    ErrorImpl::InvalidOperator {
                        operator: *operator,
                    },
                    Position::null(),
                )
            })?;

            Ok(format!(
                "{} {} {}",
                emit_expression(left)?,
                symbol,
                emit_expression(right)?
            ))
        }
    }
}
