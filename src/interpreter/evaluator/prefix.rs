use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on a value.
///
/// Supported operators:
/// - `Not`: boolean negation of the operand's truthiness, so `!0` is
///   `false` and `!null` is `true`.
/// - `Negate`: integer negation, wrapping on `i64::MIN`. Any other operand
///   type is an unknown-operator error.
pub(in crate::interpreter::evaluator) fn eval_prefix(op: PrefixOperator,
                                                     operand: &Value,
                                                     line: usize)
                                                     -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        PrefixOperator::Negate => match operand {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           operand: operand.type_name(),
                                                           line }),
        },
    }
}
