use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operation between two values.
///
/// Dispatch is by operand shape: two integers support the full arithmetic
/// and comparison set, two strings support `+` (concatenation) only, and
/// every other same-type pairing supports `==`/`!=` by value. Operands of
/// different types are a type mismatch, before any operator check.
pub(in crate::interpreter::evaluator) fn eval_infix(op: InfixOperator,
                                                    left: &Value,
                                                    right: &Value,
                                                    line: usize)
                                                    -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r, line),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(op, l, r, line),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             op,
                                             right: right.type_name(),
                                             line })
        },
        _ => match op {
            InfixOperator::Equal => Ok(Value::Bool(left == right)),
            InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          op,
                                                          right: right.type_name(),
                                                          line }),
        },
    }
}

/// Integer arithmetic and comparison. Arithmetic wraps two's-complement,
/// division truncates toward zero, and a zero divisor is an error rather
/// than a crash.
fn eval_integer_infix(op: InfixOperator, l: i64, r: i64, line: usize) -> EvalResult<Value> {
    use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    match op {
        Add => Ok(Value::Integer(l.wrapping_add(r))),
        Sub => Ok(Value::Integer(l.wrapping_sub(r))),
        Mul => Ok(Value::Integer(l.wrapping_mul(r))),
        Div => {
            if r == 0 {
                Err(RuntimeError::DivisionByZero { line })
            } else {
                Ok(Value::Integer(l.wrapping_div(r)))
            }
        },
        Less => Ok(Value::Bool(l < r)),
        Greater => Ok(Value::Bool(l > r)),
        Equal => Ok(Value::Bool(l == r)),
        NotEqual => Ok(Value::Bool(l != r)),
    }
}

/// String operations: `+` concatenates into a fresh string; every other
/// operator is unknown for strings, including the comparisons.
fn eval_string_infix(op: InfixOperator, l: &str, r: &str, line: usize) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => {
            let mut joined = String::with_capacity(l.len() + r.len());
            joined.push_str(l);
            joined.push_str(r);
            Ok(Value::Str(Rc::from(joined)))
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      op,
                                                      right: "STRING",
                                                      line }),
    }
}
