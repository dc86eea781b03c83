use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Arity, Builtin, Value},
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every builtin, in registry order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: len },
    "first" => { arity: Arity::Exact(1), func: first },
    "last"  => { arity: Arity::Exact(1), func: last },
    "rest"  => { arity: Arity::Exact(1), func: rest },
    "push"  => { arity: Arity::Exact(2), func: push },
    "puts"  => { arity: Arity::Any, func: puts },
}

/// Finds the builtin registered under `name`, as a callable value.
///
/// Identifier resolution consults this only after the environment chain,
/// so user bindings shadow builtins of the same name.
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| Value::Builtin(*builtin))
}

/// The length of a string (in bytes) or of an array.
fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        value => Err(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                         type_name: value.type_name(),
                                                         line }),
    }
}

/// The first element of an array, or `null` when it is empty.
fn first(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        value => Err(RuntimeError::ArgumentNotArray { builtin:   "first",
                                                      type_name: value.type_name(),
                                                      line }),
    }
}

/// The last element of an array, or `null` when it is empty.
fn last(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        value => Err(RuntimeError::ArgumentNotArray { builtin:   "last",
                                                      type_name: value.type_name(),
                                                      line }),
    }
}

/// A fresh array holding every element but the first, or `null` when the
/// array is empty. The original array is left untouched.
fn rest(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::from(elements[1..].to_vec()))
            }
        },
        value => Err(RuntimeError::ArgumentNotArray { builtin:   "rest",
                                                      type_name: value.type_name(),
                                                      line }),
    }
}

/// A fresh array with the given value appended. The original array is left
/// untouched.
fn push(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend_from_slice(elements);
            extended.push(args[1].clone());
            Ok(Value::from(extended))
        },
        value => Err(RuntimeError::ArgumentNotArray { builtin:   "push",
                                                      type_name: value.type_name(),
                                                      line }),
    }
}

/// Prints each argument's canonical form on its own line and yields `null`.
fn puts(args: &[Value], _line: usize) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
