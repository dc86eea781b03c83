use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block},
        value::{
            core::{Arity, Value},
            environment::Environment,
        },
    },
};

/// Applies a callable value to already-evaluated arguments.
///
/// For a user-defined function the argument count must equal the parameter
/// count; a fresh environment frame is parented on the function's captured
/// environment (not the caller's), each parameter is bound to its argument,
/// and the body runs as a block. A `return` reaching the end of the body is
/// unwrapped here, exactly once.
///
/// For a builtin the arity constraint from the registry is checked
/// centrally before the handler runs. Calling anything else is an error.
pub(in crate::interpreter::evaluator) fn apply_function(callee: &Value,
                                                        args: Vec<Value>,
                                                        line: usize)
                                                        -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if args.len() != function.params.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                              want: function.params.len(),
                                                              line });
            }

            let frame = Environment::enclosed(&function.env);
            for (param, value) in function.params.iter().zip(args) {
                frame.set(param.clone(), value);
            }

            Ok(eval_block(&function.body, &frame)?.into_value())
        },
        Value::Builtin(builtin) => {
            if let Arity::Exact(want) = builtin.arity
               && args.len() != want
            {
                return Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                                              want,
                                                              line });
            }

            (builtin.func)(&args, line)
        },
        _ => Err(RuntimeError::NotAFunction { type_name: callee.type_name(),
                                              line }),
    }
}
