use std::rc::Rc;

use crate::{
    ast::{Block, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, call, infix, prefix},
        value::{
            core::{FunctionValue, Value},
            environment::Environment,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of evaluating a statement or block: either an ordinary
/// value, or a value travelling back to the nearest function-call boundary
/// because of a `return`.
///
/// Blocks pass a `Return` upward untouched; a function call (and the
/// program itself) unwraps it exactly once. The wrapper never escapes the
/// evaluator: every public entry point yields a plain [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// An ordinary evaluation result.
    Value(Value),
    /// A value on its way out of the enclosing function.
    Return(Value),
}

impl Flow {
    /// Unwraps the carried value regardless of variant. Used at the
    /// boundaries that stop `return` propagation.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) | Self::Return(value) => value,
        }
    }
}

/// Yields the value of a sub-expression, or forwards a `return` travelling
/// through it on to the caller.
macro_rules! value_of {
    ($flow:expr) => {
        match $flow {
            Flow::Value(value) => value,
            returned @ Flow::Return(_) => return Ok(returned),
        }
    };
}

/// Evaluates a whole program in the given environment.
///
/// Statements run in order; the program's result is the result of its last
/// statement, `null` for an empty program, or the returned value if a
/// top-level `return` is reached. The first runtime error stops evaluation
/// and becomes the overall result.
///
/// # Examples
/// ```
/// use quill::interpreter::{
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::{core::Value, environment::Environment},
/// };
///
/// let mut parser = Parser::new(Lexer::new("let add = fn(a, b) { a + b }; add(1, 2 + 3)"));
/// let program = parser.parse_program();
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(6)));
/// ```
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Flow::Return(value) => return Ok(value),
            Flow::Value(value) => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` defines a binding in the innermost frame and yields `null`;
/// `return` wraps its value in [`Flow::Return`]; an expression statement
/// yields whatever the expression does.
pub(in crate::interpreter::evaluator) fn eval_statement(statement: &Statement,
                                                        env: &Rc<Environment>)
                                                        -> EvalResult<Flow> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = value_of!(eval_expression(value, env)?);
            env.set(name.clone(), value);
            Ok(Flow::Value(Value::Null))
        },
        Statement::Return { value, .. } => {
            let value = value_of!(eval_expression(value, env)?);
            Ok(Flow::Return(value))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates the statements of a block in order.
///
/// Unlike program evaluation this does NOT unwrap a `return`: the carrier
/// keeps travelling upward so that only the enclosing function call
/// unwraps it, however deeply blocks are nested. Blocks do not open a new
/// scope; bindings land in the surrounding frame.
pub(in crate::interpreter::evaluator) fn eval_block(block: &Block,
                                                    env: &Rc<Environment>)
                                                    -> EvalResult<Flow> {
    let mut result = Flow::Value(Value::Null);

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if let Flow::Return(_) = result {
            break;
        }
    }

    Ok(result)
}

/// Evaluates an expression to a [`Flow`].
///
/// This is the evaluator's central dispatch: one match arm per expression
/// variant, each delegating to the matching handler. Operand and argument
/// positions short-circuit on the first error and forward any `return`
/// travelling through them.
pub(in crate::interpreter::evaluator) fn eval_expression(expression: &Expression,
                                                         env: &Rc<Environment>)
                                                         -> EvalResult<Flow> {
    match expression {
        Expression::IntegerLiteral { value, .. } => Ok(Flow::Value(Value::Integer(*value))),
        Expression::BooleanLiteral { value, .. } => Ok(Flow::Value(Value::Bool(*value))),
        Expression::StringLiteral { value, .. } => Ok(Flow::Value(Value::from(value.as_str()))),
        Expression::Identifier { name, line } => {
            eval_identifier(name, *line, env).map(Flow::Value)
        },
        Expression::ArrayLiteral { elements, .. } => eval_array_literal(elements, env),
        Expression::Prefix { op, right, line } => {
            let operand = value_of!(eval_expression(right, env)?);
            prefix::eval_prefix(*op, &operand, *line).map(Flow::Value)
        },
        Expression::Infix { left, op, right, line } => {
            let left = value_of!(eval_expression(left, env)?);
            let right = value_of!(eval_expression(right, env)?);
            infix::eval_infix(*op, &left, &right, *line).map(Flow::Value)
        },
        Expression::If { condition,
                         consequence,
                         alternative,
                         .. } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral { params, body, .. } => {
            let function = FunctionValue { params: params.clone(),
                                           body:   body.clone(),
                                           env:    Rc::clone(env), };
            Ok(Flow::Value(Value::Function(Rc::new(function))))
        },
        Expression::Call { callee, args, line } => eval_call(callee, args, *line, env),
        Expression::Index { collection, index, line } => {
            let collection = value_of!(eval_expression(collection, env)?);
            let index = value_of!(eval_expression(index, env)?);
            eval_index(&collection, &index, *line).map(Flow::Value)
        },
    }
}

/// Resolves an identifier: the environment chain first, then the builtin
/// table, so user bindings shadow builtins of the same name.
fn eval_identifier(name: &str, line: usize, env: &Rc<Environment>) -> EvalResult<Value> {
    env.get(name)
       .or_else(|| builtin::lookup(name))
       .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string(),
                                                         line })
}

/// Evaluates a conditional. A truthy condition selects the consequence;
/// otherwise the alternative runs if present, and the whole expression is
/// `null` if not.
fn eval_if(condition: &Expression,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &Rc<Environment>)
           -> EvalResult<Flow> {
    let condition = value_of!(eval_expression(condition, env)?);

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Flow::Value(Value::Null))
    }
}

/// Evaluates array elements left to right into a fresh array value.
fn eval_array_literal(elements: &[Expression], env: &Rc<Environment>) -> EvalResult<Flow> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(value_of!(eval_expression(element, env)?));
    }

    Ok(Flow::Value(Value::from(values)))
}

/// Evaluates a call: callee first, then arguments left to right, then the
/// application itself.
fn eval_call(callee: &Expression,
             args: &[Expression],
             line: usize,
             env: &Rc<Environment>)
             -> EvalResult<Flow> {
    let callee = value_of!(eval_expression(callee, env)?);

    let mut arg_values = Vec::with_capacity(args.len());
    for arg in args {
        arg_values.push(value_of!(eval_expression(arg, env)?));
    }

    call::apply_function(&callee, arg_values, line).map(Flow::Value)
}

/// Evaluates an index access. Out-of-range and negative subscripts yield
/// `null`; anything but an array/integer pairing is an error naming the
/// collection's type.
fn eval_index(collection: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match (collection, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            let element = usize::try_from(*index).ok()
                                                 .and_then(|index| elements.get(index));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        _ => Err(RuntimeError::IndexNotSupported { type_name: collection.type_name(),
                                                   line }),
    }
}
