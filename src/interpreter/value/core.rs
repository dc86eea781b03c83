use std::rc::Rc;

use crate::{
    ast::Block,
    interpreter::{evaluator::core::EvalResult, value::environment::Environment},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number of the call. It returns a value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// A host-provided function callable from the language.
///
/// Builtins live in a process-wide table; the evaluator checks the arity
/// centrally before invoking the handler.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is reachable under.
    pub name:  &'static str,
    /// How many arguments the builtin accepts.
    pub arity: Arity,
    /// The handler implementing the builtin.
    pub func:  BuiltinFn,
}

/// A user-defined function value: its parameters, its body, and the
/// environment captured when the function literal was evaluated.
///
/// The captured environment is shared by reference, so bindings added to
/// the defining frame after the capture remain visible inside the function.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, in source order.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Block,
    /// The environment the function closes over.
    pub env:    Rc<Environment>,
}

// Captured environments can be cyclic (a recursive closure lives inside the
// frame it captures), so Debug must not descend into them.
impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An immutable string value.
    Str(Rc<str>),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A user-defined function bundled with its captured environment.
    Function(Rc<FunctionValue>),
    /// A host-provided builtin function.
    Builtin(Builtin),
    /// The absence of a value.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns the name of this value's type, as used in error messages.
    ///
    /// ## Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Null => "NULL",
        }
    }

    /// Tests this value as a condition.
    ///
    /// `null` and `false` are falsy; every other value is truthy, including
    /// `0` and `""`.
    ///
    /// ## Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }
}

// Data values compare structurally; functions compare by identity so that
// equality never walks a cyclic environment graph.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the canonical textual form of the value: integers as
    /// decimal, booleans as `true`/`false`, strings as their raw content,
    /// arrays with inspected elements, functions with their
    /// pretty-printed body, and the null value as `null`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.params.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Null => write!(f, "null"),
        }
    }
}
