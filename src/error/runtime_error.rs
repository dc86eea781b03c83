use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors short-circuit evaluation: every operator, argument list
/// and statement sequence propagates the first error unchanged, and an
/// unhandled error becomes the result of the whole evaluation. The
/// `Display` form of each variant is a fixed template; the source line is
/// exposed through [`RuntimeError::line`].
pub enum RuntimeError {
    /// The two operand types of an infix operator do not match.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operand types match but do not support this infix operator.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operand type does not support this prefix operator.
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Type name of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A name is bound neither in the environment chain nor as a builtin.
    IdentifierNotFound {
        /// The unbound name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// Type name of the value that was called.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The index operator was applied to an unsupported operand.
    IndexNotSupported {
        /// Type name of the collection operand.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many arguments the function takes.
        want: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received an argument of a type it does not operate on.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A builtin that requires an array argument received something else.
    ArgumentNotArray {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl RuntimeError {
    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::UnknownPrefixOperator { line, .. }
            | Self::IdentifierNotFound { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::IndexNotSupported { line, .. }
            | Self::DivisionByZero { line }
            | Self::WrongArgumentCount { line, .. }
            | Self::UnsupportedArgument { line, .. }
            | Self::ArgumentNotArray { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right, .. } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },
            Self::UnknownInfixOperator { left, op, right, .. } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },
            Self::UnknownPrefixOperator { op, operand, .. } => {
                write!(f, "unknown operator: {op}{operand}")
            },
            Self::IdentifierNotFound { name, .. } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name, .. } => write!(f, "not a function: {type_name}"),
            Self::IndexNotSupported { type_name, .. } => {
                write!(f, "index operator not supported: {type_name}")
            },
            Self::DivisionByZero { .. } => write!(f, "division by zero"),
            Self::WrongArgumentCount { got, want, .. } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { builtin, type_name, .. } => {
                write!(f, "argument to `{builtin}` not supported, got {type_name}")
            },
            Self::ArgumentNotArray { builtin, type_name, .. } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {type_name}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
