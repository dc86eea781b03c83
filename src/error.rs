/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code into a
/// program. Parse errors include syntax mistakes, unexpected tokens and
/// invalid literals, and are accumulated by the parser rather than aborting
/// it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unbound identifiers,
/// bad calls and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
