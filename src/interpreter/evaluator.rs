/// Builtin functions.
///
/// Hosts the process-wide registry of functions callable from the language
/// without being defined in it, such as `len` and `push`.
pub mod builtin;

/// Function application.
///
/// Applies user-defined functions and builtins to evaluated arguments,
/// checking arity and building the call frame.
pub mod call;

/// Core evaluation logic.
///
/// Contains the main evaluation dispatch, program/block/statement
/// evaluation, and the carrier that propagates `return` values to their
/// call boundary.
pub mod core;

/// Infix operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic,
/// comparisons and string concatenation.
pub mod infix;

/// Prefix operator evaluation.
///
/// Handles the operations that take a single operand: negation and logical
/// NOT.
pub mod prefix;
