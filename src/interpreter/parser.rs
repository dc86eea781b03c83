/// Core parsing logic: parser state, the precedence ladder and the Pratt
/// expression loop.
///
/// Contains the `Parser` type with its two-token lookahead, error
/// accumulation, and the entry point that turns a token stream into a
/// program.
pub mod core;

/// Infix handlers.
///
/// Builds infix operator applications, call expressions and index
/// expressions from an already-parsed left operand.
pub mod infix;

/// Prefix handlers.
///
/// Parses everything an expression can start with: literals, identifiers,
/// prefix operators, grouped expressions, conditionals, function literals
/// and array literals.
pub mod prefix;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements, and the
/// brace-delimited blocks they nest in.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the shared comma-separated list parser and identifier
/// expectations used across productions.
pub mod utils;
