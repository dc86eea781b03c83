//! # quill
//!
//! quill is a small, dynamically-typed, expression-oriented scripting
//! language written in Rust. It supports integers, booleans, strings,
//! arrays, first-class functions with lexical closures, conditionals,
//! `let` bindings, early `return`, and calls to built-in functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` and `Statement` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Renders nodes back to re-parseable source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. It standardizes error reporting with fixed message
/// templates and carries source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and environments to provide a complete runtime for
/// source code evaluation. It exposes the public API for interpreting and
/// executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses source text into a program.
///
/// The parser records every error it encounters instead of stopping at the
/// first one; if any were recorded, the full list is returned in parse
/// order and the (partial) program is discarded.
///
/// # Errors
/// Returns every parse error the source produced.
///
/// # Examples
/// ```
/// use quill::parse;
///
/// let program = parse("let x = 1 + 2;").unwrap();
/// assert_eq!(program.to_string(), "let x = (1 + 2);");
///
/// assert!(parse("let = 10;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}

/// Parses and evaluates `source` in the given environment, returning the
/// final value.
///
/// Bindings made by the source stay in `env`, so repeated calls with the
/// same environment accumulate state the way a session would. On parse
/// failure only the first recorded error is returned; use [`parse`]
/// directly to inspect all of them.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::{interpret, interpreter::value::environment::Environment};
///
/// let env = Environment::new();
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let result = interpret("let result = 2 + 2; result", &env);
/// assert!(result.is_ok());
///
/// // Example with an intentional error ('x' is not defined).
/// let result = interpret("let y = x + 1", &env);
/// assert!(result.is_err());
/// ```
pub fn interpret(source: &str, env: &Rc<Environment>) -> Result<Value, Box<dyn std::error::Error>> {
    match parse(source) {
        Ok(program) => Ok(eval_program(&program, env)?),
        Err(mut errors) => Err(Box::new(errors.remove(0))),
    }
}
