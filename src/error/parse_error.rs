use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the parser can record while building a program.
///
/// The `Display` form of each variant is a fixed template, so error output
/// is stable enough for golden tests. The source line is carried alongside
/// and exposed through [`ParseError::line`] for drivers that prefix their
/// diagnostics with a location.
pub enum ParseError {
    /// A specific token kind was required next, but something else came.
    UnexpectedToken {
        /// The kind the parser required.
        expected: TokenKind,
        /// The kind that was actually next.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the token at the current position.
    NoPrefixParse {
        /// The kind that cannot begin an expression.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into a signed 64-bit value.
    IntegerLiteral {
        /// The offending literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error was recorded on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParse { line, .. }
            | Self::IntegerLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParse { found, .. } => {
                write!(f, "no prefix parse function for {found} found")
            },
            Self::IntegerLiteral { literal, .. } => {
                write!(f, "Could not parse \"{literal}\" as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
