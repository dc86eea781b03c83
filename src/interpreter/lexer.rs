use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens; variable or function names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`. The raw slice is kept so that
    /// out-of-range literals surface as parse errors rather than lexer
    /// failures.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens, such as `"hello"`. The surrounding quotes are
    /// stripped; there are no escape sequences.
    #[regex(r#""[^"]*""#, lex_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `[`
    #[token("[")]
    Lbracket,
    /// `]`
    #[token("]")]
    Rbracket,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines are skipped but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,

    /// A piece of input the lexer does not recognize, carrying the
    /// offending slice. Produced by [`Lexer::next_token`], never by the
    /// generated lexer itself.
    Illegal(String),
    /// End of input. Produced by [`Lexer::next_token`] once the source is
    /// exhausted.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Strips the quotes from a string literal and counts any newlines it spans
/// so that line numbers stay accurate.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// The kind of a [`Token`], without its literal payload.
///
/// Kinds are what the parser dispatches on and what diagnostics name: the
/// `Display` form of a kind is the name used inside parser error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Illegal,
    Eof,
    Ident,
    Int,
    Str,
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,
    Comma,
    Semicolon,
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Lbracket,
    Rbracket,
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// The skip-only variants never reach the parser; they are folded into
    /// [`TokenKind::Illegal`] for completeness.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Ident(_) => TokenKind::Ident,
            Self::Int(_) => TokenKind::Int,
            Self::Str(_) => TokenKind::Str,
            Self::Function => TokenKind::Function,
            Self::Let => TokenKind::Let,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Return => TokenKind::Return,
            Self::Assign => TokenKind::Assign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Bang => TokenKind::Bang,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::Eq => TokenKind::Eq,
            Self::NotEq => TokenKind::NotEq,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Lparen => TokenKind::Lparen,
            Self::Rparen => TokenKind::Rparen,
            Self::Lbrace => TokenKind::Lbrace,
            Self::Rbrace => TokenKind::Rbrace,
            Self::Lbracket => TokenKind::Lbracket,
            Self::Rbracket => TokenKind::Rbracket,
            Self::Comment | Self::Newline | Self::Whitespace | Self::Illegal(_) => {
                TokenKind::Illegal
            },
            Self::Eof => TokenKind::Eof,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Lbracket => "[",
            Self::Rbracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        write!(f, "{name}")
    }
}

/// A pull-style tokenizer over a source string.
///
/// Wraps the generated lexer behind a `next_token` API: exhausted input
/// yields [`Token::Eof`] forever, and input the lexer cannot recognize
/// yields [`Token::Illegal`] carrying the offending slice. Each token is
/// paired with the source line it ends on.
///
/// # Examples
/// ```
/// use quill::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().0, Token::Let);
/// assert_eq!(lexer.next_token().0, Token::Ident("five".to_string()));
/// assert_eq!(lexer.next_token().0, Token::Assign);
/// assert_eq!(lexer.next_token().0, Token::Int("5".to_string()));
/// assert_eq!(lexer.next_token().0, Token::Semicolon);
/// assert_eq!(lexer.next_token().0, Token::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, starting at line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Returns the next token and the line it was found on.
    pub fn next_token(&mut self) -> (Token, usize) {
        match self.inner.next() {
            Some(Ok(token)) => (token, self.inner.extras.line),
            Some(Err(())) => {
                (Token::Illegal(self.inner.slice().to_string()), self.inner.extras.line)
            },
            None => (Token::Eof, self.inner.extras.line),
        }
    }
}
