use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is one of:
    /// - a `let` binding,
    /// - a `return`,
    /// - an expression used as a statement.
    ///
    /// The current token must be the first token of the statement; on
    /// return it is the last (a trailing `;` is consumed when present).
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur.0.kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding of the form `let <identifier> = <expression>`,
    /// with an optional trailing `;`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur.1;

        let name = self.expect_ident()?;
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>`, with an optional trailing `;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur.1;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Return { value, line })
    }

    /// Parses a bare expression as a statement, with an optional trailing
    /// `;`.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur.1;

        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression { expr, line })
    }

    /// Parses a block of statements delimited by braces.
    ///
    /// The current token must be the opening `{`; on return it is the
    /// closing `}` (or end of input).
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.cur.1;
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::Rbrace) && !self.cur_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(Block { statements, line })
    }
}
