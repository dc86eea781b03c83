use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by array literals, call argument lists and
    /// function parameter lists. The current token must be the opening
    /// delimiter; an immediately following closing token produces an empty
    /// list. On return the current token is the closing delimiter.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)?`
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: fn(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Returns the name of the current token, which must be an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier_name(&mut self)
                                                               -> ParseResult<String> {
        match &self.cur.0 {
            Token::Ident(name) => Ok(name.clone()),
            token => Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                       found:    token.kind(),
                                                       line:     self.cur.1, }),
        }
    }

    /// Advances onto the peeked token and returns its name, reporting a
    /// mismatch when it is not an identifier.
    pub(in crate::interpreter::parser) fn expect_ident(&mut self) -> ParseResult<String> {
        if let Token::Ident(name) = &self.peek.0 {
            let name = name.clone();
            self.next_token();
            Ok(name)
        } else {
            Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                              found:    self.peek.0.kind(),
                                              line:     self.peek.1, })
        }
    }
}
