use crate::{
    ast::{Expression, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Dispatches on the current token kind to the matching prefix handler:
    /// identifiers, literals, the `!`/`-` prefix operators, grouped
    /// expressions, `if`, `fn` and array literals. A token kind no
    /// expression can start with is reported to the caller.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let line = self.cur.1;
        match self.cur.0.kind() {
            TokenKind::Ident => {
                let Token::Ident(name) = &self.cur.0 else { unreachable!() };
                Ok(Expression::Identifier { name: name.clone(),
                                            line })
            },
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True => Ok(Expression::BooleanLiteral { value: true, line }),
            TokenKind::False => Ok(Expression::BooleanLiteral { value: false, line }),
            TokenKind::Str => {
                let Token::Str(value) = &self.cur.0 else { unreachable!() };
                Ok(Expression::StringLiteral { value: value.clone(),
                                               line })
            },
            TokenKind::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            TokenKind::Lparen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::Lbracket => self.parse_array_literal(),
            kind => Err(ParseError::NoPrefixParse { found: kind, line }),
        }
    }

    /// Parses the current integer token into a signed 64-bit literal.
    /// Out-of-range literals are recorded as parse errors.
    fn parse_integer_literal(&self) -> ParseResult<Expression> {
        let line = self.cur.1;
        let Token::Int(literal) = &self.cur.0 else { unreachable!() };

        literal.parse::<i64>()
               .map(|value| Expression::IntegerLiteral { value, line })
               .map_err(|_| ParseError::IntegerLiteral { literal: literal.clone(),
                                                         line })
    }

    /// Parses `!` or `-` applied to an operand at prefix precedence.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> ParseResult<Expression> {
        let line = self.cur.1;
        self.next_token();

        let right = Box::new(self.parse_expression(Precedence::Prefix)?);
        Ok(Expression::Prefix { op, right, line })
    }

    /// Parses a parenthesized sub-expression. Grouping only shapes the
    /// tree; there is no AST node for the parentheses themselves.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Rparen)?;

        Ok(expression)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> }
    ///     else { <statements> }
    /// ```
    /// Either branch yields the value of its last statement.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let line = self.cur.1;

        self.expect_peek(TokenKind::Lparen)?;
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);
        self.expect_peek(TokenKind::Rparen)?;

        self.expect_peek(TokenKind::Lbrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::Lbrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If { condition,
                            consequence,
                            alternative,
                            line })
    }

    /// Parses a function literal of the form `fn(<params>) { <body> }`.
    /// Parameters are plain identifiers, empty or comma-separated.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let line = self.cur.1;

        self.expect_peek(TokenKind::Lparen)?;
        let params = self.parse_comma_separated(Self::parse_identifier_name, TokenKind::Rparen)?;

        self.expect_peek(TokenKind::Lbrace)?;
        let body = self.parse_block()?;

        Ok(Expression::FunctionLiteral { params, body, line })
    }

    /// Parses an array literal of the form `[<expr>, <expr>, ...]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let line = self.cur.1;
        let elements = self.parse_comma_separated(|parser| {
                                                      parser.parse_expression(Precedence::Lowest)
                                                  },
                                                  TokenKind::Rbracket)?;

        Ok(Expression::ArrayLiteral { elements, line })
    }
}
