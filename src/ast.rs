use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expression` covers every construct that produces a value: literals,
/// identifiers, operator applications, conditionals, function literals,
/// calls and indexing. Each variant carries the source line of its
/// originating token for error reporting; equality is structural and
/// ignores it.
#[derive(Debug, Clone)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, without its surrounding quotes.
    StringLiteral {
        /// The literal content.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array literal expression, e.g. `[1, 2 * 2, "three"]`.
    ArrayLiteral {
        /// Elements of the array, in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A prefix operation, e.g. `-x` or `!ok`.
    Prefix {
        /// The prefix operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An infix operation, e.g. `a + b` or `a < b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional expression with an optional `else` branch. Either branch
    /// yields the value of its last statement.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal, e.g. `fn(x, y) { x + y }`. Evaluating one
    /// captures the enclosing environment, forming a closure.
    FunctionLiteral {
        /// The parameter names, in source order.
        params: Vec<String>,
        /// The function body.
        body:   Block,
        /// Line number in the source code.
        line:   usize,
    },
    /// A call expression, e.g. `add(1, 2 * 3)`. The callee is itself an
    /// expression and may be an identifier, a function literal, or any
    /// expression producing a callable.
    Call {
        /// The expression being called.
        callee: Box<Self>,
        /// Arguments to the call, in source order.
        args:   Vec<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An index expression, e.g. `arr[2]`.
    Index {
        /// The collection being indexed.
        collection: Box<Self>,
        /// The index to access.
        index:      Box<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expression {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expression;
    ///
    /// let expr = Expression::Identifier { name: "x".to_string(),
    ///                                     line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// Represents a top-level or block-level statement.
#[derive(Debug, Clone)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// An early `return` from the enclosing function (or program).
    Return {
        /// The returned expression.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expression,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
        }
    }
}

/// A brace-delimited sequence of statements. Blocks appear as `if` branches
/// and function bodies; they do not open a new scope of their own.
#[derive(Debug, Clone)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// A parsed program: the ordered sequence of its top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

// Equality compares tree shape only; the `line` fields stay out of it, so
// a printed and re-parsed program compares equal to the original even when
// printing collapsed its statements onto one line.

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identifier { name: left, .. }, Self::Identifier { name: right, .. }) => {
                left == right
            },
            (Self::IntegerLiteral { value: left, .. },
             Self::IntegerLiteral { value: right, .. }) => left == right,
            (Self::BooleanLiteral { value: left, .. },
             Self::BooleanLiteral { value: right, .. }) => left == right,
            (Self::StringLiteral { value: left, .. },
             Self::StringLiteral { value: right, .. }) => left == right,
            (Self::ArrayLiteral { elements: left, .. },
             Self::ArrayLiteral { elements: right, .. }) => left == right,
            (Self::Prefix { op: left_op,
                            right: left_operand,
                            .. },
             Self::Prefix { op: right_op,
                            right: right_operand,
                            .. }) => left_op == right_op && left_operand == right_operand,
            (Self::Infix { left: left_lhs,
                           op: left_op,
                           right: left_rhs,
                           .. },
             Self::Infix { left: right_lhs,
                           op: right_op,
                           right: right_rhs,
                           .. }) => {
                left_op == right_op && left_lhs == right_lhs && left_rhs == right_rhs
            },
            (Self::If { condition: left_cond,
                        consequence: left_cons,
                        alternative: left_alt,
                        .. },
             Self::If { condition: right_cond,
                        consequence: right_cons,
                        alternative: right_alt,
                        .. }) => {
                left_cond == right_cond && left_cons == right_cons && left_alt == right_alt
            },
            (Self::FunctionLiteral { params: left_params,
                                     body: left_body,
                                     .. },
             Self::FunctionLiteral { params: right_params,
                                     body: right_body,
                                     .. }) => {
                left_params == right_params && left_body == right_body
            },
            (Self::Call { callee: left_callee,
                          args: left_args,
                          .. },
             Self::Call { callee: right_callee,
                          args: right_args,
                          .. }) => left_callee == right_callee && left_args == right_args,
            (Self::Index { collection: left_coll,
                           index: left_index,
                           .. },
             Self::Index { collection: right_coll,
                           index: right_index,
                           .. }) => left_coll == right_coll && left_index == right_index,
            _ => false,
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Let { name: left_name,
                         value: left_value,
                         .. },
             Self::Let { name: right_name,
                         value: right_value,
                         .. }) => left_name == right_name && left_value == right_value,
            (Self::Return { value: left, .. }, Self::Return { value: right, .. }) => {
                left == right
            },
            (Self::Expression { expr: left, .. }, Self::Expression { expr: right, .. }) => {
                left == right
            },
            _ => false,
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.statements == other.statements
    }
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents an infix (binary) operator.
///
/// Infix operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

// The printed form is re-parseable source: operator applications come out
// fully parenthesized, blocks keep their braces and string literals their
// quotes, so a printed statement parses back to a structurally equal tree.

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "\"{value}\""),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { params, body, .. } => {
                write!(f, "fn({}) {{ {body} }}", params.join(", "))
            },
            Self::Call { callee, args, .. } => {
                write!(f, "{callee}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::Index { collection, index, .. } => write!(f, "({collection}[{index}])"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    /// Renders the program as re-parseable source.
    /// ## Example
    /// ```
    /// use quill::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("a + b * c"));
    /// let program = parser.parse_program();
    ///
    /// assert_eq!(program.to_string(), "(a + (b * c))");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
