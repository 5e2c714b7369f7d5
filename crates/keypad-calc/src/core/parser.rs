//! Tokenizer and parser for keypad expressions
//!
//! Only decimal literals and `+ - * /` are recognized. A single leading `-`
//! is accepted so that a negative evaluation result left in the buffer can be
//! continued; the keypad itself never lets a user type one. The tokenizer
//! folds that sign into the first literal, so `i64::MIN` survives a round
//! trip through the display.

use crate::core::{CalcError, CalcResult, Number, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(Number),
    /// Binary operator
    Operator(Operation),
}

impl Token {
    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(Number),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Leading sign on the first operand
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number(value.into())
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the remaining input
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' || self.leading_sign() {
            return self.read_number().map(Some);
        }

        match Operation::from_symbol(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(CalcError::invalid(format!("unexpected character '{ch}'"))),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Reads `digits [. digits] [e [+-] digits]`
    /// A `-` that opens the input and is directly followed by a literal
    fn leading_sign(&self) -> bool {
        self.current_char() == Some('-')
            && self.input[..self.pos].trim().is_empty()
            && self
                .peek_char(1)
                .is_some_and(|c| c.is_ascii_digit() || c == '.')
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        if self.current_char() == Some('-') {
            self.advance();
        }
        let mut dots = 0;
        let mut digits = 0;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                digits += 1;
            } else if ch == '.' {
                dots += 1;
            } else {
                break;
            }
            self.advance();
        }

        let has_exponent = self.exponent_follows();
        if has_exponent {
            self.advance();
            if matches!(self.current_char(), Some('+' | '-')) {
                self.advance();
            }
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let literal = &self.input[start..self.pos];
        if digits == 0 || dots > 1 {
            return Err(CalcError::invalid(format!("invalid number '{literal}'")));
        }

        if dots == 0 && !has_exponent {
            return literal
                .parse::<i64>()
                .map(|n| Token::Number(Number::Integer(n)))
                .map_err(|_| CalcError::Overflow);
        }

        let value: f64 = literal
            .parse()
            .map_err(|_| CalcError::invalid(format!("invalid number '{literal}'")))?;
        if value.is_finite() {
            Ok(Token::Number(Number::Float(value)))
        } else {
            Err(CalcError::Overflow)
        }
    }

    /// True when the cursor sits on a well-formed exponent suffix
    fn exponent_follows(&self) -> bool {
        if !matches!(self.current_char(), Some('e' | 'E')) {
            return false;
        }
        match self.peek_char(1) {
            Some('+' | '-') => self.peek_char(2).is_some_and(|c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }
}

/// Recursive descent parser for keypad expressions
///
/// Grammar:
/// ```text
/// expression ::= ['-'] term (('+' | '-') term)*
/// term       ::= NUMBER (('*' | '/') NUMBER)*
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses tokens into an AST, requiring every token to be consumed
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::invalid(format!(
                "unexpected {} at position {}",
                describe(token),
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let negated = matches!(self.current(), Some(Token::Operator(Operation::Subtract)));
        if negated {
            self.advance();
        }

        let mut left = self.parse_term(negated)?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term(false)?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self, negate_first: bool) -> CalcResult<AstNode> {
        let mut left = self.parse_operand()?;
        if negate_first {
            left = AstNode::negate(left);
        }

        while let Some(Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_operand()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_operand(&mut self) -> CalcResult<AstNode> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::Number(*n)),
            Some(token) => Err(CalcError::invalid(format!(
                "expected a number but found {}",
                describe(token)
            ))),
            None => Err(CalcError::invalid("unexpected end of expression")),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number {n}"),
        Token::Operator(op) => format!("operator '{}'", op.symbol()),
    }
}
