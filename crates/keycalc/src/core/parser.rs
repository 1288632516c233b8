//! Constrained arithmetic parser
//!
//! Only numeric literals and the four keypad operators are legal. Anything
//! else is rejected at tokenization time, so evaluation can never reach
//! beyond arithmetic.

use crate::core::{CalcError, CalcResult, Operator};

/// Precedence of `+` and `-`, also the unary signs
const ADDITIVE: u8 = 1;
/// Precedence of `*` and `/`
const MULTIPLICATIVE: u8 = 2;

/// Token types from lexical analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator character
    Operator(Operator),
}

/// Abstract syntax tree node
///
/// Runs of same-precedence operators are stored flat in a [`AstNode::Chain`],
/// so tree depth is bounded by the grammar, not by expression length.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Unary negation
    Negate(Box<AstNode>),
    /// Left-associative sequence `head op1 x1 op2 x2 ...`
    Chain {
        /// First operand
        head: Box<AstNode>,
        /// Remaining (operator, operand) pairs, applied left to right
        tail: Vec<(Operator, AstNode)>,
    },
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }

    /// Creates a chain node, collapsing to `head` when `tail` is empty
    #[must_use]
    pub fn chain(head: AstNode, tail: Vec<(Operator, AstNode)>) -> Self {
        if tail.is_empty() {
            head
        } else {
            Self::Chain {
                head: Box::new(head),
                tail,
            }
        }
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

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        match Operator::from_char(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(CalcError::ParseError(format!(
                "Unexpected character: '{ch}'"
            ))),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::ParseError(format!("Invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for keypad expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+')* primary
/// primary    ::= NUMBER
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
        let mut tokenizer = Tokenizer::new(input);
        let tokens = tokenizer.tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::ParseError(format!(
                "Unexpected token {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is an operator of the given precedence
    fn take_operator(&mut self, precedence: u8) -> Option<Operator> {
        match self.current() {
            Some(Token::Operator(op)) if op.precedence() == precedence => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let head = self.parse_term()?;
        let mut tail = Vec::new();

        while let Some(op) = self.take_operator(ADDITIVE) {
            tail.push((op, self.parse_term()?));
        }

        Ok(AstNode::chain(head, tail))
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let head = self.parse_unary()?;
        let mut tail = Vec::new();

        while let Some(op) = self.take_operator(MULTIPLICATIVE) {
            tail.push((op, self.parse_unary()?));
        }

        Ok(AstNode::chain(head, tail))
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        // Sign runs are folded by parity instead of nested.
        let mut negative = false;
        while let Some(op) = self.take_operator(ADDITIVE) {
            if op == Operator::Subtract {
                negative = !negative;
            }
        }

        let primary = self.parse_primary()?;
        Ok(if negative {
            AstNode::negate(primary)
        } else {
            primary
        })
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::number(n)),
            Some(token) => Err(CalcError::ParseError(format!(
                "Unexpected token: {token:?}"
            ))),
            None => Err(CalcError::ParseError("Unexpected end of expression".into())),
        }
    }
}
