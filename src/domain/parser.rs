//! Arithmetic expression parser and evaluator.
//!
//! This module implements a small recursive descent parser for the plain ASCII
//! arithmetic produced from the calculator display (after symbol translation and
//! percent rewriting, see [`super::services`]).
//!
//! # BNF Grammar
//!
//! ```bnf
//! Expression     ::= Addition
//! Addition       ::= Multiplication ( ( "+" | "-" ) Multiplication )*
//! Multiplication ::= Unary ( ( "*" | "/" | "%" ) Unary )*
//! Unary          ::= ( "+" | "-" ) Unary | Primary
//! Primary        ::= Number | "(" Expression ")"
//! Number         ::= ( Digits ( "." Digits? )? | "." Digits ) Exponent?
//! Exponent       ::= ( "e" | "E" ) ( "+" | "-" )? Digits
//! ```
//!
//! Binary operators are left-associative. `%` is the floating point remainder.
//! Exponents are accepted so that a formatted result such as `1e+21` can be
//! chained into a further calculation.

use super::errors::{EvaluationError, EvaluationResult};

/// Represents a token in the expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),

    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    LeftParen,
    RightParen,

    Eof,
}

/// Abstract syntax tree for an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
    },

    Unary {
        operator: UnaryOp,
        operand: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Lexical analyzer for tokenizing expressions.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_digits(&mut self, into: &mut String) {
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                into.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a number token: integer, decimal, and optional exponent.
    fn read_number(&mut self) -> EvaluationResult<f64> {
        let mut number_str = String::new();

        self.read_digits(&mut number_str);

        if self.current_char == Some('.') {
            number_str.push('.');
            self.advance();
            self.read_digits(&mut number_str);
        }

        if matches!(self.current_char, Some('e' | 'E')) {
            let signed = matches!(self.peek(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                number_str.push('e');
                self.advance();
                if signed {
                    if let Some(sign) = self.current_char {
                        number_str.push(sign);
                    }
                    self.advance();
                }
                self.read_digits(&mut number_str);
            } else {
                return Err(EvaluationError::Syntax(format!(
                    "Incomplete exponent in number: {}e",
                    number_str
                )));
            }
        }

        if number_str == "." {
            return Err(EvaluationError::Syntax("Lone decimal point".to_string()));
        }

        number_str
            .parse::<f64>()
            .map_err(|_| EvaluationError::Syntax(format!("Invalid number: {}", number_str)))
    }

    /// Gets the next token from the input.
    pub fn next_token(&mut self) -> EvaluationResult<Token> {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            return Ok(Token::Eof);
        };

        let token = match ch {
            '0'..='9' | '.' => return self.read_number().map(Token::Number),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::Divide,
            '%' => Token::Modulo,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => {
                return Err(EvaluationError::Syntax(format!(
                    "Unexpected character: '{}'",
                    ch
                )));
            }
        };

        self.advance();
        Ok(token)
    }
}

/// Recursive descent parser for arithmetic expressions.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    /// Creates a new parser for the given expression.
    ///
    /// Fails if the very first token cannot be lexed.
    pub fn new(input: &str) -> EvaluationResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;

        Ok(Self {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> EvaluationResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> EvaluationResult<()> {
        if std::mem::discriminant(&self.current_token) == std::mem::discriminant(&expected) {
            self.advance()
        } else {
            Err(EvaluationError::Syntax(format!(
                "Expected {:?}, found {:?}",
                expected, self.current_token
            )))
        }
    }

    /// Parses the whole input as one expression.
    pub fn parse(&mut self) -> EvaluationResult<Expr> {
        let expr = self.parse_addition()?;

        if self.current_token != Token::Eof {
            return Err(EvaluationError::Syntax(format!(
                "Unexpected token at end: {:?}",
                self.current_token
            )));
        }

        Ok(expr)
    }

    fn parse_addition(&mut self) -> EvaluationResult<Expr> {
        let mut left = self.parse_multiplication()?;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Subtract,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_multiplication()?;
            left = Expr::Binary {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplication(&mut self) -> EvaluationResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token {
                Token::Multiply => BinaryOp::Multiply,
                Token::Divide => BinaryOp::Divide,
                Token::Modulo => BinaryOp::Modulo,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> EvaluationResult<Expr> {
        let operator = match self.current_token {
            Token::Plus => UnaryOp::Plus,
            Token::Minus => UnaryOp::Minus,
            _ => return self.parse_primary(),
        };
        self.advance()?;
        let operand = self.parse_unary()?;
        Ok(Expr::Unary {
            operator,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> EvaluationResult<Expr> {
        match self.current_token {
            Token::Number(value) => {
                self.advance()?;
                Ok(Expr::Number(value))
            }

            Token::LeftParen => {
                self.advance()?;
                let expr = self.parse_addition()?;
                self.expect(Token::RightParen)?;
                Ok(expr)
            }

            _ => Err(EvaluationError::Syntax(format!(
                "Unexpected token: {:?}",
                self.current_token
            ))),
        }
    }
}

/// Walks the AST with IEEE 754 double semantics.
///
/// Division by zero yields an infinity or NaN rather than an error here;
/// finiteness is checked once on the final result.
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn evaluate(expr: &Expr) -> f64 {
        match expr {
            Expr::Number(value) => *value,

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left_val = Self::evaluate(left);
                let right_val = Self::evaluate(right);

                match operator {
                    BinaryOp::Add => left_val + right_val,
                    BinaryOp::Subtract => left_val - right_val,
                    BinaryOp::Multiply => left_val * right_val,
                    BinaryOp::Divide => left_val / right_val,
                    BinaryOp::Modulo => left_val % right_val,
                }
            }

            Expr::Unary { operator, operand } => {
                let operand_val = Self::evaluate(operand);

                match operator {
                    UnaryOp::Plus => operand_val,
                    UnaryOp::Minus => -operand_val,
                }
            }
        }
    }
}
