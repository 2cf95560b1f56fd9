//! Arithmetic parser and evaluator.
//!
//! Accepts numeric literals, `+ - * / %`, unary signs and parentheses.
//! Everything else is rejected; there are no identifiers or functions.
//! Values are computed while parsing, but an arithmetic failure is only
//! reported once the whole input has parsed, so a syntax error always wins
//! over a division by zero.

use super::error::CalcError;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Deepest nesting of parentheses and unary signs accepted.
const MAX_DEPTH: usize = 256;

/// Arithmetic outcome of a sub-expression, held separately from syntax errors.
type Value = Result<f64, CalcError>;

impl BinaryOp {
    fn apply(self, lhs: Value, rhs: Value) -> Value {
        let a = lhs?;
        let b = rhs?;
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div if b == 0.0 => Err(CalcError::DivideByZero),
            Self::Div => Ok(a / b),
            Self::Rem if b == 0.0 => Err(CalcError::DivideByZero),
            Self::Rem => Ok(floored_rem(a, b)),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i < chars.len() && chars[i] == '.' {
                    i += 1;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                let literal: String = chars[start..i].iter().collect();
                if literal == "." {
                    return Err(CalcError::InvalidInput);
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidInput)?;
                tokens.push(Token::Number(value));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(CalcError::InvalidInput),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::InvalidInput);
        }
        Ok(())
    }

    fn parse(mut self) -> Result<Value, CalcError> {
        let value = self.expression()?;
        match self.peek() {
            None => Ok(value),
            Some(_) => Err(CalcError::InvalidInput),
        }
    }

    // expression := term (("+" | "-") term)*
    fn expression(&mut self) -> Result<Value, CalcError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = op.apply(lhs, rhs);
        }
    }

    // term := unary (("*" | "/" | "%") unary)*
    fn term(&mut self) -> Result<Value, CalcError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = op.apply(lhs, rhs);
        }
    }

    // unary := ("+" | "-") unary | primary
    fn unary(&mut self) -> Result<Value, CalcError> {
        let negate = match self.peek() {
            Some(Token::Plus) => false,
            Some(Token::Minus) => true,
            _ => return self.primary(),
        };
        self.pos += 1;
        self.descend()?;
        let inner = self.unary()?;
        self.depth -= 1;
        Ok(if negate { inner.map(|v| -v) } else { inner })
    }

    // primary := number | "(" expression ")"
    fn primary(&mut self) -> Result<Value, CalcError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Ok(value)),
            Some(Token::LParen) => {
                self.descend()?;
                let inner = self.expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(CalcError::InvalidInput),
                }
            }
            _ => Err(CalcError::InvalidInput),
        }
    }
}

/// Remainder that takes the sign of the divisor (`-7 % 3 == 2`).
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Parse and evaluate an arithmetic expression.
///
/// Results that overflow to infinity or are otherwise not finite are
/// reported as [`CalcError::InvalidInput`].
pub fn eval_arithmetic(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    let value = Parser::new(tokens).parse()??;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput)
    }
}
