//! Recursive-descent parser for formula expressions.

use crate::formula::lexer::Token;
use crate::formula::{BinOp, Expr, FormulaError, Func, Slot, UnaryOp, parse_stat};

/// Parses a token stream into an expression.
///
/// Grammar, loosest binding first:
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := unary (("*" | "/" | "%") unary)*
/// unary      := "-" unary | primary
/// primary    := NUMBER
///             | "(" expression ")"
///             | SLOT "." STAT
///             | "v" "[" expression "]"
///             | FUNC "(" expression ("," expression)* ")"
/// ```
///
/// # Errors
///
/// Returns a [`FormulaError`] describing the first offending token.
pub fn parse(tokens: &[Token]) -> Result<Expr, FormulaError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if parser.pos < parser.tokens.len() {
        return Err(FormulaError::TrailingInput);
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&Token, FormulaError> {
        let token = self.tokens.get(self.pos).ok_or(FormulaError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), FormulaError> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(FormulaError::UnexpectedToken(token.describe()))
        }
    }

    fn expression(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                Some(Token::Percent) => BinOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, FormulaError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            let expr = self.unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(expr),
            });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, FormulaError> {
        match self.next()? {
            Token::Number(value) => Ok(Expr::Number(*value)),
            Token::LParen => {
                let expr = self.expression()?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            }
            Token::Ident(name) => {
                let name = name.clone();
                self.ident(&name)
            }
            other => Err(FormulaError::UnexpectedToken(other.describe())),
        }
    }

    /// Dispatches an identifier: slot access, variable read, or call.
    fn ident(&mut self, name: &str) -> Result<Expr, FormulaError> {
        if let Some(slot) = Slot::from_name(name) {
            if !matches!(self.peek(), Some(Token::Dot)) {
                return Err(FormulaError::MissingStatAccess(slot.letter()));
            }
            self.pos += 1;
            let stat = match self.next()? {
                Token::Ident(attr) => parse_stat(attr)?,
                other => return Err(FormulaError::UnexpectedToken(other.describe())),
            };
            return Ok(Expr::Stat { slot, stat });
        }

        if name == "v" {
            self.expect(&Token::LBracket)?;
            let index = self.expression()?;
            self.expect(&Token::RBracket)?;
            return Ok(Expr::Var(Box::new(index)));
        }

        if let Some(func) = Func::from_name(name) {
            self.expect(&Token::LParen)?;
            let mut args = vec![self.expression()?];
            while matches!(self.peek(), Some(Token::Comma)) {
                self.pos += 1;
                args.push(self.expression()?);
            }
            self.expect(&Token::RParen)?;
            if !func.accepts_arity(args.len()) {
                return Err(FormulaError::WrongArity {
                    func: func.name(),
                    found: args.len(),
                });
            }
            return Ok(Expr::Call { func, args });
        }

        Err(FormulaError::UnknownIdentifier(name.to_string()))
    }
}
