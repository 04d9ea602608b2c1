//! Pratt parser producing a slot-resolved expression tree.

use super::ast::{BinaryOp, Expr, Function, UnaryOp};
use super::lexer::{Token, TokenKind};
use super::ExpressionError;

/// Named constants available to every expression.
const CONSTANTS: &[(&str, f64)] = &[
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
    ("true", 1.0),
    ("false", 0.0),
];

/// Parser state: the token stream plus the growing variable slot table.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    names: Vec<String>,
}

impl Parser {
    /// `inputs` become slots `0..inputs.len()` in order.
    pub fn new(tokens: Vec<Token>, inputs: &[&str]) -> Self {
        Self {
            tokens,
            current: 0,
            names: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse the whole source. Returns the tree and every slot name.
    pub fn parse(mut self) -> Result<(Expr, Vec<String>), ExpressionError> {
        let expr = self.sequence()?;
        if !self.is_at_end() {
            return Err(self.unexpected());
        }
        Ok((expr, self.names))
    }

    fn sequence(&mut self) -> Result<Expr, ExpressionError> {
        let mut exprs = vec![self.assignment()?];
        while self.match_token(&TokenKind::Semicolon) {
            if self.is_at_end() || self.check(&TokenKind::RParen) {
                break;
            }
            exprs.push(self.assignment()?);
        }
        Ok(if exprs.len() == 1 {
            exprs.remove(0)
        } else {
            Expr::Sequence(exprs)
        })
    }

    fn assignment(&mut self) -> Result<Expr, ExpressionError> {
        if let (Some(TokenKind::Ident(name)), Some(op)) = (
            self.peek_kind().cloned(),
            self.tokens.get(self.current + 1).and_then(|t| assign_op(&t.kind)),
        ) {
            self.current += 2;
            let slot = match op {
                None => self.slot_or_insert(&name),
                Some(_) => self
                    .slot(&name)
                    .ok_or_else(|| ExpressionError::UnknownVariable(name.clone()))?,
            };
            let value = self.assignment()?;
            return Ok(Expr::Assign {
                slot,
                op,
                value: Box::new(value),
            });
        }
        self.ternary()
    }

    fn ternary(&mut self) -> Result<Expr, ExpressionError> {
        let condition = self.parse_precedence(1)?;
        if !self.match_token(&TokenKind::Question) {
            return Ok(condition);
        }
        let then = self.assignment()?;
        self.consume(&TokenKind::Colon)?;
        let otherwise = self.assignment()?;
        Ok(Expr::Ternary {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    fn parse_precedence(&mut self, min_precedence: u8) -> Result<Expr, ExpressionError> {
        let mut left = self.unary()?;

        while let Some(op) = self.peek_binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }

            self.current += 1;
            let right = self.parse_precedence(precedence + 1)?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        if self.match_token(&TokenKind::Minus) {
            let expr = self.unary()?;
            Ok(Expr::Unary { op: UnaryOp::Neg, expr: Box::new(expr) })
        } else if self.match_token(&TokenKind::Bang) {
            let expr = self.unary()?;
            Ok(Expr::Unary { op: UnaryOp::Not, expr: Box::new(expr) })
        } else if self.match_token(&TokenKind::Plus) {
            self.unary()
        } else {
            self.power()
        }
    }

    /// Right-associative, binds tighter than prefix minus: `-2^2 == -4`.
    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.primary()?;
        if self.match_token(&TokenKind::Caret) {
            let exponent = self.unary()?;
            return Ok(Expr::Binary {
                left: Box::new(base),
                op: BinaryOp::Pow,
                right: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ExpressionError> {
        let Some(token) = self.tokens.get(self.current).cloned() else {
            return Err(ExpressionError::UnexpectedEnd);
        };
        match token.kind {
            TokenKind::Number(n) => {
                self.current += 1;
                Ok(Expr::Number(n))
            }
            TokenKind::LParen => {
                self.current += 1;
                let expr = self.sequence()?;
                self.consume(&TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Ident(name) => {
                self.current += 1;
                if self.match_token(&TokenKind::LParen) {
                    return self.call(name);
                }
                if let Some(slot) = self.slot(&name) {
                    return Ok(Expr::Var(slot));
                }
                CONSTANTS
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, v)| Expr::Number(*v))
                    .ok_or(ExpressionError::UnknownVariable(name))
            }
            TokenKind::Eof => Err(ExpressionError::UnexpectedEnd),
            _ => Err(self.unexpected()),
        }
    }

    fn call(&mut self, name: String) -> Result<Expr, ExpressionError> {
        let function = Function::lookup(&name)
            .ok_or_else(|| ExpressionError::UnknownFunction(name.clone()))?;

        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.assignment()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(&TokenKind::RParen)?;

        if !function.arity().contains(&args.len()) {
            return Err(ExpressionError::Arity {
                name,
                found: args.len(),
            });
        }
        Ok(Expr::Call { function, args })
    }

    // === Helper methods ===

    fn slot(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    fn slot_or_insert(&mut self, name: &str) -> usize {
        self.slot(name).unwrap_or_else(|| {
            self.names.push(name.to_string());
            self.names.len() - 1
        })
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.current).map(|t| &t.kind)
    }

    fn peek_binary_op(&self) -> Option<BinaryOp> {
        match self.peek_kind()? {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::BangEq => Some(BinaryOp::Ne),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::Le),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::Ge),
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek_kind().is_none_or(|k| *k == TokenKind::Eof)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind().is_some_and(|k| k == kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: &TokenKind) -> Result<(), ExpressionError> {
        if self.match_token(kind) {
            Ok(())
        } else if self.is_at_end() {
            Err(ExpressionError::UnexpectedEnd)
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ExpressionError {
        match self.tokens.get(self.current) {
            Some(t) if t.kind != TokenKind::Eof => ExpressionError::UnexpectedToken {
                found: format!("{:?}", t.kind),
                pos: t.pos,
            },
            _ => ExpressionError::UnexpectedEnd,
        }
    }
}

/// Assignment operator, mapped to its compound binary op.
fn assign_op(kind: &TokenKind) -> Option<Option<BinaryOp>> {
    match kind {
        TokenKind::Eq => Some(None),
        TokenKind::PlusEq => Some(Some(BinaryOp::Add)),
        TokenKind::MinusEq => Some(Some(BinaryOp::Sub)),
        TokenKind::StarEq => Some(Some(BinaryOp::Mul)),
        TokenKind::SlashEq => Some(Some(BinaryOp::Div)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::lexer::Lexer;

    fn parse(source: &str, inputs: &[&str]) -> Result<(Expr, Vec<String>), ExpressionError> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens, inputs).parse()
    }

    fn eval(source: &str) -> f64 {
        let (expr, names) = parse(source, &[]).unwrap();
        let mut slots = vec![0.0; names.len()];
        expr.eval(&mut slots)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1 + 2 * 3"), 7.0);
        assert_eq!(eval("(1 + 2) * 3"), 9.0);
        assert_eq!(eval("-2^2"), -4.0);
        assert_eq!(eval("2^3^2"), 512.0);
        assert_eq!(eval("10 - 4 - 3"), 3.0);
        assert_eq!(eval("1 < 2 && 3 > 4 || 1"), 1.0);
    }

    #[test]
    fn test_ternary_and_sequence() {
        assert_eq!(eval("a = 3; b = a * 2; a < b ? b : a"), 6.0);
        assert_eq!(eval("0 ? 1 : 0 ? 2 : 3"), 3.0);
        assert_eq!(eval("a = 1; a += 4; a;"), 5.0);
    }

    #[test]
    fn test_constants_and_calls() {
        assert!((eval("cos(pi)") + 1.0).abs() < 1e-12);
        assert_eq!(eval("max(1, 5, 2)"), 5.0);
        assert_eq!(eval("!0 + !3"), 1.0);
    }

    #[test]
    fn test_inputs_resolve_to_slots() {
        let (expr, names) = parse("y = x * 2", &["x", "y"]).unwrap();
        assert_eq!(names, vec!["x".to_string(), "y".to_string()]);
        assert!(matches!(expr, Expr::Assign { slot: 1, .. }));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("q + 1", &[]), Err(ExpressionError::UnknownVariable(n)) if n == "q"));
        assert!(matches!(parse("q += 1", &[]), Err(ExpressionError::UnknownVariable(_))));
        assert!(matches!(parse("foo(1)", &[]), Err(ExpressionError::UnknownFunction(_))));
        assert!(matches!(parse("sin(1, 2)", &[]), Err(ExpressionError::Arity { found: 2, .. })));
        assert!(matches!(parse("(1 + 2", &[]), Err(ExpressionError::UnexpectedEnd)));
        assert!(matches!(parse("1 2", &[]), Err(ExpressionError::UnexpectedToken { .. })));
        assert!(matches!(parse("", &[]), Err(ExpressionError::UnexpectedEnd)));
    }
}
