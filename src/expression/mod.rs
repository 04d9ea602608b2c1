//! Small math expression language used by shape and deform generators.
//!
//! An expression is compiled once against a list of input variable names
//! and then evaluated many times with fresh input values. Assignments may
//! introduce new variables; callers can read any variable back after an
//! evaluation through a [`VariableHandle`].
//!
//! ```
//! use rkedit::expression::Expression;
//!
//! let mut expr = Expression::compile("x*x + z*z < 4", &["x", "y", "z"]).unwrap();
//! assert_eq!(expr.evaluate(&[1.0, 0.0, 1.0]).unwrap(), 1.0);
//! assert_eq!(expr.evaluate(&[2.0, 0.0, 1.0]).unwrap(), 0.0);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

use thiserror::Error;

use ast::Expr;
use lexer::Lexer;
use parser::Parser;

/// Compile and evaluation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("Unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Unexpected token {found} at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Wrong number of arguments to {name}: {found}")]
    Arity { name: String, found: usize },

    #[error("Expected {expected} input values, got {found}")]
    InputCount { expected: usize, found: usize },

    #[error("Expression evaluated to a non-finite value ({0})")]
    NonFinite(f64),
}

/// Reference to a variable slot of a compiled expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariableHandle(usize);

/// A compiled expression with its variable slots.
#[derive(Clone, Debug)]
pub struct Expression {
    root: Expr,
    names: Vec<String>,
    inputs: usize,
    slots: Vec<f64>,
}

impl Expression {
    /// Compile `source`; `inputs` name the values passed to `evaluate`.
    pub fn compile(source: &str, inputs: &[&str]) -> Result<Self, ExpressionError> {
        let tokens = Lexer::new(source).tokenize()?;
        let (root, names) = Parser::new(tokens, inputs).parse()?;
        let slots = vec![0.0; names.len()];
        Ok(Self {
            root,
            names,
            inputs: inputs.len(),
            slots,
        })
    }

    /// Evaluate with one value per input. Variables introduced by the
    /// expression start at 0 on every call.
    pub fn evaluate(&mut self, values: &[f64]) -> Result<f64, ExpressionError> {
        if values.len() != self.inputs {
            return Err(ExpressionError::InputCount {
                expected: self.inputs,
                found: values.len(),
            });
        }
        self.slots[..self.inputs].copy_from_slice(values);
        self.slots[self.inputs..].fill(0.0);

        let result = self.root.eval(&mut self.slots);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ExpressionError::NonFinite(result))
        }
    }

    /// Handle for a named variable, if the expression knows it.
    pub fn variable(&self, name: &str) -> Option<VariableHandle> {
        self.names.iter().position(|n| n == name).map(VariableHandle)
    }

    /// Value of a variable after the last evaluation.
    pub fn value(&self, handle: VariableHandle) -> f64 {
        self.slots[handle.0]
    }

    /// Value of a variable, failing when it is not finite.
    pub fn finite_value(&self, handle: VariableHandle) -> Result<f64, ExpressionError> {
        let v = self.value(handle);
        if v.is_finite() { Ok(v) } else { Err(ExpressionError::NonFinite(v)) }
    }
}
