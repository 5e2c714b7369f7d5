//! AST evaluator

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult, Calculator, Number};

/// Evaluator for keypad expressions
#[derive(Debug, Default)]
pub struct Evaluator {
    calculator: Calculator,
}

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<Number> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => self.evaluate(inner)?.negate().ok_or(CalcError::Overflow),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.calculator.calculate(left_val, right_val, *op)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<Number> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}
