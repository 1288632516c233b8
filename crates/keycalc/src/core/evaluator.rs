//! Expression evaluation and result formatting

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult, Calculator};

/// Outcome of evaluating an expression string: the display text of a finite
/// value, or the evaluation error that prevented one
pub type EvaluationResult = CalcResult<String>;

/// Evaluator for keypad expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    calculator: Calculator,
}

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Evaluates an AST node and returns the numeric result
    pub fn evaluate_ast(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate_ast(inner)?),
            AstNode::Chain { head, tail } => {
                tail.iter().try_fold(self.evaluate_ast(head)?, |acc, (op, rhs)| {
                    let rhs = self.evaluate_ast(rhs)?;
                    self.calculator.calculate(acc, rhs, *op)
                })
            }
        }
    }

    /// Evaluates a string expression to a finite number
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        let value = self.evaluate_ast(&ast)?;
        // Literals too long for f64 parse to infinity
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Overflow)
        }
    }

    /// Evaluates a string expression to its display text
    pub fn evaluate(&self, input: &str) -> EvaluationResult {
        let result = self.evaluate_str(input).map(format_number);
        match &result {
            Ok(text) => tracing::debug!(expression = input, result = %text, "evaluated"),
            Err(e) => tracing::debug!(expression = input, error = %e, "evaluation failed"),
        }
        result
    }
}

/// Formats a finite value in canonical decimal form
///
/// Integral values drop the fractional part, other values use the shortest
/// round-tripping representation, and magnitudes at or above `1e21` or
/// below `1e-6` switch to exponent notation (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also covers negative zero
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== AST evaluation tests =====

    #[test]
    fn test_evaluate_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_ast(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negate() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::number(5.0));
        assert_eq!(eval.evaluate_ast(&ast), Ok(-5.0));
    }

    #[test]
    fn test_evaluate_chain_left_to_right() {
        let eval = Evaluator::new();
        // 8 / 2 / 2 = 2, not 8
        let ast = AstNode::chain(
            AstNode::number(8.0),
            vec![
                (Operator::Divide, AstNode::number(2.0)),
                (Operator::Divide, AstNode::number(2.0)),
            ],
        );
        assert_eq!(eval.evaluate_ast(&ast), Ok(2.0));
    }

    #[test]
    fn test_evaluate_error_propagates_from_tail() {
        let eval = Evaluator::new();
        let ast = AstNode::chain(
            AstNode::number(5.0),
            vec![
                (Operator::Add, AstNode::number(1.0)),
                (Operator::Divide, AstNode::number(0.0)),
            ],
        );
        assert_eq!(eval.evaluate_ast(&ast), Err(CalcError::DivisionByZero));
    }

    // ===== String evaluation tests =====

    #[test]
    fn test_evaluate_simple_sum() {
        assert_eq!(Evaluator::new().evaluate("2+3"), Ok("5".to_string()));
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(Evaluator::new().evaluate("2+3*4"), Ok("14".to_string()));
    }

    #[test]
    fn test_evaluate_left_associative_subtraction() {
        assert_eq!(Evaluator::new().evaluate("10-4-3"), Ok("3".to_string()));
    }

    #[test]
    fn test_evaluate_mixed_precedence() {
        assert_eq!(Evaluator::new().evaluate("2*3+8/4-1"), Ok("7".to_string()));
    }

    #[test]
    fn test_evaluate_fraction() {
        assert_eq!(Evaluator::new().evaluate("7/2"), Ok("3.5".to_string()));
    }

    #[test]
    fn test_evaluate_repeating_decimal() {
        assert_eq!(
            Evaluator::new().evaluate("1/3"),
            Ok("0.3333333333333333".to_string())
        );
    }

    #[test]
    fn test_evaluate_leading_minus() {
        assert_eq!(Evaluator::new().evaluate("-5+3"), Ok("-2".to_string()));
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(Evaluator::new().evaluate("6/0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_empty() {
        assert_eq!(Evaluator::new().evaluate(""), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_evaluate_trailing_operator() {
        assert!(matches!(
            Evaluator::new().evaluate("9*"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_evaluate_rejects_code() {
        assert!(matches!(
            Evaluator::new().evaluate("process.exit()"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_evaluate_overflow() {
        let huge = format!("9{}*9{}", "0".repeat(200), "0".repeat(200));
        assert_eq!(Evaluator::new().evaluate(&huge), Err(CalcError::Overflow));
    }

    #[test]
    fn test_evaluate_overlong_literal() {
        let literal = "9".repeat(400);
        assert_eq!(Evaluator::new().evaluate(&literal), Err(CalcError::Overflow));
    }

    #[test]
    fn test_evaluate_long_chain() {
        let input = vec!["1"; 50_000].join("+");
        assert_eq!(Evaluator::new().evaluate(&input), Ok("50000".to_string()));
    }

    // ===== Formatting tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_format_large_uses_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e22), "-1.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_small_uses_exponent() {
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
