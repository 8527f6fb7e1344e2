//! Expression evaluation.
//!
//! Takes the committed token list through three passes: unary-minus
//! desugaring, shunting-yard conversion to postfix, and a stack-based postfix
//! evaluation. Precedence is the usual multiplicative-over-additive, with
//! equal-precedence operators applied left to right (`8 − 3 − 2` is 3, not 7).
//!
//! Division by exactly zero is not an error here; it yields positive infinity
//! and the caller classifies the result by finiteness.

use thiserror::Error;

use super::token::{Operator, Token};

/// Structural evaluation failure.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// A committed token is neither an operator nor a valid numeral.
    #[error("invalid token '{0}'")]
    InvalidToken(String),
    /// Operand/operator counts don't line up (stack underflow or leftovers).
    #[error("malformed expression")]
    MalformedExpression,
}

/// Evaluate a committed token list. An empty list evaluates to 0.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    if tokens.is_empty() {
        return Ok(0.0);
    }
    let desugared = desugar_unary_minus(tokens);
    let postfix = to_postfix(&desugared)?;
    eval_postfix(&postfix)
}

/// Fold unary minus into the numeral that follows it.
///
/// A subtract token at the start of the expression or right after another
/// operator is unary. When a numeral follows, the pair fuses into a single
/// negated numeral; a dangling unary minus becomes the pair `0 −` so the
/// later passes see a complete binary expression.
fn desugar_unary_minus(tokens: &[Token]) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let unary = tokens[i] == Token::Op(Operator::Subtract)
            && out.last().is_none_or(Token::is_op);
        if unary {
            match tokens.get(i + 1) {
                Some(Token::Number(n)) => {
                    let negated = match n.parse::<f64>() {
                        Ok(v) => (-v).to_string(),
                        // leave something invalid behind for validation
                        Err(_) => format!("-{n}"),
                    };
                    out.push(Token::Number(negated));
                    i += 2;
                    continue;
                }
                _ => {
                    out.push(Token::Number("0".into()));
                    out.push(Token::Op(Operator::Subtract));
                    i += 1;
                    continue;
                }
            }
        }
        out.push(tokens[i].clone());
        i += 1;
    }
    out
}

#[derive(Clone, Copy, Debug)]
enum Postfix {
    Num(f64),
    Op(Operator),
}

/// Shunting-yard: reorder infix tokens into postfix, validating numerals on
/// the way. Popping while the stack top has precedence >= the incoming
/// operator keeps equal-precedence chains left-associative.
fn to_postfix(tokens: &[Token]) -> Result<Vec<Postfix>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operator> = Vec::new();
    for token in tokens {
        match token {
            Token::Number(s) => {
                if !token.is_valid() {
                    return Err(EvalError::InvalidToken(s.clone()));
                }
                let value = s
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidToken(s.clone()))?;
                output.push(Postfix::Num(value));
            }
            Token::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        output.push(Postfix::Op(ops.pop().unwrap_or(top)));
                    } else {
                        break;
                    }
                }
                ops.push(*op);
            }
        }
    }
    while let Some(op) = ops.pop() {
        output.push(Postfix::Op(op));
    }
    Ok(output)
}

fn eval_postfix(postfix: &[Postfix]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();
    for entry in postfix {
        match entry {
            Postfix::Num(v) => stack.push(*v),
            Postfix::Op(op) => {
                let b = stack.pop().ok_or(EvalError::MalformedExpression)?;
                let a = stack.pop().ok_or(EvalError::MalformedExpression)?;
                stack.push(apply_op(a, *op, b));
            }
        }
    }
    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn apply_op(a: f64, op: Operator, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                f64::INFINITY
            } else {
                a / b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(symbols: &[&str]) -> Vec<Token> {
        symbols.iter()
            .map(|s| match Operator::normalize(s) {
                Some(op) => Token::Op(op),
                None => Token::Number((*s).into()),
            })
            .collect()
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(evaluate(&[]), Ok(0.0));
    }

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate(&toks(&["42"])), Ok(42.0));
    }

    #[test]
    fn test_precedence() {
        // 2 + 3 × 4 = 14
        assert_eq!(evaluate(&toks(&["2", "+", "3", "×", "4"])), Ok(14.0));
        // 12 ÷ 4 + 1 = 4
        assert_eq!(evaluate(&toks(&["12", "÷", "4", "+", "1"])), Ok(4.0));
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        assert_eq!(evaluate(&toks(&["8", "−", "3", "−", "2"])), Ok(3.0));
        assert_eq!(evaluate(&toks(&["16", "÷", "4", "÷", "2"])), Ok(2.0));
    }

    #[test]
    fn test_unary_minus_at_start() {
        assert_eq!(evaluate(&toks(&["−", "5", "+", "3"])), Ok(-2.0));
    }

    #[test]
    fn test_unary_minus_after_operator() {
        assert_eq!(evaluate(&toks(&["4", "×", "−", "2"])), Ok(-8.0));
    }

    #[test]
    fn test_dangling_unary_minus_becomes_zero_minus() {
        // "− 5" desugars to "-5"; a lone "−" becomes "0 −" and then fails
        // downstream with a stack underflow, never a crash.
        assert_eq!(evaluate(&toks(&["−"])), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn test_division_by_zero_yields_infinity() {
        let result = evaluate(&toks(&["6", "÷", "0"]));
        assert!(result.is_ok_and(|v| v.is_infinite() && v.is_sign_positive()));
    }

    #[test]
    fn test_invalid_token() {
        assert_eq!(
            evaluate(&toks(&["Error", "+", "1"])),
            Err(EvalError::InvalidToken("Error".into()))
        );
    }

    #[test]
    fn test_trailing_operator_is_malformed() {
        assert_eq!(
            evaluate(&toks(&["5", "+"])),
            Err(EvalError::MalformedExpression)
        );
    }

    #[test]
    fn test_decimal_arithmetic() {
        let v = evaluate(&toks(&["0.1", "+", "0.2"])).unwrap();
        assert!((v - 0.3).abs() < 1e-9);
    }
}
