//! The expression-building state machine.
//!
//! `Expression` owns the committed token list, the pending input buffer and
//! the evaluated flag. Every input operation is an explicit transition that
//! returns the `Render` to show, so the state machine is fully drivable from
//! tests without any live display surface. Operations that are no-ops return
//! `None` and trigger no re-render.

use super::eval::evaluate;
use super::format::{clamp, format_value};
use super::token::{Operator, Token, join_tokens};

/// Output of a state transition: what the two display lines should now show.
#[derive(Clone, Debug, PartialEq)]
pub struct Render {
    /// The current value line.
    pub value: String,
    /// The running tape line.
    pub tape: String,
}

/// In-progress expression: committed tokens plus the numeral being typed.
#[derive(Debug, Default)]
pub struct Expression {
    tokens: Vec<Token>,
    buffer: String,
    just_evaluated: bool,
}

impl Expression {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            buffer: "0".to_string(),
            just_evaluated: false,
        }
    }

    /// Tape text: committed tokens followed by the pending buffer, optionally
    /// closed with `=`.
    fn build_tape(&self, with_equals: bool) -> String {
        let mut parts = join_tokens(&self.tokens);
        if !self.buffer.is_empty() {
            if !parts.is_empty() {
                parts.push(' ');
            }
            parts.push_str(&self.buffer);
        }
        if with_equals {
            parts.push_str(" =");
        }
        parts
    }

    fn render_buffer(&self) -> Render {
        Render {
            value: self.buffer.clone(),
            tape: self.build_tape(false),
        }
    }

    /// Append a digit or decimal point to the pending buffer. A digit typed
    /// right after an evaluation starts a fresh expression.
    pub fn push_digit(&mut self, d: char) -> Render {
        if self.just_evaluated {
            self.tokens.clear();
            self.buffer = "0".to_string();
            self.just_evaluated = false;
        }
        if self.buffer == "0" && d != '.' {
            self.buffer = d.to_string();
        } else if d == '.' {
            if !self.buffer.contains('.') {
                self.buffer.push('.');
            }
        } else {
            self.buffer.push(d);
        }
        self.render_buffer()
    }

    /// Toggle a leading minus on the pending buffer. No-op on "0".
    pub fn toggle_sign(&mut self) -> Option<Render> {
        if self.buffer == "0" {
            return None;
        }
        self.buffer = match self.buffer.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.buffer),
        };
        Some(self.render_buffer())
    }

    /// Divide the pending buffer by 100, or, when the last committed token is
    /// an operator, scale relative to the operand before it (`200 + 10%`
    /// turns the 10 into 20). No-op when the buffer doesn't parse.
    pub fn apply_percent(&mut self) -> Option<Render> {
        let current: f64 = if self.buffer.is_empty() {
            0.0
        } else {
            self.buffer.parse().ok()?
        };
        if !current.is_finite() {
            return None;
        }

        let scaled = match self.tokens.as_slice() {
            [.., Token::Number(prev), Token::Op(_)] => match prev.parse::<f64>() {
                Ok(p) if p.is_finite() => p * (current / 100.0),
                _ => current / 100.0,
            },
            _ => current / 100.0,
        };
        self.buffer = format_value(clamp(scaled));
        Some(self.render_buffer())
    }

    /// Commit the pending buffer and push an operator. Unrecognized raw text
    /// is a no-op. Right after an evaluation the token list is reseeded from
    /// `displayed`, the text currently shown on the value line. A repeated
    /// operator press replaces the previous operator instead of stacking.
    pub fn push_operator(&mut self, raw: &str, displayed: &str) -> Option<Render> {
        let op = Operator::normalize(raw)?;
        if self.just_evaluated {
            self.tokens = vec![Token::Number(displayed.to_string())];
            self.just_evaluated = false;
        }
        if !self.buffer.is_empty() {
            self.tokens.push(Token::Number(std::mem::take(&mut self.buffer)));
        }
        match self.tokens.last_mut() {
            Some(last) if last.is_op() => *last = Token::Op(op),
            _ => self.tokens.push(Token::Op(op)),
        }
        let joined = join_tokens(&self.tokens);
        Some(Render {
            value: if joined.is_empty() { "0".to_string() } else { joined },
            tape: self.build_tape(false),
        })
    }

    /// Evaluate the expression. A trailing operator is dropped rather than
    /// rejected; an empty expression is a complete no-op. Both success and
    /// failure finish the tape with `=` and set the evaluated flag; failure
    /// (structural or non-finite result) shows "Error" and clears the
    /// expression.
    pub fn equals(&mut self) -> Option<Render> {
        if !self.buffer.is_empty() {
            self.tokens.push(Token::Number(std::mem::take(&mut self.buffer)));
        }
        if self.tokens.last().is_some_and(Token::is_op) {
            self.tokens.pop();
        }
        if self.tokens.is_empty() {
            return None;
        }

        let shown = join_tokens(&self.tokens);
        let tape = format!("{shown} =");
        self.buffer.clear();
        self.just_evaluated = true;

        match evaluate(&self.tokens) {
            Ok(result) if result.is_finite() => {
                let out = format_value(clamp(result));
                self.tokens = vec![Token::Number(out.clone())];
                Some(Render { value: out, tape })
            }
            _ => {
                self.tokens.clear();
                Some(Render {
                    value: "Error".to_string(),
                    tape,
                })
            }
        }
    }

    /// Clear the expression back to its initial state.
    pub fn reset(&mut self) -> Render {
        self.tokens.clear();
        self.buffer = "0".to_string();
        self.just_evaluated = false;
        Render {
            value: "0".to_string(),
            tape: String::new(),
        }
    }

    /// Remove the last typed character, walking back into the committed
    /// token list once the buffer is exhausted.
    pub fn backspace(&mut self) -> Render {
        if !self.buffer.is_empty() {
            self.buffer.pop();
            if self.buffer.is_empty() {
                self.buffer = "0".to_string();
            }
            return self.render_buffer();
        }
        match self.tokens.pop() {
            Some(Token::Number(last)) => {
                self.buffer = last;
                self.buffer.pop();
                if self.buffer.is_empty() {
                    self.buffer = "0".to_string();
                }
                self.render_buffer()
            }
            Some(Token::Op(_)) => {
                let joined = join_tokens(&self.tokens);
                Render {
                    value: if joined.is_empty() { "0".to_string() } else { joined },
                    tape: self.build_tape(false),
                }
            }
            None => Render {
                value: "0".to_string(),
                tape: String::new(),
            },
        }
    }

    /// Replace the pending buffer with already-formatted text (memory
    /// recall). The recalled value is editable input, so the evaluated flag
    /// is cleared.
    pub fn set_buffer(&mut self, text: &str) -> Render {
        self.buffer = text.to_string();
        self.just_evaluated = false;
        self.render_buffer()
    }
}
