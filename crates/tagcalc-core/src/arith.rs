//! Arithmetic backend.
//!
//! Recursive-descent evaluation of `+ - * /`, unary signs, parentheses and
//! decimal literals. Implicit multiplication applies when a parenthesised
//! group touches a number or another group (`2(3)`, `(2)(3)`, `(2)3`), with the
//! same precedence as `*`.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary | group-adjacent)*
//! unary   := ('+' | '-')* primary
//! primary := number | '(' expr ')'
//! ```
//!
//! Groups nest at most [`MAX_NESTING`] deep.

use crate::error::EvalError;

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 256;

/// Evaluate an arithmetic expression.
///
/// The result may be infinite or NaN; callers decide whether that is an error.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let mut parser = Parser::new(expression);
    let value = parser.expr()?;
    parser.skip_whitespace();
    if let Some(c) = parser.peek() {
        return Err(parser.error(format!("unexpected {c:?}")));
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> EvalError {
        EvalError::Syntax {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let (mut value, mut closed_group) = self.unary()?;
        loop {
            if self.eat('*') {
                value *= self.unary()?.0;
                closed_group = false;
            } else if self.eat('/') {
                value /= self.unary()?.0;
                closed_group = false;
            } else if self.implicit_product_follows(closed_group) {
                let (rhs, group) = self.primary()?;
                value *= rhs;
                closed_group = group;
            } else {
                return Ok(value);
            }
        }
    }

    /// A group may be followed by a number or a group, a number by a group.
    fn implicit_product_follows(&mut self, after_group: bool) -> bool {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => true,
            Some(c) if after_group => c.is_ascii_digit() || c == '.',
            _ => false,
        }
    }

    /// Returns the value and whether it came from a parenthesised group.
    fn unary(&mut self) -> Result<(f64, bool), EvalError> {
        let mut signed = false;
        let mut negate = false;
        loop {
            if self.eat('-') {
                negate = !negate;
            } else if !self.eat('+') {
                break;
            }
            signed = true;
        }
        let (value, group) = self.primary()?;
        if !signed {
            return Ok((value, group));
        }
        Ok((if negate { -value } else { value }, false))
    }

    fn primary(&mut self) -> Result<(f64, bool), EvalError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                if self.depth == MAX_NESTING {
                    return Err(self.error("parentheses nested too deeply"));
                }
                self.bump();
                self.depth += 1;
                let value = self.expr()?;
                self.depth -= 1;
                if !self.eat(')') {
                    return Err(self.error("expected ')'"));
                }
                Ok((value, true))
            }
            Some(c) if c.is_ascii_digit() || c == '.' => Ok((self.number()?, false)),
            Some(c) => Err(self.error(format!("unexpected {c:?}"))),
            None => Err(self.error("unexpected end of expression")),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.bump();
        }
        let literal = &self.src[start..self.pos];
        literal.parse::<f64>().map_err(|_| EvalError::Syntax {
            offset: start,
            message: format!("invalid number {literal:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str) -> f64 {
        evaluate(expr).unwrap()
    }

    #[test]
    fn precedence() {
        assert!((eval("2+3*4") - 14.0).abs() < f64::EPSILON);
        assert!((eval("(2+3)*4") - 20.0).abs() < f64::EPSILON);
        assert!((eval("10-4-3") - 3.0).abs() < f64::EPSILON);
        assert!((eval("8/4/2") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unary_signs() {
        assert!((eval("-3+5") - 2.0).abs() < f64::EPSILON);
        assert!((eval("2*-3") + 6.0).abs() < f64::EPSILON);
        assert!((eval("--2") - 2.0).abs() < f64::EPSILON);
        assert!((eval("+4") - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decimals() {
        assert!((eval("1.5*2") - 3.0).abs() < f64::EPSILON);
        assert!((eval(".5+.5") - 1.0).abs() < f64::EPSILON);
        assert!((eval("2.") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn implicit_multiplication_with_groups() {
        assert!((eval("2(3)") - 6.0).abs() < f64::EPSILON);
        assert!((eval("(2)(3)") - 6.0).abs() < f64::EPSILON);
        assert!((eval("(2)3") - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert!(eval("4/0").is_infinite());
        assert!(eval("0/0").is_nan());
    }

    #[test]
    fn syntax_errors() {
        assert!(evaluate("").is_err());
        assert!(evaluate("()").is_err());
        assert!(evaluate("(1+2").is_err());
        assert!(evaluate("1+2)").is_err());
        assert!(evaluate("1.2.3").is_err());
        assert!(evaluate(".").is_err());
        assert!(evaluate("1+").is_err());
    }

    #[test]
    fn deep_nesting_is_a_syntax_error() {
        let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(evaluate(&deep), Err(EvalError::Syntax { .. })));

        let at_limit = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert!((eval(&at_limit) - 1.0).abs() < f64::EPSILON);

        let over = format!("{}1{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert!(evaluate(&over).is_err());
    }

    #[test]
    fn long_sign_chains() {
        let even = format!("{}1", "-".repeat(100_000));
        assert!((eval(&even) - 1.0).abs() < f64::EPSILON);

        let odd = format!("1+{}1", "-".repeat(60_001));
        assert!(eval(&odd).abs() < f64::EPSILON);

        assert!((eval("+-+3") + 3.0).abs() < f64::EPSILON);
        assert!(evaluate(&"-".repeat(100_000)).is_err());
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert!((eval(" ( 1 + 2 ) * 3 ") - 9.0).abs() < f64::EPSILON);
    }
}
