//! Formula lexer.
//!
//! A formula is split on the operator set, keeping every operator as its own
//! segment. Segments are then classified into a typed token stream. The
//! position of each segment in the split sequence is kept on the token, which
//! gives chips a stable identifier while the surrounding text is unchanged.

use crate::constants::{is_operator, is_word_char, DROPDOWN_ID_PREFIX};

/// Classification of a single formula segment.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// One of `+ - * / ^ ( )`.
    Operator(char),
    /// A segment that parses as a finite number, as typed (trimmed).
    Number(String),
    /// Any other non-empty segment, trimmed. Inner whitespace is kept.
    Variable(String),
}

/// A classified segment with its index in the split sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub index: usize,
    pub kind: TokenKind,
}

impl Token {
    /// Display text of the token.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Operator(op) => op.to_string(),
            TokenKind::Number(text) | TokenKind::Variable(text) => text.clone(),
        }
    }

    /// Variable name if this token is a variable.
    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Dropdown identifier for a variable token.
    #[must_use]
    pub fn dropdown_id(&self) -> Option<String> {
        self.variable()
            .map(|_| format!("{DROPDOWN_ID_PREFIX}{}", self.index))
    }
}

/// Split `formula` on operators, keeping the operators as segments.
///
/// Empty segments are preserved, so `"a+"` yields `["a", "+", ""]` and
/// the empty formula yields `[""]`.
#[must_use]
pub fn split_segments(formula: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in formula.char_indices() {
        if is_operator(c) {
            segments.push(&formula[start..i]);
            segments.push(&formula[i..i + c.len_utf8()]);
            start = i + c.len_utf8();
        }
    }
    segments.push(&formula[start..]);
    segments
}

/// Returns true if a trimmed segment is a numeric literal.
#[must_use]
pub fn is_numeric(segment: &str) -> bool {
    segment.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Tokenize a formula. Blank segments produce no token.
#[must_use]
pub fn tokenize(formula: &str) -> Vec<Token> {
    split_segments(formula)
        .into_iter()
        .enumerate()
        .filter_map(|(index, segment)| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            let mut chars = trimmed.chars();
            let kind = match (chars.next(), chars.next()) {
                (Some(op), None) if is_operator(op) => TokenKind::Operator(op),
                _ if is_numeric(trimmed) => TokenKind::Number(trimmed.to_string()),
                _ => TokenKind::Variable(trimmed.to_string()),
            };
            Some(Token { index, kind })
        })
        .collect()
}

/// Drop the last operator-delimited segment of `formula`.
///
/// A trailing empty segment (formula ending in an operator) is discarded
/// first, so the operator itself is the segment that goes.
#[must_use]
pub fn remove_last_segment(formula: &str) -> String {
    let mut segments = split_segments(formula);
    if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments.pop();
    segments.concat()
}

/// The run of word characters at the end of `text`, if any.
#[must_use]
pub fn trailing_word_run(text: &str) -> Option<&str> {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map(|(i, _)| i)?;
    Some(&text[start..])
}

/// True if `text` ends with one of the formula operators.
#[must_use]
pub fn ends_with_operator(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(formula: &str) -> Vec<TokenKind> {
        tokenize(formula).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn split_keeps_operators_and_empties() {
        assert_eq!(split_segments("a+b"), vec!["a", "+", "b"]);
        assert_eq!(split_segments("a+"), vec!["a", "+", ""]);
        assert_eq!(split_segments("(x)"), vec!["", "(", "x", ")", ""]);
        assert_eq!(split_segments(""), vec![""]);
    }

    #[test]
    fn tokenize_course_formula() {
        let tokens = kinds("(basic_courses * 500)");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Operator('('),
                TokenKind::Variable("basic_courses".into()),
                TokenKind::Operator('*'),
                TokenKind::Number("500".into()),
                TokenKind::Operator(')'),
            ]
        );
    }

    #[test]
    fn tokenize_drops_blank_segments() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert_eq!(kinds("1 +  + 2").len(), 4);
    }

    #[test]
    fn tokenize_keeps_inner_whitespace_of_names() {
        let tokens = kinds(" name 1 * 2");
        assert_eq!(tokens[0], TokenKind::Variable("name 1".into()));
    }

    #[test]
    fn decimal_numbers_are_numbers() {
        assert_eq!(kinds("2.5"), vec![TokenKind::Number("2.5".into())]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number(".5".into())]);
    }

    #[test]
    fn token_index_is_segment_position() {
        let tokens = tokenize("a+b");
        assert_eq!(tokens[0].index, 0);
        assert_eq!(tokens[2].index, 2);
        assert_eq!(tokens[2].dropdown_id().as_deref(), Some("tag-2"));
        assert_eq!(tokens[1].dropdown_id(), None);
    }

    #[test]
    fn remove_last_segment_drops_one_segment() {
        assert_eq!(remove_last_segment("a+b"), "a+");
        assert_eq!(remove_last_segment("a+"), "a");
        assert_eq!(remove_last_segment("(basic * 500)"), "(basic * 500");
        assert_eq!(remove_last_segment("abc"), "");
        assert_eq!(remove_last_segment(""), "");
    }

    #[test]
    fn trailing_run() {
        assert_eq!(trailing_word_run("2*basic co"), Some("basic co"));
        assert_eq!(trailing_word_run("2*"), None);
        assert_eq!(trailing_word_run(""), None);
        assert_eq!(trailing_word_run("x_1"), Some("x_1"));
    }

    #[test]
    fn operator_suffix() {
        assert!(ends_with_operator("a+"));
        assert!(ends_with_operator("("));
        assert!(!ends_with_operator("a"));
        assert!(!ends_with_operator(""));
    }
}
