//! Tag substitution and safe evaluation.
//!
//! Variables are recovered from the flat formula text by shape (a letter
//! followed by one or more word characters, which may include spaces), replaced
//! by their bound values, and the resulting arithmetic is checked against a
//! restricted alphabet before it reaches the arithmetic backend.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::arith;
use crate::constants::INVALID_EXPRESSION;
use crate::currency::format_usd;
use crate::error::EvalError;

static VARIABLE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9_\s]+").expect("static regex"));

/// Variable-shaped substrings of `formula`, untrimmed, in order of appearance.
#[must_use]
pub fn find_variables(formula: &str) -> Vec<&str> {
    VARIABLE_SHAPE
        .find_iter(formula)
        .map(|m| m.as_str())
        .collect()
}

/// Replace every bound variable with its value.
///
/// Fails with [`EvalError::Unresolved`] listing every variable that has no
/// non-empty value.
pub fn substitute(formula: &str, tag_values: &HashMap<String, String>) -> Result<String, EvalError> {
    let mut expression = formula.to_string();
    let mut unresolved = Vec::new();

    for variable in find_variables(formula) {
        let name = variable.trim();
        match tag_values.get(name).filter(|v| !v.is_empty()) {
            Some(value) => {
                tracing::debug!(variable = name, value = %value, "substituting tag value");
                expression = expression.replace(variable, value);
            }
            None => {
                tracing::debug!(variable = name, "no value for variable");
                unresolved.push(name.to_string());
            }
        }
    }

    if unresolved.is_empty() {
        Ok(expression)
    } else {
        Err(EvalError::Unresolved(unresolved))
    }
}

/// Validate and evaluate a fully substituted expression.
///
/// Whitespace is stripped, then the expression must use only digits,
/// `+ - * / ( ) .` and must end in a digit or `)`. The result must be finite.
pub fn safe_evaluate(expression: &str) -> Result<f64, EvalError> {
    let expression: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    tracing::debug!(expression = %expression, "evaluating expression");

    if let Some(found) = expression
        .chars()
        .find(|c| !(c.is_ascii_digit() || "+-*/(). ".contains(*c)))
    {
        return Err(EvalError::MalformedCharacters { expression, found });
    }

    if !expression
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit() || c == ')')
    {
        return Err(EvalError::Incomplete(expression));
    }

    let value = arith::evaluate(&expression)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    tracing::debug!(value, "calculation result");
    Ok(value)
}

/// Substitute tag values into `formula` and evaluate it.
pub fn evaluate(formula: &str, tag_values: &HashMap<String, String>) -> Result<f64, EvalError> {
    let expression = substitute(formula, tag_values)?;
    safe_evaluate(&expression)
}

/// Display string for `formula`: a currency amount or `Invalid expression`.
#[must_use]
pub fn calculate_result(formula: &str, tag_values: &HashMap<String, String>) -> String {
    match evaluate(formula, tag_values) {
        Ok(value) => format_usd(value),
        Err(err) => {
            tracing::debug!(error = %err, formula, "calculation failed");
            INVALID_EXPRESSION.to_string()
        }
    }
}

/// The result banner text, or `None` when the formula is empty.
#[must_use]
pub fn result_banner(formula: &str, tag_values: &HashMap<String, String>) -> Option<String> {
    if formula.is_empty() {
        None
    } else {
        Some(calculate_result(formula, tag_values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn plain_arithmetic() {
        assert_eq!(calculate_result("2+3*4", &HashMap::new()), "$14.00");
    }

    #[test]
    fn course_example() {
        let values = tags(&[("basic_courses", "3")]);
        assert_eq!(
            calculate_result("(basic_courses * 500)", &values),
            "$1,500.00"
        );
    }

    #[test]
    fn full_training_formula() {
        let values = tags(&[
            ("basic_courses", "3"),
            ("intermediate_courses", "2"),
            ("advanced_courses", "1"),
        ]);
        let formula =
            "(basic_courses * 500) + (intermediate_courses * 750) + (advanced_courses * 1000)";
        assert_eq!(calculate_result(formula, &values), "$4,000.00");
    }

    #[test]
    fn names_with_spaces() {
        let values = tags(&[("name 1", "2"), ("name 2", "4")]);
        assert_eq!(
            calculate_result("(name 1 * 500) + (name 2 * 750)", &values),
            "$4,000.00"
        );
    }

    #[test]
    fn unresolved_variable_is_invalid() {
        let values = tags(&[("a", "1")]);
        assert_eq!(calculate_result("ab * 2", &values), INVALID_EXPRESSION);
        assert_eq!(
            evaluate("ab * 2", &values),
            Err(EvalError::Unresolved(vec!["ab".into()]))
        );
    }

    #[test]
    fn empty_value_counts_as_unresolved() {
        let values = tags(&[("price", "")]);
        assert!(matches!(
            evaluate("price*2", &values),
            Err(EvalError::Unresolved(_))
        ));
    }

    #[test]
    fn single_letter_is_not_a_variable_and_fails_filter() {
        let values = tags(&[("x", "5")]);
        assert!(matches!(
            evaluate("x*2", &values),
            Err(EvalError::MalformedCharacters { found: 'x', .. })
        ));
    }

    #[test]
    fn disallowed_characters() {
        assert!(matches!(
            safe_evaluate("2^3"),
            Err(EvalError::MalformedCharacters { found: '^', .. })
        ));
        assert!(matches!(
            safe_evaluate("1;2"),
            Err(EvalError::MalformedCharacters { .. })
        ));
    }

    #[test]
    fn non_numeric_tag_value_fails_filter() {
        let values = tags(&[("rate", "abc")]);
        assert_eq!(calculate_result("rate*2", &values), INVALID_EXPRESSION);
    }

    #[test]
    fn trailing_operator_is_incomplete() {
        assert!(matches!(safe_evaluate("2+"), Err(EvalError::Incomplete(_))));
        assert!(matches!(safe_evaluate("   "), Err(EvalError::Incomplete(_))));
    }

    #[test]
    fn division_by_zero_is_invalid() {
        assert_eq!(calculate_result("4/0", &HashMap::new()), INVALID_EXPRESSION);
        assert_eq!(safe_evaluate("4/0"), Err(EvalError::NonFinite));
    }

    #[test]
    fn negative_values_substitute() {
        let values = tags(&[("delta", "-3")]);
        assert_eq!(calculate_result("10*delta", &values), "-$30.00");
    }

    #[test]
    fn pathological_nesting_is_invalid_not_fatal() {
        let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(calculate_result(&deep, &HashMap::new()), INVALID_EXPRESSION);

        let signs = format!("1+{}1", "-".repeat(100_000));
        assert_eq!(calculate_result(&signs, &HashMap::new()), "$2.00");
    }

    #[test]
    fn half_cent_results_round_away_from_zero() {
        assert_eq!(calculate_result("1/8", &HashMap::new()), "$0.13");
        assert_eq!(calculate_result("5/8", &HashMap::new()), "$0.63");
        assert_eq!(calculate_result("-1/8", &HashMap::new()), "-$0.13");
    }

    #[test]
    fn whitespace_inside_numbers_is_stripped() {
        assert_eq!(calculate_result("1 000 + 1", &HashMap::new()), "$1,001.00");
    }

    #[test]
    fn banner_absent_for_empty_formula() {
        assert_eq!(result_banner("", &HashMap::new()), None);
        assert_eq!(
            result_banner(" ", &HashMap::new()).as_deref(),
            Some(INVALID_EXPRESSION)
        );
    }

    #[test]
    fn find_variables_keeps_trailing_space() {
        assert_eq!(
            find_variables("(basic_courses * 500)"),
            vec!["basic_courses "]
        );
        assert_eq!(find_variables("2+3"), Vec::<&str>::new());
    }
}
