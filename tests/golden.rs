//! Golden file integration tests.
//!
//! Reads tests/testdata/evaluation_golden.json and checks formula evaluation
//! and free-text suggestion selection against the recorded results.

use std::collections::HashMap;

use serde::Deserialize;

use tagcalc_core::{calculate_result, FormulaEditor, Suggestion};

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    evaluations: Vec<EvaluationCase>,
    catalog: Vec<Suggestion>,
    selections: Vec<SelectionCase>,
}

#[derive(Deserialize)]
struct EvaluationCase {
    formula: String,
    tags: HashMap<String, String>,
    expected: String,
}

#[derive(Deserialize)]
struct SelectionCase {
    typed: String,
    select: String,
    formula: String,
    result: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/evaluation_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

#[test]
fn golden_evaluations() {
    let data = load_golden_data();
    assert!(!data.evaluations.is_empty());
    for case in &data.evaluations {
        assert_eq!(
            calculate_result(&case.formula, &case.tags),
            case.expected,
            "formula {:?} with tags {:?}",
            case.formula,
            case.tags
        );
    }
}

#[test]
fn golden_selections() {
    let data = load_golden_data();
    for case in &data.selections {
        let suggestion = data
            .catalog
            .iter()
            .find(|s| s.id == case.select)
            .expect("selection refers to a catalog id");

        let mut editor = FormulaEditor::new();
        if !case.typed.is_empty() {
            editor.input_changed(case.typed.clone(), case.typed.len());
        }
        editor.select_suggestion(suggestion);

        assert_eq!(editor.store().formula(), case.formula, "typed {:?}", case.typed);
        assert_eq!(
            editor.result().as_deref(),
            Some(case.result.as_str()),
            "typed {:?}",
            case.typed
        );
        assert!(!editor.is_table_open());
    }
}

#[test]
fn golden_catalog_values_are_strings_in_store() {
    let data = load_golden_data();
    let values: Vec<String> = data.catalog.iter().map(Suggestion::value_string).collect();
    assert_eq!(values, vec!["3", "5", "1"]);
}
