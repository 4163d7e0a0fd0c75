#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

use tagcalc_core::{calculate_result, INVALID_EXPRESSION};

fuzz_target!(|data: &[u8]| {
    let Ok(formula) = std::str::from_utf8(data) else {
        return;
    };
    let mut tags = HashMap::new();
    tags.insert("alpha".to_string(), "2".to_string());
    tags.insert("beta value".to_string(), "0.5".to_string());

    // Never panics; either a currency amount or the invalid banner.
    let result = calculate_result(formula, &tags);
    assert!(result == INVALID_EXPRESSION || result.contains('$'));
});
