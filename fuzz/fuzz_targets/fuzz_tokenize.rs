#![no_main]

use libfuzzer_sys::fuzz_target;

use tagcalc_core::{tokenize, TokenKind};

fuzz_target!(|data: &[u8]| {
    let Ok(formula) = std::str::from_utf8(data) else {
        return;
    };
    let tokens = tokenize(formula);

    // Indices strictly increase and variables are trimmed and non-empty.
    for pair in tokens.windows(2) {
        assert!(pair[0].index < pair[1].index);
    }
    for token in &tokens {
        if let TokenKind::Variable(name) = &token.kind {
            assert!(!name.is_empty());
            assert_eq!(name.trim(), name);
            assert!(token.dropdown_id().is_some());
        }
    }
});
