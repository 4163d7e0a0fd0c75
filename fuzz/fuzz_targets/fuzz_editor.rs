#![no_main]

use libfuzzer_sys::fuzz_target;

use tagcalc_core::{FormulaEditor, Suggestion};

fuzz_target!(|data: &[u8]| {
    let catalog = vec![
        Suggestion::new("1", "basic_courses", "training", 3),
        Suggestion::new("2", "advanced_courses", "training", 1),
    ];
    let mut editor = FormulaEditor::new();

    // Each byte is one editing step.
    for &byte in data {
        match byte % 8 {
            0 => editor.backspace(),
            1 => editor.delete_forward(),
            2 => editor.caret_left(),
            3 => editor.caret_right(),
            4 => editor.enter(&catalog),
            5 => editor.cycle_dropdown(true),
            6 => editor.escape(),
            _ => {
                let c = char::from(b' ' + (byte >> 3) * 3);
                editor.insert_char(c);
            }
        }
        assert!(editor.caret() <= editor.input().len());
        assert!(editor.input().is_char_boundary(editor.caret()));
    }
    let _ = editor.view(Some(&catalog));
    let _ = editor.result();
});
