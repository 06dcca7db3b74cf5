//! Post-parse scrub of placeholder filler in description fields.

use crate::domain::menu_scan::entities::MenuScanResult;

/// Literal signatures of filler the model is known to emit when it has
/// no real description to give.
const PLACEHOLDER_SIGNATURES: &[&str] = &[
    "Lorem ipsum",
    "lorem ipsum",
    "dolor sit amet",
    "consectetur adipiscing",
    "sed do eiusmod",
];

/// Long latin-looking filler that escaped the literal list.
const DOLOR_HEURISTIC_MIN_LEN: usize = 60;

fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_SIGNATURES.iter().any(|sig| text.contains(sig))
        || (text.len() > DOLOR_HEURISTIC_MIN_LEN && text.contains("dolor"))
}

/// Blanks any of the four description fields that carries placeholder
/// filler. Dish names are left untouched.
pub fn scrub_placeholder_text(result: &mut MenuScanResult) {
    for dish in &mut result.dishes {
        for field in [
            &mut dish.description,
            &mut dish.description_english,
            &mut dish.description_chinese,
            &mut dish.description_japanese,
        ] {
            if is_placeholder(field) {
                field.clear();
            }
        }
    }
}
