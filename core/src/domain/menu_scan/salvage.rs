//! Best-effort repair of near-JSON model output.
//!
//! Each repair step is a pure text transformation with its own unit
//! tests; `salvage_json` chains them and retries parsing. All steps are
//! no-ops on well-formed input, so a clean response passes through
//! unchanged.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Parse attempts before the last error is surfaced.
const MAX_PARSE_ATTEMPTS: usize = 3;

static POSSESSIVE_QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([A-Za-z]+)"s "#).unwrap());

static LOREM_FILLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*Lorem ipsum[^"]*""#).unwrap());

static MISSING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([}\]])\s*([{\[])").unwrap());

static TRAILING_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*([}\]])").unwrap());

/// Extracts the candidate JSON substring from raw model text.
///
/// Prefers a fenced ```json block; otherwise takes the span from the
/// first `{` to the last `}`; otherwise returns the trimmed input.
pub fn extract_json_candidate(text: &str) -> &str {
    let text = text.trim();

    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}'))
        && start < end
    {
        return text[start..=end].trim();
    }

    text
}

/// Rewrites the mis-escaped possessive `"word"s ` to `"word's `.
///
/// Properly escaped quotes inside strings (`\"`) never match because
/// the preceding backslash breaks the letter run.
pub fn fix_possessive_quotes(text: &str) -> String {
    POSSESSIVE_QUOTE_RE
        .replace_all(text, "\"${1}'s ")
        .into_owned()
}

/// Replaces any quoted span containing literal `Lorem ipsum` filler
/// with an empty string.
pub fn strip_lorem_filler(text: &str) -> String {
    LOREM_FILLER_RE.replace_all(text, "\"\"").into_owned()
}

/// Structural rebalancing via a single character scan.
///
/// Tracks in-string/escape state and an explicit stack of open
/// delimiters: unmatched closers are dropped, anything after the root
/// value closes is dropped, an unterminated string is closed, and
/// missing closers are appended in correct nesting order.
pub fn rebalance_structure(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut opened = false;

    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        // Root value closed: everything that follows is trailing junk.
        if opened && stack.is_empty() {
            break;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                stack.push(c);
                opened = true;
                out.push(c);
            }
            '}' => {
                if stack.last() == Some(&'{') {
                    stack.pop();
                    out.push(c);
                }
            }
            ']' => {
                if stack.last() == Some(&'[') {
                    stack.pop();
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    if in_string {
        out.push('"');
    }
    while let Some(open) = stack.pop() {
        out.push(if open == '{' { '}' } else { ']' });
    }

    out
}

/// Regex passes for comma damage: inserts missing commas between
/// adjacent closed/opened container boundaries and removes trailing
/// commas before a closing delimiter.
///
/// The regexes only see the text between string literals, so dish text
/// containing `}`, `[` or `,` is never rewritten.
pub fn repair_punctuation(text: &str) -> String {
    fn repair_span(span: &str) -> String {
        let span = MISSING_COMMA_RE.replace_all(span, "${1},${2}");
        TRAILING_COMMA_RE.replace_all(&span, "${1}").into_owned()
    }

    let mut out = String::with_capacity(text.len());
    let mut span = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            out.push_str(&repair_span(&span));
            span.clear();
            out.push(c);
            in_string = true;
        } else {
            span.push(c);
        }
    }
    out.push_str(&repair_span(&span));
    out
}

/// Runs the full repair pipeline and attempts to parse, reapplying the
/// textual repairs between attempts. Surfaces the last parse error
/// after `MAX_PARSE_ATTEMPTS`.
pub fn salvage_json(raw: &str) -> Result<Value, serde_json::Error> {
    let mut text = extract_json_candidate(raw).to_string();
    text = fix_possessive_quotes(&text);
    text = strip_lorem_filler(&text);
    text = rebalance_structure(&text);
    text = repair_punctuation(&text);

    let mut last_err = None;
    for attempt in 1..=MAX_PARSE_ATTEMPTS {
        match serde_json::from_str(&text) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(attempt, error = %err, "salvage parse attempt failed");
                last_err = Some(err);
                text = repair_punctuation(&fix_possessive_quotes(&text));
            }
        }
    }

    Err(last_err.unwrap_or_else(|| serde_json::from_str::<Value>("").unwrap_err()))
}

/// A scan result must carry a string `original` and an array `dishes`.
pub fn validate_menu_structure(value: &Value) -> bool {
    value.get("original").is_some_and(Value::is_string)
        && value.get("dishes").is_some_and(Value::is_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_fenced_json_block() {
        let raw = "Here is the menu:\n```json\n{\"original\": \"Thai\"}\n```\nEnjoy!";
        assert_eq!(extract_json_candidate(raw), "{\"original\": \"Thai\"}");
    }

    #[test]
    fn extracts_first_brace_span_without_fence() {
        let raw = "The result is {\"a\": 1} as requested.";
        assert_eq!(extract_json_candidate(raw), "{\"a\": 1}");
    }

    #[test]
    fn extraction_returns_trimmed_input_when_no_braces() {
        assert_eq!(extract_json_candidate("  not json  "), "not json");
    }

    #[test]
    fn fixes_misescaped_possessive() {
        let raw = r#"{"english": "Joe"s Diner Special"}"#;
        let fixed = fix_possessive_quotes(raw);
        assert_eq!(fixed, r#"{"english": "Joe's Diner Special"}"#);
        serde_json::from_str::<Value>(&fixed).unwrap();
    }

    #[test]
    fn possessive_fix_leaves_escaped_quotes_alone() {
        let raw = r#"{"english": "the \"special\" soup"}"#;
        assert_eq!(fix_possessive_quotes(raw), raw);
    }

    #[test]
    fn strips_lorem_filler_spans() {
        let raw = r#"{"description": "Lorem ipsum dolor sit amet"}"#;
        assert_eq!(strip_lorem_filler(raw), r#"{"description": ""}"#);
    }

    #[test]
    fn rebalance_appends_missing_array_closer() {
        let raw = r#"{"original":"Menu","dishes":[{"original":"Tea"}"#;
        let fixed = rebalance_structure(raw);
        assert_eq!(fixed, r#"{"original":"Menu","dishes":[{"original":"Tea"}]}"#);
        let value: Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(value["dishes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn rebalance_drops_extra_trailing_closer() {
        let raw = r#"{"original":"Menu","dishes":[]}}"#;
        let fixed = rebalance_structure(raw);
        let value: Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(value, json!({"original": "Menu", "dishes": []}));
    }

    #[test]
    fn rebalance_drops_misplaced_closer_and_rebalances() {
        // ']' missing, stray '}' in its place
        let raw = r#"{"original":"x","dishes":[{"a":1}}"#;
        let fixed = rebalance_structure(raw);
        serde_json::from_str::<Value>(&fixed).unwrap();
    }

    #[test]
    fn rebalance_closes_unterminated_string() {
        let raw = r#"{"original":"Men"#;
        let fixed = rebalance_structure(raw);
        assert_eq!(fixed, r#"{"original":"Men"}"#);
    }

    #[test]
    fn rebalance_respects_braces_inside_strings() {
        let raw = r#"{"description":"uses {curly} and [square] marks"}"#;
        assert_eq!(rebalance_structure(raw), raw);
    }

    #[test]
    fn inserts_missing_comma_between_objects() {
        let raw = r#"[{"a":1} {"b":2}]"#;
        let fixed = repair_punctuation(raw);
        assert_eq!(fixed, r#"[{"a":1},{"b":2}]"#);
    }

    #[test]
    fn punctuation_repair_ignores_delimiters_inside_strings() {
        let raw = r#"{"note":"serve} [hot, ]","a":[1,]}"#;
        let fixed = repair_punctuation(raw);
        assert_eq!(fixed, r#"{"note":"serve} [hot, ]","a":[1]}"#);
    }

    #[test]
    fn removes_trailing_commas() {
        let raw = r#"{"a":[1,2,],}"#;
        let fixed = repair_punctuation(raw);
        serde_json::from_str::<Value>(&fixed).unwrap();
    }

    #[test]
    fn salvage_handles_fenced_block_with_extra_closer() {
        let raw = "```json\n{\"original\":\"Thai\",\"dishes\":[]}}\n```";
        let value = salvage_json(raw).unwrap();
        assert_eq!(value, json!({"original": "Thai", "dishes": []}));
    }

    #[test]
    fn salvage_is_idempotent_on_well_formed_input() {
        let raw = json!({
            "original": "Japanese",
            "dishes": [{
                "original": "ラーメン",
                "english": "Ramen",
                "chinese": "拉面",
                "japanese": "ラーメン",
                "description": "豚骨スープの麺",
                "descriptionEnglish": "Noodles in pork bone broth",
                "descriptionChinese": "猪骨汤面",
                "descriptionJapanese": "豚骨スープの麺",
                "tags": ["noodle", "soup"],
                "nutrition": {
                    "calories": 550, "protein": 25, "carbs": 70,
                    "fat": 18, "sodium": 1800, "allergens": "Gluten, Egg"
                }
            }]
        });
        let text = serde_json::to_string_pretty(&raw).unwrap();
        assert_eq!(salvage_json(&text).unwrap(), raw);
    }

    #[test]
    fn salvage_keeps_delimiters_inside_string_values() {
        let raw = r#"{"original":"English","dishes":[{"original":"Stew","description":"braised} [slowly, ]"}]}"#;
        let value = salvage_json(raw).unwrap();
        assert_eq!(
            value["dishes"][0]["description"],
            json!("braised} [slowly, ]")
        );
        assert_eq!(value, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn salvage_combines_repairs() {
        let raw = concat!(
            "Sure! Here is the digitized menu:\n```json\n",
            r#"{"original":"English","dishes":[{"original":"Soup","description":"Lorem ipsum dolor"},"#,
            r#"{"original":"Pie","tags":["dessert",]}"#,
            "\n```"
        );
        let value = salvage_json(raw).unwrap();
        assert!(validate_menu_structure(&value));
        assert_eq!(value["dishes"][0]["description"], json!(""));
        assert_eq!(value["dishes"][1]["tags"], json!(["dessert"]));
    }

    #[test]
    fn salvage_surfaces_error_after_exhausted_attempts() {
        assert!(salvage_json("this is not json at all").is_err());
    }

    #[test]
    fn structure_validation_requires_original_and_dishes() {
        assert!(validate_menu_structure(
            &json!({"original": "x", "dishes": []})
        ));
        assert!(!validate_menu_structure(&json!({"original": "x"})));
        assert!(!validate_menu_structure(
            &json!({"original": null, "dishes": []})
        ));
        assert!(!validate_menu_structure(
            &json!({"original": "x", "dishes": {}})
        ));
    }
}
