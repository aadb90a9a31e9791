//! Markdown rendering of flat records.
//!
//! One-way: the output is meant for reading and is not parsed back.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

const MISSING: &str = "N/A";

static BLOCK_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^|\n)[*\-+]\s|(?:^|\n)#{1,6}\s|(?:^|\n)\d+\.\s|\*\*.*?\*\*|__.*?__|`.*?`",
    )
    .expect("block markup pattern is valid")
});

/// Render a record as `**Label**: value` lines, in the record's field order.
pub fn render_record(record: &Map<String, Value>) -> String {
    let mut lines = Vec::with_capacity(record.len());

    for (key, value) in record {
        let label = field_label(key);
        let text = display_value(value);

        if key.eq_ignore_ascii_case("description") {
            let text = text.trim_end();
            if has_block_markup(text) {
                lines.push(format!("**{label}**:\n\n{text}"));
                lines.push(String::new());
                continue;
            }
            lines.push(format!("**{label}**: {text}  "));
        } else {
            lines.push(format!("**{label}**: {text}  "));
        }
    }

    lines.join("\n")
}

fn field_label(key: &str) -> String {
    match key.to_lowercase().as_str() {
        "id" => "ID".to_string(),
        "createdat" => "Created At".to_string(),
        "updatedat" => "Updated At".to_string(),
        _ => title_case(&key.replace('_', " ")),
    }
}

/// Uppercase the first letter of each run of letters, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::String(s) if s.trim().is_empty() => MISSING.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn has_block_markup(text: &str) -> bool {
    BLOCK_MARKUP.is_match(text)
}
