//! Canonical rendering of definitions back to tag-string form.
//!
//! The output re-parses to an equal definition sequence. Attribute maps are
//! rendered with sorted keys so the result is deterministic regardless of
//! insertion order.

use crate::definition::Definition;
use crate::value::Value;

/// Render a definition sequence as one tag string.
pub fn encode_definitions(definitions: &[Definition]) -> String {
    definitions
        .iter()
        .map(encode_definition)
        .collect::<Vec<String>>()
        .join(",")
}

/// Render one definition in its shortest written form: a bare name, the
/// `name=value` shorthand when the single attribute is keyed by the name,
/// or a full argument list.
pub fn encode_definition(definition: &Definition) -> String {
    let attributes = definition.attributes();
    if attributes.is_empty() {
        return definition.name().to_string();
    }
    if attributes.len() == 1 {
        if let Some(value) = attributes.get(definition.name()) {
            return format!("{}={}", definition.name(), encode_value(value));
        }
    }

    let mut keys: Vec<&String> = attributes.keys().collect();
    keys.sort();
    let pairs: Vec<String> = keys
        .iter()
        .map(|key| format!("{}={}", key, encode_value(&attributes[*key])))
        .collect();
    format!("{}({})", definition.name(), pairs.join(", "))
}

/// Render one value.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(f) => {
            // Keep a decimal point so the literal re-parses as a float.
            let s = format!("{}", f);
            if s.contains('.') {
                s
            } else {
                format!("{}.0", s)
            }
        }
        Value::String(s) => {
            if is_identifier(s) {
                s.clone()
            } else {
                encode_string(s)
            }
        }
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(encode_value).collect();
            format!("[{}]", rendered.join(", "))
        }
    }
}

/// Whether a string can be rendered as a bare identifier instead of a
/// quoted literal.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_alphabetic() || ch == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Render a single-quoted literal, escaping what the reader unescapes.
fn encode_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0B' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_tag;

    fn canonical(tag: &str) -> String {
        encode_definitions(&parse_tag(tag, "test").unwrap())
    }

    #[test]
    fn test_shortest_forms() {
        assert_eq!(canonical("required"), "required");
        assert_eq!(canonical("max=10"), "max=10");
        assert_eq!(canonical("length(min=1,max=10)"), "length(max=10, min=1)");
    }

    #[test]
    fn test_float_keeps_decimal_point() {
        assert_eq!(canonical("scale=2.0"), "scale=2.0");
        assert_eq!(canonical("ratio=-0.25"), "ratio=-0.25");
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(canonical("name=aaa"), "name=aaa");
        assert_eq!(canonical("name='star fruits'"), "name='star fruits'");
        assert_eq!(canonical("name='a\\tb'"), "name='a\\tb'");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(canonical("pkr=[1, -100.009, aaa, -56]"), "pkr=[1, -100.009, aaa, -56]");
        assert_eq!(canonical("m=[[1,2],[],[3]]"), "m=[[1, 2], [], [3]]");
    }
}
