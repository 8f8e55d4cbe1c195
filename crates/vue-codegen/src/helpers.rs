//! Runtime helper names and small string utilities used by generated code.

use serde_json::{json, Value};

/// `bindObjectProps`.
pub const BIND_OBJECT_PROPS: &str = "_b";
/// `bindObjectListeners`.
pub const BIND_OBJECT_LISTENERS: &str = "_g";
/// `bindDynamicKeys`.
pub const BIND_DYNAMIC_KEYS: &str = "_d";
/// `prependModifier`.
pub const PREPEND_MODIFIER: &str = "_p";
/// `checkKeyCodes`.
pub const CHECK_KEY_CODES: &str = "_k";

/// Key codes for the named key modifiers.
pub fn key_code(key: &str) -> Option<Value> {
    Some(match key {
        "esc" => json!(27),
        "tab" => json!(9),
        "enter" => json!(13),
        "space" => json!(32),
        "up" => json!(38),
        "left" => json!(37),
        "right" => json!(39),
        "down" => json!(40),
        "delete" => json!([8, 46]),
        _ => return None,
    })
}

/// `KeyboardEvent.key` values for the named key modifiers.
pub fn key_name(key: &str) -> Option<Value> {
    Some(match key {
        "esc" => json!(["Esc", "Escape"]),
        "tab" => json!("Tab"),
        "enter" => json!("Enter"),
        "space" => json!([" ", "Spacebar"]),
        "up" => json!(["Up", "ArrowUp"]),
        "left" => json!(["Left", "ArrowLeft"]),
        "right" => json!(["Right", "ArrowRight"]),
        "down" => json!(["Down", "ArrowDown"]),
        "delete" => json!(["Backspace", "Delete", "Del"]),
        _ => return None,
    })
}

/// JSON literal for an optional value, `undefined` when absent.
pub fn js_literal(value: Option<Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

/// Escape line and paragraph separators, which are not valid inside JS
/// string literals on older engines.
pub fn transform_special_newlines(text: &str) -> String {
    text.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029")
}

/// Drop one trailing comma, if any.
pub fn strip_trailing_comma(mut code: String) -> String {
    if code.ends_with(',') {
        code.pop();
    }
    code
}

/// Split a `[expression]` dynamic name into its expression.
pub fn dynamic_name(name: &str) -> Option<&str> {
    name.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_tables() {
        assert_eq!(js_literal(key_code("enter")), "13");
        assert_eq!(js_literal(key_code("delete")), "[8,46]");
        assert_eq!(js_literal(key_name("esc")), r#"["Esc","Escape"]"#);
        assert_eq!(js_literal(key_code("f2")), "undefined");
    }

    #[test]
    fn test_special_newlines() {
        assert_eq!(transform_special_newlines("\"a\u{2028}b\""), "\"a\\u2028b\"");
    }

    #[test]
    fn test_dynamic_name() {
        assert_eq!(dynamic_name("[key]"), Some("key"));
        assert_eq!(dynamic_name("key"), None);
    }
}
