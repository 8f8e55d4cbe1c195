//! Listener code generation.
//!
//! Handlers are emitted as-is when they are a method path or a function
//! expression; anything else is wrapped in `function($event){...}`.
//! Modifiers become guards at the top of the wrapper.

use crate::helpers::{
    dynamic_name, js_literal, key_code, key_name, strip_trailing_comma, BIND_DYNAMIC_KEYS,
    CHECK_KEY_CODES, PREPEND_MODIFIER,
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;
use vue_template_compiler::AstHandler;

static FN_EXP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\w$]+|\([^)]*?\))\s*=>|^function(?:\s+[\w$]+)?\s*\(").expect("valid regex")
});

static FN_INVOKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*?\);*$").expect("valid regex"));

static SIMPLE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*|\['[^']*?'\]|\["[^"]*?"\]|\[\d+\]|\[[A-Za-z_$][\w$]*\])*$"#,
    )
    .expect("valid regex")
});

const SYSTEM_MODIFIERS: [&str; 4] = ["ctrl", "shift", "alt", "meta"];

fn gen_guard(condition: &str) -> String {
    format!("if({condition})return null;")
}

fn modifier_code(modifier: &str) -> Option<String> {
    Some(match modifier {
        "stop" => "$event.stopPropagation();".to_string(),
        "prevent" => "$event.preventDefault();".to_string(),
        "self" => gen_guard("$event.target !== $event.currentTarget"),
        "ctrl" | "shift" | "alt" | "meta" => gen_guard(&format!("!$event.{modifier}Key")),
        "left" => gen_guard("'button' in $event && $event.button !== 0"),
        "middle" => gen_guard("'button' in $event && $event.button !== 1"),
        "right" => gen_guard("'button' in $event && $event.button !== 2"),
        _ => return None,
    })
}

/// Generate `on:{...}` (or `nativeOn:{...}`) for an event map.
pub fn gen_handlers(events: &IndexMap<SmolStr, Vec<AstHandler>>, native: bool) -> String {
    let prefix = if native { "nativeOn:" } else { "on:" };
    let mut static_handlers = String::new();
    let mut dynamic_handlers = String::new();

    for (name, handlers) in events {
        let code = gen_handler_list(handlers);
        match split_dynamic_event(name) {
            Some(key) => dynamic_handlers.push_str(&format!("{key},{code},")),
            None => static_handlers.push_str(&format!("\"{name}\":{code},")),
        }
    }

    let static_handlers = format!("{{{}}}", strip_trailing_comma(static_handlers));
    if dynamic_handlers.is_empty() {
        format!("{prefix}{static_handlers}")
    } else {
        format!(
            "{prefix}{BIND_DYNAMIC_KEYS}({static_handlers},[{}])",
            strip_trailing_comma(dynamic_handlers)
        )
    }
}

/// Event names look like `~!&[exp]` when both modifier markers and a
/// dynamic name are present.
fn split_dynamic_event(name: &str) -> Option<String> {
    let markers_end = name.find(|c| !matches!(c, '!' | '~' | '&'))?;
    let (markers, rest) = name.split_at(markers_end);
    let exp = dynamic_name(rest)?;
    if markers.is_empty() {
        Some(exp.to_string())
    } else {
        Some(format!("{PREPEND_MODIFIER}({exp},\"{markers}\")"))
    }
}

fn gen_handler_list(handlers: &[AstHandler]) -> String {
    match handlers {
        [] => "function(){}".to_string(),
        [single] => gen_handler(single),
        many => format!(
            "[{}]",
            many.iter().map(gen_handler).collect::<Vec<_>>().join(",")
        ),
    }
}

/// Generate code for one handler.
pub fn gen_handler(handler: &AstHandler) -> String {
    let value = handler.value.as_str();
    let is_method_path = SIMPLE_PATH_RE.is_match(value);
    let is_function_expression = FN_EXP_RE.is_match(value);
    let is_function_invocation = SIMPLE_PATH_RE.is_match(&FN_INVOKE_RE.replace(value, ""));

    if handler.modifiers.is_empty() {
        if is_method_path || is_function_expression {
            return value.to_string();
        }
        return if is_function_invocation {
            format!("function($event){{return {value}}}")
        } else {
            format!("function($event){{{value}}}")
        };
    }

    let mut code = String::new();
    let mut modifier_guards = String::new();
    let mut keys: Vec<&str> = Vec::new();
    for modifier in &handler.modifiers {
        let modifier = modifier.as_str();
        if let Some(guard) = modifier_code(modifier) {
            modifier_guards.push_str(&guard);
            if key_code(modifier).is_some() {
                keys.push(modifier);
            }
        } else if modifier == "exact" {
            let absent: Vec<String> = SYSTEM_MODIFIERS
                .iter()
                .filter(|m| !handler.modifiers.iter().any(|x| x == *m))
                .map(|m| format!("$event.{m}Key"))
                .collect();
            modifier_guards.push_str(&gen_guard(&absent.join("||")));
        } else {
            keys.push(modifier);
        }
    }
    if !keys.is_empty() {
        code.push_str(&gen_key_filter(&keys));
    }
    code.push_str(&modifier_guards);

    let handler_code = if is_method_path {
        format!("return {value}.apply(null, arguments)")
    } else if is_function_expression {
        format!("return ({value}).apply(null, arguments)")
    } else if is_function_invocation {
        format!("return {value}")
    } else {
        value.to_string()
    };
    format!("function($event){{{code}{handler_code}}}")
}

fn gen_key_filter(keys: &[&str]) -> String {
    let filters: Vec<String> = keys.iter().map(|k| gen_filter_code(k)).collect();
    format!(
        "if(!$event.type.indexOf('key')&&{})return null;",
        filters.join("&&")
    )
}

fn gen_filter_code(key: &str) -> String {
    if let Ok(code) = key.parse::<u32>() {
        if code != 0 {
            return format!("$event.keyCode!=={code}");
        }
    }
    format!(
        "{CHECK_KEY_CODES}($event.keyCode,{},{},$event.key,{})",
        serde_json::Value::String(key.to_string()),
        js_literal(key_code(key)),
        js_literal(key_name(key)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn handler(value: &str, modifiers: &[&str]) -> AstHandler {
        AstHandler {
            value: value.into(),
            modifiers: modifiers.iter().map(|m| SmolStr::from(*m)).collect(),
        }
    }

    fn events(entries: &[(&str, Vec<AstHandler>)]) -> IndexMap<SmolStr, Vec<AstHandler>> {
        entries
            .iter()
            .map(|(n, h)| (SmolStr::from(*n), h.clone()))
            .collect()
    }

    #[test]
    fn test_method_path_is_passed_through() {
        assert_eq!(gen_handler(&handler("onClick", &[])), "onClick");
        assert_eq!(gen_handler(&handler("a.b['c']", &[])), "a.b['c']");
        assert_eq!(gen_handler(&handler("() => go()", &[])), "() => go()");
    }

    #[test]
    fn test_statements_are_wrapped() {
        assert_eq!(
            gen_handler(&handler("go(1)", &[])),
            "function($event){return go(1)}"
        );
        assert_eq!(
            gen_handler(&handler("count++", &[])),
            "function($event){count++}"
        );
    }

    #[test]
    fn test_modifier_guards() {
        assert_eq!(
            gen_handler(&handler("submit", &["prevent"])),
            "function($event){$event.preventDefault();return submit.apply(null, arguments)}"
        );
        assert_eq!(
            gen_handler(&handler("go()", &["stop", "self"])),
            "function($event){$event.stopPropagation();if($event.target !== $event.currentTarget)return null;return go()}"
        );
    }

    #[test]
    fn test_key_modifiers() {
        insta::assert_snapshot!(
            gen_handler(&handler("send", &["enter"])),
            @r#"function($event){if(!$event.type.indexOf('key')&&_k($event.keyCode,"enter",13,$event.key,"Enter"))return null;return send.apply(null, arguments)}"#
        );
        assert_eq!(
            gen_handler(&handler("x", &["13"])),
            "function($event){if(!$event.type.indexOf('key')&&$event.keyCode!==13)return null;return x.apply(null, arguments)}"
        );
    }

    #[test]
    fn test_exact_modifier() {
        assert_eq!(
            gen_handler(&handler("x", &["ctrl", "exact"])),
            "function($event){if(!$event.ctrlKey)return null;if($event.shiftKey||$event.altKey||$event.metaKey)return null;return x.apply(null, arguments)}"
        );
    }

    #[test]
    fn test_gen_handlers_static_and_multiple() {
        let map = events(&[
            ("click", vec![handler("a", &[]), handler("b", &[])]),
            ("~!input", vec![handler("c", &[])]),
        ]);
        assert_eq!(gen_handlers(&map, false), r#"on:{"click":[a,b],"~!input":c}"#);
        assert_eq!(gen_handlers(&map, true), r#"nativeOn:{"click":[a,b],"~!input":c}"#);
    }

    #[test]
    fn test_gen_handlers_dynamic_names() {
        let map = events(&[
            ("click", vec![handler("a", &[])]),
            ("[name]", vec![handler("b", &[])]),
            ("~[other]", vec![handler("c", &[])]),
        ]);
        assert_eq!(
            gen_handlers(&map, false),
            r#"on:_d({"click":a},[name,b,_p(other,"~"),c])"#
        );
    }
}
