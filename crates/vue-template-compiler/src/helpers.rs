//! Attribute access and element mutation helpers shared by the processing
//! passes and the transform modules.

use crate::ast::{AstAttr, AstDirective, AstElement, AstHandler};
use smol_str::SmolStr;

/// Read a raw attribute and remove it from `attrs_list`.
///
/// The value stays in `attrs_map` unless `remove_from_map` is set, so later
/// passes can still see that the attribute was written.
pub fn get_and_remove_attr(
    el: &mut AstElement,
    name: &str,
    remove_from_map: bool,
) -> Option<String> {
    let value = el.attrs_map.get(name).cloned();
    if value.is_some() {
        if let Some(pos) = el.attrs_list.iter().position(|a| a.name == name) {
            el.attrs_list.remove(pos);
        }
    }
    if remove_from_map {
        el.attrs_map.shift_remove(name);
    }
    value
}

/// Read a bound attribute (`:name` or `v-bind:name`) as an expression.
///
/// With `get_static`, falls back to the plain attribute serialized as a
/// string literal.
pub fn get_binding_attr(el: &mut AstElement, name: &str, get_static: bool) -> Option<String> {
    let shorthand = get_and_remove_attr(el, &format!(":{name}"), false);
    let dynamic = match shorthand.filter(|v| !v.is_empty()) {
        Some(v) => Some(v),
        None => get_and_remove_attr(el, &format!("v-bind:{name}"), false),
    };

    if let Some(value) = dynamic {
        return Some(value.trim().to_string());
    }
    if get_static {
        return get_and_remove_attr(el, name, false).map(|v| to_js_string(&v));
    }
    None
}

/// Append a raw attribute as if it had been written in the template.
pub fn add_raw_attr(el: &mut AstElement, name: impl Into<SmolStr>, value: impl Into<String>) {
    let attr = AstAttr::new(name, value);
    el.attrs_map.insert(attr.name.clone(), attr.value.clone());
    el.attrs_list.push(attr);
}

/// Add a generated attribute binding.
pub fn add_attr(el: &mut AstElement, name: impl Into<SmolStr>, value: impl Into<String>, dynamic: bool) {
    el.attrs.push(AstAttr {
        name: name.into(),
        value: value.into(),
        dynamic,
    });
    el.plain = false;
}

/// Add a generated DOM property binding.
pub fn add_prop(el: &mut AstElement, name: impl Into<SmolStr>, value: impl Into<String>, dynamic: bool) {
    el.props.push(AstAttr {
        name: name.into(),
        value: value.into(),
        dynamic,
    });
    el.plain = false;
}

/// Add a runtime directive.
pub fn add_directive(el: &mut AstElement, directive: AstDirective) {
    el.directives.push(directive);
    el.plain = false;
}

/// Register an event handler.
///
/// Modifiers that change the event name (`capture`, `once`, `passive`,
/// `right`, `middle`) are folded into it, and `native` picks the native
/// listener map. The rest are kept on the handler for codegen. An
/// `important` handler is placed before existing ones.
pub fn add_handler(
    el: &mut AstElement,
    name: &str,
    value: &str,
    modifiers: &[SmolStr],
    important: bool,
) {
    let has = |m: &str| modifiers.iter().any(|x| x == m);
    let mut name = if has("right") {
        "contextmenu".to_string()
    } else if has("middle") {
        "mouseup".to_string()
    } else {
        name.to_string()
    };
    if has("capture") {
        name.insert(0, '!');
    }
    if has("once") {
        name.insert(0, '~');
    }
    if has("passive") {
        name.insert(0, '&');
    }

    let kept = modifiers
        .iter()
        .filter(|m| {
            !matches!(
                m.as_str(),
                "right" | "capture" | "once" | "passive" | "native"
            )
        })
        .cloned()
        .collect();
    let handler = AstHandler {
        value: value.trim().to_string(),
        modifiers: kept,
    };

    let events = if has("native") {
        &mut el.native_events
    } else {
        &mut el.events
    };
    let handlers = events.entry(SmolStr::from(name)).or_default();
    if important {
        handlers.insert(0, handler);
    } else {
        handlers.push(handler);
    }
    el.plain = false;
}

/// Serialize a string as a JS string literal.
pub fn to_js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
